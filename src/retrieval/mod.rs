//! Literal-substring retrieval over the catalog corpus.

mod keyterms;
mod search;

pub use keyterms::extract_key_terms;
pub use search::search;

use crate::catalog::CatalogCorpus;
use crate::config::RetrievalSettings;

/// Assemble a bounded block of catalog snippets relevant to the identified
/// gaps. At most `snippets_per_term` snippets are kept per key term and
/// `max_snippets` overall; the joined text is truncated to
/// `max_context_chars` with a marker appended when the budget is exceeded.
pub fn retrieve_context(
    corpus: &CatalogCorpus,
    gap_analysis: &str,
    target_course: &str,
    settings: &RetrievalSettings,
) -> String {
    if !corpus.is_available() {
        return String::new();
    }

    let mut snippets = Vec::new();
    for term in extract_key_terms(gap_analysis, target_course) {
        let hits = search(corpus.text(), &term, settings.window_chars);
        snippets.extend(hits.into_iter().take(settings.snippets_per_term));
        if snippets.len() >= settings.max_snippets {
            break;
        }
    }
    snippets.truncate(settings.max_snippets);

    let mut context = snippets.join("\n---\n");
    if context.len() > settings.max_context_chars {
        let mut cut = settings.max_context_chars;
        while !context.is_char_boundary(cut) {
            cut -= 1;
        }
        context.truncate(cut);
        context.push_str("...[truncated]");
    }

    context
}

#[cfg(test)]
mod tests;
