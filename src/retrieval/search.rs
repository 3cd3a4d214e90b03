/// Case-insensitive literal scan over `corpus`, returning each match wrapped
/// in up to `window` bytes of context on each side, clipped at corpus bounds.
/// Matches are non-overlapping: the scan resumes after each match end.
pub fn search(corpus: &str, query: &str, window: usize) -> Vec<String> {
    if query.is_empty() || corpus.is_empty() {
        return Vec::new();
    }

    let corpus_lower = corpus.to_ascii_lowercase();
    let query_lower = query.to_ascii_lowercase();

    let mut snippets = Vec::new();
    let mut scan_from = 0;

    while let Some(offset) = corpus_lower[scan_from..].find(&query_lower) {
        let pos = scan_from + offset;

        let mut start = pos.saturating_sub(window);
        while !corpus.is_char_boundary(start) {
            start -= 1;
        }

        let mut end = (pos + query_lower.len() + window).min(corpus.len());
        while end < corpus.len() && !corpus.is_char_boundary(end) {
            end += 1;
        }

        snippets.push(corpus[start..end].to_string());
        scan_from = pos + query_lower.len();
    }

    snippets
}
