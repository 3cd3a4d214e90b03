use crate::catalog::CatalogCorpus;
use crate::config::RetrievalSettings;

use super::{extract_key_terms, retrieve_context, search};

fn small_settings() -> RetrievalSettings {
    RetrievalSettings {
        window_chars: 10,
        snippets_per_term: 2,
        max_snippets: 8,
        max_context_chars: 4000,
    }
}

#[test]
fn search_returns_one_snippet_per_occurrence() {
    let corpus = "aaaa needle bbbb cccc needle dddd";
    let snippets = search(corpus, "needle", 5);

    assert_eq!(snippets.len(), 2);
    for snippet in &snippets {
        assert!(snippet.contains("needle"));
        assert!(snippet.len() <= "needle".len() + 10);
    }
}

#[test]
fn search_is_case_insensitive_and_preserves_original_casing() {
    let corpus = "Intro to Machine Learning and advanced MACHINE LEARNING topics";
    let snippets = search(corpus, "machine learning", 9);

    assert_eq!(snippets.len(), 2);
    assert!(snippets[0].contains("Machine Learning"));
    assert!(snippets[1].contains("MACHINE LEARNING"));
}

#[test]
fn search_clips_context_at_corpus_edges() {
    let corpus = "needle at the start and at the end needle";
    let snippets = search(corpus, "needle", 1000);

    assert_eq!(snippets.len(), 2);
    assert_eq!(snippets[0], corpus);
    assert_eq!(snippets[1], corpus);
}

#[test]
fn search_does_not_overlap_matches() {
    // "aaa" occurs overlapping in "aaaa"; the scan resumes after each match.
    let snippets = search("aaaa", "aaa", 0);
    assert_eq!(snippets, vec!["aaa".to_string()]);
}

#[test]
fn search_absent_query_yields_nothing() {
    assert!(search("some catalog text", "quantum", 50).is_empty());
    assert!(search("some catalog text", "", 50).is_empty());
    assert!(search("", "quantum", 50).is_empty());
}

#[test]
fn key_terms_always_include_target_course() {
    let terms = extract_key_terms("", "Deep Learning");
    assert_eq!(terms, vec!["Deep Learning".to_string()]);
}

#[test]
fn key_terms_detect_topics_from_vocabulary() {
    let gaps = "Needs a stronger foundation in linear algebra.\n\
                Should review probability and statistics.";
    let terms = extract_key_terms(gaps, "Machine Learning");

    assert!(terms.contains(&"linear algebra".to_string()));
    assert!(terms.contains(&"probability".to_string()));
    assert!(terms.contains(&"statistics".to_string()));
}

#[test]
fn key_terms_keep_combined_code_without_noisy_fragment() {
    let terms = extract_key_terms("prerequisite course CSCI 101 required", "Deep Learning");

    assert!(terms.contains(&"CSCI 101".to_string()));
    assert!(!terms.contains(&"CSCI".to_string()));
}

#[test]
fn key_terms_match_department_code_patterns() {
    let gaps = "Take MATH-240 before attempting ENGR 691.\nAlso consider MATH240.";
    let terms = extract_key_terms(gaps, "Deep Learning");

    assert!(terms.contains(&"MATH 240".to_string()));
    assert!(terms.contains(&"ENGR 691".to_string()));
}

#[test]
fn key_terms_detect_course_mentions_without_numbers() {
    let terms = extract_key_terms("Take the course Statistics first.", "Deep Learning");
    assert!(terms.contains(&"Statistics".to_string()));
}

#[test]
fn key_terms_deduplicate_with_stable_order() {
    let gaps = "calculus gap\ncalculus again\nlinear algebra";
    let first = extract_key_terms(gaps, "Deep Learning");
    let second = extract_key_terms(gaps, "Deep Learning");

    assert_eq!(first, second);
    assert_eq!(
        first,
        vec![
            "Deep Learning".to_string(),
            "calculus".to_string(),
            "linear algebra".to_string(),
        ]
    );
}

#[test]
fn retrieve_context_joins_snippets_with_separator() {
    let corpus = CatalogCorpus::from_text(
        "calculus I covers limits. Later calculus II covers integrals.",
    );
    let context = retrieve_context(&corpus, "needs calculus", "Quantum Computing", &small_settings());

    assert!(context.contains("calculus"));
    assert!(context.contains("\n---\n"));
}

#[test]
fn retrieve_context_caps_snippets_per_term() {
    let corpus = CatalogCorpus::from_text("calculus calculus calculus calculus");
    let settings = small_settings();
    let context = retrieve_context(&corpus, "calculus", "NoSuchCourse", &settings);

    // Four occurrences in the corpus, only two snippets kept for the term.
    assert_eq!(context.split("\n---\n").count(), 2);
}

#[test]
fn retrieve_context_caps_overall_snippet_count() {
    let corpus = CatalogCorpus::from_text(
        "calculus here. statistics there. probability everywhere.",
    );
    let settings = RetrievalSettings {
        max_snippets: 2,
        ..small_settings()
    };
    let context = retrieve_context(
        &corpus,
        "calculus statistics probability",
        "NoSuchCourse",
        &settings,
    );

    assert_eq!(context.split("\n---\n").count(), 2);
}

#[test]
fn retrieve_context_truncates_to_budget() {
    let corpus = CatalogCorpus::from_text(format!("{} calculus {}", "x".repeat(600), "y".repeat(600)));
    let settings = RetrievalSettings {
        window_chars: 500,
        snippets_per_term: 2,
        max_snippets: 8,
        max_context_chars: 100,
    };
    let context = retrieve_context(&corpus, "calculus", "NoSuchCourse", &settings);

    assert!(context.ends_with("...[truncated]"));
    assert_eq!(context.len(), 100 + "...[truncated]".len());
}

#[test]
fn retrieve_context_is_empty_for_degraded_corpus() {
    let dir = tempfile::TempDir::new().unwrap();
    let corpus = CatalogCorpus::load(&dir.path().join("nope.txt"));

    let context = retrieve_context(&corpus, "calculus gap", "Deep Learning", &small_settings());
    assert!(context.is_empty());
}
