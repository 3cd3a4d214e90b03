use std::sync::LazyLock;

use regex::Regex;

/// Fixed topic vocabulary scanned for inside gap-analysis text. The matching
/// rules here are deliberately literal; their output is the contract.
pub(crate) const EDUCATIONAL_TOPICS: [&str; 16] = [
    "calculus",
    "programming",
    "statistics",
    "algorithm",
    "linear algebra",
    "probability",
    "machine learning",
    "data science",
    "neural networks",
    "deep learning",
    "computer vision",
    "nlp",
    "databases",
    "operating systems",
    "networks",
    "security",
];

// Department-code patterns: "CSCI 101", "MATH-240", "MATH240".
static SPACED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z]{2,5})\s*-?\s*([0-9]{3,4}[A-Z]?)\b").unwrap());
static JOINED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z]{2,5})([0-9]{3,4}[A-Z]?)\b").unwrap());

const COURSE_TRIGGERS: [&str; 4] = ["course", "courses", "class", "classes"];

/// Derive candidate search terms from free-text gap analysis. The target
/// course is always included. Terms are deduplicated with stable insertion
/// order so retrieval output is reproducible.
pub fn extract_key_terms(gap_analysis: &str, target_course: &str) -> Vec<String> {
    let mut terms = Vec::new();
    push_unique(&mut terms, target_course.to_string());

    for line in gap_analysis.lines() {
        let line_lower = line.to_lowercase();

        if line_lower.contains("course") || line_lower.contains("prerequisite") {
            collect_course_mentions(line, &mut terms);
        }

        for topic in EDUCATIONAL_TOPICS {
            if line_lower.contains(topic) {
                push_unique(&mut terms, topic.to_string());
            }
        }

        for pattern in [&*SPACED_CODE, &*JOINED_CODE] {
            for caps in pattern.captures_iter(line) {
                push_unique(&mut terms, format!("{} {}", &caps[1], &caps[2]));
            }
        }
    }

    terms
}

/// Scan for "course"/"class" trigger words followed by a capitalized or
/// digit-bearing token. When a course number trails the token, only the
/// combined "<token> <number>" form is kept so the bare department fragment
/// does not pollute the term set.
fn collect_course_mentions(line: &str, terms: &mut Vec<String>) {
    let words: Vec<&str> = line.split_whitespace().collect();

    for i in 0..words.len().saturating_sub(1) {
        if !COURSE_TRIGGERS.contains(&words[i].to_lowercase().as_str()) {
            continue;
        }

        let next = words[i + 1];
        let looks_like_name = next
            .chars()
            .next()
            .is_some_and(|c| c.is_uppercase())
            || next.chars().any(|c| c.is_ascii_digit());
        if !looks_like_name {
            continue;
        }

        let trailing_number = words
            .get(i + 2)
            .filter(|w| w.chars().any(|c| c.is_ascii_digit()));
        match trailing_number {
            Some(number) => push_unique(terms, format!("{next} {number}")),
            None => push_unique(terms, next.to_string()),
        }
    }
}

fn push_unique(terms: &mut Vec<String>, term: String) {
    if !terms.contains(&term) {
        terms.push(term);
    }
}
