use tempfile::TempDir;

use super::corpus::{MISSING_CATALOG_PLACEHOLDER, UNREADABLE_CATALOG_PLACEHOLDER};
use super::{CatalogCorpus, CourseCatalog};

#[test]
fn as_text_renders_courses_in_catalog_order() {
    let catalog = CourseCatalog::new();
    let text = catalog.as_text();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), catalog.courses().len());
    assert_eq!(lines[0], "Csci 256: Programming in Python");
    assert_eq!(
        lines.last().copied().unwrap(),
        "Engr 691: Special Topics in Engineering Science (Deep Learning - Graduate)"
    );
    assert!(!text.ends_with('\n'));

    for (line, course) in lines.iter().zip(catalog.courses()) {
        assert_eq!(*line, format!("{}: {}", course.code, course.name));
    }
}

#[test]
fn find_by_code_matches_case_insensitively() {
    let catalog = CourseCatalog::new();

    let course = catalog.find_by_code("csci 632").expect("course exists");
    assert_eq!(course.name, "Machine Learning");

    let course = catalog.find_by_code("CSCI 256").expect("course exists");
    assert_eq!(course.name, "Programming in Python");

    assert!(catalog.find_by_code("Csci 999").is_none());
}

#[test]
fn prerequisites_met_compares_case_insensitively() {
    let catalog = CourseCatalog::new();
    let advanced = catalog.find_by_code("Csci 443").unwrap();

    let completed = vec!["csci 343".to_string(), "CSCI 356".to_string()];
    assert!(advanced.prerequisites_met(&completed));

    let partial = vec!["Csci 343".to_string()];
    assert!(!advanced.prerequisites_met(&partial));

    let intro = catalog.find_by_code("Csci 256").unwrap();
    assert!(intro.prerequisites_met(&[]));
}

#[test]
fn corpus_load_missing_file_degrades_to_placeholder() {
    let dir = TempDir::new().unwrap();
    let corpus = CatalogCorpus::load(&dir.path().join("missing_catalog.txt"));

    assert!(!corpus.is_available());
    assert_eq!(corpus.text(), MISSING_CATALOG_PLACEHOLDER);
}

#[test]
fn corpus_load_reads_file_text() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.txt");
    std::fs::write(&path, "Csci 632 Machine Learning covers supervised models.").unwrap();

    let corpus = CatalogCorpus::load(&path);
    assert!(corpus.is_available());
    assert!(corpus.text().contains("supervised models"));
}

#[test]
fn corpus_placeholders_stay_distinct() {
    assert_ne!(MISSING_CATALOG_PLACEHOLDER, UNREADABLE_CATALOG_PLACEHOLDER);
}
