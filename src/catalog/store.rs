use super::course::Course;

/// Fixed in-memory course table. Loaded once at startup, never mutated.
#[derive(Debug, Clone)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    pub fn new() -> Self {
        let courses = vec![
            Course::new(
                "Csci 256",
                "Programming in Python",
                "Introduction to Python programming language",
                &[],
            ),
            Course::new(
                "Csci 343",
                "Fundamentals of Data Science",
                "Basics of data science methodologies",
                &["Csci 256"],
            ),
            Course::new(
                "CSci 356",
                "Data Structures in Python",
                "Implementation of data structures using Python",
                &["Csci 256"],
            ),
            Course::new(
                "CSci 433",
                "Algorithm and Data Structure Analysis",
                "Analysis of algorithms and data structures",
                &["CSci 356"],
            ),
            Course::new(
                "Csci 443",
                "Advanced Data Science",
                "Advanced topics in data science",
                &["Csci 343", "CSci 356"],
            ),
            Course::new(
                "Csci 475",
                "Introduction to Database Systems",
                "Fundamentals of database design and management",
                &["CSci 356"],
            ),
            Course::new(
                "CSci 345",
                "Information Storage and Retrieval",
                "Methods for storing and retrieving information",
                &["Csci 256"],
            ),
            Course::new(
                "CSci 444",
                "Information Visualization",
                "Techniques for visualizing data and information",
                &["Csci 343"],
            ),
            Course::new(
                "CSci 517",
                "Natural Language Processing",
                "Processing and analyzing natural language data",
                &["Csci 632"],
            ),
            Course::new(
                "CSci 543",
                "Data Mining",
                "Techniques for extracting patterns from data",
                &["Csci 443"],
            ),
            Course::new(
                "Csci 632",
                "Machine Learning",
                "Algorithms that learn from data",
                &["Csci 443"],
            ),
            Course::new(
                "Csci 581",
                "Special Topics in Computer Science (Computer Vision)",
                "Computer vision algorithms and applications",
                &["Csci 632"],
            ),
            Course::new(
                "CSci 492",
                "Special Topics in Data Science (Deep Learning - Undergraduate)",
                "Deep learning for undergraduates",
                &["Csci 632"],
            ),
            Course::new(
                "Engr 691",
                "Special Topics in Engineering Science (Deep Learning - Graduate)",
                "Advanced deep learning for graduates",
                &["Csci 632"],
            ),
        ];

        Self { courses }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn find_by_code(&self, code: &str) -> Option<&Course> {
        self.courses
            .iter()
            .find(|course| course.code.eq_ignore_ascii_case(code.trim()))
    }

    /// One `<code>: <name>` line per course, in catalog order, as embedded in
    /// prompts.
    pub fn as_text(&self) -> String {
        self.courses
            .iter()
            .map(|course| format!("{}: {}", course.code, course.name))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for CourseCatalog {
    fn default() -> Self {
        Self::new()
    }
}
