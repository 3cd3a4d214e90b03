use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;

/// Academic background captured once per session from the interview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub department: String,
    pub degree_level: DegreeLevel,
    pub prior_courses: Vec<String>,
}

impl Student {
    pub fn new(
        department: impl Into<String>,
        degree_level: DegreeLevel,
        prior_courses: Vec<String>,
    ) -> Self {
        Self {
            department: department.into(),
            degree_level,
            prior_courses,
        }
    }

    /// Comma-joined prior course list as embedded in prompts.
    pub fn prior_courses_text(&self) -> String {
        self.prior_courses.join(", ")
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student in {} department, {} level, with prior courses: {}",
            self.department,
            self.degree_level,
            self.prior_courses_text()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegreeLevel {
    Undergraduate,
    Graduate,
}

impl fmt::Display for DegreeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DegreeLevel::Undergraduate => "Undergraduate",
            DegreeLevel::Graduate => "Graduate",
        };
        write!(f, "{label}")
    }
}

impl FromStr for DegreeLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "undergraduate" => Ok(DegreeLevel::Undergraduate),
            "graduate" => Ok(DegreeLevel::Graduate),
            other => Err(anyhow!(
                "Unknown degree level '{other}'. Expected Undergraduate or Graduate."
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_level_parses_case_insensitively() {
        assert_eq!(
            "Undergraduate".parse::<DegreeLevel>().unwrap(),
            DegreeLevel::Undergraduate
        );
        assert_eq!(
            "GRADUATE".parse::<DegreeLevel>().unwrap(),
            DegreeLevel::Graduate
        );
        assert_eq!(
            "  graduate  ".parse::<DegreeLevel>().unwrap(),
            DegreeLevel::Graduate
        );
    }

    #[test]
    fn degree_level_rejects_unknown_values() {
        let err = "PhD".parse::<DegreeLevel>().unwrap_err();
        assert!(err.to_string().contains("Unknown degree level"));
    }

    #[test]
    fn student_display_includes_background() {
        let student = Student::new(
            "Computer Science",
            DegreeLevel::Undergraduate,
            vec!["Csci 256".to_string(), "Math 261".to_string()],
        );
        assert_eq!(
            student.to_string(),
            "Student in Computer Science department, Undergraduate level, \
             with prior courses: Csci 256, Math 261"
        );
    }

    #[test]
    fn empty_prior_courses_render_as_empty_text() {
        let student = Student::new("Biology", DegreeLevel::Graduate, Vec::new());
        assert_eq!(student.prior_courses_text(), "");
    }
}
