/// One course record from the built-in catalog. Prerequisite codes reference
/// other courses by convention only; they are not enforced as foreign keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub code: String,
    pub name: String,
    pub description: String,
    pub prerequisites: Vec<String>,
}

impl Course {
    pub fn new(code: &str, name: &str, description: &str, prerequisites: &[&str]) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            prerequisites: prerequisites.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// True when every prerequisite code appears in the completed list,
    /// compared case-insensitively.
    pub fn prerequisites_met(&self, completed: &[String]) -> bool {
        self.prerequisites.iter().all(|prereq| {
            completed
                .iter()
                .any(|done| done.trim().eq_ignore_ascii_case(prereq))
        })
    }
}
