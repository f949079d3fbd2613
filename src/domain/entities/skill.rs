use serde::Deserialize;

/// Wire shape of a skill in the profile fetch payload.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillRecord {
    pub skill_name: String,
}

/// Local working copy of the skill list. Edits accumulate here and only
/// reach the service when the whole collection is pushed with
/// `SkillsSynchronizer::replace_all`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillsDraft {
    skills: Vec<String>,
}

impl SkillsDraft {
    pub fn new(skills: Vec<String>) -> Self {
        SkillsDraft { skills }
    }

    /// Adds a skill. Blank names and exact duplicates are silently ignored;
    /// insertion order is display order.
    pub fn add(&mut self, name: &str) {
        let trimmed = name.trim();
        if !trimmed.is_empty() && !self.skills.iter().any(|s| s == trimmed) {
            self.skills.push(trimmed.to_string());
        }
    }

    pub fn remove(&mut self, name: &str) {
        self.skills.retain(|s| s != name);
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn into_skills(self) -> Vec<String> {
        self.skills
    }
}
