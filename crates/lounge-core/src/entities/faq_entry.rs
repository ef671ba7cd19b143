//! FAQ entry entity

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// A staff-curated question/answer pair with keywords used for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub id: Snowflake,
    pub question: String,
    pub answer: String,
    /// Lowercased keywords; an incoming question is scored by how many it hits.
    pub keywords: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl FaqEntry {
    pub fn new(id: Snowflake, question: String, answer: String, keywords: Vec<String>) -> Self {
        Self {
            id,
            question,
            answer,
            keywords: keywords.into_iter().map(|k| k.to_lowercase()).collect(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_lowercased() {
        let entry = FaqEntry::new(
            Snowflake::new(1),
            "What time do you open?".into(),
            "We open at 8pm.".into(),
            vec!["Hours".into(), "OPEN".into()],
        );
        assert_eq!(entry.keywords, vec!["hours", "open"]);
    }
}
