use std::collections::HashSet;

use serde::{Deserialize, Deserializer};

// the quiz client echoes back either bare ids or the question objects it
// was served, only the id is trusted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum QuestionKey {
    Id(i64),
    Question { id: i64 },
}

impl QuestionKey {
    pub fn id(&self) -> i64 {
        match self {
            Self::Id(id) | Self::Question { id } => *id,
        }
    }
}

pub fn deserialize_asked_set<'de, D>(deserializer: D) -> Result<HashSet<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let keys = Option::<Vec<QuestionKey>>::deserialize(deserializer)?;
    Ok(keys.unwrap_or_default().iter().map(QuestionKey::id).collect())
}
