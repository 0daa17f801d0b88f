use std::ops::RangeInclusive;

use super::{find_category, QueryError};
use crate::db::{Category, NewQuestion};

pub const DIFFICULTY_RANGE: RangeInclusive<i64> = 1..=5;

/// Checks a question before it is handed to storage. Malformed fields are
/// `InvalidInput`; a well-formed question naming an unknown category is
/// `Unprocessable`.
pub fn validate_new_question(
    question: &NewQuestion,
    categories: &[Category],
) -> Result<(), QueryError> {
    if question.question.trim().is_empty() {
        return Err(QueryError::invalid("question text must not be empty"));
    }
    if question.answer.trim().is_empty() {
        return Err(QueryError::invalid("answer text must not be empty"));
    }
    if !DIFFICULTY_RANGE.contains(&question.difficulty) {
        return Err(QueryError::invalid(format!(
            "difficulty must be between {} and {}",
            DIFFICULTY_RANGE.start(),
            DIFFICULTY_RANGE.end()
        )));
    }
    find_category(categories, question.category)
        .map_err(|e| QueryError::unprocessable(e.detail()))?;
    Ok(())
}
