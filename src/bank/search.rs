use super::QueryError;
use crate::db::Question;

/// Case-insensitive substring search over question text.
///
/// A missing or blank term is rejected rather than matching everything.
pub fn search<'a>(
    questions: &'a [Question],
    term: Option<&str>,
) -> Result<Vec<&'a Question>, QueryError> {
    let term = match term {
        Some(term) if !term.trim().is_empty() => term.to_lowercase(),
        _ => return Err(QueryError::invalid("a non-empty search term is required")),
    };
    Ok(questions
        .iter()
        .filter(|q| q.question.to_lowercase().contains(&term))
        .collect())
}
