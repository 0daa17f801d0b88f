use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use super::{by_category, find_category, QueryError};
use crate::db::{Category, Question};

/// Which questions a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(i64),
}

impl QuizScope {
    /// Clients send `0` (or nothing) for "all categories".
    pub fn from_category_id(id: Option<i64>) -> Result<Self, QueryError> {
        match id {
            None | Some(0) => Ok(Self::All),
            Some(id) if id > 0 => Ok(Self::Category(id)),
            Some(id) => Err(QueryError::invalid(format!(
                "quiz category id must not be negative, got {id}"
            ))),
        }
    }
}

/// Outcome of a single draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Draw<'a> {
    Question(&'a Question),
    /// Every question in scope was already asked.
    Exhausted,
}

/// Resolves the candidate pool for `scope`. A scope naming a category that
/// does not exist is `NotFound`.
pub fn pool<'a>(
    questions: &'a [Question],
    categories: &[Category],
    scope: QuizScope,
) -> Result<Vec<&'a Question>, QueryError> {
    match scope {
        QuizScope::All => Ok(questions.iter().collect()),
        QuizScope::Category(id) => {
            find_category(categories, id)?;
            Ok(by_category(questions, id))
        }
    }
}

/// Picks one question from `scope` whose id is not in `asked`, uniformly at
/// random from `rng`.
///
/// An empty pool is `NotFound`; a pool fully covered by `asked` yields
/// [`Draw::Exhausted`]. Ids in `asked` that are outside the pool are ignored.
pub fn draw<'a, R: Rng + ?Sized>(
    questions: &'a [Question],
    categories: &[Category],
    scope: QuizScope,
    asked: &HashSet<i64>,
    rng: &mut R,
) -> Result<Draw<'a>, QueryError> {
    let pool = pool(questions, categories, scope)?;
    if pool.is_empty() {
        return Err(QueryError::not_found(match scope {
            QuizScope::All => "there are no questions".to_owned(),
            QuizScope::Category(id) => format!("category {id} has no questions"),
        }));
    }

    let remaining: Vec<&Question> = pool
        .into_iter()
        .filter(|q| !asked.contains(&q.id))
        .collect();
    tracing::debug!(
        ?scope,
        asked = asked.len(),
        remaining = remaining.len(),
        "drawing quiz question"
    );

    Ok(match remaining.choose(rng) {
        Some(&question) => Draw::Question(question),
        None => Draw::Exhausted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::fixtures::{categories, question, questions};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn five() -> Vec<Question> {
        (1..=5).map(|id| question(id, 1, &format!("Q{id}"))).collect()
    }

    #[test]
    fn scope_from_category_id() {
        assert_eq!(QuizScope::from_category_id(None), Ok(QuizScope::All));
        assert_eq!(QuizScope::from_category_id(Some(0)), Ok(QuizScope::All));
        assert_eq!(QuizScope::from_category_id(Some(6)), Ok(QuizScope::Category(6)));
        assert!(matches!(
            QuizScope::from_category_id(Some(-1)),
            Err(QueryError::InvalidInput(_))
        ));
    }

    #[test]
    fn never_repeats_asked_questions() {
        let qs = five();
        let asked: HashSet<i64> = [1, 2].into();
        let mut rng = rng();
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            match draw(&qs, &categories(), QuizScope::All, &asked, &mut rng).unwrap() {
                Draw::Question(q) => {
                    assert!([3, 4, 5].contains(&q.id));
                    seen.insert(q.id);
                }
                Draw::Exhausted => panic!("pool is not exhausted"),
            }
        }
        assert_eq!(seen, HashSet::from([3, 4, 5]));
    }

    #[test]
    fn session_ends_in_exhaustion_after_remaining_draws() {
        let qs = questions();
        let mut asked: HashSet<i64> = [2].into();
        let mut rng = rng();
        let mut draws = 0;
        loop {
            match draw(&qs, &categories(), QuizScope::Category(1), &asked, &mut rng).unwrap() {
                Draw::Question(q) => {
                    assert_eq!(q.category, 1);
                    assert!(asked.insert(q.id), "question {} repeated", q.id);
                    draws += 1;
                }
                Draw::Exhausted => break,
            }
        }
        // category 1 holds questions 1, 2 and 5
        assert_eq!(draws, 2);
    }

    #[test]
    fn fully_asked_pool_is_exhausted() {
        let qs = five();
        let asked: HashSet<i64> = (1..=5).collect();
        assert_eq!(
            draw(&qs, &categories(), QuizScope::All, &asked, &mut rng()),
            Ok(Draw::Exhausted)
        );
    }

    #[test]
    fn asked_ids_outside_pool_are_ignored() {
        let qs = questions();
        let asked: HashSet<i64> = [1, 2, 999].into();
        let drawn =
            draw(&qs, &categories(), QuizScope::Category(1), &asked, &mut rng()).unwrap();
        assert_eq!(drawn, Draw::Question(&qs[4]));
    }

    #[test]
    fn empty_pool_is_not_found() {
        let qs = questions();
        // category 3 exists but has no questions
        assert!(matches!(
            draw(
                &qs,
                &categories(),
                QuizScope::Category(3),
                &HashSet::new(),
                &mut rng()
            ),
            Err(QueryError::NotFound(_))
        ));
        assert!(matches!(
            draw(&[], &categories(), QuizScope::All, &HashSet::new(), &mut rng()),
            Err(QueryError::NotFound(_))
        ));
    }

    #[test]
    fn unknown_category_is_not_found() {
        assert!(matches!(
            draw(
                &questions(),
                &categories(),
                QuizScope::Category(2000),
                &HashSet::new(),
                &mut rng()
            ),
            Err(QueryError::NotFound(_))
        ));
    }

    #[test]
    fn same_seed_draws_same_question() {
        let qs = questions();
        let draw_with_seed = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            draw(&qs, &categories(), QuizScope::All, &HashSet::new(), &mut rng)
        };
        assert_eq!(draw_with_seed(1), draw_with_seed(1));
    }
}
