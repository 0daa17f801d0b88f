use super::QueryError;
use crate::db::{Category, Question};

/// Every question filed under `category_id`, in input order.
pub fn by_category(questions: &[Question], category_id: i64) -> Vec<&Question> {
    questions
        .iter()
        .filter(|q| q.category == category_id)
        .collect()
}

pub fn find_category(categories: &[Category], id: i64) -> Result<&Category, QueryError> {
    categories
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| QueryError::not_found(format!("category {id} does not exist")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::fixtures::{categories, questions};

    #[test]
    fn membership_matches_category_field() {
        let qs = questions();
        for c in 0..=4 {
            let found = by_category(&qs, c);
            for q in &qs {
                assert_eq!(found.iter().any(|f| f.id == q.id), q.category == c);
            }
        }
    }

    #[test]
    fn keeps_input_order() {
        let qs = questions();
        let ids: Vec<i64> = by_category(&qs, 1).iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 5]);
    }

    #[test]
    fn unknown_category_yields_nothing() {
        assert!(by_category(&questions(), 2000).is_empty());
    }

    #[test]
    fn finds_existing_category() {
        let cs = categories();
        assert_eq!(find_category(&cs, 2).unwrap().name, "Art");
        assert!(matches!(
            find_category(&cs, 42),
            Err(QueryError::NotFound(_))
        ));
    }
}
