//! Query and selection logic over an in-memory snapshot of the question bank.
//!
//! Every function here is synchronous and side-effect free. Callers fetch
//! questions and categories from storage, hand them in, and decide how the
//! returned [`QueryError`] variants map onto their own protocol.

pub mod category;
pub mod error;
pub mod pagination;
pub mod quiz;
pub mod search;
pub mod validate;

pub use category::{by_category, find_category};
pub use error::QueryError;
pub use pagination::{page_count, paginate, PageRequest, QUESTIONS_PER_PAGE};
pub use quiz::{draw, pool, Draw, QuizScope};
pub use search::search;
pub use validate::validate_new_question;
