use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use sqlx::SqlitePool;

use crate::{
    bank::{
        self, page_count, paginate, validate_new_question, PageRequest, QueryError,
        QUESTIONS_PER_PAGE,
    },
    db::{
        queries::{categories::get_all_categories, questions},
        Category, NewQuestion, Question,
    },
    server::{app::AppState, ApiError, ApiResponse},
};

#[derive(Deserialize)]
struct PageQuery {
    page: Option<u64>,
}

// the question form posts category and difficulty as strings
#[derive(Deserialize)]
struct NewQuestionBody {
    question: Option<String>,
    answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    category: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    difficulty: Option<i64>,
}

impl TryFrom<NewQuestionBody> for NewQuestion {
    type Error = QueryError;

    fn try_from(body: NewQuestionBody) -> Result<Self, Self::Error> {
        match body {
            NewQuestionBody {
                question: Some(question),
                answer: Some(answer),
                category: Some(category),
                difficulty: Some(difficulty),
            } => Ok(NewQuestion {
                question,
                answer,
                category,
                difficulty,
            }),
            _ => Err(QueryError::invalid(
                "question, answer, category and difficulty are required",
            )),
        }
    }
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
}

#[derive(Serialize)]
struct QuestionsPage {
    success: bool,
    questions: Vec<Question>,
    categories: Vec<Category>,
    total_questions: usize,
    page: u64,
    total_pages: usize,
}

#[derive(Serialize)]
struct QuestionBody {
    success: bool,
    question: Question,
}

#[derive(Serialize)]
struct Deleted {
    success: bool,
    deleted: i64,
}

#[derive(Serialize)]
struct Created {
    success: bool,
    created: i64,
}

#[derive(Serialize)]
struct SearchResults {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
}

async fn questions_page(
    State(pool): State<SqlitePool>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResponse<Json<QuestionsPage>> {
    let Query(PageQuery { page }) = query?;
    let page = match page {
        Some(number) => PageRequest::new(number, QUESTIONS_PER_PAGE)?,
        None => PageRequest::first(),
    };

    let all = questions::get_all_questions(&pool).await?;
    let current = paginate(&all, page);
    if current.is_empty() {
        return Err(QueryError::not_found(format!("page {} is empty", page.number())).into());
    }

    Ok(Json(QuestionsPage {
        success: true,
        questions: current.to_vec(),
        categories: get_all_categories(&pool).await?,
        total_questions: all.len(),
        page: page.number(),
        total_pages: page_count(all.len(), page.size()),
    }))
}

async fn get_question(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResponse<Json<QuestionBody>> {
    let Path(id) = id?;
    let question = questions::get_question(&pool, id).await?;
    Ok(Json(QuestionBody {
        success: true,
        question,
    }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResponse<Json<Deleted>> {
    let Path(id) = id?;
    questions::delete_question(&pool, id)
        .await
        .map_err(ApiError::unprocessable_write)?;
    tracing::info!(question_id = id, "deleted question");
    Ok(Json(Deleted {
        success: true,
        deleted: id,
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    body: Result<Json<NewQuestionBody>, JsonRejection>,
) -> ApiResponse<Json<Created>> {
    let Json(body) = body?;
    let new_question = NewQuestion::try_from(body)?;
    let categories = get_all_categories(&pool).await?;
    validate_new_question(&new_question, &categories)?;

    let id = questions::create_question(&pool, &new_question)
        .await
        .map_err(ApiError::unprocessable_write)?;
    tracing::info!(question_id = id, category = new_question.category, "created question");
    Ok(Json(Created {
        success: true,
        created: id,
    }))
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    body: Result<Json<SearchBody>, JsonRejection>,
) -> ApiResponse<Json<SearchResults>> {
    let Json(SearchBody { search_term }) = body?;
    let all = questions::get_all_questions(&pool).await?;
    let found: Vec<Question> = bank::search(&all, search_term.as_deref())?
        .into_iter()
        .cloned()
        .collect();
    tracing::debug!(term = search_term.as_deref(), matches = found.len(), "searched questions");

    Ok(Json(SearchResults {
        success: true,
        total_questions: found.len(),
        questions: found,
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(questions_page).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", get(get_question).delete(delete_question))
        .with_state(state)
}
