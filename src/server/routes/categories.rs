use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    bank::{by_category, find_category, QueryError},
    db::{
        queries::{categories::get_all_categories, questions::get_all_questions},
        Category, Question,
    },
    server::{app::AppState, ApiResponse},
};

#[derive(Serialize)]
struct CategoriesBody {
    success: bool,
    categories: Vec<Category>,
    no_of_categories: usize,
}

#[derive(Serialize)]
struct CategoryQuestionsBody {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: String,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<Json<CategoriesBody>> {
    let categories = get_all_categories(&pool).await?;
    Ok(Json(CategoriesBody {
        success: true,
        no_of_categories: categories.len(),
        categories,
    }))
}

async fn questions_in_category(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResponse<Json<CategoryQuestionsBody>> {
    let Path(id) = id?;
    let categories = get_all_categories(&pool).await?;
    let category = find_category(&categories, id)?;
    let questions = get_all_questions(&pool).await?;

    let questions: Vec<Question> = by_category(&questions, id).into_iter().cloned().collect();
    if questions.is_empty() {
        return Err(QueryError::not_found(format!("category {id} has no questions")).into());
    }

    Ok(Json(CategoryQuestionsBody {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: category.name.clone(),
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(questions_in_category))
        .with_state(state)
}
