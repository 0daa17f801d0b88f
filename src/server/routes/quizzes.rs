use std::collections::HashSet;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use sqlx::SqlitePool;

use crate::{
    bank::{draw, Draw, QueryError, QuizScope},
    db::{
        queries::{categories::get_all_categories, questions::get_all_questions},
        Question,
    },
    server::{app::AppState, deserializers::deserialize_asked_set, ApiResponse},
    telemetry::QUIZ_DRAWS,
};

const EXHAUSTED_MESSAGE: &str = "All questions in the given category have been exhausted";

#[derive(Deserialize)]
struct QuizCategory {
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    id: Option<i64>,
}

#[derive(Deserialize)]
struct QuizRequest {
    #[serde(default, deserialize_with = "deserialize_asked_set")]
    previous_questions: HashSet<i64>,
    #[serde(default)]
    quiz_category: Option<QuizCategory>,
}

#[derive(Serialize)]
struct QuizBody {
    success: bool,
    exhausted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    question: Option<Question>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

fn count(outcome: &str) {
    QUIZ_DRAWS.with_label_values(&[outcome]).inc();
}

async fn next_question(
    State(pool): State<SqlitePool>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> ApiResponse<Json<QuizBody>> {
    let Json(request) = body?;
    let scope = QuizScope::from_category_id(request.quiz_category.and_then(|c| c.id))
        .inspect_err(|_| count("invalid"))?;

    let questions = get_all_questions(&pool).await?;
    let categories = get_all_categories(&pool).await?;

    let drawn = draw(
        &questions,
        &categories,
        scope,
        &request.previous_questions,
        &mut rand::rng(),
    );
    let body = match drawn {
        Ok(Draw::Question(question)) => {
            count("question");
            QuizBody {
                success: true,
                exhausted: false,
                question: Some(question.clone()),
                message: None,
            }
        }
        Ok(Draw::Exhausted) => {
            count("exhausted");
            QuizBody {
                success: true,
                exhausted: true,
                question: None,
                message: Some(EXHAUSTED_MESSAGE),
            }
        }
        Err(e @ QueryError::NotFound(_)) => {
            count("not_found");
            return Err(e.into());
        }
        Err(e) => {
            count("invalid");
            return Err(e.into());
        }
    };
    Ok(Json(body))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_question))
        .with_state(state)
}
