use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::quizzes::play_quiz::PlayQuiz;
use crate::bootstrap::app_context::AppContext;
use crate::domain::trivia::question::QuizScope;
use crate::presentation::http::error::{ApiError, method_not_allowed_fallback};
use crate::presentation::http::json::{JsonObject, lenient_i32};
use crate::presentation::http::questions::QuestionView;

#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizCategory {
    /// 0 selects every category.
    #[serde(default, deserialize_with = "lenient_i32")]
    pub id: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PlayQuizRequest {
    pub previous_questions: Option<Vec<i32>>,
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    pub question: QuestionView,
}

#[utoipa::path(post, path = "/quizzes", tag = "Quizzes", request_body = PlayQuizRequest,
    responses(
        (status = 200, body = QuizResponse),
        (status = 400, body = crate::presentation::http::error::ErrorEnvelope),
        (status = 404, body = crate::presentation::http::error::ErrorEnvelope, description = "No question left to draw"),
        (status = 422, body = crate::presentation::http::error::ErrorEnvelope),
    ))]
pub async fn play_quiz(
    State(ctx): State<AppContext>,
    body: JsonObject,
) -> Result<Json<QuizResponse>, ApiError> {
    let req = body.parse::<PlayQuizRequest>()?;
    let previous = req.previous_questions.ok_or(ApiError::Unprocessable)?;
    let category_id = req
        .quiz_category
        .and_then(|c| c.id)
        .ok_or(ApiError::Unprocessable)?;

    let repo = ctx.question_repo();
    let uc = PlayQuiz {
        repo: repo.as_ref(),
        exclude_previous: ctx.cfg.quiz_exclude_previous,
    };
    let question = uc
        .execute(QuizScope::from_category_id(category_id), &previous)
        .await?;
    Ok(Json(QuizResponse {
        success: true,
        question: question.into(),
    }))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route(
            "/quizzes",
            post(play_quiz).fallback(method_not_allowed_fallback),
        )
        .with_state(ctx)
}
