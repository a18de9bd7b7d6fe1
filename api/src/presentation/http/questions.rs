use std::collections::HashMap;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::PathRejection},
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::questions::create_question::CreateQuestion;
use crate::application::use_cases::questions::delete_question::DeleteQuestion;
use crate::application::use_cases::questions::list_questions::ListQuestions;
use crate::application::use_cases::questions::search_questions::SearchQuestions;
use crate::bootstrap::app_context::AppContext;
use crate::domain::trivia::page::PageRequest;
use crate::domain::trivia::question::{NewQuestion, Question};
use crate::presentation::http::categories::{CategoryMap, category_map};
use crate::presentation::http::error::{ApiError, method_not_allowed_fallback};
use crate::presentation::http::json::{JsonObject, lenient_i32};

/// Wire form of a question; the same field set on every endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionView {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl From<Question> for QuestionView {
    fn from(q: Question) -> Self {
        QuestionView {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<QuestionView>,
    pub total_questions: i64,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
    pub current_category: Option<String>,
}

/// First page of a filtered selection (search results, one category).
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<QuestionView>,
    pub total_questions: i64,
    pub current_category: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub difficulty: Option<i32>,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub category: Option<i32>,
}

impl CreateQuestionRequest {
    fn into_new_question(self) -> Option<NewQuestion> {
        Some(NewQuestion {
            question: self.question?,
            answer: self.answer?,
            difficulty: self.difficulty?,
            category: self.category?,
        })
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchQuestionsRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[utoipa::path(get, path = "/questions", tag = "Questions",
    params(("page" = Option<i64>, Query, description = "1-based page number, 10 questions per page")),
    responses(
        (status = 200, body = QuestionListResponse),
        (status = 404, body = crate::presentation::http::error::ErrorEnvelope, description = "Page holds no questions"),
        (status = 422, body = crate::presentation::http::error::ErrorEnvelope),
    ))]
pub async fn list_questions(
    State(ctx): State<AppContext>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    // unparseable page numbers fall back to the first page
    let page = params
        .get("page")
        .and_then(|p| p.trim().parse::<i64>().ok())
        .unwrap_or(1);

    let questions = ctx.question_repo();
    let categories = ctx.category_repo();
    let uc = ListQuestions {
        questions: questions.as_ref(),
        categories: categories.as_ref(),
    };
    let listing = uc.execute(PageRequest::new(page)).await?;
    Ok(Json(QuestionListResponse {
        success: true,
        questions: listing
            .page
            .items
            .into_iter()
            .map(QuestionView::from)
            .collect(),
        total_questions: listing.page.total,
        categories: category_map(listing.categories),
        current_category: None,
    }))
}

#[utoipa::path(delete, path = "/questions/{question_id}", tag = "Questions",
    params(("question_id" = i32, Path, description = "Question ID")),
    responses(
        (status = 200, body = DeletedResponse),
        (status = 404, body = crate::presentation::http::error::ErrorEnvelope),
        (status = 422, body = crate::presentation::http::error::ErrorEnvelope),
    ))]
pub async fn delete_question(
    State(ctx): State<AppContext>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let Path(question_id) = path.map_err(|_| ApiError::NotFound)?;
    let repo = ctx.question_repo();
    let uc = DeleteQuestion {
        repo: repo.as_ref(),
    };
    let deleted = uc.execute(question_id).await?;
    tracing::info!(question_id = deleted, "question_deleted");
    Ok(Json(DeletedResponse {
        success: true,
        deleted,
    }))
}

#[utoipa::path(post, path = "/questions", tag = "Questions", request_body = CreateQuestionRequest,
    responses(
        (status = 200, body = CreatedResponse),
        (status = 400, body = crate::presentation::http::error::ErrorEnvelope, description = "Missing or malformed JSON body"),
        (status = 422, body = crate::presentation::http::error::ErrorEnvelope, description = "Missing field or insert failure"),
    ))]
pub async fn create_question(
    State(ctx): State<AppContext>,
    body: JsonObject,
) -> Result<Json<CreatedResponse>, ApiError> {
    let new_question = body
        .parse::<CreateQuestionRequest>()?
        .into_new_question()
        .ok_or(ApiError::Unprocessable)?;
    let repo = ctx.question_repo();
    let uc = CreateQuestion {
        repo: repo.as_ref(),
    };
    let created = uc.execute(new_question).await?;
    tracing::info!(question_id = created, "question_created");
    Ok(Json(CreatedResponse {
        success: true,
        created,
    }))
}

#[utoipa::path(post, path = "/questions/search", tag = "Questions", request_body = SearchQuestionsRequest,
    responses(
        (status = 200, body = QuestionPageResponse),
        (status = 400, body = crate::presentation::http::error::ErrorEnvelope),
        (status = 422, body = crate::presentation::http::error::ErrorEnvelope),
    ))]
pub async fn search_questions(
    State(ctx): State<AppContext>,
    body: JsonObject,
) -> Result<Json<QuestionPageResponse>, ApiError> {
    let term = body
        .parse::<SearchQuestionsRequest>()?
        .search_term
        .ok_or(ApiError::Unprocessable)?;
    let repo = ctx.question_repo();
    let uc = SearchQuestions {
        repo: repo.as_ref(),
    };
    let hits = uc.execute(&term).await?;
    Ok(Json(QuestionPageResponse {
        success: true,
        questions: hits.items.into_iter().map(QuestionView::from).collect(),
        total_questions: hits.total,
        current_category: None,
    }))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route(
            "/questions",
            get(list_questions)
                .post(create_question)
                .fallback(method_not_allowed_fallback),
        )
        .route(
            "/questions/search",
            post(search_questions).fallback(method_not_allowed_fallback),
        )
        .route(
            "/questions/:question_id",
            delete(delete_question).fallback(method_not_allowed_fallback),
        )
        .with_state(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_needs_all_four_fields() {
        let full = CreateQuestionRequest {
            question: Some("Q".into()),
            answer: Some("A".into()),
            difficulty: Some(1),
            category: Some(2),
        };
        assert!(full.into_new_question().is_some());

        let missing_category = CreateQuestionRequest {
            question: Some("Q".into()),
            answer: Some("A".into()),
            difficulty: Some(1),
            category: None,
        };
        assert!(missing_category.into_new_question().is_none());
    }
}
