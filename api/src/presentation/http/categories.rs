use std::collections::BTreeMap;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    routing::get,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::use_cases::categories::list_categories::ListCategories;
use crate::application::use_cases::categories::list_category_questions::ListCategoryQuestions;
use crate::bootstrap::app_context::AppContext;
use crate::domain::trivia::category::Category;
use crate::presentation::http::error::{ApiError, method_not_allowed_fallback};
use crate::presentation::http::questions::{QuestionPageResponse, QuestionView};

/// Category id to display name. JSON object keys are the ids as strings.
pub type CategoryMap = BTreeMap<i32, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub success: bool,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
}

#[utoipa::path(get, path = "/categories", tag = "Categories",
    responses(
        (status = 200, body = CategoriesResponse),
        (status = 404, body = crate::presentation::http::error::ErrorEnvelope, description = "No categories"),
    ))]
pub async fn list_categories(
    State(ctx): State<AppContext>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let repo = ctx.category_repo();
    let uc = ListCategories {
        repo: repo.as_ref(),
    };
    let categories = uc.execute().await?;
    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

#[utoipa::path(get, path = "/categories/{category_id}/questions", tag = "Categories",
    params(("category_id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, body = QuestionPageResponse),
        (status = 404, body = crate::presentation::http::error::ErrorEnvelope, description = "Unknown category"),
        (status = 422, body = crate::presentation::http::error::ErrorEnvelope),
    ))]
pub async fn list_category_questions(
    State(ctx): State<AppContext>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<QuestionPageResponse>, ApiError> {
    let Path(category_id) = path.map_err(|_| ApiError::NotFound)?;
    let categories = ctx.category_repo();
    let questions = ctx.question_repo();
    let uc = ListCategoryQuestions {
        categories: categories.as_ref(),
        questions: questions.as_ref(),
    };
    let out = uc.execute(category_id).await?;
    Ok(Json(QuestionPageResponse {
        success: true,
        questions: out.page.items.into_iter().map(QuestionView::from).collect(),
        total_questions: out.page.total,
        current_category: Some(out.category.kind),
    }))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route(
            "/categories",
            get(list_categories).fallback(method_not_allowed_fallback),
        )
        .route(
            "/categories/:category_id/questions",
            get(list_category_questions).fallback(method_not_allowed_fallback),
        )
        .with_state(ctx)
}
