use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::extract::MatchedPath;
use dotenvy::dotenv;
use tower_http::trace::TraceLayer;
use tracing::info;

use trivia_api::application::ports::category_repository::CategoryRepository;
use trivia_api::application::ports::question_repository::QuestionRepository;
use trivia_api::bootstrap::app_context::{AppContext, AppServices};
use trivia_api::bootstrap::config::{Config, StoreBackend};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
        paths(
            trivia_api::presentation::http::categories::list_categories,
            trivia_api::presentation::http::categories::list_category_questions,
            trivia_api::presentation::http::questions::list_questions,
            trivia_api::presentation::http::questions::create_question,
            trivia_api::presentation::http::questions::delete_question,
            trivia_api::presentation::http::questions::search_questions,
            trivia_api::presentation::http::quizzes::play_quiz,
        ),
        components(schemas(
            trivia_api::presentation::http::error::ErrorEnvelope,
            trivia_api::presentation::http::categories::CategoriesResponse,
            trivia_api::presentation::http::questions::QuestionView,
            trivia_api::presentation::http::questions::QuestionListResponse,
            trivia_api::presentation::http::questions::QuestionPageResponse,
            trivia_api::presentation::http::questions::DeletedResponse,
            trivia_api::presentation::http::questions::CreatedResponse,
            trivia_api::presentation::http::questions::CreateQuestionRequest,
            trivia_api::presentation::http::questions::SearchQuestionsRequest,
            trivia_api::presentation::http::quizzes::QuizCategory,
            trivia_api::presentation::http::quizzes::PlayQuizRequest,
            trivia_api::presentation::http::quizzes::QuizResponse,
        )),
        tags(
            (name = "Categories", description = "Category listing and per-category questions"),
            (name = "Questions", description = "Question catalog"),
            (name = "Quizzes", description = "Random quiz draws")
        )
    )]
struct ApiDoc;

async fn build_services(cfg: &Config) -> anyhow::Result<AppServices> {
    let (question_repo, category_repo): (Arc<dyn QuestionRepository>, Arc<dyn CategoryRepository>) =
        match cfg.store_backend {
            StoreBackend::Postgres => {
                let pool = trivia_api::infrastructure::db::connect_pool(
                    &cfg.database_url,
                    cfg.db_max_connections,
                )
                .await?;
                if cfg.run_migrations {
                    trivia_api::infrastructure::db::migrate(&pool).await?;
                }
                let questions: Arc<dyn QuestionRepository> = Arc::new(
                    trivia_api::infrastructure::db::repositories::question_repository_sqlx::SqlxQuestionRepository::new(
                        pool.clone(),
                    ),
                );
                let categories: Arc<dyn CategoryRepository> = Arc::new(
                    trivia_api::infrastructure::db::repositories::category_repository_sqlx::SqlxCategoryRepository::new(
                        pool,
                    ),
                );
                (questions, categories)
            }
            StoreBackend::Memory => {
                tracing::warn!("memory_store_enabled_data_is_not_persisted");
                let store = Arc::new(
                    trivia_api::infrastructure::memory::InMemoryCatalog::new()
                        .with_category(1, "Science")
                        .with_category(2, "Art")
                        .with_category(3, "Geography")
                        .with_category(4, "History")
                        .with_category(5, "Entertainment")
                        .with_category(6, "Sports"),
                );
                let questions: Arc<dyn QuestionRepository> = store.clone();
                let categories: Arc<dyn CategoryRepository> = store;
                (questions, categories)
            }
        };
    Ok(AppServices::new(question_repo, category_repo))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "ctrl_c_listener_failed");
    }
    info!("shutdown_requested");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "trivia_api=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(?cfg, "Starting trivia API");

    let services = build_services(&cfg).await?;
    let ctx = AppContext::new(cfg.clone(), services);

    let app = Router::new()
        .merge(trivia_api::presentation::http::router(ctx))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(DefaultBodyLimit::max(cfg.request_max_bytes))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
