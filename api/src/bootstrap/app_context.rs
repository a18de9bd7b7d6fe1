use std::sync::Arc;

use crate::application::ports::category_repository::CategoryRepository;
use crate::application::ports::question_repository::QuestionRepository;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    question_repo: Arc<dyn QuestionRepository>,
    category_repo: Arc<dyn CategoryRepository>,
}

impl AppServices {
    pub fn new(
        question_repo: Arc<dyn QuestionRepository>,
        category_repo: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            question_repo,
            category_repo,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn question_repo(&self) -> Arc<dyn QuestionRepository> {
        self.services.question_repo.clone()
    }

    pub fn category_repo(&self) -> Arc<dyn CategoryRepository> {
        self.services.category_repo.clone()
    }
}
