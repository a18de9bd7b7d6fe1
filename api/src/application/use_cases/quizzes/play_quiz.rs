use rand::Rng;

use crate::application::errors::{CatalogError, CatalogResult};
use crate::application::ports::question_repository::QuestionRepository;
use crate::domain::trivia::question::{Question, QuizScope};

pub struct PlayQuiz<'a, R: QuestionRepository + ?Sized> {
    pub repo: &'a R,
    /// When false every question in scope stays eligible, including ones the
    /// player has already seen.
    pub exclude_previous: bool,
}

impl<'a, R: QuestionRepository + ?Sized> PlayQuiz<'a, R> {
    pub async fn execute(&self, scope: QuizScope, previous: &[i32]) -> CatalogResult<Question> {
        let exclude: &[i32] = if self.exclude_previous { previous } else { &[] };
        let candidates = self.repo.quiz_candidates(scope, exclude).await?;
        draw(candidates).ok_or(CatalogError::NotFound("quiz question"))
    }
}

fn draw(mut candidates: Vec<Question>) -> Option<Question> {
    if candidates.is_empty() {
        return None;
    }
    let picked = rand::thread_rng().gen_range(0..candidates.len());
    Some(candidates.swap_remove(picked))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::fixtures::sample_catalog;

    #[tokio::test]
    async fn draws_from_requested_category() {
        let catalog = sample_catalog();
        let uc = PlayQuiz {
            repo: &catalog,
            exclude_previous: true,
        };
        for _ in 0..20 {
            let q = uc.execute(QuizScope::Category(2), &[]).await.unwrap();
            assert_eq!(q.category, 2);
        }
    }

    #[tokio::test]
    async fn skips_previous_questions() {
        let catalog = sample_catalog();
        let uc = PlayQuiz {
            repo: &catalog,
            exclude_previous: true,
        };
        for _ in 0..20 {
            let q = uc.execute(QuizScope::Category(2), &[13, 14]).await.unwrap();
            assert_eq!(q.id, 15);
        }
        let err = uc
            .execute(QuizScope::Category(2), &[13, 14, 15])
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[tokio::test]
    async fn without_exclusion_seen_questions_stay_eligible() {
        let catalog = sample_catalog();
        let uc = PlayQuiz {
            repo: &catalog,
            exclude_previous: false,
        };
        let q = uc.execute(QuizScope::Category(3), &[16]).await.unwrap();
        assert_eq!(q.id, 16);
    }

    #[tokio::test]
    async fn any_scope_spans_categories_and_empty_category_is_not_found() {
        let catalog = sample_catalog();
        let uc = PlayQuiz {
            repo: &catalog,
            exclude_previous: true,
        };
        let q = uc.execute(QuizScope::Any, &[]).await.unwrap();
        assert!((1..=16).contains(&q.id));

        let err = uc.execute(QuizScope::Category(6), &[]).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[test]
    fn draw_of_nothing_is_none() {
        assert!(draw(Vec::new()).is_none());
    }
}
