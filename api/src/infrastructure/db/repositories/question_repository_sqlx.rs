use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::question_repository::QuestionRepository;
use crate::domain::trivia::page::{Page, PageRequest};
use crate::domain::trivia::question::{NewQuestion, Question, QuizScope};
use crate::infrastructure::db::PgPool;

pub struct SqlxQuestionRepository {
    pub pool: PgPool,
}

impl SqlxQuestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_question(r: PgRow) -> Question {
    Question {
        id: r.get("id"),
        question: r.get("question"),
        answer: r.get("answer"),
        category: r.get("category"),
        difficulty: r.get("difficulty"),
    }
}

/// Builds an ILIKE pattern that matches `term` literally anywhere in the text.
/// Postgres treats backslash as the default LIKE escape character.
fn contains_pattern(term: &str) -> String {
    let mut out = String::with_capacity(term.len() + 2);
    out.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('%');
    out
}

#[async_trait]
impl QuestionRepository for SqlxQuestionRepository {
    async fn list_page(&self, page: PageRequest) -> anyhow::Result<Page<Question>> {
        if !page.is_valid() {
            return Ok(Page::empty());
        }
        let total: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM questions"#)
            .fetch_one(&self.pool)
            .await?;
        let rows = sqlx::query(
            r#"SELECT id, question, answer, category, difficulty
               FROM questions
               ORDER BY id ASC
               LIMIT $1 OFFSET $2"#,
        )
        .bind(page.per_page)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;
        Ok(Page {
            items: rows.into_iter().map(map_question).collect(),
            total,
        })
    }

    async fn insert(&self, question: NewQuestion) -> anyhow::Result<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"INSERT INTO questions (question, answer, category, difficulty)
               VALUES ($1, $2, $3, $4)
               RETURNING id"#,
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn search(&self, term: &str, page: PageRequest) -> anyhow::Result<Page<Question>> {
        if !page.is_valid() {
            return Ok(Page::empty());
        }
        let like = contains_pattern(term);
        let total: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM questions WHERE question ILIKE $1"#)
                .bind(&like)
                .fetch_one(&self.pool)
                .await?;
        let rows = sqlx::query(
            r#"SELECT id, question, answer, category, difficulty
               FROM questions
               WHERE question ILIKE $1
               ORDER BY id ASC
               LIMIT $2 OFFSET $3"#,
        )
        .bind(&like)
        .bind(page.per_page)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;
        Ok(Page {
            items: rows.into_iter().map(map_question).collect(),
            total,
        })
    }

    async fn list_by_category(
        &self,
        category_id: i32,
        page: PageRequest,
    ) -> anyhow::Result<Page<Question>> {
        if !page.is_valid() {
            return Ok(Page::empty());
        }
        let total: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM questions WHERE category = $1"#)
                .bind(category_id)
                .fetch_one(&self.pool)
                .await?;
        let rows = sqlx::query(
            r#"SELECT id, question, answer, category, difficulty
               FROM questions
               WHERE category = $1
               ORDER BY id ASC
               LIMIT $2 OFFSET $3"#,
        )
        .bind(category_id)
        .bind(page.per_page)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;
        Ok(Page {
            items: rows.into_iter().map(map_question).collect(),
            total,
        })
    }

    async fn quiz_candidates(
        &self,
        scope: QuizScope,
        exclude: &[i32],
    ) -> anyhow::Result<Vec<Question>> {
        let rows = match scope {
            QuizScope::Any => {
                sqlx::query(
                    r#"SELECT id, question, answer, category, difficulty
                       FROM questions
                       WHERE NOT (id = ANY($1))
                       ORDER BY id ASC"#,
                )
                .bind(exclude)
                .fetch_all(&self.pool)
                .await?
            }
            QuizScope::Category(category_id) => {
                sqlx::query(
                    r#"SELECT id, question, answer, category, difficulty
                       FROM questions
                       WHERE category = $1 AND NOT (id = ANY($2))
                       ORDER BY id ASC"#,
                )
                .bind(category_id)
                .bind(exclude)
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(rows.into_iter().map(map_question).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::contains_pattern;

    #[test]
    fn pattern_wraps_plain_terms() {
        assert_eq!(contains_pattern("Test"), "%Test%");
        assert_eq!(contains_pattern(""), "%%");
    }

    #[test]
    fn pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("100%"), "%100\\%%");
        assert_eq!(contains_pattern("a_b"), "%a\\_b%");
        assert_eq!(contains_pattern(r"c:\"), r"%c:\\%");
    }
}
