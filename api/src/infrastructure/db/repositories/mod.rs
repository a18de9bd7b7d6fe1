pub mod category_repository_sqlx;
pub mod question_repository_sqlx;
