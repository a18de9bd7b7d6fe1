pub mod category_repository;
pub mod question_repository;
