pub mod list_categories;
pub mod list_category_questions;
