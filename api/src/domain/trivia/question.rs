#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// A question that has not been stored yet; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl NewQuestion {
    pub fn with_id(self, id: i32) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// Which questions a quiz round may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    Any,
    Category(i32),
}

impl QuizScope {
    /// Category id 0 is the client's "All" selection.
    pub fn from_category_id(id: i32) -> Self {
        if id == 0 {
            QuizScope::Any
        } else {
            QuizScope::Category(id)
        }
    }
}
