#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    /// Display name, stored in the `type` column.
    pub kind: String,
}
