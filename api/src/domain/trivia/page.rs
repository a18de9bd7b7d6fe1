pub const QUESTIONS_PER_PAGE: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: i64,
    pub per_page: i64,
}

impl PageRequest {
    pub fn new(page: i64) -> Self {
        Self {
            page,
            per_page: QUESTIONS_PER_PAGE,
        }
    }

    pub fn first() -> Self {
        Self::new(1)
    }

    /// A page is valid when it is 1 or above and its offset fits in an i64;
    /// anything else can never hold rows.
    pub fn is_valid(&self) -> bool {
        self.page >= 1 && self.per_page >= 1 && self.checked_offset().is_some()
    }

    fn checked_offset(&self) -> Option<i64> {
        (self.page - 1).max(0).checked_mul(self.per_page)
    }

    pub fn offset(&self) -> i64 {
        self.checked_offset().unwrap_or(i64::MAX)
    }
}

/// One window of results plus the count of every match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }

    /// Slices an already-filtered, already-ordered sequence.
    pub fn from_slice(all: &[T], req: PageRequest) -> Self
    where
        T: Clone,
    {
        let total = all.len() as i64;
        if !req.is_valid() {
            return Self { items: Vec::new(), total };
        }
        let items = all
            .iter()
            .skip(req.offset() as usize)
            .take(req.per_page as usize)
            .cloned()
            .collect();
        Self { items, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_follows_page_number() {
        assert_eq!(PageRequest::new(1).offset(), 0);
        assert_eq!(PageRequest::new(3).offset(), 20);
    }

    #[test]
    fn page_zero_is_invalid() {
        assert!(!PageRequest::new(0).is_valid());
        assert!(!PageRequest::new(-2).is_valid());
        assert!(PageRequest::first().is_valid());
    }

    #[test]
    fn page_past_offset_range_is_invalid() {
        let huge = PageRequest::new(i64::MAX);
        assert!(!huge.is_valid());
        assert_eq!(huge.offset(), i64::MAX);

        let largest = PageRequest::new(i64::MAX / QUESTIONS_PER_PAGE + 1);
        assert!(largest.is_valid());
        assert!(!PageRequest::new(i64::MAX / QUESTIONS_PER_PAGE + 2).is_valid());
    }

    #[test]
    fn from_slice_keeps_full_total() {
        let all: Vec<i32> = (1..=23).collect();
        let last = Page::from_slice(&all, PageRequest::new(3));
        assert_eq!(last.items, vec![21, 22, 23]);
        assert_eq!(last.total, 23);

        let beyond = Page::from_slice(&all, PageRequest::new(4));
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total, 23);
    }
}
