use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, page_size: u32) -> Self {
        Self {
            items,
            total,
            page,
            page_size,
        }
    }

    pub fn has_more(&self) -> bool {
        u64::from(self.page) * u64::from(self.page_size) < self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_more_reflects_remaining_rows() {
        assert!(PaginatedResult::new(vec![1, 2], 5, 1, 2).has_more());
        assert!(!PaginatedResult::new(vec![5], 5, 3, 2).has_more());
        assert!(!PaginatedResult::<u8>::new(vec![], 0, 1, 20).has_more());
    }
}
