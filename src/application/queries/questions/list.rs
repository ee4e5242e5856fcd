use super::QuestionQueryService;
use crate::application::{
    dto::{PaginatedResult, QuestionDto},
    error::ApplicationResult,
};

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy)]
pub struct ListQuestionsQuery {
    pub page: u32,
    pub page_size: u32,
}

impl Default for ListQuestionsQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListQuestionsQuery {
    fn normalized(self) -> Self {
        Self {
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }
}

impl QuestionQueryService {
    pub async fn get_all_questions(
        &self,
        query: ListQuestionsQuery,
    ) -> ApplicationResult<PaginatedResult<QuestionDto>> {
        let ListQuestionsQuery { page, page_size } = query.normalized();
        let (questions, total) = self.read_repo.list_paginated(page, page_size).await?;
        let items = questions.into_iter().map(QuestionDto::from).collect();
        Ok(PaginatedResult::new(items, total, page, page_size))
    }
}
