use super::QuestionQueryService;
use crate::{
    application::{
        dto::QuestionDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::question::QuestionId,
};

impl QuestionQueryService {
    pub async fn get_question(&self, id: impl Into<QuestionId>) -> ApplicationResult<QuestionDto> {
        let id = id.into();
        self.read_repo
            .find_by_id(id)
            .await?
            .map(QuestionDto::from)
            .ok_or_else(|| ApplicationError::not_found(format!("question not found: {id}")))
    }

    pub async fn does_question_exist(
        &self,
        target: impl Into<QuestionId>,
    ) -> ApplicationResult<bool> {
        Ok(self.read_repo.exists(target.into()).await?)
    }
}
