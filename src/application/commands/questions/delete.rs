use super::QuestionCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::question::QuestionId,
};

impl QuestionCommandService {
    /// Accepts an id, a freshly loaded `&Question`, or a stale one; all
    /// resolve to the id and behave the same.
    pub async fn delete_question(&self, target: impl Into<QuestionId>) -> ApplicationResult<()> {
        let id = target.into();
        if !self.read_repo.exists(id).await? {
            return Err(ApplicationError::not_found(format!("question not found: {id}")));
        }

        self.write_repo.delete(id).await?;
        tracing::info!(question_id = %id, "question deleted with its answers");
        Ok(())
    }
}
