use super::AnswerCommandService;
use crate::{application::error::ApplicationResult, domain::answer::AnswerId};

impl AnswerCommandService {
    pub async fn delete_answer(&self, id: AnswerId) -> ApplicationResult<()> {
        let answer = self.load(id).await?;
        self.repo.delete(answer.id).await?;
        tracing::info!(answer_id = %id, "answer deleted");
        Ok(())
    }
}
