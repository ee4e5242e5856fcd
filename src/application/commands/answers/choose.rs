use super::AnswerCommandService;
use crate::{
    application::{dto::AnswerDto, error::ApplicationResult},
    domain::answer::AnswerId,
};

impl AnswerCommandService {
    /// Makes this the single chosen answer of its question.
    pub async fn choose_answer(&self, id: AnswerId) -> ApplicationResult<AnswerDto> {
        let answer = self.load(id).await?;
        if answer.chosen {
            return Ok(answer.into());
        }

        let chosen = self.repo.choose(answer.id).await?;
        tracing::info!(answer_id = %id, question_id = %chosen.question_id, "answer chosen");
        Ok(chosen.into())
    }
}
