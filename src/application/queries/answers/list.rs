use super::AnswerQueryService;
use crate::{
    application::{
        dto::AnswerDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{answer::AnswerId, question::QuestionId},
};

impl AnswerQueryService {
    pub async fn get_answer(&self, id: AnswerId) -> ApplicationResult<AnswerDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(AnswerDto::from)
            .ok_or_else(|| ApplicationError::not_found(format!("answer not found: {id}")))
    }

    /// Answers in creation order; the chosen one is flagged, not reordered.
    pub async fn list_answers(
        &self,
        question: impl Into<QuestionId>,
    ) -> ApplicationResult<Vec<AnswerDto>> {
        let question_id = question.into();
        if !self.question_repo.exists(question_id).await? {
            return Err(ApplicationError::not_found(format!(
                "question not found: {question_id}"
            )));
        }
        let answers = self.repo.list_by_question(question_id).await?;
        Ok(answers.into_iter().map(AnswerDto::from).collect())
    }
}
