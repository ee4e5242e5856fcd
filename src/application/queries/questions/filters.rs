use super::QuestionQueryService;
use crate::{
    application::{
        dto::QuestionDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{question::Question, tag::TagName, user::UserId},
};

fn to_dtos(questions: Vec<Question>) -> Vec<QuestionDto> {
    questions.into_iter().map(QuestionDto::from).collect()
}

impl QuestionQueryService {
    /// Case-insensitive substring match; a blank fragment matches nothing.
    pub async fn find_questions_by_title(
        &self,
        title: &str,
    ) -> ApplicationResult<Vec<QuestionDto>> {
        if title.trim().is_empty() {
            return Ok(Vec::new());
        }
        let questions = self.read_repo.find_by_title_containing(title).await?;
        Ok(to_dtos(questions))
    }

    pub async fn find_questions_asked_by_user(
        &self,
        user: impl Into<UserId>,
    ) -> ApplicationResult<Vec<QuestionDto>> {
        let user = user.into();
        self.ensure_user(&user).await?;
        let questions = self.read_repo.find_by_created_by(&user).await?;
        Ok(to_dtos(questions))
    }

    pub async fn find_questions_answered_by_user(
        &self,
        user: impl Into<UserId>,
    ) -> ApplicationResult<Vec<QuestionDto>> {
        let user = user.into();
        self.ensure_user(&user).await?;
        let questions = self.read_repo.find_answered_by(&user).await?;
        Ok(to_dtos(questions))
    }

    pub async fn find_questions_by_tag(
        &self,
        tag: impl Into<TagName>,
    ) -> ApplicationResult<Vec<QuestionDto>> {
        let tag = tag.into();
        if !self.tag_repo.exists(&tag).await? {
            return Err(ApplicationError::not_found(format!("tag not found: {tag}")));
        }
        let questions = self.read_repo.find_by_tag(&tag).await?;
        Ok(to_dtos(questions))
    }

    async fn ensure_user(&self, user: &UserId) -> ApplicationResult<()> {
        if self.user_repo.exists(user).await? {
            Ok(())
        } else {
            Err(ApplicationError::not_found(format!("user not found: {user}")))
        }
    }
}
