use crate::application::dto::votes::VoteDto;
use crate::domain::question::{Question, QuestionId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionDto {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub created_by: Option<String>,
    pub last_updated_at: DateTime<Utc>,
    #[serde(default)]
    pub modified_by: Option<String>,
    pub tags: Vec<String>,
    pub votes: Vec<VoteDto>,
    pub upvotes: u32,
    pub downvotes: u32,
}

impl From<Question> for QuestionDto {
    fn from(question: Question) -> Self {
        let tally = question.tally();
        Self {
            id: question.id.into(),
            votes: VoteDto::list(&question.votes),
            title: question.title.into(),
            body: question.body,
            created_at: question.created_at,
            created_by: question.created_by.map(Into::into),
            last_updated_at: question.last_updated_at,
            modified_by: question.modified_by.map(Into::into),
            tags: question.tags.into_iter().map(Into::into).collect(),
            upvotes: tally.upvotes,
            downvotes: tally.downvotes,
        }
    }
}

impl From<&QuestionDto> for QuestionId {
    fn from(dto: &QuestionDto) -> Self {
        QuestionId(dto.id)
    }
}
