use crate::application::dto::votes::VoteDto;
use crate::domain::answer::Answer;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnswerDto {
    pub id: i64,
    pub question_id: i64,
    #[serde(default)]
    pub author: Option<String>,
    pub body: String,
    pub chosen: bool,
    pub votes: Vec<VoteDto>,
    pub upvotes: u32,
    pub downvotes: u32,
    pub created_at: DateTime<Utc>,
    pub last_updated_at: DateTime<Utc>,
}

impl From<Answer> for AnswerDto {
    fn from(answer: Answer) -> Self {
        let tally = answer.tally();
        Self {
            id: answer.id.into(),
            question_id: answer.question_id.into(),
            votes: VoteDto::list(&answer.votes),
            author: answer.author.map(Into::into),
            body: answer.body.into(),
            chosen: answer.chosen,
            upvotes: tally.upvotes,
            downvotes: tally.downvotes,
            created_at: answer.created_at,
            last_updated_at: answer.last_updated_at,
        }
    }
}
