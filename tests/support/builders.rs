// tests/support/builders.rs
use tullamore_qa::application::{
    commands::{
        questions::CreateQuestionCommand, tags::AddTagCommand, users::RegisterUserCommand,
    },
    dto::{QuestionDto, TagDto, UserDto, VoteDto},
    services::ApplicationServices,
};
use tullamore_qa::domain::vote::VoteType;

pub async fn seed_user(services: &ApplicationServices, id: &str) -> UserDto {
    services
        .user_commands
        .add_user(RegisterUserCommand {
            id: id.into(),
            username: None,
        })
        .await
        .expect("seed user")
}

pub async fn seed_tag(services: &ApplicationServices, name: &str) -> TagDto {
    services
        .tag_commands
        .add_tag(AddTagCommand {
            name: name.into(),
            description: None,
        })
        .await
        .expect("seed tag")
}

pub fn upvote(user: &str) -> VoteDto {
    VoteDto::new(user, VoteType::Upvote)
}

pub fn downvote(user: &str) -> VoteDto {
    VoteDto::new(user, VoteType::Downvote)
}

pub struct QuestionBuilder {
    title: String,
    body: Option<String>,
    created_by: Option<String>,
    tags: Vec<String>,
    votes: Vec<VoteDto>,
}

impl QuestionBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: None,
            created_by: None,
            tags: Vec::new(),
            votes: Vec::new(),
        }
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn created_by(mut self, user: impl Into<String>) -> Self {
        self.created_by = Some(user.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn vote(mut self, vote: VoteDto) -> Self {
        self.votes.push(vote);
        self
    }

    pub fn command(self) -> CreateQuestionCommand {
        CreateQuestionCommand {
            title: self.title,
            body: self.body,
            created_by: self.created_by,
            tags: self.tags,
            votes: self.votes,
        }
    }

    pub async fn save(self, services: &ApplicationServices) -> QuestionDto {
        services
            .question_commands
            .add_question(self.command())
            .await
            .expect("seed question")
    }
}
