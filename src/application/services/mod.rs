// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            answers::AnswerCommandService, questions::QuestionCommandService,
            tags::TagCommandService, users::UserCommandService,
        },
        ports::time::Clock,
        queries::{
            answers::AnswerQueryService, questions::QuestionQueryService,
            tags::TagQueryService, users::UserQueryService,
        },
    },
    domain::{
        answer::AnswerRepository,
        question::{QuestionReadRepository, QuestionWriteRepository},
        tag::TagRepository,
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub tag_commands: Arc<TagCommandService>,
    pub tag_queries: Arc<TagQueryService>,
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub question_commands: Arc<QuestionCommandService>,
    pub question_queries: Arc<QuestionQueryService>,
    pub answer_commands: Arc<AnswerCommandService>,
    pub answer_queries: Arc<AnswerQueryService>,
}

impl ApplicationServices {
    pub fn new(
        tag_repo: Arc<dyn TagRepository>,
        user_repo: Arc<dyn UserRepository>,
        question_write_repo: Arc<dyn QuestionWriteRepository>,
        question_read_repo: Arc<dyn QuestionReadRepository>,
        answer_repo: Arc<dyn AnswerRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let tag_commands = Arc::new(TagCommandService::new(Arc::clone(&tag_repo)));
        let tag_queries = Arc::new(TagQueryService::new(Arc::clone(&tag_repo)));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        let question_commands = Arc::new(QuestionCommandService::new(
            Arc::clone(&question_write_repo),
            Arc::clone(&question_read_repo),
            Arc::clone(&tag_repo),
            Arc::clone(&user_repo),
            Arc::clone(&clock),
        ));
        let question_queries = Arc::new(QuestionQueryService::new(
            Arc::clone(&question_read_repo),
            Arc::clone(&tag_repo),
            Arc::clone(&user_repo),
        ));

        let answer_commands = Arc::new(AnswerCommandService::new(
            Arc::clone(&answer_repo),
            Arc::clone(&question_read_repo),
            Arc::clone(&user_repo),
            Arc::clone(&clock),
        ));
        let answer_queries = Arc::new(AnswerQueryService::new(
            Arc::clone(&answer_repo),
            Arc::clone(&question_read_repo),
        ));

        Self {
            tag_commands,
            tag_queries,
            user_commands,
            user_queries,
            question_commands,
            question_queries,
            answer_commands,
            answer_queries,
        }
    }
}
