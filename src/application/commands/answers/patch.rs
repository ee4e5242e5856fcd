use super::AnswerCommandService;
use crate::{
    application::{
        commands::references::ensure_users_exist,
        dto::{AnswerDto, VoteDto, votes::vote_set_from},
        error::ApplicationResult,
    },
    domain::answer::{AnswerBody, AnswerId, AnswerPatch},
};

#[derive(Debug, Clone, Default)]
pub struct PatchAnswerCommand {
    pub body: Option<String>,
    pub votes: Option<Vec<VoteDto>>,
}

impl AnswerCommandService {
    pub async fn patch_answer(
        &self,
        id: AnswerId,
        command: PatchAnswerCommand,
    ) -> ApplicationResult<AnswerDto> {
        let mut answer = self.load(id).await?;

        let patch = AnswerPatch {
            body: command.body.map(AnswerBody::new).transpose()?,
            votes: command.votes.map(vote_set_from).transpose()?,
        };
        ensure_users_exist(self.user_repo.as_ref(), &patch.referenced_users()).await?;

        answer.apply_patch(patch, self.clock.now());
        let updated = self.repo.update(answer).await?;
        Ok(updated.into())
    }
}
