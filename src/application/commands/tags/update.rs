use super::TagCommandService;
use crate::{
    application::{
        dto::TagDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::tag::TagName,
};

#[derive(Debug, Clone)]
pub struct UpdateTagCommand {
    pub description: Option<String>,
}

impl TagCommandService {
    /// Only the description is mutable; the name is the tag's identity.
    pub async fn update_tag(
        &self,
        name: impl Into<TagName>,
        command: UpdateTagCommand,
    ) -> ApplicationResult<TagDto> {
        let name = name.into();
        if !self.repo.exists(&name).await? {
            return Err(ApplicationError::not_found(format!("tag not found: {name}")));
        }

        let mut tag = self
            .repo
            .find_by_name(&name)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("tag not found: {name}")))?;
        tag.set_description(command.description);

        let saved = self.repo.update(tag).await?;
        Ok(saved.into())
    }
}
