use super::TagCommandService;
use crate::{
    application::{
        dto::TagDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::tag::{Tag, TagName},
};

#[derive(Debug, Clone)]
pub struct AddTagCommand {
    pub name: String,
    pub description: Option<String>,
}

impl TagCommandService {
    pub async fn add_tag(&self, command: AddTagCommand) -> ApplicationResult<TagDto> {
        let name = TagName::new(command.name)?;
        if self.repo.exists(&name).await? {
            return Err(ApplicationError::conflict(format!(
                "tag already exists: {name}"
            )));
        }

        let mut tag = Tag::new(name);
        tag.set_description(command.description);
        let saved = self.repo.insert(tag).await?;
        tracing::info!(tag = %saved.name, "tag created");
        Ok(saved.into())
    }
}
