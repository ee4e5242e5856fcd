use super::TagCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::tag::TagName,
};

impl TagCommandService {
    /// Accepts a name or a loaded `&Tag`.
    pub async fn delete_tag(&self, target: impl Into<TagName>) -> ApplicationResult<()> {
        let name = target.into();
        if !self.repo.exists(&name).await? {
            return Err(ApplicationError::not_found(format!("tag not found: {name}")));
        }

        self.repo.delete(&name).await?;
        tracing::info!(tag = %name, "tag deleted");
        Ok(())
    }
}
