use super::TagQueryService;
use crate::{
    application::{
        dto::TagDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::tag::TagName,
};

impl TagQueryService {
    pub async fn get_tag(&self, name: impl Into<TagName>) -> ApplicationResult<TagDto> {
        let name = name.into();
        if !self.repo.exists(&name).await? {
            return Err(ApplicationError::not_found(format!("tag not found: {name}")));
        }

        self.repo
            .find_by_name(&name)
            .await?
            .map(TagDto::from)
            .ok_or_else(|| ApplicationError::not_found(format!("tag not found: {name}")))
    }

    pub async fn get_all_tags(&self) -> ApplicationResult<Vec<TagDto>> {
        let tags = self.repo.find_all().await?;
        Ok(tags.into_iter().map(TagDto::from).collect())
    }

    pub async fn does_tag_exist(&self, target: impl Into<TagName>) -> ApplicationResult<bool> {
        Ok(self.repo.exists(&target.into()).await?)
    }
}
