use super::UserQueryService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserId,
};

impl UserQueryService {
    pub async fn get_user(&self, id: impl Into<UserId>) -> ApplicationResult<UserDto> {
        let id = id.into();
        self.repo
            .find_by_id(&id)
            .await?
            .map(UserDto::from)
            .ok_or_else(|| ApplicationError::not_found(format!("user not found: {id}")))
    }

    pub async fn get_all_users(&self) -> ApplicationResult<Vec<UserDto>> {
        let users = self.repo.find_all().await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }

    pub async fn does_user_exist(&self, id: impl Into<UserId>) -> ApplicationResult<bool> {
        Ok(self.repo.exists(&id.into()).await?)
    }
}
