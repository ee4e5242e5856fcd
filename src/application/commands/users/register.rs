use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{User, UserId, Username},
};

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub id: String,
    /// Falls back to the id when absent.
    pub username: Option<String>,
}

impl UserCommandService {
    pub async fn add_user(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let id = UserId::new(command.id)?;
        let username = match command.username {
            Some(username) => Username::new(username)?,
            None => Username::new(id.as_str())?,
        };

        if self.repo.exists(&id).await? {
            return Err(ApplicationError::conflict(format!("user already exists: {id}")));
        }

        let user = User {
            id,
            username,
            created_at: self.clock.now(),
        };
        let saved = self.repo.insert(user).await?;
        tracing::info!(user = %saved.id, "user registered");
        Ok(saved.into())
    }
}
