// src/application/commands/references.rs
use std::collections::BTreeSet;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        errors::DomainResult,
        tag::{TagName, TagRepository},
        user::{UserId, UserRepository},
    },
};

pub(crate) fn tag_set(raw: Vec<String>) -> DomainResult<BTreeSet<TagName>> {
    raw.into_iter().map(TagName::new).collect()
}

pub(crate) fn optional_user(raw: Option<String>) -> DomainResult<Option<UserId>> {
    raw.map(UserId::new).transpose()
}

/// Tags are shared entities; a question may only link tags that exist.
pub(crate) async fn ensure_tags_exist(
    repo: &dyn TagRepository,
    tags: &BTreeSet<TagName>,
) -> ApplicationResult<()> {
    for tag in tags {
        if !repo.exists(tag).await? {
            return Err(ApplicationError::not_found(format!("tag not found: {tag}")));
        }
    }
    Ok(())
}

pub(crate) async fn ensure_users_exist(
    repo: &dyn UserRepository,
    users: &BTreeSet<UserId>,
) -> ApplicationResult<()> {
    for user in users {
        if !repo.exists(user).await? {
            return Err(ApplicationError::not_found(format!("user not found: {user}")));
        }
    }
    Ok(())
}
