// tests/support/mocks/tag_repo.rs
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;
use tullamore_qa::domain::errors::{DomainError, DomainResult};
use tullamore_qa::domain::tag::{Tag, TagName, TagRepository};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagRepoCall {
    Exists(String),
    FindByName(String),
    FindAll,
    Insert(String),
    Update(String),
    Delete(String),
}

/// In-memory tag store that records every call made against it.
#[derive(Debug, Default)]
pub struct CapturingTagRepo {
    tags: Mutex<BTreeMap<TagName, Tag>>,
    calls: Mutex<Vec<TagRepoCall>>,
}

impl CapturingTagRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tags(tags: impl IntoIterator<Item = Tag>) -> Self {
        let repo = Self::new();
        {
            let mut map = repo.tags.lock().unwrap();
            for tag in tags {
                map.insert(tag.name.clone(), tag);
            }
        }
        repo
    }

    pub fn calls(&self) -> Vec<TagRepoCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: &TagRepoCall) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == call).count()
    }

    pub fn stored(&self, name: &str) -> Option<Tag> {
        let name = TagName::new(name).ok()?;
        self.tags.lock().unwrap().get(&name).cloned()
    }

    fn record(&self, call: TagRepoCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl TagRepository for CapturingTagRepo {
    async fn exists(&self, name: &TagName) -> DomainResult<bool> {
        self.record(TagRepoCall::Exists(name.to_string()));
        Ok(self.tags.lock().unwrap().contains_key(name))
    }

    async fn find_by_name(&self, name: &TagName) -> DomainResult<Option<Tag>> {
        self.record(TagRepoCall::FindByName(name.to_string()));
        Ok(self.tags.lock().unwrap().get(name).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Tag>> {
        self.record(TagRepoCall::FindAll);
        Ok(self.tags.lock().unwrap().values().cloned().collect())
    }

    async fn insert(&self, tag: Tag) -> DomainResult<Tag> {
        self.record(TagRepoCall::Insert(tag.name.to_string()));
        let mut map = self.tags.lock().unwrap();
        if map.contains_key(&tag.name) {
            return Err(DomainError::Conflict(format!("tag already exists: {}", tag.name)));
        }
        map.insert(tag.name.clone(), tag.clone());
        Ok(tag)
    }

    async fn update(&self, tag: Tag) -> DomainResult<Tag> {
        self.record(TagRepoCall::Update(tag.name.to_string()));
        let mut map = self.tags.lock().unwrap();
        match map.get_mut(&tag.name) {
            Some(existing) => {
                *existing = tag.clone();
                Ok(tag)
            }
            None => Err(DomainError::not_found(format!("tag not found: {}", tag.name))),
        }
    }

    async fn delete(&self, name: &TagName) -> DomainResult<()> {
        self.record(TagRepoCall::Delete(name.to_string()));
        match self.tags.lock().unwrap().remove(name) {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found(format!("tag not found: {name}"))),
        }
    }
}
