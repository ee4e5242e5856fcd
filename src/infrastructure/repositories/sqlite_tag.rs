use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tag::{Tag, TagName, TagRepository};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

#[derive(Clone)]
pub struct SqliteTagRepository {
    pool: SqlitePool,
}

impl SqliteTagRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TagRow {
    name: String,
    description: Option<String>,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        let mut tag = Tag::new(TagName::new(row.name)?);
        tag.set_description(row.description);
        Ok(tag)
    }
}

#[async_trait]
impl TagRepository for SqliteTagRepository {
    async fn exists(&self, name: &TagName) -> DomainResult<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM tags WHERE name = ?")
            .bind(name.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(found.is_some())
    }

    async fn find_by_name(&self, name: &TagName) -> DomainResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TagRow>("SELECT name, description FROM tags WHERE name = ?")
            .bind(name.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Tag::try_from).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TagRow>("SELECT name, description FROM tags ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }

    async fn insert(&self, tag: Tag) -> DomainResult<Tag> {
        let row = sqlx::query_as::<_, TagRow>(
            "INSERT INTO tags (name, description) VALUES (?, ?) RETURNING name, description",
        )
        .bind(tag.name.as_str())
        .bind(tag.description.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match map_sqlx(err) {
            DomainError::Conflict(_) => {
                DomainError::Conflict(format!("tag already exists: {}", tag.name))
            }
            other => other,
        })?;

        Tag::try_from(row)
    }

    async fn update(&self, tag: Tag) -> DomainResult<Tag> {
        let row = sqlx::query_as::<_, TagRow>(
            "UPDATE tags SET description = ? WHERE name = ? RETURNING name, description",
        )
        .bind(tag.description.as_deref())
        .bind(tag.name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let row =
            row.ok_or_else(|| DomainError::not_found(format!("tag not found: {}", tag.name)))?;
        Tag::try_from(row)
    }

    async fn delete(&self, name: &TagName) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query("DELETE FROM question_tags WHERE tag_name = ?")
            .bind(name.as_str())
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let result = sqlx::query("DELETE FROM tags WHERE name = ?")
            .bind(name.as_str())
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!("tag not found: {name}")));
        }

        tx.commit().await.map_err(map_sqlx)
    }
}
