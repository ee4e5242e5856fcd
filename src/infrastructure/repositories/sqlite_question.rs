// src/infrastructure/repositories/sqlite_question.rs
use super::map_sqlx;
use super::votes::{VoteRow, vote_set};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::question::{
    NewQuestion, Question, QuestionId, QuestionReadRepository, QuestionTitle,
    QuestionWriteRepository,
};
use crate::domain::tag::TagName;
use crate::domain::user::UserId;
use crate::domain::vote::VoteSet;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqliteConnection, SqlitePool};
use std::collections::BTreeSet;

const QUESTION_COLUMNS: &str = "q.id AS id, q.title AS title, q.body AS body, \
     q.created_at AS created_at, q.created_by AS created_by, \
     q.last_updated_at AS last_updated_at, q.modified_by AS modified_by";

#[derive(Clone)]
pub struct SqliteQuestionWriteRepository {
    pool: SqlitePool,
}

impl SqliteQuestionWriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteQuestionReadRepository {
    pool: SqlitePool,
}

impl SqliteQuestionReadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct QuestionRow {
    id: i64,
    title: String,
    body: String,
    created_at: DateTime<Utc>,
    created_by: Option<String>,
    last_updated_at: DateTime<Utc>,
    modified_by: Option<String>,
}

impl QuestionRow {
    fn into_question(self, tags: BTreeSet<TagName>, votes: VoteSet) -> DomainResult<Question> {
        Ok(Question {
            id: QuestionId::new(self.id)?,
            title: QuestionTitle::new(self.title)?,
            body: self.body,
            created_at: self.created_at,
            created_by: self.created_by.map(UserId::new).transpose()?,
            last_updated_at: self.last_updated_at,
            modified_by: self.modified_by.map(UserId::new).transpose()?,
            tags,
            votes,
        })
    }
}

/// Loads a question row together with its tags and votes.
async fn hydrate(pool: &SqlitePool, row: QuestionRow) -> DomainResult<Question> {
    let tag_names: Vec<String> = sqlx::query_scalar(
        "SELECT tag_name FROM question_tags WHERE question_id = ? ORDER BY tag_name",
    )
    .bind(row.id)
    .fetch_all(pool)
    .await
    .map_err(map_sqlx)?;
    let tags = tag_names
        .into_iter()
        .map(TagName::new)
        .collect::<DomainResult<BTreeSet<_>>>()?;

    let vote_rows = sqlx::query_as::<_, VoteRow>(
        "SELECT user_id, vote_type FROM question_votes WHERE question_id = ?",
    )
    .bind(row.id)
    .fetch_all(pool)
    .await
    .map_err(map_sqlx)?;

    row.into_question(tags, vote_set(vote_rows)?)
}

async fn hydrate_all(pool: &SqlitePool, rows: Vec<QuestionRow>) -> DomainResult<Vec<Question>> {
    let mut questions = Vec::with_capacity(rows.len());
    for row in rows {
        questions.push(hydrate(pool, row).await?);
    }
    Ok(questions)
}

async fn fetch_question(pool: &SqlitePool, id: QuestionId) -> DomainResult<Option<Question>> {
    let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions q WHERE q.id = ?");
    let row = sqlx::query_as::<_, QuestionRow>(&sql)
        .bind(i64::from(id))
        .fetch_optional(pool)
        .await
        .map_err(map_sqlx)?;

    match row {
        Some(row) => hydrate(pool, row).await.map(Some),
        None => Ok(None),
    }
}

/// Rewrites the tag links and vote rows of one question.
async fn replace_links(
    conn: &mut SqliteConnection,
    question_id: i64,
    tags: &BTreeSet<TagName>,
    votes: &VoteSet,
) -> DomainResult<()> {
    sqlx::query("DELETE FROM question_tags WHERE question_id = ?")
        .bind(question_id)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;
    for tag in tags {
        sqlx::query("INSERT INTO question_tags (question_id, tag_name) VALUES (?, ?)")
            .bind(question_id)
            .bind(tag.as_str())
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx)?;
    }

    sqlx::query("DELETE FROM question_votes WHERE question_id = ?")
        .bind(question_id)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;
    for vote in votes.iter() {
        sqlx::query("INSERT INTO question_votes (question_id, user_id, vote_type) VALUES (?, ?, ?)")
            .bind(question_id)
            .bind(vote.user_id.as_str())
            .bind(vote.vote_type.as_str())
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx)?;
    }
    Ok(())
}

fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len() + 2);
    escaped.push('%');
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl QuestionWriteRepository for SqliteQuestionWriteRepository {
    async fn insert(&self, question: NewQuestion) -> DomainResult<Question> {
        let NewQuestion {
            title,
            body,
            created_by,
            tags,
            votes,
            created_at,
        } = question;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO questions (title, body, created_at, created_by, last_updated_at, modified_by)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(title.as_str())
        .bind(&body)
        .bind(created_at)
        .bind(created_by.as_ref().map(UserId::as_str))
        .bind(created_at)
        .bind(created_by.as_ref().map(UserId::as_str))
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        replace_links(&mut *tx, id, &tags, &votes).await?;
        tx.commit().await.map_err(map_sqlx)?;

        let id = QuestionId::new(id)?;
        fetch_question(&self.pool, id)
            .await?
            .ok_or_else(|| DomainError::Persistence(format!("question {id} vanished after insert")))
    }

    async fn update(&self, question: Question) -> DomainResult<Question> {
        let id = i64::from(question.id);
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let result = sqlx::query(
            "UPDATE questions
             SET title = ?, body = ?, last_updated_at = ?, modified_by = ?
             WHERE id = ?",
        )
        .bind(question.title.as_str())
        .bind(&question.body)
        .bind(question.last_updated_at)
        .bind(question.modified_by.as_ref().map(UserId::as_str))
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "question not found: {}",
                question.id
            )));
        }

        replace_links(&mut *tx, id, &question.tags, &question.votes).await?;
        tx.commit().await.map_err(map_sqlx)?;

        fetch_question(&self.pool, question.id).await?.ok_or_else(|| {
            DomainError::not_found(format!("question not found: {}", question.id))
        })
    }

    async fn delete(&self, id: QuestionId) -> DomainResult<()> {
        let id_value = i64::from(id);
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        // Children first; foreign keys carry no cascade.
        let statements = [
            "DELETE FROM answer_votes WHERE answer_id IN (SELECT id FROM answers WHERE question_id = ?)",
            "DELETE FROM answers WHERE question_id = ?",
            "DELETE FROM question_votes WHERE question_id = ?",
            "DELETE FROM question_tags WHERE question_id = ?",
        ];
        for statement in statements {
            sqlx::query(statement)
                .bind(id_value)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }

        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id_value)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!("question not found: {id}")));
        }

        tx.commit().await.map_err(map_sqlx)
    }
}

#[async_trait]
impl QuestionReadRepository for SqliteQuestionReadRepository {
    async fn exists(&self, id: QuestionId) -> DomainResult<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM questions WHERE id = ?")
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(found.is_some())
    }

    async fn find_by_id(&self, id: QuestionId) -> DomainResult<Option<Question>> {
        fetch_question(&self.pool, id).await
    }

    async fn list_paginated(
        &self,
        page: u32,
        page_size: u32,
    ) -> DomainResult<(Vec<Question>, u64)> {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let offset = i64::from(page - 1) * i64::from(page_size);

        let sql =
            format!("SELECT {QUESTION_COLUMNS} FROM questions q ORDER BY q.id LIMIT ? OFFSET ?");
        let rows = sqlx::query_as::<_, QuestionRow>(&sql)
            .bind(i64::from(page_size))
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM questions")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let questions = hydrate_all(&self.pool, rows).await?;
        Ok((questions, total.max(0) as u64))
    }

    async fn find_by_title_containing(&self, fragment: &str) -> DomainResult<Vec<Question>> {
        let sql = format!(
            "SELECT {QUESTION_COLUMNS} FROM questions q
             WHERE q.title LIKE ? ESCAPE '\\' ORDER BY q.id"
        );
        let rows = sqlx::query_as::<_, QuestionRow>(&sql)
            .bind(escape_like(fragment))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        hydrate_all(&self.pool, rows).await
    }

    async fn find_by_created_by(&self, user: &UserId) -> DomainResult<Vec<Question>> {
        let sql = format!(
            "SELECT {QUESTION_COLUMNS} FROM questions q WHERE q.created_by = ? ORDER BY q.id"
        );
        let rows = sqlx::query_as::<_, QuestionRow>(&sql)
            .bind(user.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        hydrate_all(&self.pool, rows).await
    }

    async fn find_answered_by(&self, user: &UserId) -> DomainResult<Vec<Question>> {
        let sql = format!(
            "SELECT {QUESTION_COLUMNS} FROM questions q
             WHERE EXISTS (SELECT 1 FROM answers a WHERE a.question_id = q.id AND a.author = ?)
             ORDER BY q.id"
        );
        let rows = sqlx::query_as::<_, QuestionRow>(&sql)
            .bind(user.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        hydrate_all(&self.pool, rows).await
    }

    async fn find_by_tag(&self, tag: &TagName) -> DomainResult<Vec<Question>> {
        let sql = format!(
            "SELECT {QUESTION_COLUMNS} FROM questions q
             JOIN question_tags qt ON qt.question_id = q.id
             WHERE qt.tag_name = ?
             ORDER BY q.id"
        );
        let rows = sqlx::query_as::<_, QuestionRow>(&sql)
            .bind(tag.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        hydrate_all(&self.pool, rows).await
    }
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(escape_like("100%"), "%100\\%%");
        assert_eq!(escape_like("a_b"), "%a\\_b%");
        assert_eq!(escape_like("plain"), "%plain%");
    }
}
