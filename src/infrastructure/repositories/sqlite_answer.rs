// src/infrastructure/repositories/sqlite_answer.rs
use super::map_sqlx;
use super::votes::{VoteRow, vote_set};
use crate::domain::answer::{Answer, AnswerBody, AnswerId, AnswerRepository, NewAnswer};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::question::QuestionId;
use crate::domain::user::UserId;
use crate::domain::vote::VoteSet;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqliteConnection, SqlitePool};

const ANSWER_COLUMNS: &str =
    "id, question_id, author, body, chosen, created_at, last_updated_at";

#[derive(Clone)]
pub struct SqliteAnswerRepository {
    pool: SqlitePool,
}

impl SqliteAnswerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn hydrate(&self, row: AnswerRow) -> DomainResult<Answer> {
        let vote_rows = sqlx::query_as::<_, VoteRow>(
            "SELECT user_id, vote_type FROM answer_votes WHERE answer_id = ?",
        )
        .bind(row.id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.into_answer(vote_set(vote_rows)?)
    }

    async fn load(&self, id: AnswerId) -> DomainResult<Answer> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("answer not found: {id}")))
    }
}

#[derive(Debug, FromRow)]
struct AnswerRow {
    id: i64,
    question_id: i64,
    author: Option<String>,
    body: String,
    chosen: i64,
    created_at: DateTime<Utc>,
    last_updated_at: DateTime<Utc>,
}

impl AnswerRow {
    fn into_answer(self, votes: VoteSet) -> DomainResult<Answer> {
        Ok(Answer {
            id: AnswerId::new(self.id)?,
            question_id: QuestionId::new(self.question_id)?,
            author: self.author.map(UserId::new).transpose()?,
            body: AnswerBody::new(self.body)?,
            chosen: self.chosen != 0,
            votes,
            created_at: self.created_at,
            last_updated_at: self.last_updated_at,
        })
    }
}

async fn replace_votes(
    conn: &mut SqliteConnection,
    answer_id: i64,
    votes: &VoteSet,
) -> DomainResult<()> {
    sqlx::query("DELETE FROM answer_votes WHERE answer_id = ?")
        .bind(answer_id)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;
    for vote in votes.iter() {
        sqlx::query("INSERT INTO answer_votes (answer_id, user_id, vote_type) VALUES (?, ?, ?)")
            .bind(answer_id)
            .bind(vote.user_id.as_str())
            .bind(vote.vote_type.as_str())
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx)?;
    }
    Ok(())
}

#[async_trait]
impl AnswerRepository for SqliteAnswerRepository {
    async fn find_by_id(&self, id: AnswerId) -> DomainResult<Option<Answer>> {
        let sql = format!("SELECT {ANSWER_COLUMNS} FROM answers WHERE id = ?");
        let row = sqlx::query_as::<_, AnswerRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        match row {
            Some(row) => self.hydrate(row).await.map(Some),
            None => Ok(None),
        }
    }

    async fn list_by_question(&self, question_id: QuestionId) -> DomainResult<Vec<Answer>> {
        let sql = format!("SELECT {ANSWER_COLUMNS} FROM answers WHERE question_id = ? ORDER BY id");
        let rows = sqlx::query_as::<_, AnswerRow>(&sql)
            .bind(i64::from(question_id))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut answers = Vec::with_capacity(rows.len());
        for row in rows {
            answers.push(self.hydrate(row).await?);
        }
        Ok(answers)
    }

    async fn insert(&self, answer: NewAnswer) -> DomainResult<Answer> {
        let sql = format!(
            "INSERT INTO answers (question_id, author, body, chosen, created_at, last_updated_at)
             VALUES (?, ?, ?, 0, ?, ?)
             RETURNING {ANSWER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, AnswerRow>(&sql)
            .bind(i64::from(answer.question_id))
            .bind(answer.author.as_ref().map(UserId::as_str))
            .bind(answer.body.as_str())
            .bind(answer.created_at)
            .bind(answer.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.into_answer(VoteSet::new())
    }

    async fn update(&self, answer: Answer) -> DomainResult<Answer> {
        let id = i64::from(answer.id);
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let result = sqlx::query("UPDATE answers SET body = ?, last_updated_at = ? WHERE id = ?")
            .bind(answer.body.as_str())
            .bind(answer.last_updated_at)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!("answer not found: {}", answer.id)));
        }

        replace_votes(&mut *tx, id, &answer.votes).await?;
        tx.commit().await.map_err(map_sqlx)?;

        self.load(answer.id).await
    }

    async fn delete(&self, id: AnswerId) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query("DELETE FROM answer_votes WHERE answer_id = ?")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let result = sqlx::query("DELETE FROM answers WHERE id = ?")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!("answer not found: {id}")));
        }

        tx.commit().await.map_err(map_sqlx)
    }

    async fn choose(&self, id: AnswerId) -> DomainResult<Answer> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let question_id: Option<i64> =
            sqlx::query_scalar("SELECT question_id FROM answers WHERE id = ?")
                .bind(i64::from(id))
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        let Some(question_id) = question_id else {
            return Err(DomainError::not_found(format!("answer not found: {id}")));
        };

        // Clear siblings before setting, the partial unique index forbids two chosen rows.
        sqlx::query("UPDATE answers SET chosen = 0 WHERE question_id = ? AND chosen = 1")
            .bind(question_id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        sqlx::query("UPDATE answers SET chosen = 1 WHERE id = ?")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;
        self.load(id).await
    }
}
