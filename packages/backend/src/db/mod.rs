//! Word record store.
//!
//! One table of `{ id, letter, word, image_url }` rows. Reads are
//! "find first": one record per letter is expected but never enforced, and
//! the lookup simply returns an arbitrary match. The only write path is
//! [`WordStore::replace_all`], used by the out-of-band seeding tool.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use alphabet_core::{Letter, WordRecord};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid database url: {0}")]
    Config(String),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS "words" (
    "id" TEXT PRIMARY KEY NOT NULL,
    "letter" TEXT NOT NULL,
    "word" TEXT NOT NULL,
    "image_url" TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS "idx_words_letter" ON "words" ("letter");
"#;

#[derive(Debug, Clone)]
pub struct WordStore {
    pool: SqlitePool,
}

impl WordStore {
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| StoreError::Config(e.to_string()))?
            .create_if_missing(true)
            .busy_timeout(std::time::Duration::from_secs(30));

        // An in-memory database exists per connection, so the pool must not
        // hand out more than one of them.
        let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        for statement in SCHEMA_SQL.split(';') {
            let sql = statement.trim();
            if sql.is_empty() {
                continue;
            }
            sqlx::query(sql).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Connectivity check used by the health endpoint.
    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Returns an arbitrary record for the letter, or `None`.
    pub async fn find_word_by_letter(
        &self,
        letter: Letter,
    ) -> Result<Option<WordRecord>, StoreError> {
        let row = sqlx::query(
            r#"SELECT "id", "letter", "word", "image_url" FROM "words" WHERE "letter" = ? LIMIT 1"#,
        )
        .bind(letter.to_string())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let letter_value: String = row.get("letter");
        let letter = Letter::parse(&letter_value)
            .map_err(|e| StoreError::Config(format!("corrupt letter column: {e}")))?;

        Ok(Some(WordRecord {
            id: row.get("id"),
            letter,
            word: row.get("word"),
            image_url: row.get("image_url"),
        }))
    }

    /// Clears the collection and repopulates it in one transaction.
    /// Returns the number of inserted records.
    pub async fn replace_all(
        &self,
        words: &[(Letter, String, String)],
    ) -> Result<u64, StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(r#"DELETE FROM "words""#).execute(&mut *tx).await?;

        let mut inserted = 0u64;
        for (letter, word, image_url) in words {
            sqlx::query(
                r#"INSERT INTO "words" ("id", "letter", "word", "image_url") VALUES (?, ?, ?, ?)"#,
            )
            .bind(Uuid::new_v4().to_string())
            .bind(letter.to_string())
            .bind(word)
            .bind(image_url)
            .execute(&mut *tx)
            .await?;
            inserted += 1;
        }

        tx.commit().await?;
        Ok(inserted)
    }
}
