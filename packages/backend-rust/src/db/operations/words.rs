use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use uuid::Uuid;
use wordquiz_algo::WordPair;

use crate::db::{DbError, WordStore};

/// A word pair as persisted, with bookkeeping timestamps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StoredWord {
    pub id: String,
    pub source: String,
    pub translation: String,
    #[sqlx(rename = "createdAt")]
    pub created_at: String,
    #[sqlx(rename = "updatedAt")]
    pub updated_at: String,
}

impl From<StoredWord> for WordPair {
    fn from(word: StoredWord) -> Self {
        WordPair {
            id: word.id,
            source: word.source,
            translation: word.translation,
        }
    }
}

const SELECT_ALL: &str = r#"
SELECT "id", "source", "translation", "createdAt", "updatedAt"
FROM "words"
ORDER BY "createdAt" ASC, "id" ASC
"#;

const INSERT_PG: &str = r#"
INSERT INTO "words" ("id", "source", "translation", "createdAt", "updatedAt")
VALUES ($1, $2, $3, $4, $5)
"#;
const INSERT_SQLITE: &str = r#"
INSERT INTO "words" ("id", "source", "translation", "createdAt", "updatedAt")
VALUES (?, ?, ?, ?, ?)
"#;

const UPDATE_PG: &str = r#"
UPDATE "words" SET "source" = $1, "translation" = $2, "updatedAt" = $3
WHERE "id" = $4
RETURNING "id", "source", "translation", "createdAt", "updatedAt"
"#;
const UPDATE_SQLITE: &str = r#"
UPDATE "words" SET "source" = ?, "translation" = ?, "updatedAt" = ?
WHERE "id" = ?
RETURNING "id", "source", "translation", "createdAt", "updatedAt"
"#;

const DELETE_PG: &str = r#"DELETE FROM "words" WHERE "id" = $1"#;
const DELETE_SQLITE: &str = r#"DELETE FROM "words" WHERE "id" = ?"#;

impl WordStore {
    pub async fn insert(&self, source: &str, translation: &str) -> Result<StoredWord, DbError> {
        let now = now_iso();
        let word = StoredWord {
            id: Uuid::new_v4().to_string(),
            source: source.to_string(),
            translation: translation.to_string(),
            created_at: now.clone(),
            updated_at: now,
        };

        match self {
            WordStore::Postgres(pool) => {
                sqlx::query(INSERT_PG)
                    .bind(&word.id)
                    .bind(&word.source)
                    .bind(&word.translation)
                    .bind(&word.created_at)
                    .bind(&word.updated_at)
                    .execute(pool)
                    .await?;
            }
            WordStore::Sqlite(pool) => {
                sqlx::query(INSERT_SQLITE)
                    .bind(&word.id)
                    .bind(&word.source)
                    .bind(&word.translation)
                    .bind(&word.created_at)
                    .bind(&word.updated_at)
                    .execute(pool)
                    .await?;
            }
        }

        Ok(word)
    }

    /// Every stored word, oldest first
    pub async fn list_all(&self) -> Result<Vec<StoredWord>, DbError> {
        let words = match self {
            WordStore::Postgres(pool) => {
                sqlx::query_as::<_, StoredWord>(SELECT_ALL)
                    .fetch_all(pool)
                    .await?
            }
            WordStore::Sqlite(pool) => {
                sqlx::query_as::<_, StoredWord>(SELECT_ALL)
                    .fetch_all(pool)
                    .await?
            }
        };
        Ok(words)
    }

    /// Snapshot of the pool handed to the quiz engine
    pub async fn word_pairs(&self) -> Result<Vec<WordPair>, DbError> {
        Ok(self.list_all().await?.into_iter().map(WordPair::from).collect())
    }

    /// Replace both fields; `None` when no word has this id
    pub async fn update_by_id(
        &self,
        id: &str,
        source: &str,
        translation: &str,
    ) -> Result<Option<StoredWord>, DbError> {
        let now = now_iso();
        let word = match self {
            WordStore::Postgres(pool) => {
                sqlx::query_as::<_, StoredWord>(UPDATE_PG)
                    .bind(source)
                    .bind(translation)
                    .bind(&now)
                    .bind(id)
                    .fetch_optional(pool)
                    .await?
            }
            WordStore::Sqlite(pool) => {
                sqlx::query_as::<_, StoredWord>(UPDATE_SQLITE)
                    .bind(source)
                    .bind(translation)
                    .bind(&now)
                    .bind(id)
                    .fetch_optional(pool)
                    .await?
            }
        };
        Ok(word)
    }

    /// `false` when no word has this id
    pub async fn delete_by_id(&self, id: &str) -> Result<bool, DbError> {
        let affected = match self {
            WordStore::Postgres(pool) => {
                sqlx::query(DELETE_PG)
                    .bind(id)
                    .execute(pool)
                    .await?
                    .rows_affected()
            }
            WordStore::Sqlite(pool) => {
                sqlx::query(DELETE_SQLITE)
                    .bind(id)
                    .execute(pool)
                    .await?
                    .rows_affected()
            }
        };
        Ok(affected > 0)
    }
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::config::DbConfig;
    use tempfile::TempDir;

    async fn temp_store() -> (TempDir, WordStore) {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let db_path = temp_dir.path().join("words.db");
        let config = DbConfig::with_url(format!("sqlite://{}?mode=rwc", db_path.display()));
        let store = WordStore::connect(&config).await.expect("connect failed");
        (temp_dir, store)
    }

    #[tokio::test]
    async fn insert_then_list() {
        let (_dir, store) = temp_store().await;

        let first = store.insert("kedi", "cat").await.unwrap();
        let second = store.insert("köpek", "dog").await.unwrap();
        assert_ne!(first.id, second.id);
        assert!(Uuid::parse_str(&first.id).is_ok());

        let words = store.list_all().await.unwrap();
        assert_eq!(words.len(), 2);
        assert!(words.contains(&first));
        assert!(words.contains(&second));
    }

    #[tokio::test]
    async fn update_replaces_fields() {
        let (_dir, store) = temp_store().await;
        let word = store.insert("elma", "aple").await.unwrap();

        let updated = store
            .update_by_id(&word.id, "elma", "apple")
            .await
            .unwrap()
            .expect("word should exist");

        assert_eq!(updated.id, word.id);
        assert_eq!(updated.translation, "apple");
        assert_eq!(updated.created_at, word.created_at);
        assert!(updated.updated_at >= word.updated_at);
    }

    #[tokio::test]
    async fn update_missing_returns_none() {
        let (_dir, store) = temp_store().await;
        let missing = Uuid::new_v4().to_string();
        assert!(store.update_by_id(&missing, "a", "b").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_reports_presence() {
        let (_dir, store) = temp_store().await;
        let word = store.insert("su", "water").await.unwrap();

        assert!(store.delete_by_id(&word.id).await.unwrap());
        assert!(!store.delete_by_id(&word.id).await.unwrap());
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn word_pairs_drop_timestamps() {
        let (_dir, store) = temp_store().await;
        let word = store.insert("ev", "house").await.unwrap();

        let pairs = store.word_pairs().await.unwrap();
        assert_eq!(pairs, vec![WordPair::new(word.id, "ev", "house")]);
    }
}
