use dzongkha_core::{CardStore, CoreError, Flashcard, NewFlashcard};
use sqlx::{sqlite::SqlitePoolOptions, Row, SqlitePool};
use std::path::Path;
use tracing::debug;

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn open_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let url = format!("sqlite://{}?mode=rwc", path.as_ref().to_string_lossy());
        Self::connect(&url, 5).await
    }

    pub async fn open_memory() -> Result<Self, CoreError> {
        // A single connection: every pooled connection to `:memory:` is its own database.
        Self::connect("sqlite::memory:", 1).await
    }

    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, CoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(|_| CoreError::StoreUnavailable("sqlite connect"))?;
        let store = Self { pool };
        store.ensure_schema().await?;
        debug!(url, "opened sqlite store");
        Ok(store)
    }

    async fn ensure_schema(&self) -> Result<(), CoreError> {
        const STMT: &str = r#"
        CREATE TABLE IF NOT EXISTS flashcards (
          seq            INTEGER PRIMARY KEY AUTOINCREMENT,
          id             TEXT NOT NULL UNIQUE,
          dzongkha       TEXT NOT NULL,
          english        TEXT NOT NULL,
          pronunciation  TEXT NOT NULL,
          category       TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_flashcards_category ON flashcards (category);
        "#;

        for chunk in STMT.split(';') {
            let sql = chunk.trim();
            if sql.is_empty() {
                continue;
            }
            sqlx::query(sql)
                .execute(&self.pool)
                .await
                .map_err(|_| CoreError::StoreUnavailable("sqlite schema"))?;
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CardStore for SqliteStore {
    async fn list_cards(&self) -> Result<Vec<Flashcard>, CoreError> {
        let rows = sqlx::query(
            "SELECT id,dzongkha,english,pronunciation,category FROM flashcards ORDER BY seq ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| CoreError::StoreUnavailable("list cards"))?;
        rows.into_iter().map(row_into_card).collect()
    }

    async fn replace_all(&self, cards: &[NewFlashcard]) -> Result<Vec<Flashcard>, CoreError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| CoreError::StoreUnavailable("tx"))?;

        sqlx::query("DELETE FROM flashcards")
            .execute(&mut *tx)
            .await
            .map_err(|_| CoreError::StoreUnavailable("delete cards"))?;

        let mut out = Vec::with_capacity(cards.len());
        for new in cards {
            let card = Flashcard::from_new(new);
            sqlx::query(
                "INSERT INTO flashcards (id,dzongkha,english,pronunciation,category) VALUES (?,?,?,?,?)",
            )
            .bind(card.id.to_string())
            .bind(&card.dzongkha)
            .bind(&card.english)
            .bind(&card.pronunciation)
            .bind(&card.category)
            .execute(&mut *tx)
            .await
            .map_err(|_| CoreError::StoreUnavailable("insert card"))?;
            out.push(card);
        }

        tx.commit()
            .await
            .map_err(|_| CoreError::StoreUnavailable("tx commit"))?;
        Ok(out)
    }
}

fn row_into_card(row: sqlx::sqlite::SqliteRow) -> Result<Flashcard, CoreError> {
    Ok(Flashcard {
        id: uuid::Uuid::parse_str(&row.get::<String, _>("id"))
            .map_err(|_| CoreError::Invalid("uuid"))?,
        dzongkha: row.get("dzongkha"),
        english: row.get("english"),
        pronunciation: row.get("pronunciation"),
        category: row.get("category"),
    })
}
