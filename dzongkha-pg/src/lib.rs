use dzongkha_core::{CardStore, CoreError, Flashcard, NewFlashcard};
use sqlx::{postgres::PgPoolOptions, PgPool, Row};
use tracing::debug;

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub async fn connect(url: &str) -> Result<Self, CoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(url)
            .await
            .map_err(|_| CoreError::StoreUnavailable("pg connect"))?;
        let store = Self { pool };
        store.ensure_schema().await?;
        debug!("opened postgres store");
        Ok(store)
    }

    async fn ensure_schema(&self) -> Result<(), CoreError> {
        // ids are generated in the app
        const STMT: &str = r#"
        CREATE TABLE IF NOT EXISTS flashcards (
          seq            bigserial PRIMARY KEY,
          id             uuid NOT NULL UNIQUE,
          dzongkha       text NOT NULL,
          english        text NOT NULL,
          pronunciation  text NOT NULL,
          category       text NOT NULL
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
                .map_err(|_| CoreError::StoreUnavailable("pg schema"))?;
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CardStore for PgStore {
    async fn list_cards(&self) -> Result<Vec<Flashcard>, CoreError> {
        let rows = sqlx::query(
            "SELECT id,dzongkha,english,pronunciation,category FROM flashcards ORDER BY seq ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| CoreError::StoreUnavailable("list cards"))?;

        Ok(rows
            .into_iter()
            .map(|row| Flashcard {
                id: row.get::<uuid::Uuid, _>("id"),
                dzongkha: row.get("dzongkha"),
                english: row.get("english"),
                pronunciation: row.get("pronunciation"),
                category: row.get("category"),
            })
            .collect())
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
                "INSERT INTO flashcards (id,dzongkha,english,pronunciation,category) VALUES ($1,$2,$3,$4,$5)",
            )
            .bind(card.id)
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
