use crate::{CoreError, Flashcard, NewFlashcard};
use async_trait::async_trait;

pub mod memory;

/// Persistent card collection. Read in bulk, replaced in bulk.
#[async_trait]
pub trait CardStore: Send + Sync {
    /// Every stored card, in insertion order.
    async fn list_cards(&self) -> Result<Vec<Flashcard>, CoreError>;

    /// Drops all stored cards and inserts `cards` with fresh ids.
    async fn replace_all(&self, cards: &[NewFlashcard]) -> Result<Vec<Flashcard>, CoreError>;
}
