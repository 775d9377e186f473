use crate::{CoreError, Flashcard, NewFlashcard};
use async_trait::async_trait;
use parking_lot::RwLock;

#[derive(Default)]
pub struct MemoryStore {
    cards: RwLock<Vec<Flashcard>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl crate::repo::CardStore for MemoryStore {
    async fn list_cards(&self) -> Result<Vec<Flashcard>, CoreError> {
        Ok(self.cards.read().clone())
    }

    async fn replace_all(&self, cards: &[NewFlashcard]) -> Result<Vec<Flashcard>, CoreError> {
        let fresh: Vec<Flashcard> = cards.iter().map(Flashcard::from_new).collect();
        *self.cards.write() = fresh.clone();
        Ok(fresh)
    }
}
