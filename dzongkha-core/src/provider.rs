use crate::{sample_cards, sample_flashcards, CardStore, CoreError, Flashcard};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Where the client gets its cards from: the HTTP service, or a store directly.
#[async_trait]
pub trait CardSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Flashcard>, CoreError>;
    /// Asks the backing store to discard everything and repopulate with the sample set.
    async fn reseed(&self) -> Result<(), CoreError>;
}

#[async_trait]
impl<T: CardSource + ?Sized> CardSource for Arc<T> {
    async fn fetch_all(&self) -> Result<Vec<Flashcard>, CoreError> {
        (**self).fetch_all().await
    }

    async fn reseed(&self) -> Result<(), CoreError> {
        (**self).reseed().await
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Store,
    Fallback,
}

#[derive(Clone, Debug)]
pub struct LoadOutcome {
    pub cards: Vec<Flashcard>,
    pub origin: Origin,
}

pub struct CardProvider<S> {
    source: S,
}

impl<S: CardSource> CardProvider<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// One attempt, result passed through untouched.
    pub async fn fetch(&self) -> Result<Vec<Flashcard>, CoreError> {
        self.source.fetch_all().await
    }

    /// One attempt; any failure is replaced by the built-in sample set.
    pub async fn load(&self) -> LoadOutcome {
        match self.fetch().await {
            Ok(cards) => LoadOutcome { cards, origin: Origin::Store },
            Err(e) => {
                warn!("{e}; using built-in sample cards");
                LoadOutcome {
                    cards: sample_flashcards(),
                    origin: Origin::Fallback,
                }
            }
        }
    }

    pub async fn reseed(&self) -> LoadOutcome {
        match self.source.reseed().await {
            Ok(()) => info!("card store reseeded"),
            Err(e) => warn!("reseed failed: {e}"),
        }
        self.load().await
    }
}

/// Reads a [`CardStore`] in-process, skipping the HTTP service.
#[derive(Clone)]
pub struct StoreSource {
    store: Arc<dyn CardStore>,
}

impl StoreSource {
    pub fn new(store: Arc<dyn CardStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CardSource for StoreSource {
    async fn fetch_all(&self) -> Result<Vec<Flashcard>, CoreError> {
        self.store.list_cards().await
    }

    async fn reseed(&self) -> Result<(), CoreError> {
        self.store.replace_all(&sample_cards()).await.map(|_| ())
    }
}
