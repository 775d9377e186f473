use async_trait::async_trait;
use dzongkha_core::{
    memory::MemoryStore, sample_cards, CardProvider, CardSource, CardStore, CoreError, Flashcard,
    NewFlashcard, Origin, StoreSource,
};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Default)]
struct Down {
    fetches: Mutex<u32>,
}

#[async_trait]
impl CardSource for Down {
    async fn fetch_all(&self) -> Result<Vec<Flashcard>, CoreError> {
        *self.fetches.lock() += 1;
        Err(CoreError::StoreUnavailable("connection refused"))
    }

    async fn reseed(&self) -> Result<(), CoreError> {
        Err(CoreError::StoreUnavailable("connection refused"))
    }
}

#[tokio::test]
async fn failing_source_falls_back_once() {
    let provider = CardProvider::new(Down::default());
    let out = provider.load().await;

    assert_eq!(out.origin, Origin::Fallback);
    let got: Vec<NewFlashcard> = out.cards.into_iter().map(Into::into).collect();
    assert_eq!(got, sample_cards());
    assert_eq!(*provider.source().fetches.lock(), 1);
}

#[tokio::test]
async fn fetch_surfaces_the_error() {
    let provider = CardProvider::new(Down::default());
    assert!(matches!(
        provider.fetch().await,
        Err(CoreError::StoreUnavailable(_))
    ));
}

#[tokio::test]
async fn failed_reseed_still_loads_fallback() {
    let provider = CardProvider::new(Down::default());
    let out = provider.reseed().await;
    assert_eq!(out.origin, Origin::Fallback);
    assert_eq!(out.cards.len(), 8);
}

#[tokio::test]
async fn store_source_passes_cards_through() {
    let store = Arc::new(MemoryStore::new());
    let stored = store
        .replace_all(&[NewFlashcard::new("ལེགས་སོ།", "Goodbye", "Legso", "Greetings")])
        .await
        .unwrap();

    let provider = CardProvider::new(StoreSource::new(store.clone()));
    let out = provider.load().await;
    assert_eq!(out.origin, Origin::Store);
    assert_eq!(out.cards, stored);
}

#[tokio::test]
async fn empty_store_is_not_a_failure() {
    let provider = CardProvider::new(StoreSource::new(Arc::new(MemoryStore::new())));
    let out = provider.load().await;
    assert_eq!(out.origin, Origin::Store);
    assert!(out.cards.is_empty());
}

#[tokio::test]
async fn reseed_replaces_store_contents() {
    let store = Arc::new(MemoryStore::new());
    store
        .replace_all(&[NewFlashcard::new("x", "y", "z", "Other")])
        .await
        .unwrap();

    let provider = CardProvider::new(StoreSource::new(store.clone()));
    let out = provider.reseed().await;
    assert_eq!(out.origin, Origin::Store);
    assert_eq!(out.cards.len(), 8);
    assert!(out.cards.iter().all(|c| c.category != "Other"));
    assert_eq!(store.list_cards().await.unwrap(), out.cards);
}
