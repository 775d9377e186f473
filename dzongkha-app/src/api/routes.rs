use axum::{extract::State, Json};
use dzongkha_core::{sample_cards, CardStore, Flashcard};
use std::sync::Arc;
use tracing::info;

use crate::api::dto::MessageOut;
use crate::api::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CardStore>,
}

pub async fn list_flashcards(
    State(st): State<Arc<AppState>>,
) -> Result<Json<Vec<Flashcard>>, ApiError> {
    Ok(Json(st.store.list_cards().await?))
}

/// Drops every stored card and inserts the sample set.
pub async fn init_samples(State(st): State<Arc<AppState>>) -> Result<Json<MessageOut>, ApiError> {
    let cards = st.store.replace_all(&sample_cards()).await?;
    info!(count = cards.len(), "card store reseeded");
    Ok(Json(MessageOut::new("Sample data added!")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::server::router;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use dzongkha_core::{memory::MemoryStore, CoreError, NewFlashcard};
    use tower::ServiceExt;

    struct BrokenStore;

    #[async_trait]
    impl CardStore for BrokenStore {
        async fn list_cards(&self) -> Result<Vec<Flashcard>, CoreError> {
            Err(CoreError::StoreUnavailable("connection refused"))
        }
        async fn replace_all(&self, _: &[NewFlashcard]) -> Result<Vec<Flashcard>, CoreError> {
            Err(CoreError::StoreUnavailable("connection refused"))
        }
    }

    async fn get(store: Arc<dyn CardStore>, uri: &str) -> (StatusCode, serde_json::Value) {
        let app = router(Arc::new(AppState { store }));
        let resp = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn init_then_list() {
        let store: Arc<dyn CardStore> = Arc::new(MemoryStore::new());

        let (status, body) = get(store.clone(), "/api/flashcards").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));

        let (status, body) = get(store.clone(), "/api/init").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Sample data added!");

        let (status, body) = get(store.clone(), "/api/flashcards").await;
        assert_eq!(status, StatusCode::OK);
        let cards: Vec<Flashcard> = serde_json::from_value(body).unwrap();
        assert_eq!(cards.len(), 8);
        assert_eq!(cards[0].english, "Hello");
        assert_eq!(cards[0].category, "Greetings");
        assert!(!cards[0].pronunciation.is_empty());
    }

    #[tokio::test]
    async fn init_is_a_full_replacement() {
        let store: Arc<dyn CardStore> = Arc::new(MemoryStore::new());
        get(store.clone(), "/api/init").await;
        get(store.clone(), "/api/init").await;
        assert_eq!(store.list_cards().await.unwrap().len(), 8);
    }

    #[tokio::test]
    async fn store_failure_is_500_with_message() {
        let (status, body) = get(Arc::new(BrokenStore), "/api/flashcards").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "store unavailable: connection refused");

        let (status, body) = get(Arc::new(BrokenStore), "/api/init").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["message"].is_string());
    }
}
