use dzongkha_core::{sample_cards, CardStore, NewFlashcard};
use dzongkha_sqlite::SqliteStore;

#[tokio::test]
async fn replace_and_list_keep_order() {
    let store = SqliteStore::open_memory().await.unwrap();
    assert!(store.list_cards().await.unwrap().is_empty());

    let written = store.replace_all(&sample_cards()).await.unwrap();
    let listed = store.list_cards().await.unwrap();
    assert_eq!(listed, written);
    assert_eq!(listed[0].dzongkha, "ཀུང་ཌྲུ");
}

#[tokio::test]
async fn replace_discards_previous_rows() {
    let store = SqliteStore::open_memory().await.unwrap();
    store.replace_all(&sample_cards()).await.unwrap();

    let only = NewFlashcard::new("ཅི་རེད།", "What is this?", "Chi re?", "Questions");
    let written = store.replace_all(&[only]).await.unwrap();
    let listed = store.list_cards().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed, written);
}
