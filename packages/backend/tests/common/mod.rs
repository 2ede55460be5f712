use std::sync::Arc;

use axum::Router;

use alphabet_backend::db::WordStore;
use alphabet_backend::state::AppState;
use alphabet_core::Letter;

/// App over a fresh in-memory store, returned alongside the store handle so
/// tests can seed it.
pub async fn create_test_app() -> (Router, Arc<WordStore>) {
    let store = Arc::new(
        WordStore::connect("sqlite::memory:")
            .await
            .expect("in-memory store"),
    );
    let app = alphabet_backend::app(AppState::new(Some(Arc::clone(&store))));
    (app, store)
}

pub async fn seed(store: &WordStore, entries: &[(&str, &str, &str)]) {
    let words: Vec<(Letter, String, String)> = entries
        .iter()
        .map(|(letter, word, url)| {
            (
                Letter::parse(letter).expect("seed letter"),
                word.to_string(),
                url.to_string(),
            )
        })
        .collect();
    store.replace_all(&words).await.expect("seed store");
}
