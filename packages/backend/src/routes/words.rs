use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

use alphabet_core::Letter;

use crate::response::{internal_error, not_found};
use crate::state::AppState;

/// `GET /api/words/:letter`, the single read operation of the service.
///
/// The path segment is case-normalized here, so `/api/words/a` and
/// `/api/words/A` answer identically. Anything that is not a letter has no
/// record by definition and falls out as a plain not-found.
pub async fn get_word_by_letter(
    State(state): State<AppState>,
    Path(raw_letter): Path<String>,
) -> Response {
    tracing::info!(letter = %raw_letter, "word lookup");

    let Ok(letter) = Letter::parse(&raw_letter) else {
        return not_found("Word not found");
    };

    let Some(store) = state.store() else {
        tracing::error!("word store unavailable");
        return internal_error();
    };

    match store.find_word_by_letter(letter).await {
        Ok(Some(record)) => Json(record).into_response(),
        Ok(None) => {
            tracing::info!(%letter, "no word found");
            not_found("Word not found")
        }
        Err(err) => {
            tracing::error!(error = %err, %letter, "word lookup failed");
            internal_error()
        }
    }
}
