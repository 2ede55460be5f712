//! Remote word-image loader and the per-session texture cache.
//!
//! Images are fetched and decoded before the popup that needs them is shown;
//! the caller awaits the load. Keys carry a uniqueness token so that two
//! reveals of the same letter never alias, and entries tied to a dismissed
//! popup are evicted so a later reveal can show a different random word.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use image::RgbaImage;
use thiserror::Error;

use alphabet_core::Letter;

const FETCH_TIMEOUT_MS: u64 = 15_000;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("image fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("image fetch answered HTTP {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),
}

/// A decoded, renderable image.
#[derive(Debug)]
pub struct LoadedImage {
    pub key: String,
    pub width: u32,
    pub height: u32,
    pub pixels: RgbaImage,
}

#[derive(Debug)]
pub struct ImageAssets {
    client: reqwest::Client,
    cache: HashMap<String, Arc<LoadedImage>>,
    nonce: u64,
}

impl ImageAssets {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(FETCH_TIMEOUT_MS))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            cache: HashMap::new(),
            nonce: 0,
        }
    }

    /// A fresh cache key for one reveal of `letter`. The counter is the
    /// uniqueness token; the same letter revealed twice gets two keys.
    pub fn asset_key(&mut self, letter: Letter) -> String {
        self.nonce += 1;
        format!("word-image-{}-{}", letter.as_char().to_ascii_lowercase(), self.nonce)
    }

    /// Fetches and decodes `url`, caching the result under `key`. Returns
    /// only once the image is renderable.
    pub async fn load(&mut self, key: &str, url: &str) -> Result<Arc<LoadedImage>, AssetError> {
        if let Some(existing) = self.cache.get(key) {
            return Ok(Arc::clone(existing));
        }

        tracing::debug!(%key, %url, "loading image");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AssetError::HttpStatus(status));
        }

        let bytes = response.bytes().await?;
        let pixels = image::load_from_memory(&bytes)?.to_rgba8();
        let loaded = Arc::new(LoadedImage {
            key: key.to_string(),
            width: pixels.width(),
            height: pixels.height(),
            pixels,
        });
        self.cache.insert(key.to_string(), Arc::clone(&loaded));
        Ok(loaded)
    }

    /// Drops the cached entry for a dismissed popup.
    pub fn evict(&mut self, key: &str) {
        if self.cache.remove(key).is_some() {
            tracing::debug!(%key, "evicted image");
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.cache.contains_key(key)
    }

    /// Scene teardown: drop everything this session loaded.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    #[cfg(test)]
    fn insert_for_test(&mut self, key: &str, width: u32, height: u32) {
        self.cache.insert(
            key.to_string(),
            Arc::new(LoadedImage {
                key: key.to_string(),
                width,
                height,
                pixels: RgbaImage::new(width, height),
            }),
        );
    }
}

impl Default for ImageAssets {
    fn default() -> Self {
        Self::new()
    }
}
