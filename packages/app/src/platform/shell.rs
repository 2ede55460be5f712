//! Shell-level cache management.
//!
//! The kiosk shell clears all cached storage before showing the window and
//! exposes the same action to the UI layer. Here the cached storage is the
//! app's cache directory (downloaded images, anything a future session
//! might leave behind).

use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CacheShell {
    cache_dir: PathBuf,
}

impl CacheShell {
    pub fn new() -> Self {
        let cache_dir = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("alphabet-game");
        Self { cache_dir }
    }

    #[cfg(test)]
    fn with_dir(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    pub fn cache_dir(&self) -> &PathBuf {
        &self.cache_dir
    }

    /// Removes every cached file and leaves an empty cache directory behind.
    pub fn clear_cache(&self) -> io::Result<()> {
        if self.cache_dir.exists() {
            std::fs::remove_dir_all(&self.cache_dir)?;
        }
        std::fs::create_dir_all(&self.cache_dir)?;
        tracing::info!(dir = %self.cache_dir.display(), "cache cleared");
        Ok(())
    }
}

impl Default for CacheShell {
    fn default() -> Self {
        Self::new()
    }
}
