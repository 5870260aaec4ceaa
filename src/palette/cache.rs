//! Decoded tile cache shared by all compositing workers
//!
//! Each tile path owns a slot guarded by its own mutex. The first worker to
//! lock an empty slot decodes the tile while later requesters for the same
//! tile wait on that slot only, then reuse the shared buffer. A failed decode
//! leaves the slot empty so the next requester tries again.

use crate::io::error::Result;
use image::RgbImage;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

type Slot = Arc<Mutex<Option<Arc<RgbImage>>>>;

/// Performance metrics for cache effectiveness
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct CacheStats {
    /// Requests served from an already decoded tile
    pub hits: usize,
    /// Requests that had to decode
    pub misses: usize,
}

/// Process-wide compute-if-absent map from tile path to decoded pixels
#[derive(Debug)]
pub struct TileCache {
    slots: Mutex<HashMap<PathBuf, Slot>>,
    max_attempts: usize,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl TileCache {
    /// Create an empty cache that tries each decode up to `max_attempts` times
    pub fn new(max_attempts: usize) -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            max_attempts: max_attempts.max(1),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Return the cached pixels for `path`, decoding them with `load` if absent
    ///
    /// # Errors
    ///
    /// Returns the last decode error once every attempt has failed. The slot
    /// stays empty, so a later call retries.
    pub fn get_or_load<F>(&self, path: &Path, load: F) -> Result<Arc<RgbImage>>
    where
        F: Fn(&Path) -> Result<RgbImage>,
    {
        let slot = Arc::clone(self.slots.lock().entry(path.to_path_buf()).or_default());

        let mut cached = slot.lock();
        if let Some(pixels) = cached.as_ref() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(Arc::clone(pixels));
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        let mut attempt = 1;
        loop {
            match load(path) {
                Ok(pixels) => {
                    let pixels = Arc::new(pixels);
                    *cached = Some(Arc::clone(&pixels));
                    return Ok(pixels);
                }
                Err(error) if attempt < self.max_attempts => {
                    debug!(tile = %path.display(), attempt, %error, "retrying tile decode");
                    attempt += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }

    /// Whether `path` currently holds decoded pixels
    pub fn contains(&self, path: &Path) -> bool {
        self.slots
            .lock()
            .get(path)
            .is_some_and(|slot| slot.lock().is_some())
    }

    /// Hit and miss counts so far
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
