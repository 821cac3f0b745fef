//! Cooperative cancellation for in-flight analyses.
//!
//! A `CancelToken` is a shared flag. The caller keeps one clone and hands the
//! other to the pipeline; the curl progress callback checks it and aborts the
//! transfer once it is set. Nothing else needs cleaning up.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent; visible to every clone.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
