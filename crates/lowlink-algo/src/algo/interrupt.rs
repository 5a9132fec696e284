// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared abort flag for long-running traversals.
///
/// Clones share the same flag. Algorithms poll it once per visited node and
/// stop with `LowlinkError::Cancelled`, discarding partial state.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    flag: Arc<AtomicBool>,
}

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that every holder of this flag stops.
    pub fn trigger(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_triggered(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Clear the flag so the handle can be reused for another call.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
