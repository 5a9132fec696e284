// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use serde::{Deserialize, Serialize};

/// Limits and validation applied when materializing a `GraphProjection`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Maximum vertices per projection (default: 100M)
    pub max_vertices: usize,

    /// Maximum memory for the CSR arrays in bytes (default: 1 GB)
    pub max_projection_memory: usize,

    /// Reject parallel edges instead of projecting a multigraph (default: true)
    pub reject_parallel_edges: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            max_vertices: 100_000_000,
            max_projection_memory: 1 << 30,
            reject_parallel_edges: true,
        }
    }
}

impl ProjectionConfig {
    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    pub fn with_max_projection_memory(mut self, bytes: usize) -> Self {
        self.max_projection_memory = bytes;
        self
    }

    pub fn allow_parallel_edges(mut self) -> Self {
        self.reject_parallel_edges = false;
        self
    }
}
