// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod api {
    pub mod error;
}

pub mod config;

pub mod graph {
    pub mod undirected_graph;
}

// Re-exports for convenience
pub use api::error::{LowlinkError, Result};
pub use config::ProjectionConfig;
pub use graph::undirected_graph::UndirectedGraph;
