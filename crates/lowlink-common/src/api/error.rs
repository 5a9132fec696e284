// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LowlinkError {
    /// Malformed graph input: empty graph, out-of-range node id, self-loop
    /// handed to the container, or a projection over its size limit.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A parallel edge was found while simple-graph validation was requested.
    #[error("Graph is not simple: parallel edge between {node} and {neighbor}")]
    NonSimpleGraph { node: u32, neighbor: u32 },

    #[error("Traversal cancelled")]
    Cancelled,
}

impl LowlinkError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LowlinkError>;
