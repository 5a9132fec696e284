// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Graph Connectivity Engine
//!
//! This module finds articulation points (cut vertices) of undirected graphs.
//!
//! # Architecture
//!
//! Algorithms run against any [`GraphView`]: a node count plus ordered
//! adjacency. Two views ship with the crate:
//!
//! - **UndirectedGraph**: the mutable container from `lowlink-common`,
//!   traversed in place.
//!
//! - **GraphProjection**: an immutable dense CSR snapshot, validated when
//!   built. Best when the source graph keeps changing or is large.
//!
//! Traversal state lives in a per-call `Tracker`, so independent calls never
//! share anything and may run concurrently.
//!
//! # Example
//!
//! ```
//! use lowlink_algo::algo::{
//!     Algorithm, ArticulationPoints, ArticulationPointsConfig, ProjectionBuilder,
//! };
//! use lowlink_common::UndirectedGraph;
//!
//! let graph = UndirectedGraph::from_edges(3, &[(0, 1), (1, 2)])?;
//! let projection = ProjectionBuilder::new(&graph).build()?;
//!
//! let result = ArticulationPoints::run(&projection, ArticulationPointsConfig::default())?;
//! assert_eq!(result.points, vec![1]);
//! # Ok::<(), lowlink_common::LowlinkError>(())
//! ```

mod interrupt;
pub mod projection;
mod view;

pub mod algorithms;

pub use algorithms::{
    Algorithm, ArticulationPoints, ArticulationPointsConfig, ArticulationPointsResult, DfsWalker,
    Tracker, find_articulation_points, find_articulation_points_batch,
    find_articulation_points_with,
};
pub use interrupt::Interrupt;
pub use projection::{GraphProjection, ProjectionBuilder};
pub use view::GraphView;

#[cfg(test)]
pub mod test_utils;
