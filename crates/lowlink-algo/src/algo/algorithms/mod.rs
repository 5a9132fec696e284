// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Core algorithm trait and common utilities.

use crate::algo::GraphView;
use lowlink_common::Result;

/// Core trait for all graph algorithms.
pub trait Algorithm: Send + Sync {
    /// Algorithm parameters.
    type Config: Default + Clone + Send + 'static;
    /// Result type.
    type Result: Send + 'static;

    /// Algorithm identifier.
    fn name() -> &'static str;

    /// Execute algorithm on a graph view.
    fn run<G: GraphView + ?Sized>(graph: &G, config: Self::Config) -> Result<Self::Result>;
}

mod articulation_points;
pub use articulation_points::{
    ArticulationPoints, ArticulationPointsConfig, ArticulationPointsResult, DfsWalker, Tracker,
    find_articulation_points, find_articulation_points_batch, find_articulation_points_with,
};
