// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod algo;

pub use algo::projection::{GraphProjection, ProjectionBuilder};
pub use algo::{
    Algorithm, ArticulationPoints, ArticulationPointsConfig, ArticulationPointsResult, GraphView,
    Interrupt, find_articulation_points, find_articulation_points_batch,
    find_articulation_points_with,
};
pub use lowlink_common::{LowlinkError, ProjectionConfig, Result, UndirectedGraph};
