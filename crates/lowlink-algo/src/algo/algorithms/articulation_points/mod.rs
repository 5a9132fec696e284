// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Articulation Points Algorithm.
//!
//! Finds articulation points (cut vertices) in an undirected graph. Removing
//! an articulation point increases the number of connected components.
//!
//! The search walks every component from its lowest-indexed node, tracking
//! discovery depth and low-link values:
//! - a DFS-tree root is a cut vertex iff it has two or more tree children;
//! - any other node is a cut vertex iff some child subtree has no back edge
//!   reaching strictly above it (`low[child] >= depth[node]`).
//!
//! Input must be a simple graph. The parent check compares node ids, so a
//! second edge to the parent would be taken for a back edge and could hide a
//! real cut vertex. `validate_simple` rejects such input up front.

mod tracker;
mod walker;

pub use tracker::Tracker;
pub use walker::DfsWalker;

use crate::algo::algorithms::Algorithm;
use crate::algo::{GraphView, Interrupt};
use lowlink_common::{LowlinkError, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

pub struct ArticulationPoints;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticulationPointsConfig {
    /// Return points in ascending id order instead of discovery order
    pub sorted: bool,
    /// Reject graphs with parallel edges before traversal (default: true)
    pub validate_simple: bool,
    /// Abort flag polled once per visited node
    #[serde(skip)]
    pub interrupt: Option<Interrupt>,
}

impl Default for ArticulationPointsConfig {
    fn default() -> Self {
        Self {
            sorted: false,
            validate_simple: true,
            interrupt: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArticulationPointsResult {
    pub points: Vec<u32>,
    /// Number of connected components (DFS roots) encountered
    pub component_count: usize,
}

impl Algorithm for ArticulationPoints {
    type Config = ArticulationPointsConfig;
    type Result = ArticulationPointsResult;

    fn name() -> &'static str {
        "articulation_points"
    }

    fn run<G: GraphView + ?Sized>(graph: &G, config: Self::Config) -> Result<Self::Result> {
        if graph.size() == 0 {
            return Ok(ArticulationPointsResult::default());
        }
        search(graph, &config)
    }
}

/// Articulation points of `graph` in discovery order, with default settings.
///
/// Fails with `InvalidInput` for an empty graph or an adjacency entry outside
/// `0..graph.size()`, and with `NonSimpleGraph` for parallel edges.
pub fn find_articulation_points<G: GraphView + ?Sized>(graph: &G) -> Result<Vec<u32>> {
    find_articulation_points_with(graph, &ArticulationPointsConfig::default())
}

pub fn find_articulation_points_with<G: GraphView + ?Sized>(
    graph: &G,
    config: &ArticulationPointsConfig,
) -> Result<Vec<u32>> {
    search(graph, config).map(|result| result.points)
}

/// Run independent searches over many graphs on the rayon pool.
///
/// Each search owns its tracker; results are returned in input order.
pub fn find_articulation_points_batch<G: GraphView + Sync>(
    graphs: &[G],
    config: &ArticulationPointsConfig,
) -> Vec<Result<Vec<u32>>> {
    graphs
        .par_iter()
        .map(|graph| find_articulation_points_with(graph, config))
        .collect()
}

#[instrument(skip_all, fields(nodes = graph.size()), level = "debug")]
fn search<G: GraphView + ?Sized>(
    graph: &G,
    config: &ArticulationPointsConfig,
) -> Result<ArticulationPointsResult> {
    validate(graph, config.validate_simple)?;

    let mut tracker = Tracker::new(graph.size())?;
    let mut walker = DfsWalker::new(graph).with_interrupt(config.interrupt.as_ref());
    let mut component_count = 0;

    // Each walk marks at least its root, so the loop ends after at most
    // `size()` iterations.
    while let Some(root) = tracker.next_unvisited() {
        trace!(root, "Walking component");
        walker.walk(&mut tracker, root, 0)?;
        component_count += 1;
    }
    debug_assert!(tracker.all_visited());

    let mut points = tracker.into_points();
    if config.sorted {
        points.sort_unstable();
    }
    debug!(
        component_count,
        articulation_points = points.len(),
        "Articulation point search finished"
    );

    Ok(ArticulationPointsResult {
        points,
        component_count,
    })
}

/// Check node count and adjacency ids before any traversal state exists.
fn validate<G: GraphView + ?Sized>(graph: &G, check_simple: bool) -> Result<()> {
    let n = graph.size();
    if n == 0 {
        return Err(LowlinkError::invalid_input("node count must be positive"));
    }
    if n > u32::MAX as usize {
        return Err(LowlinkError::invalid_input(format!(
            "{} nodes exceed the 32-bit id space",
            n
        )));
    }

    // last_seen[v] == u means v already appeared in u's adjacency
    let mut last_seen = if check_simple {
        vec![u32::MAX; n]
    } else {
        Vec::new()
    };
    for node in 0..n as u32 {
        for &adj in graph.neighbors(node) {
            if adj as usize >= n {
                return Err(LowlinkError::invalid_input(format!(
                    "node {} lists neighbor {} outside 0..{}",
                    node, adj, n
                )));
            }
            if check_simple && adj != node {
                if last_seen[adj as usize] == node {
                    return Err(LowlinkError::NonSimpleGraph {
                        node,
                        neighbor: adj,
                    });
                }
                last_seen[adj as usize] = node;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::GraphProjection;
    use crate::algo::test_utils::{brute_force_articulation_points, build_test_graph, sorted};
    use lowlink_common::ProjectionConfig;

    #[test]
    fn test_articulation_points_line() {
        // 0 - 1 - 2
        // 1 is AP.
        let graph = build_test_graph(3, &[(0, 1), (1, 2)]);

        let points = find_articulation_points(&graph).unwrap();
        assert_eq!(points, vec![1]);
    }

    #[test]
    fn test_articulation_points_cycle() {
        // 0 - 1 - 2 - 0
        // No APs.
        let graph = build_test_graph(3, &[(0, 1), (1, 2), (2, 0)]);

        let result = ArticulationPoints::run(&graph, ArticulationPointsConfig::default()).unwrap();
        assert!(result.points.is_empty());
        assert_eq!(result.component_count, 1);
    }

    #[test]
    fn test_articulation_points_disconnected() {
        // 0 - 1 - 2    3 - 4 - 5
        let graph = build_test_graph(6, &[(0, 1), (1, 2), (3, 4), (4, 5)]);

        let result = ArticulationPoints::run(&graph, ArticulationPointsConfig::default()).unwrap();
        assert_eq!(sorted(result.points), vec![1, 4]);
        assert_eq!(result.component_count, 2);
    }

    #[test]
    fn test_articulation_points_single_node() {
        let graph = build_test_graph(1, &[]);
        assert!(find_articulation_points(&graph).unwrap().is_empty());
    }

    #[test]
    fn test_articulation_points_empty_graph() {
        let graph = build_test_graph(0, &[]);
        assert!(matches!(
            find_articulation_points(&graph),
            Err(LowlinkError::InvalidInput { .. })
        ));

        let result = ArticulationPoints::run(&graph, ArticulationPointsConfig::default()).unwrap();
        assert_eq!(result, ArticulationPointsResult::default());
    }

    #[test]
    fn test_root_with_two_children() {
        // Bowtie: two triangles sharing node 0, walked from 0.
        let graph = build_test_graph(5, &[(0, 1), (1, 2), (2, 0), (0, 3), (3, 4), (4, 0)]);
        assert_eq!(find_articulation_points(&graph).unwrap(), vec![0]);
    }

    #[test]
    fn test_sorted_output() {
        // 3 - 2 - 1 - 0 discovers 1 before 2 when walked from 0
        let graph = build_test_graph(4, &[(3, 2), (2, 1), (1, 0)]);
        let discovery = find_articulation_points(&graph).unwrap();
        assert_eq!(discovery, vec![2, 1]);

        let config = ArticulationPointsConfig {
            sorted: true,
            ..Default::default()
        };
        assert_eq!(
            find_articulation_points_with(&graph, &config).unwrap(),
            vec![1, 2]
        );
    }

    #[test]
    fn test_parallel_edges_rejected() {
        let relaxed = ProjectionConfig::default().allow_parallel_edges();
        let graph = GraphProjection::from_edges(3, &[(0, 1), (0, 1), (1, 2)], &relaxed).unwrap();

        assert_eq!(
            find_articulation_points(&graph).unwrap_err(),
            LowlinkError::NonSimpleGraph {
                node: 0,
                neighbor: 1
            }
        );

        let unchecked = ArticulationPointsConfig {
            validate_simple: false,
            ..Default::default()
        };
        assert!(find_articulation_points_with(&graph, &unchecked).is_ok());
    }

    #[test]
    fn test_out_of_range_neighbor_rejected() {
        let mut graph = build_test_graph(2, &[(0, 1)]);
        graph.neighbors[0] = 9;
        let err = find_articulation_points(&graph).unwrap_err();
        assert!(matches!(err, LowlinkError::InvalidInput { .. }));
    }

    #[test]
    fn test_cancelled_search() {
        let graph = build_test_graph(3, &[(0, 1), (1, 2)]);
        let interrupt = Interrupt::new();
        let config = ArticulationPointsConfig {
            interrupt: Some(interrupt.clone()),
            ..Default::default()
        };

        interrupt.trigger();
        assert_eq!(
            find_articulation_points_with(&graph, &config).unwrap_err(),
            LowlinkError::Cancelled
        );

        interrupt.reset();
        assert_eq!(find_articulation_points_with(&graph, &config).unwrap(), vec![1]);
    }

    #[test]
    fn test_matches_brute_force_on_mixed_graph() {
        // Two blocks joined through 3, a pendant path off 5, an isolated 9.
        let edges = [
            (0, 1),
            (1, 2),
            (2, 0),
            (2, 3),
            (3, 4),
            (4, 5),
            (5, 3),
            (5, 6),
            (6, 7),
            (7, 8),
        ];
        let graph = build_test_graph(10, &edges);
        let expected = brute_force_articulation_points(10, &edges);
        assert_eq!(sorted(find_articulation_points(&graph).unwrap()), expected);
        assert_eq!(expected, vec![2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_batch_matches_single_calls() {
        let graphs = vec![
            build_test_graph(3, &[(0, 1), (1, 2)]),
            build_test_graph(3, &[(0, 1), (1, 2), (2, 0)]),
            build_test_graph(0, &[]),
        ];
        let results = find_articulation_points_batch(&graphs, &ArticulationPointsConfig::default());
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], Ok(vec![1]));
        assert_eq!(results[1], Ok(vec![]));
        assert!(results[2].is_err());
    }

    #[test]
    fn test_config_serde() {
        let config: ArticulationPointsConfig = serde_json::from_str(r#"{"sorted": true}"#).unwrap();
        assert!(config.sorted);
        assert!(config.validate_simple);
        assert!(config.interrupt.is_none());

        let result = ArticulationPointsResult {
            points: vec![4, 1],
            component_count: 2,
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({"points": [4, 1], "component_count": 2})
        );
    }
}
