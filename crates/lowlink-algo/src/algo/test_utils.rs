// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::algo::GraphProjection;
use lowlink_common::ProjectionConfig;

pub fn build_test_graph(vertex_count: usize, edges: &[(u32, u32)]) -> GraphProjection {
    GraphProjection::from_edges(vertex_count, edges, &ProjectionConfig::default())
        .expect("test graph must be simple and in range")
}

pub fn sorted(mut points: Vec<u32>) -> Vec<u32> {
    points.sort_unstable();
    points
}

/// Connected components among nodes not in `removed`.
fn component_count(n: usize, edges: &[(u32, u32)], removed: Option<u32>) -> usize {
    let mut parent: Vec<usize> = (0..n).collect();
    fn find(parent: &mut [usize], x: usize) -> usize {
        let mut root = x;
        while parent[root] != root {
            root = parent[root];
        }
        parent[x] = root;
        root
    }

    for &(u, v) in edges {
        if Some(u) == removed || Some(v) == removed {
            continue;
        }
        let (ru, rv) = (find(&mut parent, u as usize), find(&mut parent, v as usize));
        if ru != rv {
            parent[ru] = rv;
        }
    }

    (0..n)
        .filter(|&i| Some(i as u32) != removed)
        .filter(|&i| find(&mut parent, i) == i)
        .count()
}

/// Nodes whose removal raises the component count, ascending.
pub fn brute_force_articulation_points(n: usize, edges: &[(u32, u32)]) -> Vec<u32> {
    let base = component_count(n, edges, None);
    (0..n as u32)
        .filter(|&node| component_count(n, edges, Some(node)) > base)
        .collect()
}
