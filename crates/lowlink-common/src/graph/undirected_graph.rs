// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Mutable undirected graph with dense node ids.
//!
//! Nodes are the slots `0..n`. Every edge is stored in both endpoints'
//! adjacency lists, in insertion order, so adjacency is symmetric by
//! construction. The container refuses self-loops and silently ignores
//! duplicate insertions, which keeps it a simple graph:
//! - O(1) edge membership test
//! - O(degree) neighbor iteration
//! - O(degree) edge removal

use crate::api::error::{LowlinkError, Result};
use fxhash::FxHashSet;
use rand::Rng;
use std::fmt;

/// Simple undirected graph over the node ids `0..node_count`.
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    /// Adjacency per node, insertion ordered
    adjacency: Vec<Vec<u32>>,
    /// Canonical `(min, max)` endpoint pairs for O(1) membership
    edge_set: FxHashSet<(u32, u32)>,
}

#[inline]
fn edge_key(u: u32, v: u32) -> (u32, u32) {
    if u < v { (u, v) } else { (v, u) }
}

impl UndirectedGraph {
    /// Creates a graph with `n` isolated nodes.
    pub fn new(n: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); n],
            edge_set: FxHashSet::default(),
        }
    }

    /// Builds a graph from an edge list. Duplicate edges are collapsed.
    pub fn from_edges(n: usize, edges: &[(u32, u32)]) -> Result<Self> {
        let mut graph = Self::new(n);
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Random graph where every unordered node pair is connected with
    /// probability `density_percent / 100`.
    pub fn random_density<R: Rng + ?Sized>(
        n: usize,
        density_percent: u32,
        rng: &mut R,
    ) -> Result<Self> {
        if density_percent > 100 {
            return Err(LowlinkError::invalid_input(format!(
                "density must be a percentage in 0..=100, got {}",
                density_percent
            )));
        }
        let p = f64::from(density_percent) / 100.0;
        let mut graph = Self::new(n);
        for u in 0..n as u32 {
            for v in (u + 1)..n as u32 {
                if rng.gen_bool(p) {
                    graph.add_edge(u, v)?;
                }
            }
        }
        Ok(graph)
    }

    fn check_node(&self, node: u32) -> Result<()> {
        if (node as usize) < self.adjacency.len() {
            Ok(())
        } else {
            Err(LowlinkError::invalid_input(format!(
                "node {} out of range for graph with {} nodes",
                node,
                self.adjacency.len()
            )))
        }
    }

    /// Adds the undirected edge `u - v`.
    ///
    /// Returns `false` if the edge already existed. Fails if either endpoint
    /// is out of range or `u == v`.
    pub fn add_edge(&mut self, u: u32, v: u32) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;
        if u == v {
            return Err(LowlinkError::invalid_input(format!(
                "self-loop on node {} is not allowed",
                u
            )));
        }
        if !self.edge_set.insert(edge_key(u, v)) {
            return Ok(false);
        }
        self.adjacency[u as usize].push(v);
        self.adjacency[v as usize].push(u);
        Ok(true)
    }

    /// Removes the undirected edge `u - v`. Returns `true` if it existed.
    pub fn remove_edge(&mut self, u: u32, v: u32) -> bool {
        if !self.edge_set.remove(&edge_key(u, v)) {
            return false;
        }
        self.adjacency[u as usize].retain(|&n| n != v);
        self.adjacency[v as usize].retain(|&n| n != u);
        true
    }

    /// Checks if the edge `u - v` exists.
    #[inline]
    pub fn has_edge(&self, u: u32, v: u32) -> bool {
        self.edge_set.contains(&edge_key(u, v))
    }

    /// Neighbors of `node` in insertion order. Empty for unknown nodes.
    #[inline]
    pub fn neighbors(&self, node: u32) -> &[u32] {
        self.adjacency
            .get(node as usize)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    #[inline]
    pub fn degree(&self, node: u32) -> usize {
        self.neighbors(node).len()
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_set.len()
    }

    /// Iterates every undirected edge once as `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, adj)| {
            let u = u as u32;
            adj.iter().filter(move |&&v| u < v).map(move |&v| (u, v))
        })
    }
}

impl fmt::Display for UndirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, adj) in self.adjacency.iter().enumerate() {
            write!(f, "{}:", node)?;
            for neighbor in adj {
                write!(f, " {}", neighbor)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
