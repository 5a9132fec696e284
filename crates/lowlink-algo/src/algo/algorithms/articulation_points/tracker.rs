// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Per-call traversal state for articulation point search.

use lowlink_common::{LowlinkError, Result};

/// Visited flags, discovery depths, low-link values and DFS-tree parents for
/// one search, plus the articulation points found so far.
///
/// A tracker belongs to exactly one call and is dropped with it.
#[derive(Debug)]
pub struct Tracker {
    visited: Vec<bool>,
    depth: Vec<u32>,
    low: Vec<u32>,
    /// `None` marks a DFS-tree root
    parent: Vec<Option<u32>>,
    visited_count: usize,
    /// Every id below this is visited
    scan_from: usize,
    points: Vec<u32>,
    is_point: Vec<bool>,
}

impl Tracker {
    /// Allocate state for `n` nodes. Fails for an empty graph.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(LowlinkError::invalid_input(
                "node count must be positive",
            ));
        }
        Ok(Self {
            visited: vec![false; n],
            depth: vec![0; n],
            low: vec![0; n],
            parent: vec![None; n],
            visited_count: 0,
            scan_from: 0,
            points: Vec::new(),
            is_point: vec![false; n],
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    /// Lowest-index node not yet visited, or `None` once all are.
    pub fn next_unvisited(&mut self) -> Option<u32> {
        while self.scan_from < self.visited.len() && self.visited[self.scan_from] {
            self.scan_from += 1;
        }
        (self.scan_from < self.visited.len()).then_some(self.scan_from as u32)
    }

    #[inline]
    pub fn all_visited(&self) -> bool {
        self.visited_count == self.visited.len()
    }

    /// Insert `node` into the result unless it is already there.
    pub fn record_articulation(&mut self, node: u32) {
        let seen = &mut self.is_point[node as usize];
        if !*seen {
            *seen = true;
            self.points.push(node);
        }
    }

    /// Mark `node` discovered at `depth` with the given tree parent.
    pub(crate) fn discover(&mut self, node: u32, depth: u32, parent: Option<u32>) {
        let i = node as usize;
        debug_assert!(!self.visited[i], "node {} discovered twice", node);
        self.visited[i] = true;
        self.visited_count += 1;
        self.depth[i] = depth;
        self.low[i] = depth;
        self.parent[i] = parent;
    }

    /// Lower `low[node]` to `value` if smaller.
    #[inline]
    pub(crate) fn lower_low(&mut self, node: u32, value: u32) {
        let low = &mut self.low[node as usize];
        *low = (*low).min(value);
    }

    #[inline]
    pub fn is_visited(&self, node: u32) -> bool {
        self.visited[node as usize]
    }

    #[inline]
    pub fn depth(&self, node: u32) -> u32 {
        self.depth[node as usize]
    }

    #[inline]
    pub fn low(&self, node: u32) -> u32 {
        self.low[node as usize]
    }

    #[inline]
    pub fn parent(&self, node: u32) -> Option<u32> {
        self.parent[node as usize]
    }

    /// Articulation points in discovery order.
    pub fn points(&self) -> &[u32] {
        &self.points
    }

    pub fn into_points(self) -> Vec<u32> {
        self.points
    }
}
