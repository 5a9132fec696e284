// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Read-only graph access used by traversal algorithms.

use crate::algo::GraphProjection;
use lowlink_common::UndirectedGraph;

/// Node count plus ordered adjacency, for node ids `0..size()`.
///
/// Implementations must be undirected (adjacency symmetric) and must not
/// change while an algorithm holds the borrow.
pub trait GraphView {
    /// Number of nodes.
    fn size(&self) -> usize;

    /// Adjacent node ids of `node`, in traversal order.
    fn neighbors(&self, node: u32) -> &[u32];
}

impl GraphView for GraphProjection {
    #[inline]
    fn size(&self) -> usize {
        self.vertex_count()
    }

    #[inline]
    fn neighbors(&self, node: u32) -> &[u32] {
        GraphProjection::neighbors(self, node)
    }
}

impl GraphView for UndirectedGraph {
    #[inline]
    fn size(&self) -> usize {
        self.node_count()
    }

    #[inline]
    fn neighbors(&self, node: u32) -> &[u32] {
        UndirectedGraph::neighbors(self, node)
    }
}
