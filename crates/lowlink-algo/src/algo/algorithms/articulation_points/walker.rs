// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Iterative depth-first walk with low-link bookkeeping.
//!
//! The walk keeps its own heap-allocated frame stack, so the search depth is
//! bounded by memory rather than by the thread's native stack. A long path of
//! several hundred thousand nodes is walked like any other component.

use super::tracker::Tracker;
use crate::algo::{GraphView, Interrupt};
use lowlink_common::{LowlinkError, Result};
use tracing::warn;

/// One node on the current root-to-node path.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: u32,
    depth: u32,
    /// Next position in `node`'s adjacency slice
    cursor: usize,
    /// DFS-tree children discovered from this node
    child_count: u32,
    /// Some child subtree cannot reach above this node
    is_cut_candidate: bool,
}

/// Walks one connected component at a time, recording articulation points
/// in the supplied `Tracker`.
pub struct DfsWalker<'a, G: GraphView + ?Sized> {
    graph: &'a G,
    interrupt: Option<&'a Interrupt>,
    stack: Vec<Frame>,
}

impl<'a, G: GraphView + ?Sized> DfsWalker<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            interrupt: None,
            stack: Vec::new(),
        }
    }

    /// Poll `interrupt` once per visited node.
    pub fn with_interrupt(mut self, interrupt: Option<&'a Interrupt>) -> Self {
        self.interrupt = interrupt;
        self
    }

    /// Explore the component containing `root`, which becomes a DFS-tree root
    /// discovered at `depth`.
    ///
    /// # Panics
    ///
    /// Panics if `root` is out of range or already visited.
    pub fn walk(&mut self, tracker: &mut Tracker, root: u32, depth: u32) -> Result<()> {
        let graph = self.graph;
        assert!(
            (root as usize) < graph.size(),
            "walk root {} outside graph of {} nodes",
            root,
            graph.size()
        );
        assert!(!tracker.is_visited(root), "walk root {} already visited", root);

        self.stack.clear();
        self.enter(tracker, root, depth, None)?;

        loop {
            let Some(frame) = self.stack.last_mut() else {
                break;
            };
            let node = frame.node;

            if let Some(&adj) = graph.neighbors(node).get(frame.cursor) {
                frame.cursor += 1;
                if adj == node {
                    continue;
                }
                if !tracker.is_visited(adj) {
                    let child_depth = frame.depth + 1;
                    self.enter(tracker, adj, child_depth, Some(node))?;
                } else if tracker.parent(node) != Some(adj) {
                    // Back edge
                    let reach = tracker.depth(adj);
                    tracker.lower_low(node, reach);
                }
                continue;
            }

            let finished = *frame;
            self.stack.pop();
            self.finish(tracker, finished);
        }

        Ok(())
    }

    fn enter(
        &mut self,
        tracker: &mut Tracker,
        node: u32,
        depth: u32,
        parent: Option<u32>,
    ) -> Result<()> {
        if self.interrupt.is_some_and(Interrupt::is_triggered) {
            warn!(node, depth, "Articulation point search interrupted");
            return Err(LowlinkError::Cancelled);
        }
        tracker.discover(node, depth, parent);
        self.stack.push(Frame {
            node,
            depth,
            cursor: 0,
            child_count: 0,
            is_cut_candidate: false,
        });
        Ok(())
    }

    /// Apply the articulation test to a node whose neighbors are exhausted
    /// and fold its low-link into the parent frame.
    fn finish(&mut self, tracker: &mut Tracker, done: Frame) {
        let is_articulation = match tracker.parent(done.node) {
            Some(_) => done.is_cut_candidate,
            None => done.child_count >= 2,
        };
        if is_articulation {
            tracker.record_articulation(done.node);
        }

        if let Some(parent) = self.stack.last_mut() {
            parent.child_count += 1;
            let child_low = tracker.low(done.node);
            if child_low >= tracker.depth(parent.node) {
                parent.is_cut_candidate = true;
            }
            tracker.lower_low(parent.node, child_low);
        }
    }
}
