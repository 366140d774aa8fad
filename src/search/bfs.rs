//! Breadth-first connection search with a depth cutoff.
//!
//! The traversal is level-synchronized: two counters track how many
//! frontier entries remain on the current level and how many have been
//! queued for the next one. When the current level drains, the depth is
//! bumped and checked against the configured maximum before the next
//! level is allowed to run.
//!
//! Each node is visited once, through its first discoverer, so the parent
//! links form a tree and the reconstructed path is a shortest one.
//! Ties between equal-length paths go to the earlier neighbor in
//! adjacency order.

use std::collections::VecDeque;

use hashbrown::{HashMap, HashSet};
use tracing::{debug, trace};

use super::{ConnectionLister, GraphNode, SearchConfig, SearchOutcome, SearchStats};

// ============================================================================
// Public entry point
// ============================================================================

/// Shortest path from `start` to `target`, at most `max_depth` levels deep.
///
/// Returns an empty `Vec` when the target is unreachable or lies too deep.
pub fn find_path<N: GraphNode>(start: N, target: N, max_depth: u32) -> Vec<N> {
    BreadthFirstConnectionLister::new(start, target, max_depth).connection_list()
}

// ============================================================================
// BreadthFirstConnectionLister
// ============================================================================

/// Finds the shortest connection between two fixed nodes.
///
/// The lister holds only handles. Every call to [`search`](Self::search)
/// starts from fresh state, so one lister can be searched repeatedly.
#[derive(Debug, Clone)]
pub struct BreadthFirstConnectionLister<N: GraphNode> {
    start: N,
    target: N,
    max_depth: u32,
}

impl<N: GraphNode> BreadthFirstConnectionLister<N> {
    pub fn new(start: N, target: N, max_depth: u32) -> Self {
        Self { start, target, max_depth }
    }

    pub fn with_config(start: N, target: N, config: &SearchConfig) -> Self {
        Self::new(start, target, config.max_depth)
    }

    pub fn start(&self) -> &N {
        &self.start
    }

    pub fn target(&self) -> &N {
        &self.target
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Run the search and report why it stopped.
    pub fn search(&self) -> SearchOutcome<N> {
        self.search_with_stats().0
    }

    /// Like [`search`](Self::search), plus traversal counters.
    pub fn search_with_stats(&self) -> (SearchOutcome<N>, SearchStats) {
        let start_id = self.start.identity();
        let target_id = self.target.identity();
        debug!(
            start = ?start_id,
            target = ?target_id,
            max_depth = self.max_depth,
            "connection search started"
        );

        let mut state = SearchState::new(&self.start);
        let outcome = match self.traverse(&mut state) {
            Halt::Reached(found) => {
                let path = state.path_to(found, start_id);
                debug!(hops = path.len() - 1, "target reached");
                SearchOutcome::Found(path)
            }
            Halt::DepthExceeded => {
                debug!(depth = state.depth, "max depth reached before target");
                SearchOutcome::DepthExceeded { depth: state.depth }
            }
            Halt::Exhausted => {
                debug!(visited = state.visited.len(), "frontier exhausted, target unreachable");
                SearchOutcome::Unreachable
            }
        };

        (outcome, state.stats())
    }

    fn traverse(&self, state: &mut SearchState<N>) -> Halt<N> {
        let target_id = self.target.identity();

        while let Some(current) = state.frontier.pop_front() {
            if current.identity() == target_id {
                return Halt::Reached(current);
            }
            state.expanded += 1;

            // Visited is marked on discovery so a neighbor listed twice is
            // only counted once toward the next level.
            let fresh: Vec<N> = current
                .neighbors()
                .filter(|n| state.visited.insert(n.identity()))
                .collect();

            if state.close_level(fresh.len(), self.max_depth) {
                return Halt::DepthExceeded;
            }

            for neighbor in fresh {
                state.parents.insert(neighbor.identity(), current.clone());
                state.frontier.push_back(neighbor);
            }
        }

        Halt::Exhausted
    }
}

impl<N: GraphNode> ConnectionLister<N> for BreadthFirstConnectionLister<N> {
    fn connection_list(&self) -> Vec<N> {
        self.search().into_path()
    }
}

// ============================================================================
// Traversal state
// ============================================================================

/// Why the traversal loop stopped.
enum Halt<N> {
    Reached(N),
    DepthExceeded,
    Exhausted,
}

/// Per-search state. Created fresh by every search call.
struct SearchState<N: GraphNode> {
    frontier: VecDeque<N>,
    visited: HashSet<N::Id>,
    /// discovered node -> the node that discovered it
    parents: HashMap<N::Id, N>,
    depth: u32,
    remaining_on_level: usize,
    queued_for_next_level: usize,
    expanded: usize,
}

impl<N: GraphNode> SearchState<N> {
    fn new(start: &N) -> Self {
        let mut visited = HashSet::new();
        visited.insert(start.identity());
        Self {
            frontier: VecDeque::from([start.clone()]),
            visited,
            parents: HashMap::new(),
            depth: 0,
            remaining_on_level: 1,
            queued_for_next_level: 0,
            expanded: 0,
        }
    }

    /// Account for one expanded node that discovered `discovered` new nodes.
    ///
    /// Returns true when the current level just drained and the new depth
    /// has reached `max_depth`.
    fn close_level(&mut self, discovered: usize, max_depth: u32) -> bool {
        self.queued_for_next_level += discovered;
        self.remaining_on_level -= 1;
        if self.remaining_on_level > 0 {
            return false;
        }

        self.depth += 1;
        trace!(depth = self.depth, next_level = self.queued_for_next_level, "level drained");
        if self.depth >= max_depth {
            return true;
        }

        self.remaining_on_level = self.queued_for_next_level;
        self.queued_for_next_level = 0;
        false
    }

    /// Walk parent links back from `found` to the start node.
    ///
    /// Every dequeued node other than the start was enqueued together with
    /// its parent link, so the walk always ends at the start.
    fn path_to(&mut self, found: N, start_id: N::Id) -> Vec<N> {
        let mut current = found.identity();
        let mut path = vec![found];

        while current != start_id {
            let parent = self
                .parents
                .remove(&current)
                .expect("every discovered node has a parent link");
            current = parent.identity();
            path.push(parent);
        }

        path.reverse();
        path
    }

    fn stats(&self) -> SearchStats {
        SearchStats {
            nodes_visited: self.visited.len(),
            nodes_expanded: self.expanded,
            depth_reached: self.depth,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
