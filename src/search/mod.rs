//! # Connection Search
//!
//! The contract between the search engine and whatever holds the graph.
//!
//! Any type that can report a stable identity and enumerate its neighbors
//! is a [`GraphNode`]; the engine in [`bfs`] is generic over it and only
//! ever holds handles, never the graph itself.
//!
//! ## Implementations
//!
//! | Lister | Module | Description |
//! |--------|--------|-------------|
//! | `BreadthFirstConnectionLister` | `bfs` | Level-synchronized BFS with a depth cutoff |

pub mod bfs;

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub use bfs::{BreadthFirstConnectionLister, find_path};

// ============================================================================
// Node capability
// ============================================================================

/// A handle to a node that the search engine can traverse.
///
/// Handles are compared by [`identity`](GraphNode::identity), never by
/// attribute value. Cloning a handle must be cheap; the engine keeps one
/// clone per discovered node for path reconstruction.
pub trait GraphNode: Clone {
    /// Stable, unique identity of the node.
    type Id: Copy + Eq + Hash + fmt::Debug;

    fn identity(&self) -> Self::Id;

    /// Adjacent nodes in the order the adjacencies were added.
    ///
    /// Must be finite and restartable: calling it again yields the same
    /// sequence as long as the graph is not mutated.
    fn neighbors(&self) -> impl Iterator<Item = Self>;
}

// ============================================================================
// Connection lister
// ============================================================================

/// Anything that can produce the connection between two fixed nodes.
pub trait ConnectionLister<N> {
    /// Ordered path `start, .., target`, or empty when there is none.
    fn connection_list(&self) -> Vec<N>;
}

// ============================================================================
// Search outcome
// ============================================================================

/// Result of a single search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<N> {
    /// Path from start to target, both inclusive.
    Found(Vec<N>),
    /// A full BFS level was drained at `depth` without reaching the target,
    /// and `depth` hit the configured maximum.
    DepthExceeded { depth: u32 },
    /// The frontier ran dry; the target is in another component.
    Unreachable,
}

impl<N> SearchOutcome<N> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn path(&self) -> Option<&[N]> {
        match self {
            Self::Found(path) => Some(path),
            _ => None,
        }
    }

    /// Collapse both failure kinds into an empty path.
    pub fn into_path(self) -> Vec<N> {
        match self {
            Self::Found(path) => path,
            Self::DepthExceeded { .. } | Self::Unreachable => Vec::new(),
        }
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes marked visited, start included.
    pub nodes_visited: usize,
    /// Nodes dequeued and expanded (the target itself is not expanded).
    pub nodes_expanded: usize,
    /// Number of BFS levels fully drained.
    pub depth_reached: u32,
}

// ============================================================================
// Configuration
// ============================================================================

/// Default maximum search depth.
pub const DEFAULT_MAX_DEPTH: u32 = 6;

/// Search configuration.
///
/// `max_depth` counts BFS levels: a path with `k` friendships is only
/// found when `max_depth > k`. Unknown fields are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub max_depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

impl SearchConfig {
    pub fn new(max_depth: u32) -> Self {
        Self { max_depth }
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::InvalidConfig("max_depth must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_json() {
        let config = SearchConfig::from_json(r#"{"max_depth": 10}"#).unwrap();
        assert_eq!(config, SearchConfig::new(10));

        let config = SearchConfig::from_json("{}").unwrap();
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn test_config_rejects_zero_depth() {
        let err = SearchConfig::from_json(r#"{"max_depth": 0}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        let err = SearchConfig::from_json(r#"{"max_dept": 2}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("max_dept"), "got: {err}");
    }

    #[test]
    fn test_config_rejects_malformed_json() {
        let err = SearchConfig::from_json(r#"{"max_depth": "deep"}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_outcome_collapses_failures() {
        let found: SearchOutcome<u32> = SearchOutcome::Found(vec![1, 2]);
        assert!(found.is_found());
        assert_eq!(found.path(), Some(&[1, 2][..]));
        assert_eq!(found.into_path(), vec![1, 2]);

        let exceeded: SearchOutcome<u32> = SearchOutcome::DepthExceeded { depth: 3 };
        assert!(!exceeded.is_found());
        assert_eq!(exceeded.path(), None);
        assert!(exceeded.into_path().is_empty());

        let unreachable: SearchOutcome<u32> = SearchOutcome::Unreachable;
        assert!(unreachable.into_path().is_empty());
    }
}
