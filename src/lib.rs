//! # social-path — Shortest Connections in a Social Graph
//!
//! Finds the shortest chain of friendships between two users using a
//! breadth-first search bounded by a maximum depth.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `GraphNode` is the contract between the search engine and the graph
//! 2. **Outcomes, not errors**: an unreachable or too-deep target is a `SearchOutcome`,
//!    not an `Error`
//! 3. **No hidden state**: every search builds its own frontier, visited set and parent links
//! 4. **Identity equality**: nodes compare by id, never by label
//!
//! ## Quick Start
//!
//! ```rust
//! use social_path::{SocialGraph, find_path};
//!
//! # fn example() -> social_path::Result<()> {
//! let mut graph = SocialGraph::new();
//! let ada = graph.add_user("Ada");
//! let bob = graph.add_user("Bob");
//! let cy = graph.add_user("Cy");
//! graph.add_friendship(ada, bob)?;
//! graph.add_friendship(bob, cy)?;
//!
//! let start = graph.user(ada).ok_or(social_path::Error::UserNotFound(ada))?;
//! let target = graph.user(cy).ok_or(social_path::Error::UserNotFound(cy))?;
//!
//! let path = find_path(start, target, 6);
//! let names: Vec<&str> = path.iter().map(|u| u.name()).collect();
//! assert_eq!(names, ["Ada", "Bob", "Cy"]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod search;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{SocialGraph, User, UserId, UserRef};

// ============================================================================
// Re-exports: Search
// ============================================================================

pub use search::{
    BreadthFirstConnectionLister, ConnectionLister, DEFAULT_MAX_DEPTH, GraphNode, SearchConfig,
    SearchOutcome, SearchStats, find_path,
};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("User {stored} stored under key {key}")]
    IdMismatch { key: UserId, stored: UserId },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
