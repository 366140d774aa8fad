//! # Social Graph Model
//!
//! Users, their friend lists, and the graph that owns them.
//! This module is pure data: construction and lookup, no traversal.

pub mod user;
pub mod graph;

pub use user::{User, UserId, FriendList};
pub use graph::{SocialGraph, UserRef};
