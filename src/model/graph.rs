//! SocialGraph — the owning store for users and their friend lists.
//!
//! The search engine never owns users. It walks `UserRef` handles, which
//! borrow from a `SocialGraph` and compare by `UserId`.

use std::hash::{Hash, Hasher};

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use serde::{Deserialize, Serialize};

use super::{User, UserId};
use crate::search::GraphNode;
use crate::{Error, Result};

// ============================================================================
// SocialGraph
// ============================================================================

/// In-memory social graph.
///
/// Deserialization goes through `SocialGraphRepr` so every loaded user is
/// stored under its own id and id allocation resumes past the largest one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "SocialGraphRepr")]
pub struct SocialGraph {
    users: HashMap<UserId, User>,
    /// Last allocated id; ids start at 1.
    last_id: u64,
}

impl SocialGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known number of users.
    pub fn with_capacity(user_count: usize) -> Self {
        Self {
            users: HashMap::with_capacity(user_count),
            last_id: 0,
        }
    }

    /// Register a new user and return its id.
    ///
    /// Ids already taken are skipped, never overwritten.
    pub fn add_user(&mut self, name: impl Into<String>) -> UserId {
        loop {
            self.last_id += 1;
            let id = UserId(self.last_id);
            if let Entry::Vacant(slot) = self.users.entry(id) {
                slot.insert(User::new(id, name));
                return id;
            }
        }
    }

    /// Add a one-way adjacency `from -> to`.
    pub fn add_friend(&mut self, from: UserId, to: UserId) -> Result<()> {
        if !self.users.contains_key(&to) {
            return Err(Error::UserNotFound(to));
        }
        let user = self.users.get_mut(&from).ok_or(Error::UserNotFound(from))?;
        user.add_friend(to);
        Ok(())
    }

    /// Add a mutual friendship: `a -> b` and `b -> a`.
    pub fn add_friendship(&mut self, a: UserId, b: UserId) -> Result<()> {
        if !self.users.contains_key(&a) {
            return Err(Error::UserNotFound(a));
        }
        if !self.users.contains_key(&b) {
            return Err(Error::UserNotFound(b));
        }
        self.add_friend(a, b)?;
        self.add_friend(b, a)
    }

    /// Borrow a traversable handle to a user.
    pub fn user(&self, id: UserId) -> Option<UserRef<'_>> {
        self.users.get(&id).map(|user| UserRef { graph: self, user })
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    /// All users, ordered by id.
    pub fn users(&self) -> impl Iterator<Item = UserRef<'_>> {
        let mut ids: Vec<UserId> = self.users.keys().copied().collect();
        ids.sort_unstable();
        ids.into_iter().filter_map(move |id| self.user(id))
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of one-way adjacency entries. A mutual friendship counts twice.
    pub fn friendship_count(&self) -> usize {
        self.users.values().map(|u| u.friends().len()).sum()
    }
}

/// Wire form of `SocialGraph`, checked before it becomes one.
#[derive(Deserialize)]
struct SocialGraphRepr {
    users: HashMap<UserId, User>,
    #[serde(default)]
    last_id: u64,
}

impl TryFrom<SocialGraphRepr> for SocialGraph {
    type Error = Error;

    fn try_from(repr: SocialGraphRepr) -> Result<Self> {
        let mut last_id = repr.last_id;
        for (&key, user) in &repr.users {
            if key != user.id() {
                return Err(Error::IdMismatch { key, stored: user.id() });
            }
            last_id = last_id.max(key.0);
        }
        Ok(Self { users: repr.users, last_id })
    }
}

// ============================================================================
// UserRef
// ============================================================================

/// Borrowed handle to a user inside a `SocialGraph`.
///
/// Equality and hashing use the `UserId` only.
#[derive(Clone, Copy)]
pub struct UserRef<'g> {
    graph: &'g SocialGraph,
    user: &'g User,
}

impl<'g> UserRef<'g> {
    pub fn id(&self) -> UserId {
        self.user.id()
    }

    pub fn name(&self) -> &'g str {
        self.user.name()
    }

    /// Friends in adjacency order. Ids missing from the graph are skipped.
    pub fn friends(&self) -> impl Iterator<Item = UserRef<'g>> + use<'g> {
        let graph = self.graph;
        let user = self.user;
        user.friends().iter().filter_map(move |&id| graph.user(id))
    }
}

impl PartialEq for UserRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for UserRef<'_> {}

impl Hash for UserRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl std::fmt::Debug for UserRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRef")
            .field("id", &self.id())
            .field("name", &self.name())
            .finish()
    }
}

impl<'g> GraphNode for UserRef<'g> {
    type Id = UserId;

    fn identity(&self) -> UserId {
        self.id()
    }

    fn neighbors(&self) -> impl Iterator<Item = Self> {
        self.friends()
    }
}

// ============================================================================
// Tests
// ============================================================================
