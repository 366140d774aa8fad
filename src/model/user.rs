//! User in the social graph.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Opaque user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub u64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered adjacency of a user. Insertion order is discovery order.
pub type FriendList = SmallVec<[UserId; 8]>;

/// A participant in the social graph.
///
/// Two users are the same user when their ids match; the name is a
/// display label only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    friends: FriendList,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            friends: FriendList::new(),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Friends in the order they were added.
    pub fn friends(&self) -> &[UserId] {
        &self.friends
    }

    /// Append `friend` to this user's friend list.
    ///
    /// One-way only: the reciprocal entry must be added on `friend` by the
    /// caller when a mutual friendship is wanted.
    pub fn add_friend(&mut self, friend: UserId) {
        self.friends.push(friend);
    }

    pub fn has_friend(&self, other: UserId) -> bool {
        self.friends.contains(&other)
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_friend_preserves_order() {
        let mut user = User::new(UserId(1), "Ada");
        user.add_friend(UserId(3));
        user.add_friend(UserId(2));
        user.add_friend(UserId(7));

        assert_eq!(user.friends(), &[UserId(3), UserId(2), UserId(7)]);
        assert!(user.has_friend(UserId(2)));
        assert!(!user.has_friend(UserId(4)));
    }

    #[test]
    fn test_equality_is_by_id() {
        let a = User::new(UserId(1), "Ada");
        let renamed = User::new(UserId(1), "Ada Lovelace");
        let other = User::new(UserId(2), "Ada");

        assert_eq!(a, renamed);
        assert_ne!(a, other);
    }

    #[test]
    fn test_friend_list_grows_past_inline_capacity() {
        let mut user = User::new(UserId(1), "hub");
        for i in 2..20 {
            user.add_friend(UserId(i));
        }
        assert_eq!(user.friends().len(), 18);
        assert_eq!(user.friends().first(), Some(&UserId(2)));
        assert_eq!(user.friends().last(), Some(&UserId(19)));
    }
}
