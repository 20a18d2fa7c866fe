//! Identity tokens for group nodes.

use uuid::Uuid;

/// Unique identifier for a mounted list group.
///
/// Allocated once when the group is built and used as the key for
/// registration and exclusivity broadcasts.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct GroupId(Uuid);

impl GroupId {
    /// Create a new unique group ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for GroupId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "group-{}", self.0)
    }
}
