//! Common identifiers used throughout the runtime.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Process-unique identifier of one session instance.
///
/// An owner may go through several sessions; the id tells them apart so a
/// stale eviction never removes a newer session for the same owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session#{}", self.0)
    }
}
