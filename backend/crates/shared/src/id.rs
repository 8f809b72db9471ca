//! Common ID Types
//!
//! Type-safe ID wrappers for directory records. The console's tables use
//! serial (i64) primary keys; the marker keeps station and client IDs from
//! being mixed up at compile time.

use std::fmt;
use std::marker::PhantomData;

/// Generic typed ID wrapper over a serial database key
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type StationId = Id<markers::Station>;
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Wrap an existing database key
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying key
    pub const fn value(&self) -> i64 {
        self.value
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for station IDs
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Station;

    /// Marker for client IDs
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Client;

    /// Marker for location IDs
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Location;

    /// Marker for voice IDs
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Voice;
}

/// Type aliases for common IDs
pub type StationId = Id<markers::Station>;
pub type ClientId = Id<markers::Client>;
pub type LocationId = Id<markers::Location>;
pub type VoiceId = Id<markers::Voice>;
