//! Object identity for Horizon Probe.
//!
//! Every component under test carries an [`ObjectBase`] that provides a unique
//! [`ObjectId`] and an optional debug name. Unlike a full GUI framework there
//! is no process-wide object registry: identity comes from an atomic counter,
//! and ownership of children lives entirely inside the component tree the test
//! constructs. This keeps the engine free of hidden global state.
//!
//! # Example
//!
//! ```
//! use horizon_probe_core::ObjectBase;
//!
//! struct Fixture {
//!     object: ObjectBase,
//! }
//!
//! let a = Fixture { object: ObjectBase::new::<Fixture>() };
//! let b = Fixture { object: ObjectBase::new::<Fixture>() };
//! assert_ne!(a.object.id(), b.object.id());
//! ```

use std::fmt;
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

/// A unique identifier for an object.
///
/// IDs are allocated from a monotonically increasing counter and are never
/// reused within a process. Two objects compare equal only if they are the
/// same instance.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(NonZeroU64);

impl ObjectId {
    /// Allocate the next free object ID.
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        let raw = COUNTER.fetch_add(1, Ordering::Relaxed);
        // The counter starts at 1 and only ever increments.
        Self(NonZeroU64::new(raw).unwrap())
    }

    /// The raw numeric value, for display and logging.
    pub fn as_u64(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors raised while assembling an object tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectError {
    /// Attempted to attach an object as a child of itself or of one of its
    /// own descendants.
    CircularParentage,
    /// The object is already attached to a parent.
    AlreadyParented,
}

impl fmt::Display for ObjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CircularParentage => {
                write!(f, "Attempted to create a cycle in the object tree")
            }
            Self::AlreadyParented => {
                write!(f, "The object is already attached to a parent")
            }
        }
    }
}

impl std::error::Error for ObjectError {}

/// Result type alias for object tree operations.
pub type ObjectResult<T> = std::result::Result<T, ObjectError>;

/// The common identity core embedded in every component.
///
/// `ObjectBase` records the instance's unique ID, the concrete type name it
/// was created for (used in debug output), and a mutable debug name.
pub struct ObjectBase {
    id: ObjectId,
    type_name: &'static str,
    name: RwLock<String>,
}

impl ObjectBase {
    /// Create a new object base for the concrete type `T`.
    ///
    /// The type name is captured for tree dumps and tracing output.
    pub fn new<T: 'static>() -> Self {
        let base = Self {
            id: ObjectId::next(),
            type_name: std::any::type_name::<T>(),
            name: RwLock::new(String::new()),
        };
        tracing::trace!(
            target: crate::logging::targets::OBJECT,
            id = base.id.as_u64(),
            type_name = base.type_name,
            "object created"
        );
        base
    }

    /// The object's unique ID.
    #[inline]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// The concrete type name this base was created for.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The short form of [`type_name`](Self::type_name), without module path.
    pub fn short_type_name(&self) -> &'static str {
        self.type_name.rsplit("::").next().unwrap_or(self.type_name)
    }

    /// The object's debug name. Empty if never set.
    pub fn name(&self) -> String {
        self.name.read().clone()
    }

    /// Set the object's debug name.
    pub fn set_name(&self, name: impl Into<String>) {
        *self.name.write() = name.into();
    }
}

impl fmt::Debug for ObjectBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectBase")
            .field("id", &self.id)
            .field("type_name", &self.type_name)
            .field("name", &self.name())
            .finish()
    }
}

static_assertions::assert_impl_all!(ObjectBase: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture;

    #[test]
    fn test_ids_are_unique() {
        let a = ObjectBase::new::<Fixture>();
        let b = ObjectBase::new::<Fixture>();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_type_name_is_captured() {
        let base = ObjectBase::new::<Fixture>();
        assert!(base.type_name().ends_with("Fixture"));
        assert_eq!(base.short_type_name(), "Fixture");
    }

    #[test]
    fn test_name_roundtrip() {
        let base = ObjectBase::new::<Fixture>();
        assert_eq!(base.name(), "");
        base.set_name("root");
        assert_eq!(base.name(), "root");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ObjectError::CircularParentage.to_string(),
            "Attempted to create a cycle in the object tree"
        );
        assert_eq!(
            ObjectError::AlreadyParented.to_string(),
            "The object is already attached to a parent"
        );
    }
}
