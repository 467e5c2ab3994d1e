//! ID generator port for producing data block identifiers.

use uuid::Uuid;

/// Produces the identifier half of a data block id.
///
/// Swapping the implementation lets tests pin the identifier while the
/// binary keeps drawing fresh version-4 values.
pub trait IdGenerator: Send + Sync {
    /// Returns a new identifier.
    fn generate_id(&self) -> Uuid;
}
