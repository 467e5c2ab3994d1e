//! Random (version 4) adapter for the `IdGenerator` port.

use uuid::Uuid;

use crate::ports::IdGenerator;

/// Draws a fresh random version-4 UUID on every call.
///
/// A missing random source is not handled here: the underlying generator
/// panics and takes the process down with a non-zero status.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl RandomIdGenerator {
    /// Creates a new random ID generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use uuid::{Variant, Version};

    use super::*;

    #[test]
    fn sets_version_and_variant_bits() {
        let id = RandomIdGenerator::new().generate_id();

        assert_eq!(id.get_version(), Some(Version::Random));
        assert_eq!(id.get_variant(), Variant::RFC4122);
    }

    #[test]
    fn renders_canonical_lowercase_form() {
        let text = RandomIdGenerator::new().generate_id().to_string();
        let bytes = text.as_bytes();

        assert_eq!(text.len(), 36);
        for (i, b) in bytes.iter().enumerate() {
            if matches!(i, 8 | 13 | 18 | 23) {
                assert_eq!(*b, b'-', "expected hyphen at {i} in {text}");
            } else {
                assert!(matches!(b, b'0'..=b'9' | b'a'..=b'f'), "bad hex at {i} in {text}");
            }
        }
        assert_eq!(bytes[14], b'4');
        assert!(matches!(bytes[19], b'8' | b'9' | b'a' | b'b'));
    }

    #[test]
    fn generates_distinct_ids() {
        let gen = RandomIdGenerator::new();
        let ids: HashSet<Uuid> = (0..10_000).map(|_| gen.generate_id()).collect();

        assert_eq!(ids.len(), 10_000);
    }
}
