//! Port traits defining external boundaries.
//!
//! The only boundary this tool crosses is the random source behind
//! identifier generation. Implementations live in `src/adapters/`.

pub mod id_gen;

pub use id_gen::IdGenerator;
