//! Adapters implementing the port traits.

pub mod fixed;
pub mod random;

pub use fixed::FixedIdGenerator;
pub use random::RandomIdGenerator;
