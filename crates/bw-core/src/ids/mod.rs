//! ID type wrappers for type safety.

pub mod guardian_id;

pub use guardian_id::GuardianId;
