//! Trait definitions implemented by protocol bindings.
//!
//! The traits are defined here in `dataprep-core` so that services depend
//! only on the abstraction, never on a concrete binding.

pub mod session;

pub use session::{CmisSession, SessionProvider};
