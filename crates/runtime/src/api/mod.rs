//! Public runtime API surface.
//!
//! Types downstream clients interact with: errors and the command provider
//! abstraction.

pub mod errors;
pub mod providers;

pub use errors::{Result, RuntimeError};
pub use providers::{CommandProvider, IdleProvider, ScriptedProvider};
