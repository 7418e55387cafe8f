//! Data-driven match setup.
//!
//! This crate reads match content from disk:
//! - Game configuration (TOML)
//! - Fixed scenarios: a board plus players, bombs, and items (RON)
//!
//! Loaders produce `duel-core` types directly. Nothing here takes part in
//! turn resolution.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    BombSpec, ConfigLoader, ContentFactory, ItemSpec, LoadResult, PlayerSpec, ScenarioLoader,
    ScenarioSpec,
};
