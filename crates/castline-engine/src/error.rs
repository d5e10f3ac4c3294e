//! Error types for the scenario runner binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during startup and the tick loop.

/// Top-level error for the scenario runner binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: crate::config::ConfigError,
    },

    /// Static table construction or validation failed.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: castline_world::WorldError,
    },

    /// Angler state setup failed.
    #[error("actor error: {source}")]
    Actor {
        /// The underlying actor error.
        #[from]
        source: castline_actors::ActorError,
    },

    /// The tick loop failed.
    #[error("tick error: {source}")]
    Tick {
        /// The underlying tick error.
        #[from]
        source: castline_core::TickError,
    },

    /// The scenario configuration is internally inconsistent.
    #[error("scenario error: {message}")]
    Scenario {
        /// Description of the inconsistency.
        message: String,
    },
}
