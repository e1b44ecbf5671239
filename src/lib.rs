//! Library entry for TokenTrackr exposing the dashboard runtime and its layers
//! for the binary and integration tests.

pub mod app;
pub mod args;
pub mod events;
pub mod graphql;
pub mod logic;
pub mod queries;
pub mod state;
pub mod theme;
pub mod ui;

/// Result alias for application plumbing (terminal, runtime, startup).
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
