//! Library crate for logotruffle-back, exposing modules for binaries and integration tests.

/// Brand packages built on top of the palette engine.
pub mod brand;
/// Runtime configuration.
pub mod config;
/// Key-value storage and persisted models.
pub mod dao;
mod dto;
/// Palette synthesis.
pub mod engine;
mod error;
/// Image providers for logo generation.
pub mod providers;
/// HTTP routes.
pub mod routes;
/// Application services behind the routes.
pub mod services;
/// Shared application state.
pub mod state;
