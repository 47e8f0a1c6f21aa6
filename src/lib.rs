//! Carecards - a terminal client for browsing hospital cards.
//!
//! This crate provides a splash screen, login and registration forms with
//! inline validation, and a hospital list with a shared reaction counter,
//! laid out as domain, application, infrastructure and presentation layers.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the hospital context, use cases and DTOs.
pub mod application;
/// Domain layer containing entities, forms, errors and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration and catalog adapters.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "carecards";
