//! Shared test utilities for the assetgen workspace.
//!
//! This crate provides standardised project fixtures for the crate test
//! suites. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`project`]: [`project::TestProject`] builder for Flutter-style project layouts

pub mod project;

pub use project::{MINIMAL_PUBSPEC, TestProject};
