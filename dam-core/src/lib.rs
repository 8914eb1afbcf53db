#![warn(missing_docs)]
//! Core models and ports for day-ahead market clearing analysis.
//!
//! This crate defines the domain vocabulary shared by the clearing engine and
//! its adapters: raw orders, per-side step curves, clearing points, and the
//! report configuration. It contains data structures and their validation,
//! but no clearing logic; the algorithms live in `dam-clearing`.

/// Core domain models for the day-ahead market.
///
/// The models in this module are primarily data structures with minimal
/// business logic. Anything deserialized from an untrusted source passes
/// through a validating DTO, so a successfully constructed value is always
/// well-formed.
pub mod models;

/// Interface traits for the day-ahead market tooling.
///
/// These traits define the contract between the clearing logic and external
/// collaborators (order storage, chart renderers) without specifying
/// implementation details, so infrastructure can be swapped without touching
/// the computational core.
pub mod ports;
