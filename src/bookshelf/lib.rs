//! # Bookshelf Architecture
//!
//! Bookshelf is a small, local book catalog. The library holds every piece of
//! catalog logic; the `bookshelf` binary is one client of it that happens to
//! be an interactive terminal menu.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Menu loop, one-shot subcommands, config, tracing setup   │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Owns the one Catalog of the process                      │
//! │  - Parses UI text into typed criteria                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - Turn catalog outcomes into CmdResult + messages          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog (catalog.rs) over Storage (store/)                 │
//! │  - In-memory books, id registry, queries, persist-on-write  │
//! │  - FileBackend (production), MemBackend (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identifiers
//!
//! Book ids are small positive integers. Each catalog owns an
//! [`ids::IdRegistry`] rebuilt on every load; new books take the smallest
//! free id, so gaps left by deletions are refilled.
//!
//! ## Errors as Outcomes
//!
//! "Not found", an invalid status, a malformed catalog file and a failed
//! save are ordinary outcomes. They come back as values
//! ([`catalog::LoadOutcome`], [`catalog::Mutation`]) and become messages in
//! a [`commands::CmdResult`]; the UI decides how to show them.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`catalog`]: The in-memory catalog and its persistence rules
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Book`, `Status` and search `Criteria`
//! - [`ids`]: Id assignment
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod ids;
pub mod model;
pub mod store;
