//! # Querydeck Architecture
//!
//! Querydeck resolves short prefixed inputs ("yt lofi beats") into search URLs, manages the
//! user's custom search providers, and formats the current date with user-defined names.
//!
//! Like any UI-agnostic core, it is a library first. The CLI is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, prints, prompts, opens the browser     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Packages engine results as CmdResult + CmdMessage        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (registry.rs, resolver.rs, date.rs, template.rs)    │
//! │  - Provider CRUD, prefix resolution, date formatting        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract ConfigStore trait (string key/value)            │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr, prompts, or exits the process.
//! Diagnostics go through `tracing`; the binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user-facing operation
//! - [`registry`]: Custom query CRUD and the default provider
//! - [`resolver`]: Prefix matching and URL construction
//! - [`date`]: Day/month name schemas and date formatting
//! - [`providers`]: The built-in search provider catalog
//! - [`template`]: `{q}` URL templates and query encoding
//! - [`config`]: Persisted setting keys and their (de)serialization
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Query`, `Provider`)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod date;
pub mod error;
pub mod model;
pub mod providers;
pub mod registry;
pub mod resolver;
pub mod store;
pub mod template;
