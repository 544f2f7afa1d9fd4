//! # Quotez Architecture
//!
//! Quotez is a **file-backed quote repository** with a small CLI on top. Every quote
//! lives in its own JSON file, identifiers come from a persisted counter, and a
//! consolidated build artifact can be regenerated from the files at any time.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - clap subcommands and the interactive shell               │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Input validation and user-facing messages                │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore, IdAllocator, Listing, Exporter              │
//! │  - StorageBackend trait: FsBackend / MemBackend             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>` (or plain store types), and never writes to stdout or
//! exits the process. Diagnostics go through `tracing`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`command`]: Parser for `action?key=value` command lines
//! - [`store`]: Record storage, id allocation, listing and export
//! - [`model`]: Core data types (`Quote`, `Page`)
//! - [`config`]: Store configuration
//! - [`init`]: Home directory resolution and context wiring
//! - [`error`]: Error types

pub mod api;
pub mod command;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
