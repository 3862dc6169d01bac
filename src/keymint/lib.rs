//! # Keymint Architecture
//!
//! Keymint is a **UI-agnostic generator library**. This is not a CLI application that
//! happens to have some library code—it's a library that happens to have a CLI client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, styles notifications, prints values    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the session (last values, theme, notification)      │
//! │  - Enforces the copy affordance                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure logic: generation, copy, theme transitions          │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions beyond the injected collaborators     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collaborators (store/, clipboard.rs, ambient.rs)           │
//! │  - PrefStore trait: FilePrefs (production), MemoryPrefs     │
//! │  - Clipboard trait: SystemClipboard (production), doubles   │
//! │  - AmbientScheme trait: host dark/light hint                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types (`Result<CmdResult>`), never writes to stdout/stderr, and never
//! calls `std::process::exit`. The same core could serve a GUI, a web
//! frontend, or any other UI.
//!
//! ## Randomness
//!
//! The generators draw from a general-purpose, **non-cryptographic** random
//! source. Output shape is guaranteed; unpredictability is not. Do not use
//! these values where an attacker guessing them would matter.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Generation, copy, and theme logic
//! - [`model`]: Core data types (`Identifier`, `HexKey`, `Theme`, `Notification`, `Session`)
//! - [`store`]: Preference storage abstraction and implementations
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`ambient`]: Host color-scheme preference query
//! - [`error`]: Error types

pub mod ambient;
pub mod api;
pub mod clipboard;
pub mod commands;
pub mod error;
pub mod model;
pub mod store;
