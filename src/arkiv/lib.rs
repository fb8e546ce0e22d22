//! # Arkiv Architecture
//!
//! Arkiv is a **UI-agnostic catalog browsing library**. The engine that
//! filters, searches, sorts, and pages through a catalog knows nothing about
//! terminals, browsers, or rendering—the bundled CLI is just one client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, print.rs, wired by main.rs)            │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Facade Layer (browser.rs)                                  │
//! │  - One browsing session: state + catalog + location         │
//! │  - Dispatches transitions, derives the View for rendering   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine Layer (pipeline.rs, pagination.rs, query.rs)        │
//! │  - Pure functions over immutable data                       │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collaborator Seams (catalog.rs, location.rs)               │
//! │  - Catalog: read-only item source, loaded once              │
//! │  - Location trait: the navigable query string the session   │
//! │    reads once at mount and pushes page changes into         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: The Location Is a Channel, Not a Store
//!
//! The query string behind [`location::Location`] is shared external state.
//! The engine reads it exactly once (to seed the starting page at mount) and
//! afterwards only writes to it through a merge-and-push operation that
//! preserves every parameter it does not own. It is never the source of
//! truth for anything but the initial page.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `browser.rs` inward, code takes regular Rust arguments, returns
//! regular Rust types, and never prints, exits, or assumes a terminal. The
//! same engine could back a web shell or a TUI unchanged.
//!
//! ## Testing Strategy
//!
//! 1. **Engine** (`pipeline.rs`, `pagination.rs`, `query.rs`,
//!    `location.rs`, `loading.rs`): thorough unit tests of the pure logic.
//!    This is where the lion's share of testing lives.
//! 2. **Facade** (`browser.rs`): session tests against [`location::MemoryLocation`],
//!    verifying transition wiring, location pushes, and view derivation.
//! 3. **CLI** (`tests/browse_cli.rs`): end-to-end runs of the binary.
//!
//! ## Module Overview
//!
//! - [`browser`]: the session facade—entry point for all operations
//! - [`pipeline`]: filter → search → sort, pure and stable
//! - [`pagination`]: page slicing and the pagination button window
//! - [`query`]: the query state and its named transitions
//! - [`location`]: query-string read/merge and the location seam
//! - [`loading`]: the cancellable delayed-reveal gate
//! - [`catalog`]: the immutable item collection
//! - [`model`]: the `Item` record
//! - [`config`]: browser tuning (page size, button count, reveal delay)
//! - [`error`]: error types

pub mod browser;
pub mod catalog;
pub mod config;
pub mod error;
pub mod loading;
pub mod location;
pub mod model;
pub mod pagination;
pub mod pipeline;
pub mod query;
