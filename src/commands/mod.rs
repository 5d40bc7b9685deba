//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs` — one-shot commands: score/scan/recommend/shop/charities.
//! - `session.rs` — interactive per-process session loop.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod runtime;
pub mod session;

pub use runtime::handle_runtime_commands;
pub use session::handle_session_command;
