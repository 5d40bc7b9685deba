//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `scoring.rs` — deterministic ethical-risk scoring + risk bands.
//! - `recommend.rs` — content-based catalog ranking with random fallback.
//! - `label.rs` — label acquisition (mock + AI fallback chain).
//! - `session.rs` — per-process session state, quota enforcement.
//! - `config.rs` — toml config (keyword tables, label-service settings).
//! - `output.rs` — JSON/text output helpers + error codes.
//! - `audit.rs` — best-effort action trail.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod audit;
pub mod config;
pub mod label;
pub mod output;
pub mod recommend;
pub mod scoring;
pub mod session;
