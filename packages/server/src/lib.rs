//! HTTP service for the sales assistant.
//!
//! Exposes competitor-site analysis and chat (`/value/*`) plus the
//! outreach-note generator (`/linkedin/*`). The request layer is a thin
//! mapping onto [`competitor_analysis::AnalysisService`]; all domain logic
//! lives in that crate.

pub mod config;
pub mod outreach;
pub mod server;

pub use config::Config;
