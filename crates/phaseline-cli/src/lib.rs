// NOTE: Architecture Rationale
//
// Why a local export file (not a live sheet connection)?
// - The hosted sheet service needs credentials and rate limiting that belong
//   to whoever schedules the export, not to a query tool
// - A snapshot file makes every run reproducible and testable offline
// - The TTL cache keeps the "refreshed at most hourly" behavior of the
//   original dashboard without any ambient state
//
// Why match columns by title (not position)?
// - Sheet owners reorder and retitle columns without notice
// - A title map in the config survives both, and a mismatch degrades to
//   absent fields instead of misread dates

mod args;
mod cache;
mod commands;
pub mod config;
mod handlers;
mod source;
pub mod types;

pub use args::{Cli, Commands, FilterArgs};
pub use commands::run;
