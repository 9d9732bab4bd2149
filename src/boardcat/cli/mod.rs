//! # CLI Layer
//!
//! One possible UI client for boardcat. The only place that knows about
//! terminal I/O, logging setup and exit codes.
//!
//! ## Commands
//!
//! - `boardcat filter [FRAGMENT] [flags]`: apply a fragment and/or flags, list
//!   the visible cards, the count line and the resulting fragment. Running
//!   `boardcat` with no command is the same as `boardcat filter`.
//! - `boardcat options [FRAGMENT]`: the choices each facet offers.
//! - `boardcat tags [QUERY]`: hardware tag suggestions.
//! - `boardcat config [KEY] [VALUE]`: show or change configuration.
//!
//! ## Module Structure
//!
//! - `setup`: argument parsing via clap
//! - `commands`: context wiring and per-command handlers
//! - `print`: output formatting
//! - `styles`: terminal styles

mod commands;
mod print;
pub mod setup;
mod styles;

pub use commands::run;
