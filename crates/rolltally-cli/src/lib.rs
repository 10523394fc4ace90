// NOTE: rolltally layering
//
// sdk (parse + extract + aggregate) returns one AggregationResult per file.
// Everything in this crate is presentation: choosing who is displayed,
// rendering the report, and formatting clipboard text. Hiding a participant
// here never changes the aggregated numbers.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, FilterArgs};
pub use commands::run;
