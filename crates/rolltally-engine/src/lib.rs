// Engine module - aggregation of extracted roll events
// This layer sits between typed events (types) and presentation

mod aggregate;
mod display;

pub use aggregate::{Aggregator, aggregate};
pub use display::DisplaySet;
