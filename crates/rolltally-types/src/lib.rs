pub mod event;
pub mod stats;
mod util;

pub use event::*;
pub use stats::*;
pub use util::*;
