pub mod interval;
pub mod phase;
pub mod record;
pub mod schedule;

pub use interval::*;
pub use phase::*;
pub use record::*;
pub use schedule::*;
