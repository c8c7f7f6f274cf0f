pub mod catalog;
pub mod time;

pub use catalog::*;
pub use time::*;
