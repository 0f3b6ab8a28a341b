pub mod math;
pub mod random;
mod time;

pub use math::*;
pub use random::*;
pub use time::*;
