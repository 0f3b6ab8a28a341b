mod side;
mod statistics;
mod team;

pub mod intent;

pub use side::*;
pub use statistics::*;
pub use team::*;
