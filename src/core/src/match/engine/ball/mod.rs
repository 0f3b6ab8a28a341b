mod ball;
mod deflection;
mod kicks;
mod trajectory;

pub use ball::*;
pub use deflection::*;
pub use kicks::*;
pub use trajectory::*;
