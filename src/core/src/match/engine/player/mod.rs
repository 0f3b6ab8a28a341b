pub mod injury;
pub mod movement;
pub mod offside;
pub mod player;
pub mod statistics;
pub mod tackle;

pub use injury::*;
pub use movement::*;
pub use offside::*;
pub use player::*;
pub use statistics::*;
pub use tackle::*;
