mod half;
mod manager;
mod match_state;
mod possession;

pub use half::*;
pub use manager::*;
pub use match_state::*;
pub use possession::*;
