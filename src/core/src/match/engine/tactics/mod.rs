mod formation;

pub use formation::*;
