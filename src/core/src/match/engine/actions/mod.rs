mod action;
mod decision;
mod selector;

pub use action::*;
pub use decision::*;
pub use selector::*;
