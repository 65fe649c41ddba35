pub mod ai;
pub mod input;
pub mod physics;

pub use ai::*;
pub use input::*;
pub use physics::*;
