pub mod movement;
pub mod placement;
pub mod cascade;
pub mod arbiter;
pub mod scoring;

pub use movement::*;
pub use placement::*;
pub use cascade::*;
pub use arbiter::*;
pub use scoring::*;
