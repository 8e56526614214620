mod coord;
mod rectangle;
mod ring;

pub use coord::*;
pub use rectangle::*;
pub use ring::*;
