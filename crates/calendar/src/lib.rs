mod grid;
mod month;
mod selection;

pub use grid::*;
pub use month::*;
pub use selection::*;
