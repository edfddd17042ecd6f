pub mod share;
pub mod svg;

pub use share::*;
pub use svg::*;
