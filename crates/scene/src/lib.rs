pub mod registry;
pub mod surface;

pub use registry::*;
pub use surface::*;
