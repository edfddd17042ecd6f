pub mod labels;
pub mod project;
pub mod render;

pub use labels::*;
pub use project::*;
pub use render::*;
