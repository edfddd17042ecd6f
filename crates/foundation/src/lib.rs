pub mod geo;
pub mod rect;

// Foundation crate: small, well-tested primitives only.
pub use geo::*;
pub use rect::*;
