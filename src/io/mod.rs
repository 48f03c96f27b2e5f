pub mod loader;
pub mod writer;

pub use loader::*;
pub use writer::*;
