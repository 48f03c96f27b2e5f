pub mod scanner;
pub mod threshold;

pub use scanner::*;
pub use threshold::*;
