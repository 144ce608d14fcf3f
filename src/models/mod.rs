pub mod gap;
pub mod report;
pub mod repository;
pub mod stack;

pub use gap::*;
pub use report::*;
pub use repository::*;
pub use stack::*;
