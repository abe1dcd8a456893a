pub mod catalog;
pub mod completion;
pub mod selection;

pub use catalog::*;
pub use completion::*;
pub use selection::*;
