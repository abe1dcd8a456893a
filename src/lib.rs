pub mod cli;
pub mod debounce;
pub mod engine;
pub mod io;
pub mod model;
pub mod ops;
