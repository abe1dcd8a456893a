pub mod catalog_io;
pub mod snapshot;
pub mod store;
