pub mod prediction;
pub mod server;
pub mod summary;
