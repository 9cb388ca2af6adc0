pub mod store_handler;

pub use store_handler::*;
