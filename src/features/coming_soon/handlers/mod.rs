pub mod coming_soon_handler;

pub use coming_soon_handler::*;
