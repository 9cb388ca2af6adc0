pub mod news_handler;

pub use news_handler::*;
