pub mod news;

pub use news::{sort_news, News, NewsFilter};
