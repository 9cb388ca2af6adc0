pub mod news_dto;

pub use news_dto::{CreateNewsDto, NewsQueryParams, NewsResponseDto, UpdateNewsDto};
