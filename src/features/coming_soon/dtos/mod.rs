pub mod coming_soon_dto;

pub use coming_soon_dto::{ComingSoonResponseDto, CreateComingSoonDto, UpdateComingSoonDto};
