pub mod store_dto;

pub use store_dto::{CreateStoreDto, StoreQueryParams, StoreResponseDto, UpdateStoreDto};
