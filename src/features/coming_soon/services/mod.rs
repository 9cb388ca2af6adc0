pub mod coming_soon_service;

pub use coming_soon_service::ComingSoonService;
