pub mod coming_soon;
pub mod contact;
pub mod events;
pub mod news;
pub mod newsletter;
pub mod stores;
