pub mod coming_soon_store;

pub use coming_soon_store::{sort_by_opening, ComingSoonStore};
