pub mod store;

pub use store::{sort_stores, Store, StoreFilter};
