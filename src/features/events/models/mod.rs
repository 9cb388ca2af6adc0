pub mod event;

pub use event::{sort_events, Event, EventFilter};
