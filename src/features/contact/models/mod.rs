pub mod contact_submission;

pub use contact_submission::{sort_newest_first, ContactSubmission};
