pub mod newsletter_service;

pub use newsletter_service::NewsletterService;
