use utoipa::{Modify, OpenApi};

use crate::core::config::SwaggerConfig;
use crate::features::coming_soon::{dtos as coming_soon_dtos, handlers as coming_soon_handlers};
use crate::features::contact::{dtos as contact_dtos, handlers as contact_handlers};
use crate::features::events::{dtos as events_dtos, handlers as events_handlers};
use crate::features::news::{dtos as news_dtos, handlers as news_handlers};
use crate::features::newsletter::{dtos as newsletter_dtos, handlers as newsletter_handlers};
use crate::features::stores::{dtos as stores_dtos, handlers as stores_handlers};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Stores
        stores_handlers::list_stores,
        stores_handlers::get_store,
        stores_handlers::create_store,
        stores_handlers::update_store,
        stores_handlers::delete_store,
        // Events
        events_handlers::list_events,
        events_handlers::get_event,
        events_handlers::create_event,
        events_handlers::update_event,
        events_handlers::delete_event,
        // News
        news_handlers::list_news,
        news_handlers::get_news,
        news_handlers::create_news,
        news_handlers::update_news,
        news_handlers::delete_news,
        // Coming soon
        coming_soon_handlers::list_coming_soon,
        coming_soon_handlers::get_coming_soon,
        coming_soon_handlers::create_coming_soon,
        coming_soon_handlers::update_coming_soon,
        coming_soon_handlers::delete_coming_soon,
        // Contact
        contact_handlers::submit_contact,
        contact_handlers::list_contact_submissions,
        contact_handlers::update_contact_submission,
        // Newsletter
        newsletter_handlers::subscribe,
        newsletter_handlers::list_subscriptions,
        newsletter_handlers::update_subscription,
    ),
    components(
        schemas(
            ErrorResponse,
            stores_dtos::CreateStoreDto,
            stores_dtos::UpdateStoreDto,
            stores_dtos::StoreResponseDto,
            events_dtos::CreateEventDto,
            events_dtos::UpdateEventDto,
            events_dtos::EventResponseDto,
            news_dtos::CreateNewsDto,
            news_dtos::UpdateNewsDto,
            news_dtos::NewsResponseDto,
            coming_soon_dtos::CreateComingSoonDto,
            coming_soon_dtos::UpdateComingSoonDto,
            coming_soon_dtos::ComingSoonResponseDto,
            contact_dtos::CreateContactDto,
            contact_dtos::UpdateContactDto,
            contact_dtos::ContactResponseDto,
            newsletter_dtos::SubscribeDto,
            newsletter_dtos::UpdateSubscriptionDto,
            newsletter_dtos::SubscriptionResponseDto,
        )
    ),
    tags(
        (name = "stores", description = "Store directory with category, floor and text filters"),
        (name = "events", description = "Mall events and promotions"),
        (name = "news", description = "News articles"),
        (name = "coming-soon", description = "Upcoming store openings"),
        (name = "contact", description = "Contact form submissions"),
        (name = "newsletter", description = "Newsletter subscriptions"),
    ),
    info(
        title = "Mall Directory API",
        version = "0.1.0",
        description = "Store, event and news directory for a shopping centre",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl From<&SwaggerConfig> for SwaggerInfoModifier {
    fn from(config: &SwaggerConfig) -> Self {
        Self {
            title: config.title.clone(),
            version: config.version.clone(),
            description: config.description.clone(),
        }
    }
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_resource() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/stores",
            "/api/stores/{id}",
            "/api/events",
            "/api/events/{id}",
            "/api/news",
            "/api/news/{id}",
            "/api/coming-soon",
            "/api/coming-soon/{id}",
            "/api/contact",
            "/api/contact/{id}",
            "/api/newsletter",
            "/api/newsletter/{id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_info_modifier_applies_config() {
        let mut doc = ApiDoc::openapi();
        let config = SwaggerConfig {
            title: "Westfield Plaza".to_string(),
            version: "2.0.0".to_string(),
            description: "Directory".to_string(),
        };
        SwaggerInfoModifier::from(&config).modify(&mut doc);

        assert_eq!(doc.info.title, "Westfield Plaza");
        assert_eq!(doc.info.version, "2.0.0");
        assert_eq!(doc.info.description.as_deref(), Some("Directory"));
    }
}
