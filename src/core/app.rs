use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, http::StatusCode, routing::get, Router};
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::core::config::AppConfig;
use crate::core::middleware;
use crate::features::coming_soon::repositories::{
    MemoryComingSoonRepository, PgComingSoonRepository,
};
use crate::features::coming_soon::{routes as coming_soon_routes, ComingSoonService};
use crate::features::contact::repositories::{MemoryContactRepository, PgContactRepository};
use crate::features::contact::{routes as contact_routes, ContactService};
use crate::features::events::repositories::{MemoryEventRepository, PgEventRepository};
use crate::features::events::{routes as events_routes, EventService};
use crate::features::news::repositories::{MemoryNewsRepository, PgNewsRepository};
use crate::features::news::{routes as news_routes, NewsService};
use crate::features::newsletter::repositories::{
    MemoryNewsletterRepository, PgNewsletterRepository,
};
use crate::features::newsletter::{routes as newsletter_routes, NewsletterService};
use crate::features::stores::repositories::{MemoryStoreRepository, PgStoreRepository};
use crate::features::stores::{routes as stores_routes, StoreService};

/// One service per feature, all sharing the same storage backend
#[derive(Clone)]
pub struct Services {
    pub stores: Arc<StoreService>,
    pub events: Arc<EventService>,
    pub news: Arc<NewsService>,
    pub coming_soon: Arc<ComingSoonService>,
    pub contact: Arc<ContactService>,
    pub newsletter: Arc<NewsletterService>,
}

impl Services {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            stores: Arc::new(StoreService::new(Arc::new(PgStoreRepository::new(
                pool.clone(),
            )))),
            events: Arc::new(EventService::new(Arc::new(PgEventRepository::new(
                pool.clone(),
            )))),
            news: Arc::new(NewsService::new(Arc::new(PgNewsRepository::new(
                pool.clone(),
            )))),
            coming_soon: Arc::new(ComingSoonService::new(Arc::new(
                PgComingSoonRepository::new(pool.clone()),
            ))),
            contact: Arc::new(ContactService::new(Arc::new(PgContactRepository::new(
                pool.clone(),
            )))),
            newsletter: Arc::new(NewsletterService::new(Arc::new(
                PgNewsletterRepository::new(pool),
            ))),
        }
    }

    /// Process-local storage; contents are lost on shutdown
    pub fn memory() -> Self {
        Self {
            stores: Arc::new(StoreService::new(Arc::new(MemoryStoreRepository::new()))),
            events: Arc::new(EventService::new(Arc::new(MemoryEventRepository::new()))),
            news: Arc::new(NewsService::new(Arc::new(MemoryNewsRepository::new()))),
            coming_soon: Arc::new(ComingSoonService::new(Arc::new(
                MemoryComingSoonRepository::new(),
            ))),
            contact: Arc::new(ContactService::new(Arc::new(MemoryContactRepository::new()))),
            newsletter: Arc::new(NewsletterService::new(Arc::new(
                MemoryNewsletterRepository::new(),
            ))),
        }
    }
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// All API routes plus `/health`, without middleware
pub fn api_router(services: &Services) -> Router {
    Router::new()
        .merge(stores_routes::routes(Arc::clone(&services.stores)))
        .merge(events_routes::routes(Arc::clone(&services.events)))
        .merge(news_routes::routes(Arc::clone(&services.news)))
        .merge(coming_soon_routes::routes(Arc::clone(&services.coming_soon)))
        .merge(contact_routes::routes(Arc::clone(&services.contact)))
        .merge(newsletter_routes::routes(Arc::clone(&services.newsletter)))
        .route("/health", get(health_check))
}

/// Wrap a router with body limit, CORS, request ids and request tracing.
pub fn with_middleware(router: Router, config: &AppConfig) -> Router {
    router
        .layer(DefaultBodyLimit::max(config.max_request_body_size))
        .layer(middleware::cors_layer(config.cors_allowed_origins.clone()))
        .layer(
            ServiceBuilder::new()
                // Generate X-Request-Id using UUID v7 (or keep a client-provided one)
                .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(middleware::MakeSpanWithRequestId)
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}
