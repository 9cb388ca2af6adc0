use serde::Deserialize;

use crate::core::app::Services;
use crate::core::error::{AppError, Result};
use crate::features::coming_soon::dtos::CreateComingSoonDto;
use crate::features::events::dtos::CreateEventDto;
use crate::features::news::dtos::CreateNewsDto;
use crate::features::stores::dtos::CreateStoreDto;
use crate::features::stores::models::StoreFilter;

const SAMPLE_DATA: &str = include_str!("../../seeds/sample_data.json");

/// The demo mall catalog shipped with the binary
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SampleData {
    stores: Vec<CreateStoreDto>,
    events: Vec<CreateEventDto>,
    news: Vec<CreateNewsDto>,
    coming_soon: Vec<CreateComingSoonDto>,
}

fn sample_data() -> Result<SampleData> {
    serde_json::from_str(SAMPLE_DATA)
        .map_err(|e| AppError::Internal(format!("Invalid sample data: {}", e)))
}

/// Insert the sample catalog unless stores already exist.
///
/// Returns whether anything was inserted.
pub async fn seed_sample_data(services: &Services) -> Result<bool> {
    if !services.stores.list(&StoreFilter::default()).await?.is_empty() {
        tracing::info!("Stores already present, skipping sample data");
        return Ok(false);
    }

    let data = sample_data()?;
    let counts = (
        data.stores.len(),
        data.events.len(),
        data.news.len(),
        data.coming_soon.len(),
    );

    for store in data.stores {
        services.stores.create(store).await?;
    }
    for event in data.events {
        services.events.create(event).await?;
    }
    for news in data.news {
        services.news.create(news).await?;
    }
    for listing in data.coming_soon {
        services.coming_soon.create(listing).await?;
    }

    tracing::info!(
        "Sample data seeded: stores={}, events={}, news={}, coming_soon={}",
        counts.0,
        counts.1,
        counts.2,
        counts.3
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;
    use validator::Validate;

    use crate::features::events::models::EventFilter;
    use crate::features::news::models::NewsFilter;

    #[test]
    fn test_sample_data_is_valid() {
        let data = assert_ok!(sample_data());
        assert_eq!(data.stores.len(), 8);
        assert_eq!(data.events.len(), 3);
        assert_eq!(data.news.len(), 3);
        assert_eq!(data.coming_soon.len(), 3);

        for store in &data.stores {
            assert_ok!(store.validate(), "store {}", store.name);
        }
        for event in &data.events {
            assert_ok!(event.validate(), "event {}", event.title);
        }
    }

    #[tokio::test]
    async fn test_seed_populates_empty_backend_once() {
        let services = Services::memory();

        assert!(seed_sample_data(&services).await.unwrap());
        assert!(!seed_sample_data(&services).await.unwrap());

        let stores = services.stores.list(&StoreFilter::default()).await.unwrap();
        assert_eq!(stores.len(), 8);
        assert_eq!(stores[0].name, "Apple Store");

        let events = services.events.list(&EventFilter::default()).await.unwrap();
        assert_eq!(events[0].title, "Kids Summer Festival");

        let news = services.news.list(&NewsFilter::default()).await.unwrap();
        assert_eq!(news[0].category, "Centre News");

        let coming = services.coming_soon.list().await.unwrap();
        assert_eq!(coming[0].name, "Tesla Experience Centre");
    }
}
