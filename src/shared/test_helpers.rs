//! Builders for request DTOs and an in-memory test server.

use axum_test::TestServer;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};

use crate::core::app::{api_router, Services};
use crate::features::coming_soon::dtos::CreateComingSoonDto;
use crate::features::contact::dtos::CreateContactDto;
use crate::features::events::dtos::CreateEventDto;
use crate::features::news::dtos::CreateNewsDto;
use crate::features::stores::dtos::CreateStoreDto;

/// Midnight UTC on the given day
pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

pub fn store_dto(name: &str, category: &str, floor: &str, is_open: bool) -> CreateStoreDto {
    CreateStoreDto {
        name: name.to_string(),
        category: category.to_string(),
        subcategory: None,
        floor: floor.to_string(),
        unit: "G01".to_string(),
        hours: "10:00 AM - 9:00 PM".to_string(),
        description: Some(format!("{} at Westfield Plaza", name)),
        image: None,
        phone: None,
        website: None,
        is_open,
    }
}

/// JSON body accepted by `POST /api/stores`
pub fn store_body(name: &str, category: &str, floor: &str, is_open: bool) -> Value {
    json!({
        "name": name,
        "category": category,
        "floor": floor,
        "unit": "F12",
        "hours": "10:00 AM - 9:00 PM",
        "description": format!("{} flagship store", name),
        "isOpen": is_open
    })
}

pub fn event_dto(
    title: &str,
    event_type: &str,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    is_active: bool,
) -> CreateEventDto {
    CreateEventDto {
        title: title.to_string(),
        description: format!("{} at Centre Court", title),
        image: None,
        start_date,
        end_date,
        event_type: event_type.to_string(),
        location: Some("Centre Court".to_string()),
        participating_stores: vec![],
        is_active,
    }
}

pub fn news_dto(
    title: &str,
    category: &str,
    publish_date: Option<DateTime<Utc>>,
    is_published: bool,
) -> CreateNewsDto {
    CreateNewsDto {
        title: title.to_string(),
        excerpt: format!("{} in brief", title),
        content: format!("{} in full", title),
        image: None,
        category: category.to_string(),
        author: "Marketing Team".to_string(),
        publish_date,
        is_published,
    }
}

pub fn coming_soon_dto(name: &str, opening_date: DateTime<Utc>) -> CreateComingSoonDto {
    CreateComingSoonDto {
        name: name.to_string(),
        description: format!("{} opens soon", name),
        image: None,
        floor: "Ground Floor".to_string(),
        unit: "G45".to_string(),
        opening_date,
        category: "Retail".to_string(),
    }
}

pub fn contact_dto(subject: &str) -> CreateContactDto {
    CreateContactDto {
        first_name: "Ana".to_string(),
        last_name: "Lee".to_string(),
        email: "ana@example.com".to_string(),
        subject: subject.to_string(),
        related_store: None,
        message: "Could someone get back to me?".to_string(),
    }
}

/// Test server over the full API on a fresh in-memory backend
pub fn test_server() -> TestServer {
    TestServer::new(api_router(&Services::memory())).unwrap()
}
