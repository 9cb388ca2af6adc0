use async_trait::async_trait;
use chrono::Utc;

use crate::core::error::Result;
use crate::features::news::dtos::{CreateNewsDto, UpdateNewsDto};
use crate::features::news::models::{sort_news, News, NewsFilter};
use crate::features::news::repositories::NewsRepository;
use crate::shared::memory::MemoryTable;

#[derive(Default)]
pub struct MemoryNewsRepository {
    table: MemoryTable<News>,
}

impl MemoryNewsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NewsRepository for MemoryNewsRepository {
    async fn list(&self, filter: &NewsFilter) -> Result<Vec<News>> {
        let mut items = self.table.select(|news| filter.matches(news)).await;
        sort_news(&mut items);
        Ok(items)
    }

    async fn get(&self, id: i32) -> Result<Option<News>> {
        Ok(self.table.get(id).await)
    }

    async fn create(&self, input: &CreateNewsDto) -> Result<News> {
        let now = Utc::now();
        let news = self
            .table
            .insert_with(|id| News {
                id,
                title: input.title.clone(),
                excerpt: input.excerpt.clone(),
                content: input.content.clone(),
                image: input.image.clone(),
                category: input.category.clone(),
                author: input.author.clone(),
                publish_date: input.publish_date.unwrap_or(now),
                is_published: input.is_published,
                created_at: now,
            })
            .await;
        Ok(news)
    }

    async fn update(&self, id: i32, input: &UpdateNewsDto) -> Result<Option<News>> {
        let updated = self
            .table
            .update_with(id, |news| {
                if let Some(title) = &input.title {
                    news.title = title.clone();
                }
                if let Some(excerpt) = &input.excerpt {
                    news.excerpt = excerpt.clone();
                }
                if let Some(content) = &input.content {
                    news.content = content.clone();
                }
                if let Some(image) = &input.image {
                    news.image = Some(image.clone());
                }
                if let Some(category) = &input.category {
                    news.category = category.clone();
                }
                if let Some(author) = &input.author {
                    news.author = author.clone();
                }
                if let Some(publish_date) = input.publish_date {
                    news.publish_date = publish_date;
                }
                if let Some(is_published) = input.is_published {
                    news.is_published = is_published;
                }
            })
            .await;
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        Ok(self.table.remove(id).await)
    }
}
