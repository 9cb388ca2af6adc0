use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::newsletter::dtos::{
    SubscribeDto, SubscriptionResponseDto, UpdateSubscriptionDto,
};
use crate::features::newsletter::models::normalize_email;
use crate::features::newsletter::repositories::NewsletterRepository;

/// Service for newsletter subscriptions
pub struct NewsletterService {
    repository: Arc<dyn NewsletterRepository>,
}

impl NewsletterService {
    pub fn new(repository: Arc<dyn NewsletterRepository>) -> Self {
        Self { repository }
    }

    /// Subscribe an email address. Addresses are compared case-insensitively.
    pub async fn subscribe(&self, dto: SubscribeDto) -> Result<SubscriptionResponseDto> {
        let email = normalize_email(&dto.email);
        let subscription = self.repository.create(&email).await.inspect_err(|e| {
            if matches!(e, AppError::Conflict(_)) {
                tracing::warn!("Duplicate newsletter subscription rejected");
            }
        })?;

        tracing::info!("Newsletter subscription created: id={}", subscription.id);

        Ok(subscription.into())
    }

    pub async fn list(&self) -> Result<Vec<SubscriptionResponseDto>> {
        let subscriptions = self.repository.list().await?;
        Ok(subscriptions.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        dto: UpdateSubscriptionDto,
    ) -> Result<SubscriptionResponseDto> {
        let subscription = self
            .repository
            .set_active(id, dto.is_active)
            .await?
            .ok_or_else(|| AppError::NotFound("Subscription not found".to_string()))?;

        tracing::info!(
            "Newsletter subscription updated: id={}, active={}",
            subscription.id,
            subscription.is_active
        );

        Ok(subscription.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::Fake;

    use crate::features::newsletter::repositories::MemoryNewsletterRepository;

    fn service() -> NewsletterService {
        NewsletterService::new(Arc::new(MemoryNewsletterRepository::new()))
    }

    fn subscribe_dto(email: &str) -> SubscribeDto {
        SubscribeDto {
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_new_email_is_listed() {
        let service = service();
        let email: String = SafeEmail().fake();

        let created = service.subscribe(subscribe_dto(&email)).await.unwrap();
        assert!(created.is_active);

        let listed = service.list().await.unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let service = service();
        service
            .subscribe(subscribe_dto("shopper@example.com"))
            .await
            .unwrap();

        let err = service
            .subscribe(subscribe_dto(" Shopper@Example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let service = service();
        for email in ["a@example.com", "b@example.com", "c@example.com"] {
            service.subscribe(subscribe_dto(email)).await.unwrap();
        }
        let emails: Vec<String> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.email)
            .collect();
        assert_eq!(emails, vec!["c@example.com", "b@example.com", "a@example.com"]);
    }

    #[tokio::test]
    async fn test_deactivate_subscription() {
        let service = service();
        service
            .subscribe(subscribe_dto("shopper@example.com"))
            .await
            .unwrap();

        let updated = service
            .update(1, UpdateSubscriptionDto { is_active: false })
            .await
            .unwrap();
        assert!(!updated.is_active);

        assert!(matches!(
            service
                .update(7, UpdateSubscriptionDto { is_active: false })
                .await,
            Err(AppError::NotFound(_))
        ));
    }
}
