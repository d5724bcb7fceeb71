//! Subscription repository and service traits.

use async_trait::async_trait;

use super::plans_model::{Subscription, SubscriptionPlan};
use crate::errors::Result;

/// Trait defining the contract for subscription sources.
///
/// The remote side is the billing service; the cache is the locally
/// persisted fallback used when the billing service is unreachable.
#[async_trait]
pub trait SubscriptionRepositoryTrait: Send + Sync {
    /// Authoritative record from the billing service, if any.
    async fn get_remote(&self) -> Result<Option<Subscription>>;

    /// Locally persisted fallback copy, if any.
    fn get_cached(&self) -> Result<Option<Subscription>>;

    /// Persists the remote record locally for offline use.
    async fn set_cached(&self, subscription: &Subscription) -> Result<()>;
}

/// Trait defining the contract for subscription service operations.
#[async_trait]
pub trait SubscriptionServiceTrait: Send + Sync {
    /// The subscription record that takes precedence, if any source has a
    /// recognized one.
    async fn get_subscription(&self) -> Result<Option<Subscription>>;

    /// The plan currently in force: source precedence plus the downgrade
    /// of lapsed subscriptions to the free tier.
    async fn effective_plan(&self) -> Result<SubscriptionPlan>;
}
