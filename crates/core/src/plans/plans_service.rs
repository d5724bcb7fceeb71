use chrono::Utc;
use log::{debug, warn};
use std::sync::Arc;

use async_trait::async_trait;

use super::plans_gate::PlanGate;
use super::plans_model::{Subscription, SubscriptionPlan};
use super::plans_traits::{SubscriptionRepositoryTrait, SubscriptionServiceTrait};
use crate::errors::Result;

/// Service resolving the subscription in force.
///
/// Plan resolution must stay total: a failing source is treated as absent
/// (with a warning) rather than propagated, so the UI always has a plan
/// to work with.
pub struct SubscriptionService {
    repository: Arc<dyn SubscriptionRepositoryTrait>,
    plan_gate: Arc<PlanGate>,
}

impl SubscriptionService {
    /// Creates a new SubscriptionService instance.
    pub fn new(repository: Arc<dyn SubscriptionRepositoryTrait>, plan_gate: Arc<PlanGate>) -> Self {
        Self {
            repository,
            plan_gate,
        }
    }

    /// Fetches both sources, writing the remote record through to the
    /// cache when one arrives.
    async fn load_sources(&self) -> (Option<Subscription>, Option<Subscription>) {
        let remote = match self.repository.get_remote().await {
            Ok(remote) => remote,
            Err(e) => {
                warn!("Billing service unavailable, using cached subscription: {}", e);
                None
            }
        };

        // Write the remote record through to the cache, but never overwrite
        // it with a record the plan table does not recognize.
        if let Some(ref subscription) = remote {
            if self.plan_gate.catalog().get(&subscription.plan_id).is_some() {
                if let Err(e) = self.repository.set_cached(subscription).await {
                    warn!("Failed to cache subscription: {}", e);
                }
            }
        }

        let cached = match self.repository.get_cached() {
            Ok(cached) => cached,
            Err(e) => {
                warn!("Subscription cache unreadable: {}", e);
                None
            }
        };

        (remote, cached)
    }
}

#[async_trait]
impl SubscriptionServiceTrait for SubscriptionService {
    async fn get_subscription(&self) -> Result<Option<Subscription>> {
        let (remote, cached) = self.load_sources().await;
        Ok(self
            .plan_gate
            .resolve_source(remote.as_ref(), cached.as_ref())
            .cloned())
    }

    async fn effective_plan(&self) -> Result<SubscriptionPlan> {
        let (remote, cached) = self.load_sources().await;

        if let Some(subscription) = self
            .plan_gate
            .resolve_source(remote.as_ref(), cached.as_ref())
        {
            if !subscription.is_current(Utc::now()) {
                debug!(
                    "Subscription for plan '{}' lapsed, downgrading to free",
                    subscription.plan_id
                );
                return Ok(self.plan_gate.catalog().free_plan().clone());
            }
        }

        Ok(self
            .plan_gate
            .resolve_plan(remote.as_ref(), cached.as_ref())
            .clone())
    }
}
