//! Subscription plan domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::plans_constants::{
    FEATURE_ADVANCED_STATS, FEATURE_EDUCATION, FEATURE_EXPORT, FEATURE_LEADERBOARD,
    FREE_PLAN_MAX_ENTRIES, PLAN_ID_FREE, PLAN_ID_LIFETIME, PLAN_ID_PRO,
};

/// Static configuration for one subscription tier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub plan_id: String,
    /// Entry cap for the trade log; `None` means unbounded.
    pub max_entries: Option<u32>,
    pub features: Vec<String>,
    pub price: f64,
}

/// Per-user subscription record, replaced wholesale on upgrade/downgrade
/// events coming from the billing service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub plan_id: String,
    pub is_active: bool,
    /// Absent means non-expiring (free and lifetime plans).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Subscription {
    /// Whether the subscription is in force at `now`: active and either
    /// non-expiring or not yet expired.
    pub fn is_current(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.expires_at.map_or(true, |expires_at| expires_at > now)
    }
}

/// The plan table supplied to the gate.
///
/// The free plan always exists: construction inserts the reference free
/// plan when the supplied table lacks one, so plan resolution is total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanCatalog {
    free: SubscriptionPlan,
    paid: Vec<SubscriptionPlan>,
}

impl PlanCatalog {
    /// Builds a catalog from a plan table. The first entry with the free
    /// plan id becomes the fallback plan; duplicates and paid tiers keep
    /// their supplied order.
    pub fn new(plans: Vec<SubscriptionPlan>) -> Self {
        let mut free = None;
        let mut paid = Vec::new();
        for plan in plans {
            if free.is_none() && plan.plan_id == PLAN_ID_FREE {
                free = Some(plan);
            } else {
                paid.push(plan);
            }
        }
        PlanCatalog {
            free: free.unwrap_or_else(Self::reference_free_plan),
            paid,
        }
    }

    /// Looks up a plan by id.
    pub fn get(&self, plan_id: &str) -> Option<&SubscriptionPlan> {
        if self.free.plan_id == plan_id {
            return Some(&self.free);
        }
        self.paid.iter().find(|plan| plan.plan_id == plan_id)
    }

    /// Looks up a plan by id, falling back to the free plan when the id is
    /// unrecognized. Malformed data never unlocks an unbounded tier and
    /// never fails.
    pub fn resolve(&self, plan_id: &str) -> &SubscriptionPlan {
        self.get(plan_id).unwrap_or(&self.free)
    }

    /// The fallback plan.
    pub fn free_plan(&self) -> &SubscriptionPlan {
        &self.free
    }

    /// All plans, free tier first.
    pub fn plans(&self) -> Vec<&SubscriptionPlan> {
        std::iter::once(&self.free).chain(self.paid.iter()).collect()
    }

    fn reference_free_plan() -> SubscriptionPlan {
        SubscriptionPlan {
            plan_id: PLAN_ID_FREE.to_string(),
            max_entries: Some(FREE_PLAN_MAX_ENTRIES),
            features: vec![FEATURE_EDUCATION.to_string()],
            price: 0.0,
        }
    }

    fn paid_features() -> Vec<String> {
        vec![
            FEATURE_EDUCATION.to_string(),
            FEATURE_ADVANCED_STATS.to_string(),
            FEATURE_LEADERBOARD.to_string(),
            FEATURE_EXPORT.to_string(),
        ]
    }
}

impl Default for PlanCatalog {
    /// The reference plan table: free capped at 30 entries, pro and
    /// lifetime unbounded.
    fn default() -> Self {
        PlanCatalog {
            free: Self::reference_free_plan(),
            paid: vec![
                SubscriptionPlan {
                    plan_id: PLAN_ID_PRO.to_string(),
                    max_entries: None,
                    features: Self::paid_features(),
                    price: 9.99,
                },
                SubscriptionPlan {
                    plan_id: PLAN_ID_LIFETIME.to_string(),
                    max_entries: None,
                    features: Self::paid_features(),
                    price: 99.0,
                },
            ],
        }
    }
}
