//! Admission control for trade entries.
//!
//! The gate is pure: predicates over a plan and an entry count, plus the
//! deterministic source-precedence rule for resolving which plan applies.
//! It never raises the limit-reached condition itself - callers translate
//! a `false` into their own error or UI state.

use serde::{Deserialize, Serialize};

use super::plans_model::{PlanCatalog, Subscription, SubscriptionPlan};

/// Entries still available under a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RemainingEntries {
    Unbounded,
    Limited(u32),
}

/// The plan gate: entry admission plus plan resolution over a supplied
/// plan table.
#[derive(Debug, Clone, Default)]
pub struct PlanGate {
    catalog: PlanCatalog,
}

impl PlanGate {
    /// Creates a gate over the given plan table.
    pub fn new(catalog: PlanCatalog) -> Self {
        PlanGate { catalog }
    }

    /// The plan table this gate resolves against.
    pub fn catalog(&self) -> &PlanCatalog {
        &self.catalog
    }

    /// Whether one more entry may be created: allowed iff the plan is
    /// unbounded or the current count is below the cap.
    pub fn can_add_entry(&self, plan: &SubscriptionPlan, current_entry_count: usize) -> bool {
        match plan.max_entries {
            None => true,
            Some(max_entries) => current_entry_count < max_entries as usize,
        }
    }

    /// Entries still available: `Unbounded` for uncapped plans, otherwise
    /// the cap minus the current count, floored at zero. Consistent with
    /// `can_add_entry`: a positive remainder means the gate is open.
    pub fn remaining_entries(
        &self,
        plan: &SubscriptionPlan,
        current_entry_count: usize,
    ) -> RemainingEntries {
        match plan.max_entries {
            None => RemainingEntries::Unbounded,
            Some(max_entries) => {
                let used = u32::try_from(current_entry_count).unwrap_or(u32::MAX);
                RemainingEntries::Limited(max_entries.saturating_sub(used))
            }
        }
    }

    /// Picks the subscription record that takes precedence: the remote
    /// record when it carries a recognized plan id, else the locally
    /// cached record when it does, else none.
    pub fn resolve_source<'a>(
        &self,
        remote: Option<&'a Subscription>,
        local: Option<&'a Subscription>,
    ) -> Option<&'a Subscription> {
        remote
            .filter(|subscription| self.catalog.get(&subscription.plan_id).is_some())
            .or_else(|| local.filter(|subscription| self.catalog.get(&subscription.plan_id).is_some()))
    }

    /// Resolves the plan in force from the available subscription sources.
    /// Deterministic and total: always exactly one plan, free when neither
    /// source carries a recognized plan id.
    pub fn resolve_plan(
        &self,
        remote: Option<&Subscription>,
        local: Option<&Subscription>,
    ) -> &SubscriptionPlan {
        match self.resolve_source(remote, local) {
            Some(subscription) => self.catalog.resolve(&subscription.plan_id),
            None => self.catalog.free_plan(),
        }
    }
}
