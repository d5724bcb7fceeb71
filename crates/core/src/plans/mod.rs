//! Plans module - subscription plans, the entry gate, and resolution.

mod plans_constants;
mod plans_gate;
mod plans_model;
mod plans_service;
mod plans_traits;

#[cfg(test)]
mod plans_gate_tests;



pub use plans_constants::*;
pub use plans_gate::{PlanGate, RemainingEntries};
pub use plans_model::{PlanCatalog, Subscription, SubscriptionPlan};
pub use plans_service::SubscriptionService;
pub use plans_traits::{SubscriptionRepositoryTrait, SubscriptionServiceTrait};
