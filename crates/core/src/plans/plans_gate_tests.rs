//! Tests for the plan gate.

#[cfg(test)]
mod tests {
    use crate::plans::{
        PlanCatalog, PlanGate, RemainingEntries, Subscription, SubscriptionPlan, PLAN_ID_FREE,
        PLAN_ID_PRO,
    };

    fn gate() -> PlanGate {
        PlanGate::new(PlanCatalog::default())
    }

    fn capped_plan(max_entries: u32) -> SubscriptionPlan {
        SubscriptionPlan {
            plan_id: PLAN_ID_FREE.to_string(),
            max_entries: Some(max_entries),
            features: vec![],
            price: 0.0,
        }
    }

    fn unbounded_plan() -> SubscriptionPlan {
        SubscriptionPlan {
            plan_id: PLAN_ID_PRO.to_string(),
            max_entries: None,
            features: vec![],
            price: 9.99,
        }
    }

    fn subscription(plan_id: &str) -> Subscription {
        Subscription {
            plan_id: plan_id.to_string(),
            is_active: true,
            expires_at: None,
        }
    }

    // ==================== can_add_entry Tests ====================

    #[test]
    fn test_can_add_entry_boundaries() {
        let gate = gate();
        let plan = capped_plan(30);

        assert!(gate.can_add_entry(&plan, 29));
        assert!(!gate.can_add_entry(&plan, 30));
        assert!(!gate.can_add_entry(&plan, 31));
    }

    #[test]
    fn test_can_add_entry_unbounded() {
        let gate = gate();
        assert!(gate.can_add_entry(&unbounded_plan(), 1_000_000));
    }

    // ==================== remaining_entries Tests ====================

    #[test]
    fn test_remaining_entries_counts_down_to_zero() {
        let gate = gate();
        let plan = capped_plan(30);

        assert_eq!(
            gate.remaining_entries(&plan, 0),
            RemainingEntries::Limited(30)
        );
        assert_eq!(
            gate.remaining_entries(&plan, 29),
            RemainingEntries::Limited(1)
        );
        assert_eq!(
            gate.remaining_entries(&plan, 30),
            RemainingEntries::Limited(0)
        );
        // Over-cap data floors at zero instead of underflowing
        assert_eq!(
            gate.remaining_entries(&plan, 45),
            RemainingEntries::Limited(0)
        );
    }

    #[test]
    fn test_remaining_entries_unbounded() {
        let gate = gate();
        assert_eq!(
            gate.remaining_entries(&unbounded_plan(), 1_000_000),
            RemainingEntries::Unbounded
        );
    }

    #[test]
    fn test_remaining_entries_consistent_with_can_add_entry() {
        let gate = gate();
        let plan = capped_plan(30);

        for count in 0..40 {
            let remaining = gate.remaining_entries(&plan, count);
            let open = gate.can_add_entry(&plan, count);
            match remaining {
                RemainingEntries::Limited(n) => assert_eq!(n > 0, open),
                RemainingEntries::Unbounded => assert!(open),
            }
        }
    }

    // ==================== resolve_plan Tests ====================

    #[test]
    fn test_resolve_plan_prefers_remote() {
        let gate = gate();
        let plan = gate.resolve_plan(
            Some(&subscription(PLAN_ID_PRO)),
            Some(&subscription(PLAN_ID_FREE)),
        );
        assert_eq!(plan.plan_id, PLAN_ID_PRO);
    }

    #[test]
    fn test_resolve_plan_skips_unrecognized_remote() {
        let gate = gate();
        let plan = gate.resolve_plan(
            Some(&subscription("enterprise")),
            Some(&subscription(PLAN_ID_PRO)),
        );
        assert_eq!(plan.plan_id, PLAN_ID_PRO);
    }

    #[test]
    fn test_resolve_plan_unknown_everywhere_falls_back_to_free() {
        let gate = gate();
        let plan = gate.resolve_plan(
            Some(&subscription("unknown")),
            Some(&subscription("also-unknown")),
        );
        assert_eq!(plan.plan_id, PLAN_ID_FREE);
        assert_eq!(plan.max_entries, Some(30));
    }

    #[test]
    fn test_resolve_plan_no_sources_defaults_to_free() {
        let gate = gate();
        assert_eq!(gate.resolve_plan(None, None).plan_id, PLAN_ID_FREE);
    }
}
