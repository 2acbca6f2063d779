//! Property-based tests for the budget arithmetic.
//!
//! These tests verify that:
//! - The capacity cap follows the tier formula for every tier
//! - Staged accumulation is monotone and flat past the plateau
//! - Category subtotals are linear in the group counts
//! - `over_limit` holds exactly when spending exceeds the cap

use proptest::prelude::*;
use save_budget::{
    CalculatorState, CardGroupState, CostTable, GOD_FLASH_GLOBAL, GroupCostConfig,
    InherentCardState, MAX_INHERENT_CARDS, compute_capacity, compute_category_subtotal,
    compute_staged_cost,
};

/// Strategy for a staged table: entry 0 is the unused origin.
fn arb_step_table() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..=1_000, 1..8).prop_map(|mut steps| {
        steps[0] = 0;
        steps
    })
}

fn arb_group() -> impl Strategy<Value = CardGroupState> {
    (0u32..=500, 0u32..=500, 0u32..=500).prop_map(|(count, normal, god)| CardGroupState {
        count,
        normal_hirameki_count: normal,
        god_hirameki_count: god,
    })
}

fn arb_group_costs() -> impl Strategy<Value = GroupCostConfig> {
    (0u32..=1_000, 0u32..=1_000, any::<bool>()).prop_map(|(base, flash, combines)| {
        GroupCostConfig {
            base_cost: base,
            flash_cost: flash,
            god_combines_with_flash: combines,
        }
    })
}

fn arb_state() -> impl Strategy<Value = CalculatorState> {
    (
        0u32..=60,
        any::<bool>(),
        (0u32..=20, 0u32..=MAX_INHERENT_CARDS as u32),
        arb_group(),
        arb_group(),
        0u32..=100,
    )
        .prop_map(
            |(tier, is_nightmare, (god, removal), common, monster, total_copies)| {
                CalculatorState {
                    tier,
                    is_nightmare,
                    inherent: InherentCardState {
                        god_hirameki_count: god,
                        removal_count: removal,
                        is_conversion_used: [false; MAX_INHERENT_CARDS],
                    },
                    common,
                    monster,
                    total_copies,
                }
            },
        )
}

proptest! {
    /// The cap is tier * 10 + 20, one tier higher under nightmare.
    #[test]
    fn capacity_formula_holds(tier in 0u32..=100_000) {
        prop_assert_eq!(compute_capacity(tier, false), tier * 10 + 20);
        prop_assert_eq!(compute_capacity(tier, true), (tier + 1) * 10 + 20);
    }

    /// One more occurrence never costs less in total.
    #[test]
    fn staged_cost_is_monotone(steps in arb_step_table(), count in 0u32..=200) {
        prop_assert!(compute_staged_cost(count + 1, &steps) >= compute_staged_cost(count, &steps));
    }

    /// Past the table, every occurrence costs exactly the plateau entry.
    #[test]
    fn plateau_marginal_cost_is_flat(steps in arb_step_table(), offset in 0u32..=100) {
        let plateau = *steps.last().unwrap();
        let count = (steps.len() as u32 - 1) + offset;
        let marginal =
            compute_staged_cost(count + 1, &steps) - compute_staged_cost(count, &steps);
        prop_assert_eq!(marginal, plateau);
    }

    /// Doubling every field of a group doubles its subtotal.
    #[test]
    fn category_subtotal_is_linear(group in arb_group(), costs in arb_group_costs()) {
        let doubled = CardGroupState {
            count: group.count * 2,
            normal_hirameki_count: group.normal_hirameki_count * 2,
            god_hirameki_count: group.god_hirameki_count * 2,
        };
        prop_assert_eq!(
            compute_category_subtotal(&doubled, &costs, GOD_FLASH_GLOBAL),
            compute_category_subtotal(&group, &costs, GOD_FLASH_GLOBAL) * 2
        );
    }

    /// The aggregate is exactly the sum of its four subtotals, and
    /// over_limit holds exactly when spending exceeds the cap.
    #[test]
    fn breakdown_is_consistent(state in arb_state()) {
        let table = CostTable::standard();
        let breakdown = table.breakdown(&state);

        let parts =
            breakdown.inherent + breakdown.common + breakdown.monster + breakdown.copy;
        prop_assert_eq!(breakdown.used_capacity, parts);
        prop_assert_eq!(
            breakdown.remaining,
            i64::from(breakdown.total_capacity) - i64::from(breakdown.used_capacity)
        );
        prop_assert_eq!(
            breakdown.over_limit,
            breakdown.used_capacity > breakdown.total_capacity
        );
    }
}
