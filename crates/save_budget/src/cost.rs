use serde::Serialize;

use crate::data::{
    CAPACITY_BASE, CAPACITY_PER_TIER, COMMON_GROUP_COSTS, COPY_STEP_COSTS, GOD_FLASH_GLOBAL,
    GroupCostConfig, INHERENT_REMOVAL_STEP_COSTS, MAX_INHERENT_CARDS, MONSTER_GROUP_COSTS,
};
use crate::state::{CalculatorState, CardGroupState, InherentCardState};

#[derive(Debug)]
pub enum CostTableError {
    EmptyStepTable { table: &'static str },
    NonZeroStepOrigin { table: &'static str, value: u32 },
}

/// Total capacity available at `tier`. Nightmare difficulty counts as one
/// tier higher.
pub fn compute_capacity(tier: u32, is_nightmare: bool) -> u32 {
    let effective_tier = if is_nightmare {
        tier.saturating_add(1)
    } else {
        tier
    };
    effective_tier
        .saturating_mul(CAPACITY_PER_TIER)
        .saturating_add(CAPACITY_BASE)
}

/// Cumulative cost of `count` occurrences against a staged table.
///
/// `step_costs[i]` is the marginal cost of the i-th occurrence; entry 0
/// is the unused origin and the last entry is the plateau charged for
/// every occurrence past the table. An empty table costs nothing.
pub fn compute_staged_cost(count: u32, step_costs: &[u32]) -> u32 {
    let Some(plateau) = step_costs.len().checked_sub(1) else {
        return 0;
    };
    let count = count as u64;
    let mut total: u64 = 0;
    for occurrence in 1..=count.min(plateau as u64) {
        total = total.saturating_add(u64::from(step_costs[occurrence as usize]));
    }
    if count > plateau as u64 {
        // Every occurrence past the table repeats the plateau entry.
        let excess = (count - plateau as u64).saturating_mul(u64::from(step_costs[plateau]));
        total = total.saturating_add(excess);
    }
    total.min(u64::from(u32::MAX)) as u32
}

/// Subtotal for one non-inherent category: acquisition cost per card,
/// flash cost per normal hirameki, and the category's god unit cost per
/// god hirameki.
pub fn compute_category_subtotal(
    group: &CardGroupState,
    costs: &GroupCostConfig,
    god_flash_global: u32,
) -> u32 {
    group
        .count
        .saturating_mul(costs.base_cost)
        .saturating_add(group.normal_hirameki_count.saturating_mul(costs.flash_cost))
        .saturating_add(
            group
                .god_hirameki_count
                .saturating_mul(costs.god_unit_cost(god_flash_global)),
        )
}

/// One full recomputation of the budget for a state snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub inherent: u32,
    pub common: u32,
    pub monster: u32,
    pub copy: u32,
    pub used_capacity: u32,
    pub total_capacity: u32,
    pub remaining: i64,
    pub over_limit: bool,
}

/// The full cost configuration the aggregate runs against.
pub struct CostTable {
    common: GroupCostConfig,
    monster: GroupCostConfig,
    god_flash_global: u32,
    copy_step_costs: Vec<u32>,
    inherent_removal_step_costs: Vec<u32>,
}

impl CostTable {
    /// The published game costs.
    pub fn standard() -> Self {
        Self {
            common: COMMON_GROUP_COSTS,
            monster: MONSTER_GROUP_COSTS,
            god_flash_global: GOD_FLASH_GLOBAL,
            copy_step_costs: COPY_STEP_COSTS.to_vec(),
            inherent_removal_step_costs: INHERENT_REMOVAL_STEP_COSTS.to_vec(),
        }
    }

    /// Create a cost table with validation.
    ///
    /// Constraints enforced:
    /// - both step tables are non-empty
    /// - the unused origin entry of each step table is zero
    pub fn new(
        common: GroupCostConfig,
        monster: GroupCostConfig,
        god_flash_global: u32,
        copy_step_costs: Vec<u32>,
        inherent_removal_step_costs: Vec<u32>,
    ) -> Result<Self, CostTableError> {
        Self::validate_step_table("copy_step_costs", &copy_step_costs)?;
        Self::validate_step_table("inherent_removal_step_costs", &inherent_removal_step_costs)?;
        Ok(Self {
            common,
            monster,
            god_flash_global,
            copy_step_costs,
            inherent_removal_step_costs,
        })
    }

    fn validate_step_table(table: &'static str, step_costs: &[u32]) -> Result<(), CostTableError> {
        match step_costs.first() {
            None => Err(CostTableError::EmptyStepTable { table }),
            Some(&value) if value != 0 => Err(CostTableError::NonZeroStepOrigin { table, value }),
            Some(_) => Ok(()),
        }
    }

    pub fn common_costs(&self) -> &GroupCostConfig {
        &self.common
    }

    pub fn monster_costs(&self) -> &GroupCostConfig {
        &self.monster
    }

    pub fn god_flash_global(&self) -> u32 {
        self.god_flash_global
    }

    pub fn copy_step_costs(&self) -> &[u32] {
        &self.copy_step_costs
    }

    pub fn inherent_removal_step_costs(&self) -> &[u32] {
        &self.inherent_removal_step_costs
    }

    /// Accumulated cost of all copies made so far.
    pub fn copy_cost(&self, total_copies: u32) -> u32 {
        compute_staged_cost(total_copies, &self.copy_step_costs)
    }

    /// Subtotal for the inherent category: god hirameki at the global
    /// increment plus the staged removal cost.
    ///
    /// Removal counts past `MAX_INHERENT_CARDS` are clamped here rather
    /// than charged; callers are still expected to clamp upstream.
    pub fn inherent_subtotal(&self, inherent: &InherentCardState) -> u32 {
        let removal_count = inherent.removal_count.min(MAX_INHERENT_CARDS as u32);
        inherent
            .god_hirameki_count
            .saturating_mul(self.god_flash_global)
            .saturating_add(compute_staged_cost(
                removal_count,
                &self.inherent_removal_step_costs,
            ))
    }

    /// Recompute the whole budget for a snapshot. Pure; call it afresh
    /// whenever any input field changes.
    pub fn breakdown(&self, state: &CalculatorState) -> CostBreakdown {
        let inherent = self.inherent_subtotal(&state.inherent);
        let common = compute_category_subtotal(&state.common, &self.common, self.god_flash_global);
        let monster =
            compute_category_subtotal(&state.monster, &self.monster, self.god_flash_global);
        let copy = self.copy_cost(state.total_copies);

        let used_capacity = inherent
            .saturating_add(common)
            .saturating_add(monster)
            .saturating_add(copy);
        let total_capacity = compute_capacity(state.tier, state.is_nightmare);
        let remaining = i64::from(total_capacity) - i64::from(used_capacity);

        CostBreakdown {
            inherent,
            common,
            monster,
            copy,
            used_capacity,
            total_capacity,
            remaining,
            over_limit: remaining < 0,
        }
    }
}
