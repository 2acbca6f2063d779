mod cost;
mod data;
mod state;

pub use cost::{
    CostBreakdown, CostTable, CostTableError, compute_capacity, compute_category_subtotal,
    compute_staged_cost,
};
pub use data::{
    CAPACITY_BASE, CAPACITY_PER_TIER, COMMON_GROUP_COSTS, COPY_STEP_COSTS, GOD_FLASH_GLOBAL,
    GroupCostConfig, INHERENT_REMOVAL_STEP_COSTS, MAX_INHERENT_CARDS, MONSTER_GROUP_COSTS,
};
pub use state::{CalculatorState, CardGroupState, CardKind, InherentCardState};
