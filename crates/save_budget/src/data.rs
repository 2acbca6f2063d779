// Capacity cap: (effective tier * CAPACITY_PER_TIER) + CAPACITY_BASE.
// Nightmare difficulty raises the effective tier by one.
pub const CAPACITY_BASE: u32 = 20;
pub const CAPACITY_PER_TIER: u32 = 10;

// Flat increment added for every god-hirameki card, on top of the
// category's own flash cost where the category stacks the two.
pub const GOD_FLASH_GLOBAL: u32 = 20;

// An inherent card deck holds a fixed number of slots; removal events
// past this count are meaningless and get clamped at the boundary.
pub const MAX_INHERENT_CARDS: usize = 4;

// Marginal cost of the i-th copy across all categories. Entry 0 is the
// unused origin; the first two copies are free, then the curve rises and
// plateaus at the last entry for every copy from the sixth on.
pub const COPY_STEP_COSTS: [u32; 7] = [0, 0, 0, 10, 30, 50, 70];

// Marginal cost of the i-th inherent-card removal. Entry 0 is the unused
// origin; the last entry is the plateau.
pub const INHERENT_REMOVAL_STEP_COSTS: [u32; 6] = [0, 20, 30, 50, 70, 90];

/// Per-category acquisition and upgrade costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupCostConfig {
    pub base_cost: u32,
    pub flash_cost: u32,
    // Whether a god hirameki stacks on top of the normal flash cost.
    // This is a game rule per category, fixed once below.
    pub god_combines_with_flash: bool,
}

impl GroupCostConfig {
    /// The cost added for one god-hirameki card of this category.
    pub fn god_unit_cost(&self, god_flash_global: u32) -> u32 {
        if self.god_combines_with_flash {
            self.flash_cost.saturating_add(god_flash_global)
        } else {
            god_flash_global
        }
    }
}

pub const COMMON_GROUP_COSTS: GroupCostConfig = GroupCostConfig {
    base_cost: 20,
    flash_cost: 10,
    god_combines_with_flash: true,
};

// Monster cards pay nothing for a normal hirameki, and a god hirameki
// adds only the global increment.
pub const MONSTER_GROUP_COSTS: GroupCostConfig = GroupCostConfig {
    base_cost: 80,
    flash_cost: 0,
    god_combines_with_flash: false,
};
