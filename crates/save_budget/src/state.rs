use serde::{Deserialize, Serialize};

use crate::data::MAX_INHERENT_CARDS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardKind {
    Inherent,
    Common,
    Monster,
}

/// Counts for one non-inherent card category. `count` includes copies;
/// no ordering is enforced between the three fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardGroupState {
    pub count: u32,
    pub normal_hirameki_count: u32,
    pub god_hirameki_count: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InherentCardState {
    pub god_hirameki_count: u32,
    /// Cumulative removal events. Callers clamp this to
    /// `[0, MAX_INHERENT_CARDS]`; the cost functions clamp again.
    pub removal_count: u32,
    // Tracked per slot for the frontend; no cost formula reads it.
    pub is_conversion_used: [bool; MAX_INHERENT_CARDS],
}

/// Immutable snapshot of everything the user has entered. The frontend
/// owns the mutable store; the calculation core only ever reads one of
/// these and returns derived values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalculatorState {
    pub tier: u32,
    pub is_nightmare: bool,
    pub inherent: InherentCardState,
    pub common: CardGroupState,
    pub monster: CardGroupState,
    pub total_copies: u32,
}
