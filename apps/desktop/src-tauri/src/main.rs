#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use serde::{Deserialize, Serialize};
use serde_json::Value;

use save_budget::{
    CAPACITY_BASE, CAPACITY_PER_TIER, COMMON_GROUP_COSTS, CalculatorState, CardGroupState,
    CardKind, CostBreakdown, CostTable, GOD_FLASH_GLOBAL, GroupCostConfig, InherentCardState,
    MAX_INHERENT_CARDS, MONSTER_GROUP_COSTS,
};

const DEFAULT_TIER: u32 = 11;

const CARD_KINDS: [CardKind; 3] = [CardKind::Inherent, CardKind::Common, CardKind::Monster];

const CARD_KIND_LABELS: [&str; 3] = ["固有カード", "共用カード", "モンスターカード"];

// Inherent cards have no acquisition or flash cost; only god hirameki
// and removals are charged.
const INHERENT_GROUP_COSTS: GroupCostConfig = GroupCostConfig {
    base_cost: 0,
    flash_cost: 0,
    god_combines_with_flash: false,
};

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RawGroupInput {
    #[serde(default)]
    count: Value,
    #[serde(default)]
    normal_hirameki_count: Value,
    #[serde(default)]
    god_hirameki_count: Value,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RawInherentInput {
    #[serde(default)]
    god_hirameki_count: Value,
    #[serde(default)]
    removal_count: Value,
    #[serde(default)]
    is_conversion_used: Vec<bool>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ComputeBreakdownRequest {
    #[serde(default)]
    tier: Value,
    #[serde(default)]
    is_nightmare: bool,
    #[serde(default)]
    inherent: RawInherentInput,
    #[serde(default)]
    common: RawGroupInput,
    #[serde(default)]
    monster: RawGroupInput,
    #[serde(default)]
    total_copies: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CardKindInfo {
    kind: CardKind,
    label: String,
    base_cost: u32,
    flash_cost: u32,
    god_flash_cost: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BootstrapResponse {
    card_kinds: Vec<CardKindInfo>,
    god_flash_global: u32,
    copy_step_costs: Vec<u32>,
    inherent_removal_step_costs: Vec<u32>,
    max_inherent_cards: usize,
    capacity_base: u32,
    capacity_per_tier: u32,
    default_state: CalculatorState,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ComputeBreakdownResponse {
    breakdown: CostBreakdown,
    capacity_formula: String,
    normalized_state: CalculatorState,
}

/// Integer from a raw form value: numbers are truncated, strings parsed,
/// anything unparsable falls back to 0, and the result never goes
/// negative.
fn sanitize_count(raw: &Value) -> u32 {
    let parsed = match raw {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|value| value as i64)),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.unwrap_or(0).clamp(0, i64::from(u32::MAX)) as u32
}

fn sanitize_removal_count(raw: &Value) -> u32 {
    sanitize_count(raw).min(MAX_INHERENT_CARDS as u32)
}

fn sanitize_conversion_flags(raw: &[bool]) -> [bool; MAX_INHERENT_CARDS] {
    let mut flags = [false; MAX_INHERENT_CARDS];
    for (slot, used) in raw.iter().take(MAX_INHERENT_CARDS).enumerate() {
        flags[slot] = *used;
    }
    flags
}

fn sanitize_group(raw: &RawGroupInput) -> CardGroupState {
    CardGroupState {
        count: sanitize_count(&raw.count),
        normal_hirameki_count: sanitize_count(&raw.normal_hirameki_count),
        god_hirameki_count: sanitize_count(&raw.god_hirameki_count),
    }
}

/// Build the immutable snapshot the calculation core consumes.
fn build_state(request: &ComputeBreakdownRequest) -> CalculatorState {
    CalculatorState {
        tier: sanitize_count(&request.tier),
        is_nightmare: request.is_nightmare,
        inherent: InherentCardState {
            god_hirameki_count: sanitize_count(&request.inherent.god_hirameki_count),
            removal_count: sanitize_removal_count(&request.inherent.removal_count),
            is_conversion_used: sanitize_conversion_flags(&request.inherent.is_conversion_used),
        },
        common: sanitize_group(&request.common),
        monster: sanitize_group(&request.monster),
        total_copies: sanitize_count(&request.total_copies),
    }
}

/// The formula string the capacity panel displays.
fn capacity_formula(tier: u32, is_nightmare: bool) -> String {
    if is_nightmare {
        format!("((T{tier}+1)×{CAPACITY_PER_TIER}) + {CAPACITY_BASE}")
    } else {
        format!("(T{tier}×{CAPACITY_PER_TIER}) + {CAPACITY_BASE}")
    }
}

fn default_state() -> CalculatorState {
    CalculatorState {
        tier: DEFAULT_TIER,
        ..CalculatorState::default()
    }
}

fn card_kind_costs(kind: CardKind) -> &'static GroupCostConfig {
    match kind {
        CardKind::Inherent => &INHERENT_GROUP_COSTS,
        CardKind::Common => &COMMON_GROUP_COSTS,
        CardKind::Monster => &MONSTER_GROUP_COSTS,
    }
}

#[tauri::command]
fn bootstrap() -> BootstrapResponse {
    let card_kinds = CARD_KINDS
        .iter()
        .zip(CARD_KIND_LABELS.iter())
        .map(|(&kind, &label)| {
            let costs = card_kind_costs(kind);
            CardKindInfo {
                kind,
                label: label.to_string(),
                base_cost: costs.base_cost,
                flash_cost: costs.flash_cost,
                god_flash_cost: costs.god_unit_cost(GOD_FLASH_GLOBAL),
            }
        })
        .collect();

    let table = CostTable::standard();
    BootstrapResponse {
        card_kinds,
        god_flash_global: table.god_flash_global(),
        copy_step_costs: table.copy_step_costs().to_vec(),
        inherent_removal_step_costs: table.inherent_removal_step_costs().to_vec(),
        max_inherent_cards: MAX_INHERENT_CARDS,
        capacity_base: CAPACITY_BASE,
        capacity_per_tier: CAPACITY_PER_TIER,
        default_state: default_state(),
    }
}

#[tauri::command]
fn compute_breakdown(payload: ComputeBreakdownRequest) -> ComputeBreakdownResponse {
    let state = build_state(&payload);
    let breakdown = CostTable::standard().breakdown(&state);

    ComputeBreakdownResponse {
        capacity_formula: capacity_formula(state.tier, state.is_nightmare),
        normalized_state: state,
        breakdown,
    }
}

fn main() {
    tauri::Builder::default()
        .invoke_handler(tauri::generate_handler![bootstrap, compute_breakdown])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unparsable_input_falls_back_to_zero() {
        assert_eq!(sanitize_count(&Value::Null), 0);
        assert_eq!(sanitize_count(&json!("abc")), 0);
        assert_eq!(sanitize_count(&json!(true)), 0);
    }

    #[test]
    fn negative_input_clamps_to_zero() {
        assert_eq!(sanitize_count(&json!(-3)), 0);
        assert_eq!(sanitize_count(&json!("-12")), 0);
    }

    #[test]
    fn numeric_and_text_input_both_parse() {
        assert_eq!(sanitize_count(&json!(7)), 7);
        assert_eq!(sanitize_count(&json!(2.9)), 2);
        assert_eq!(sanitize_count(&json!(" 42 ")), 42);
    }

    #[test]
    fn removal_count_clamps_to_the_slot_count() {
        assert_eq!(sanitize_removal_count(&json!(9)), 4);
        assert_eq!(sanitize_removal_count(&json!(3)), 3);
    }

    #[test]
    fn conversion_flags_pad_and_truncate() {
        assert_eq!(
            sanitize_conversion_flags(&[true]),
            [true, false, false, false]
        );
        assert_eq!(
            sanitize_conversion_flags(&[true, false, true, false, true, true]),
            [true, false, true, false]
        );
    }

    #[test]
    fn request_builds_a_clamped_snapshot() {
        let request: ComputeBreakdownRequest = serde_json::from_value(json!({
            "tier": "11",
            "isNightmare": true,
            "inherent": { "godHiramekiCount": 1, "removalCount": 99 },
            "common": { "count": "3", "normalHiramekiCount": -1 },
            "totalCopies": 6
        }))
        .unwrap();

        let state = build_state(&request);
        assert_eq!(state.tier, 11);
        assert!(state.is_nightmare);
        assert_eq!(state.inherent.removal_count, 4);
        assert_eq!(state.common.count, 3);
        assert_eq!(state.common.normal_hirameki_count, 0);
        assert_eq!(state.monster, CardGroupState::default());
        assert_eq!(state.total_copies, 6);
    }

    #[test]
    fn formula_string_tracks_nightmare_mode() {
        assert_eq!(capacity_formula(11, false), "(T11×10) + 20");
        assert_eq!(capacity_formula(11, true), "((T11+1)×10) + 20");
    }
}
