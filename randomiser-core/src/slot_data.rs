use serde::Serialize;

use crate::options::GooseOptions;

/// Resolved settings handed to the game client. Enum options are sent as
/// their numeric ids, the starting area as its access item name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotData {
    pub starting_area: &'static str,
    pub goal: u8,
    pub include_extra_tasks: bool,
    pub include_speedrun_tasks: bool,
    pub include_item_pickups: bool,
    pub include_drag_items: bool,
    pub include_interactions: bool,
    pub include_additional_goals: bool,
    pub include_model_church_pecks: u8,
    pub include_milestone_locations: bool,
    pub include_npc_souls: bool,
    pub include_prop_souls: bool,
    pub filler_amount_mega_honk: u8,
    pub filler_amount_speedy_feet: u8,
    pub filler_active_silent_steps: bool,
    pub filler_amount_goose_day: u8,
    pub filler_weight_coins: u32,
    pub trap_weight_tired_goose: u32,
    pub trap_weight_confused_feet: u32,
    pub trap_weight_butterbeak: u32,
    pub trap_weight_suspicious_goose: u32,
    pub death_link: bool,
}

impl SlotData {
    pub fn new(options: &GooseOptions, starting_item: &'static str) -> Self {
        SlotData {
            starting_area: starting_item,
            goal: options.goal.id(),
            include_extra_tasks: options.include_extra_tasks,
            include_speedrun_tasks: options.include_speedrun_tasks,
            include_item_pickups: options.include_item_pickups,
            include_drag_items: options.include_drag_items,
            include_interactions: options.include_interactions,
            include_additional_goals: options.include_additional_goals,
            include_model_church_pecks: options.include_model_church_pecks.id(),
            include_milestone_locations: options.include_milestone_locations,
            include_npc_souls: options.include_npc_souls,
            include_prop_souls: options.include_prop_souls,
            filler_amount_mega_honk: options.filler_amount_mega_honk,
            filler_amount_speedy_feet: options.filler_amount_speedy_feet,
            filler_active_silent_steps: options.filler_active_silent_steps,
            filler_amount_goose_day: options.filler_amount_goose_day,
            filler_weight_coins: options.filler_weight_coins,
            trap_weight_tired_goose: options.trap_weight_tired_goose,
            trap_weight_confused_feet: options.trap_weight_confused_feet,
            trap_weight_butterbeak: options.trap_weight_butterbeak,
            trap_weight_suspicious_goose: options.trap_weight_suspicious_goose,
            death_link: options.death_link,
        }
    }
}
