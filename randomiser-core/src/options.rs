use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::catalog::{
    BACK_GARDENS_ACCESS, BUTTERBEAK, COIN, CONFUSED_FEET, GARDEN_ACCESS, HIGH_STREET_ACCESS,
    PUB_ACCESS, SUSPICIOUS_GOOSE, TIRED_GOOSE,
};
use crate::{RandomiserError, Result};

pub const MAX_MEGA_HONK: u8 = 3;
pub const MAX_SPEEDY_FEET: u8 = 10;
pub const MAX_GOOSE_DAY: u8 = 3;

/// Victory condition. The discriminant is the id handed to the client.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    ReachModelVillage = 0,
    FindTheBell = 1,
    AllMainTasks = 2,
    OnlySpeedrunTasks = 3,
    AllTasksNoSpeedrun = 4,
    AllTasks = 5,
    FourFinalTasks = 6,
}

impl Goal {
    pub const ALL: [Goal; 7] = [
        Goal::ReachModelVillage,
        Goal::FindTheBell,
        Goal::AllMainTasks,
        Goal::OnlySpeedrunTasks,
        Goal::AllTasksNoSpeedrun,
        Goal::AllTasks,
        Goal::FourFinalTasks,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn option_name(self) -> &'static str {
        match self {
            Goal::ReachModelVillage => "reach_model_village",
            Goal::FindTheBell => "find_the_bell",
            Goal::AllMainTasks => "all_main_tasks",
            Goal::OnlySpeedrunTasks => "only_speedrun_tasks",
            Goal::AllTasksNoSpeedrun => "all_tasks_no_speedrun",
            Goal::AllTasks => "all_tasks",
            Goal::FourFinalTasks => "four_final_tasks",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartingArea {
    Garden,
    HighStreet,
    BackGardens,
    Pub,
    Random,
}

/// Access items a slot may start with. The Model Village is the finale and
/// is never handed out up front.
pub const STARTING_ACCESS_ITEMS: [&str; 4] = [
    GARDEN_ACCESS,
    HIGH_STREET_ACCESS,
    BACK_GARDENS_ACCESS,
    PUB_ACCESS,
];

impl StartingArea {
    /// `None` means the choice is left to the slot's RNG.
    pub fn fixed_access_item(self) -> Option<&'static str> {
        match self {
            StartingArea::Garden => Some(GARDEN_ACCESS),
            StartingArea::HighStreet => Some(HIGH_STREET_ACCESS),
            StartingArea::BackGardens => Some(BACK_GARDENS_ACCESS),
            StartingArea::Pub => Some(PUB_ACCESS),
            StartingArea::Random => None,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeckGranularity {
    #[default]
    Off,
    FirstPeckOnly,
    Full,
}

impl PeckGranularity {
    pub fn id(self) -> u8 {
        match self {
            PeckGranularity::Off => 0,
            PeckGranularity::FirstPeckOnly => 1,
            PeckGranularity::Full => 2,
        }
    }
}

/// Per-slot options. Built once from the player's settings file and never
/// mutated afterwards; `validate` must pass before generation starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GooseOptions {
    pub goal: Goal,
    pub starting_area: StartingArea,

    pub include_extra_tasks: bool,
    pub include_speedrun_tasks: bool,
    pub include_item_pickups: bool,
    pub include_drag_items: bool,
    pub include_interactions: bool,
    pub include_additional_goals: bool,
    pub include_milestone_locations: bool,
    pub include_model_church_pecks: PeckGranularity,

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

impl Default for GooseOptions {
    fn default() -> Self {
        Self {
            goal: Goal::AllMainTasks,
            starting_area: StartingArea::Random,
            include_extra_tasks: false,
            include_speedrun_tasks: false,
            include_item_pickups: true,
            include_drag_items: true,
            include_interactions: true,
            include_additional_goals: true,
            include_milestone_locations: true,
            include_model_church_pecks: PeckGranularity::Off,
            include_npc_souls: false,
            include_prop_souls: false,
            filler_amount_mega_honk: 3,
            filler_amount_speedy_feet: 5,
            filler_active_silent_steps: true,
            filler_amount_goose_day: 3,
            filler_weight_coins: 60,
            trap_weight_tired_goose: 10,
            trap_weight_confused_feet: 10,
            trap_weight_butterbeak: 10,
            trap_weight_suspicious_goose: 10,
            death_link: false,
        }
    }
}

fn conflict(option: &'static str, requires: &'static str, detail: String) -> RandomiserError {
    RandomiserError::Configuration {
        option,
        requires,
        detail,
    }
}

impl GooseOptions {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Rejects option combinations that cannot produce a finishable slot.
    pub fn validate(&self) -> Result<()> {
        if self.include_prop_souls && !self.include_item_pickups {
            return Err(conflict(
                "include_prop_souls",
                "include_item_pickups",
                "prop souls gate item pickups, so item pickups must be enabled".to_string(),
            ));
        }

        match self.goal {
            Goal::OnlySpeedrunTasks if !self.include_speedrun_tasks => {
                return Err(conflict(
                    "goal",
                    "include_speedrun_tasks",
                    "goal 'only_speedrun_tasks' needs speedrun tasks enabled".to_string(),
                ));
            }
            Goal::AllTasksNoSpeedrun if !self.include_extra_tasks => {
                return Err(conflict(
                    "goal",
                    "include_extra_tasks",
                    "goal 'all_tasks_no_speedrun' needs extra tasks enabled".to_string(),
                ));
            }
            Goal::AllTasks if !self.include_extra_tasks => {
                return Err(conflict(
                    "goal",
                    "include_extra_tasks",
                    "goal 'all_tasks' needs both extra and speedrun tasks enabled".to_string(),
                ));
            }
            Goal::AllTasks if !self.include_speedrun_tasks => {
                return Err(conflict(
                    "goal",
                    "include_speedrun_tasks",
                    "goal 'all_tasks' needs both extra and speedrun tasks enabled".to_string(),
                ));
            }
            _ => {}
        }

        let caps = [
            ("filler_amount_mega_honk", self.filler_amount_mega_honk, MAX_MEGA_HONK),
            ("filler_amount_speedy_feet", self.filler_amount_speedy_feet, MAX_SPEEDY_FEET),
            ("filler_amount_goose_day", self.filler_amount_goose_day, MAX_GOOSE_DAY),
        ];
        for (option, value, max) in caps {
            if value > max {
                return Err(conflict(
                    option,
                    "cap",
                    format!("{value} exceeds the maximum of {max}"),
                ));
            }
        }

        Ok(())
    }

    /// Weighted kinds in draw order. The order is part of the seed contract.
    pub fn filler_weights(&self) -> [(&'static str, u32); 5] {
        [
            (COIN, self.filler_weight_coins),
            (TIRED_GOOSE, self.trap_weight_tired_goose),
            (CONFUSED_FEET, self.trap_weight_confused_feet),
            (BUTTERBEAK, self.trap_weight_butterbeak),
            (SUSPICIOUS_GOOSE, self.trap_weight_suspicious_goose),
        ]
    }
}
