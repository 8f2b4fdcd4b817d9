//! Access predicates over the items a player has collected.
//!
//! Every predicate is a conjunction of "has item" tests, so adding items to
//! a state can never make a rule that held stop holding.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::catalog::{
    LocationCategory, LocationData, BACK_GARDENS_ACCESS, GARDEN_ACCESS, GOLDEN_BELL,
    GOLDEN_BELL_SOUL, HIGH_STREET_ACCESS, MODEL_VILLAGE_ACCESS, PICK_UP_GOLDEN_BELL, PUB_ACCESS,
};
use crate::options::Goal;
use crate::regions::Area;

/// Read-only view of collected items. The placement search owns the state
/// and grows it; rules only ask questions of it.
pub trait ItemState {
    fn has(&self, item: &str) -> bool;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedItems {
    items: HashSet<String>,
}

impl CollectedItems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collect(&mut self, item: &str) {
        self.items.insert(item.to_string());
    }

    pub fn is_subset(&self, other: &CollectedItems) -> bool {
        self.items.is_subset(&other.items)
    }
}

impl<'a> FromIterator<&'a str> for CollectedItems {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().map(str::to_string).collect(),
        }
    }
}

impl ItemState for CollectedItems {
    fn has(&self, item: &str) -> bool {
        self.items.contains(item)
    }
}


pub fn has_garden(state: &impl ItemState) -> bool {
    state.has(GARDEN_ACCESS)
}

pub fn has_high_street(state: &impl ItemState) -> bool {
    state.has(HIGH_STREET_ACCESS)
}

pub fn has_back_gardens(state: &impl ItemState) -> bool {
    state.has(BACK_GARDENS_ACCESS)
}

pub fn has_pub(state: &impl ItemState) -> bool {
    state.has(PUB_ACCESS)
}

/// Pub Access is the late-game key; the Model Village needs it on top of its
/// own access item.
pub fn has_model_village(state: &impl ItemState) -> bool {
    has_pub(state) && state.has(MODEL_VILLAGE_ACCESS)
}

pub fn has_main_areas(state: &impl ItemState) -> bool {
    has_garden(state) && has_high_street(state) && has_back_gardens(state) && has_pub(state)
}

pub fn has_all_areas(state: &impl ItemState) -> bool {
    has_main_areas(state) && has_model_village(state)
}

/// One variant per gating rule, so graphs can be inspected and serialised
/// without capturing anything.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessRule {
    Always,
    Garden,
    HighStreet,
    BackGardens,
    Pub,
    ModelVillage,
    MainAreas,
    AllAreas,
    GoldenBellSoul,
}

impl AccessRule {
    pub fn allows(self, state: &impl ItemState) -> bool {
        match self {
            AccessRule::Always => true,
            AccessRule::Garden => has_garden(state),
            AccessRule::HighStreet => has_high_street(state),
            AccessRule::BackGardens => has_back_gardens(state),
            AccessRule::Pub => has_pub(state),
            AccessRule::ModelVillage => has_model_village(state),
            AccessRule::MainAreas => has_main_areas(state),
            AccessRule::AllAreas => has_all_areas(state),
            AccessRule::GoldenBellSoul => state.has(GOLDEN_BELL_SOUL),
        }
    }

    /// Rule guarding the entrance from the hub into `area`.
    pub fn for_area(area: Area) -> AccessRule {
        match area {
            Area::Menu | Area::Hub => AccessRule::Always,
            Area::Garden => AccessRule::Garden,
            Area::HighStreet => AccessRule::HighStreet,
            Area::BackGardens => AccessRule::BackGardens,
            Area::Pub => AccessRule::Pub,
            Area::ModelVillage => AccessRule::ModelVillage,
        }
    }
}

/// Extra requirement on a single check, on top of reaching its area.
///
/// Aggregate checks sit in the hub but can only complete once every task
/// they count is reachable. Lists that include the core Model Village tasks
/// need all five areas; extra, speedrun and the four final area tasks never
/// leave the main areas.
pub fn check_rule(location: &LocationData) -> AccessRule {
    if location.name == PICK_UP_GOLDEN_BELL {
        return AccessRule::GoldenBellSoul;
    }
    if location.area != Area::Hub {
        return AccessRule::Always;
    }

    match location.category {
        LocationCategory::MilestoneExtra | LocationCategory::MilestoneSpeedrun => {
            AccessRule::MainAreas
        }
        LocationCategory::MilestoneMain | LocationCategory::MilestoneAllTasks => {
            AccessRule::AllAreas
        }
        LocationCategory::GoalVariant => match location.offset {
            // All Speedrun Tasks, Four Final Area Tasks.
            87 | 94 => AccessRule::MainAreas,
            _ => AccessRule::AllAreas,
        },
        _ => AccessRule::Always,
    }
}

/// Completion condition checked by the placement search: every area and the
/// bell carried home. `FindTheBell` also needs the soul, which sits in the
/// pool; every other goal's soul is locked on its own victory check.
pub fn goal_met(state: &impl ItemState, goal: Goal) -> bool {
    has_all_areas(state)
        && state.has(GOLDEN_BELL)
        && (goal != Goal::FindTheBell || state.has(GOLDEN_BELL_SOUL))
}
