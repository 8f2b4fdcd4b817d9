//! Area graph for one slot.
//!
//! ```text
//!          Menu
//!           |
//!          Hub
//!   /    /     \      \     \
//! Garden High  Back   Pub   Model Village
//!        Street Gardens      (Pub + Model Village Access)
//! ```
//!
//! Each region owns its outgoing entrances as (target, rule) pairs, and the
//! checks the slot's options activate inside it.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use tracing::debug;

use crate::catalog::{self, LocationCategory, LocationData};
use crate::options::{Goal, GooseOptions, PeckGranularity};
use crate::rules::{check_rule, AccessRule, ItemState};
use crate::{RandomiserError, Result};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Area {
    Menu,
    Hub,
    Garden,
    HighStreet,
    BackGardens,
    Pub,
    ModelVillage,
}

impl Area {
    pub const ALL: [Area; 7] = [
        Area::Menu,
        Area::Hub,
        Area::Garden,
        Area::HighStreet,
        Area::BackGardens,
        Area::Pub,
        Area::ModelVillage,
    ];

    /// Areas behind a gate from the hub.
    pub const GATED: [Area; 5] = [
        Area::Garden,
        Area::HighStreet,
        Area::BackGardens,
        Area::Pub,
        Area::ModelVillage,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Area::Menu => "Menu",
            Area::Hub => "Hub",
            Area::Garden => "Garden",
            Area::HighStreet => "High Street",
            Area::BackGardens => "Back Gardens",
            Area::Pub => "Pub",
            Area::ModelVillage => "Model Village",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Entrance {
    pub target: Area,
    pub rule: AccessRule,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Check {
    pub name: &'static str,
    pub id: u64,
    pub area: Area,
    pub category: LocationCategory,
    pub rule: AccessRule,
    pub locked_item: Option<&'static str>,
}

impl Check {
    fn from_catalog(data: &LocationData) -> Self {
        Check {
            name: data.name,
            id: data.id(),
            area: data.area,
            category: data.category,
            rule: check_rule(data),
            locked_item: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Region {
    pub area: Area,
    pub entrances: Vec<Entrance>,
    pub checks: Vec<Check>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegionGraph {
    regions: Vec<Region>,
}

/// The victory check a goal adds, if any. `FindTheBell` has none: its soul
/// goes into the item pool instead.
pub fn goal_location(goal: Goal) -> Option<&'static str> {
    match goal {
        Goal::ReachModelVillage => Some("Get into the Model Village (Golden Bell Soul)"),
        Goal::FindTheBell => None,
        Goal::AllMainTasks => Some("All Main Task Lists Complete (Golden Bell Soul)"),
        Goal::OnlySpeedrunTasks => Some("All Speedrun Tasks Complete (Golden Bell Soul)"),
        Goal::AllTasksNoSpeedrun => {
            Some("All Main Task Lists + To Do (As Well) Complete (Golden Bell Soul)")
        }
        Goal::AllTasks => Some("All Tasks Complete (Golden Bell Soul)"),
        Goal::FourFinalTasks => Some("Complete the Four Final Area Tasks (Golden Bell Soul)"),
    }
}

fn category_enabled(category: LocationCategory, options: &GooseOptions) -> bool {
    match category {
        LocationCategory::CoreGoal => true,
        LocationCategory::ExtraGoal => options.include_extra_tasks,
        LocationCategory::SpeedrunGoal => options.include_speedrun_tasks,
        LocationCategory::ItemPickup | LocationCategory::UniquePickup => {
            options.include_item_pickups
        }
        LocationCategory::DragItem | LocationCategory::UniqueDrag => options.include_drag_items,
        LocationCategory::Interaction => options.include_interactions,
        LocationCategory::AdditionalGoal => options.include_additional_goals,
        LocationCategory::PeckFirst => {
            options.include_model_church_pecks == PeckGranularity::FirstPeckOnly
        }
        LocationCategory::PeckFull => options.include_model_church_pecks == PeckGranularity::Full,
        LocationCategory::MilestoneMain => options.include_milestone_locations,
        LocationCategory::MilestoneExtra => {
            options.include_milestone_locations && options.include_extra_tasks
        }
        LocationCategory::MilestoneSpeedrun => {
            options.include_milestone_locations && options.include_speedrun_tasks
        }
        LocationCategory::MilestoneAllTasks => {
            options.include_milestone_locations
                && options.include_extra_tasks
                && options.include_speedrun_tasks
        }
        // Goal checks are added one at a time from the goal option.
        LocationCategory::GoalVariant => false,
        LocationCategory::Completion => false,
    }
}

impl RegionGraph {
    fn empty() -> Self {
        let regions = Area::ALL
            .iter()
            .map(|&area| Region {
                area,
                entrances: Vec::new(),
                checks: Vec::new(),
            })
            .collect();
        RegionGraph { regions }
    }

    fn region_mut(&mut self, area: Area) -> &mut Region {
        // `empty` creates one region per `Area::ALL` entry in order.
        &mut self.regions[area as usize]
    }

    pub fn region(&self, area: Area) -> &Region {
        &self.regions[area as usize]
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    fn connect(&mut self, from: Area, to: Area, rule: AccessRule) {
        self.region_mut(from).entrances.push(Entrance { target: to, rule });
    }

    fn add_check(&mut self, data: &LocationData) {
        self.region_mut(data.area).checks.push(Check::from_catalog(data));
    }

    pub fn checks(&self) -> impl Iterator<Item = &Check> {
        self.regions.iter().flat_map(|r| r.checks.iter())
    }

    pub fn check(&self, name: &str) -> Option<&Check> {
        self.checks().find(|c| c.name == name)
    }

    pub fn check_count(&self) -> usize {
        self.regions.iter().map(|r| r.checks.len()).sum()
    }

    /// Checks still open to the general placement search.
    pub fn unfilled_checks(&self) -> impl Iterator<Item = &Check> {
        self.checks().filter(|c| c.locked_item.is_none())
    }

    pub fn unfilled_check_count(&self) -> usize {
        self.unfilled_checks().count()
    }

    /// Pins `item` to the named check. The check must be active and empty.
    pub fn place_locked_item(&mut self, check_name: &str, item: &'static str) -> Result<()> {
        let check = self
            .regions
            .iter_mut()
            .flat_map(|r| r.checks.iter_mut())
            .find(|c| c.name == check_name)
            .ok_or_else(|| {
                RandomiserError::GenerationInvariant(format!(
                    "locked placement target '{check_name}' is not an active check"
                ))
            })?;

        if let Some(existing) = check.locked_item {
            return Err(RandomiserError::GenerationInvariant(format!(
                "check '{check_name}' already holds '{existing}'"
            )));
        }

        check.locked_item = Some(item);
        Ok(())
    }

    /// Areas reachable from `Menu` with the given items.
    pub fn reachable_areas(&self, state: &impl ItemState) -> BTreeSet<Area> {
        let mut reached = BTreeSet::new();
        let mut frontier = vec![Area::Menu];
        reached.insert(Area::Menu);

        while let Some(area) = frontier.pop() {
            for entrance in &self.region(area).entrances {
                if entrance.rule.allows(state) && reached.insert(entrance.target) {
                    frontier.push(entrance.target);
                }
            }
        }

        reached
    }

    /// Checks whose area is reachable and whose own rule holds.
    pub fn reachable_checks(&self, state: &impl ItemState) -> Vec<&Check> {
        let areas = self.reachable_areas(state);
        self.checks()
            .filter(|c| areas.contains(&c.area) && c.rule.allows(state))
            .collect()
    }

    fn verify_unique(&self) -> Result<()> {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        for check in self.checks() {
            if !ids.insert(check.id) || !names.insert(check.name) {
                return Err(RandomiserError::GenerationInvariant(format!(
                    "check '{}' ({}) activated twice",
                    check.name, check.id
                )));
            }
        }
        Ok(())
    }
}

/// Builds the hub-and-spoke area graph and activates the checks the slot's
/// options ask for.
pub fn build_region_graph(options: &GooseOptions) -> Result<RegionGraph> {
    let mut graph = RegionGraph::empty();

    graph.connect(Area::Menu, Area::Hub, AccessRule::Always);
    for area in Area::GATED {
        graph.connect(Area::Hub, area, AccessRule::for_area(area));
    }

    for data in catalog::LOCATIONS {
        if category_enabled(data.category, options) {
            graph.add_check(data);
        }
    }

    if let Some(name) = goal_location(options.goal) {
        let data = catalog::location_by_name(name).ok_or_else(|| {
            RandomiserError::GenerationInvariant(format!("goal check '{name}' missing from catalog"))
        })?;
        graph.add_check(data);
    }

    graph.verify_unique()?;

    debug!(
        checks = graph.check_count(),
        goal = options.goal.option_name(),
        "built region graph"
    );

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        BACK_GARDENS_ACCESS, GARDEN_ACCESS, HIGH_STREET_ACCESS, MODEL_VILLAGE_ACCESS, PUB_ACCESS,
    };
    use crate::rules::CollectedItems;

    fn core_only(goal: Goal) -> GooseOptions {
        GooseOptions {
            goal,
            include_extra_tasks: false,
            include_speedrun_tasks: false,
            include_item_pickups: false,
            include_drag_items: false,
            include_interactions: false,
            include_additional_goals: false,
            include_milestone_locations: false,
            include_model_church_pecks: PeckGranularity::Off,
            ..GooseOptions::default()
        }
    }

    fn everything(goal: Goal) -> GooseOptions {
        GooseOptions {
            goal,
            include_extra_tasks: true,
            include_speedrun_tasks: true,
            include_item_pickups: true,
            include_drag_items: true,
            include_interactions: true,
            include_additional_goals: true,
            include_milestone_locations: true,
            include_model_church_pecks: PeckGranularity::Full,
            ..GooseOptions::default()
        }
    }

    #[test]
    fn hub_and_five_gates() {
        let graph = build_region_graph(&core_only(Goal::AllMainTasks)).unwrap();
        let menu = graph.region(Area::Menu);
        assert_eq!(menu.entrances.len(), 1);
        assert_eq!(menu.entrances[0].target, Area::Hub);
        assert_eq!(menu.entrances[0].rule, AccessRule::Always);

        let hub = graph.region(Area::Hub);
        let targets: Vec<Area> = hub.entrances.iter().map(|e| e.target).collect();
        assert_eq!(targets, Area::GATED.to_vec());
        assert!(hub.entrances.iter().all(|e| e.rule != AccessRule::Always));

        for area in Area::GATED {
            assert!(graph.region(area).entrances.is_empty());
        }
    }

    #[test]
    fn core_only_check_count() {
        let graph = build_region_graph(&core_only(Goal::AllMainTasks)).unwrap();
        assert_eq!(graph.check_count(), 34);
        assert!(graph.check("All Main Task Lists Complete (Golden Bell Soul)").is_some());

        let find = build_region_graph(&core_only(Goal::FindTheBell)).unwrap();
        assert_eq!(find.check_count(), 33);
        assert!(find.checks().all(|c| c.category != LocationCategory::GoalVariant));
    }

    #[test]
    fn each_goal_adds_its_own_check() {
        for goal in Goal::ALL {
            let graph = build_region_graph(&everything(goal)).unwrap();
            let goal_checks: Vec<&str> = graph
                .checks()
                .filter(|c| c.category == LocationCategory::GoalVariant)
                .map(|c| c.name)
                .collect();
            match goal_location(goal) {
                Some(name) => assert_eq!(goal_checks, vec![name]),
                None => assert!(goal_checks.is_empty()),
            }
        }

        let village = build_region_graph(&core_only(Goal::ReachModelVillage)).unwrap();
        let check = village
            .check("Get into the Model Village (Golden Bell Soul)")
            .unwrap();
        assert_eq!(check.area, Area::ModelVillage);
    }

    #[test]
    fn milestones_follow_their_prerequisites() {
        let mut opts = core_only(Goal::AllMainTasks);
        opts.include_milestone_locations = true;
        let graph = build_region_graph(&opts).unwrap();
        assert!(graph.check("All Main Task Lists Complete").is_some());
        assert!(graph.check("All To Do (As Well) Tasks Complete").is_none());
        assert!(graph.check("All Speedrun Tasks Complete").is_none());
        assert!(graph.check("All Tasks Complete").is_none());

        opts.include_extra_tasks = true;
        let graph = build_region_graph(&opts).unwrap();
        assert!(graph.check("All To Do (As Well) Tasks Complete").is_some());
        assert!(graph.check("All Tasks Complete").is_none());

        opts.include_speedrun_tasks = true;
        let graph = build_region_graph(&opts).unwrap();
        assert!(graph.check("All Speedrun Tasks Complete").is_some());
        assert!(graph.check("All Tasks Complete").is_some());

        opts.include_milestone_locations = false;
        let graph = build_region_graph(&opts).unwrap();
        assert!(graph.check("All Tasks Complete").is_none());
    }

    #[test]
    fn peck_granularities_are_exclusive() {
        let mut opts = core_only(Goal::AllMainTasks);
        let base = build_region_graph(&opts).unwrap().check_count();

        opts.include_model_church_pecks = PeckGranularity::FirstPeckOnly;
        let first = build_region_graph(&opts).unwrap();
        assert_eq!(first.check_count(), base + 2);
        assert!(first.checks().all(|c| c.category != LocationCategory::PeckFull));

        opts.include_model_church_pecks = PeckGranularity::Full;
        let full = build_region_graph(&opts).unwrap();
        assert_eq!(full.check_count(), base + 35);
        assert!(full.checks().all(|c| c.category != LocationCategory::PeckFirst));
    }

    #[test]
    fn completion_check_is_never_active() {
        let graph = build_region_graph(&everything(Goal::AllTasks)).unwrap();
        assert!(graph.check("100% Completion").is_none());
        assert!(catalog::location_by_name("100% Completion").is_some());
    }

    #[test]
    fn reachability_is_monotonic() {
        let graph = build_region_graph(&everything(Goal::AllTasks)).unwrap();
        let keys = [
            GARDEN_ACCESS,
            HIGH_STREET_ACCESS,
            BACK_GARDENS_ACCESS,
            PUB_ACCESS,
            MODEL_VILLAGE_ACCESS,
        ];
        let states: Vec<CollectedItems> = (0u32..32)
            .map(|mask| {
                keys.iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, k)| *k)
                    .collect()
            })
            .collect();

        for small in &states {
            for big in &states {
                if !small.is_subset(big) {
                    continue;
                }
                let a = graph.reachable_areas(small);
                let b = graph.reachable_areas(big);
                assert!(a.is_subset(&b));
                assert!(graph.reachable_checks(small).len() <= graph.reachable_checks(big).len());
            }
        }
    }

    /// Task categories an aggregate check counts, and whether the core
    /// Model Village tasks are among them.
    fn counted_tasks(name: &str) -> Option<(&'static [LocationCategory], bool)> {
        use LocationCategory::{CoreGoal, ExtraGoal, SpeedrunGoal};
        let counted: (&'static [LocationCategory], bool) = match name {
            "All To Do (As Well) Tasks Complete" => (&[ExtraGoal], false),
            "All Speedrun Tasks Complete" | "All Speedrun Tasks Complete (Golden Bell Soul)" => {
                (&[SpeedrunGoal], false)
            }
            "Complete the Four Final Area Tasks (Golden Bell Soul)" => (&[CoreGoal], false),
            "All Main Task Lists Complete" | "All Main Task Lists Complete (Golden Bell Soul)" => {
                (&[CoreGoal], true)
            }
            "All Main Task Lists + To Do (As Well) Complete (Golden Bell Soul)" => {
                (&[CoreGoal, ExtraGoal], true)
            }
            "All Tasks Complete" | "All Tasks Complete (Golden Bell Soul)" => {
                (&[CoreGoal, ExtraGoal, SpeedrunGoal], true)
            }
            _ => return None,
        };
        Some(counted)
    }

    #[test]
    fn aggregates_wait_for_every_task_they_count() {
        let keys = [
            GARDEN_ACCESS,
            HIGH_STREET_ACCESS,
            BACK_GARDENS_ACCESS,
            PUB_ACCESS,
            MODEL_VILLAGE_ACCESS,
        ];
        let mut aggregates_seen = 0;
        for goal in Goal::ALL {
            let graph = build_region_graph(&everything(goal)).unwrap();
            for mask in 0u32..32 {
                let state: CollectedItems = keys
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, k)| *k)
                    .collect();
                let reachable: HashSet<&str> =
                    graph.reachable_checks(&state).iter().map(|c| c.name).collect();

                for check in graph.checks() {
                    let Some((categories, with_village)) = counted_tasks(check.name) else {
                        continue;
                    };
                    aggregates_seen += 1;
                    if !reachable.contains(check.name) {
                        continue;
                    }
                    for task in graph.checks().filter(|t| {
                        categories.contains(&t.category)
                            && t.name != catalog::PICK_UP_GOLDEN_BELL
                            && (with_village || t.area != Area::ModelVillage)
                    }) {
                        assert!(
                            reachable.contains(task.name),
                            "'{}' reachable before '{}' (mask {mask:05b})",
                            check.name,
                            task.name
                        );
                    }
                }
            }
        }
        assert!(aggregates_seen > 0);
    }

    #[test]
    fn finale_reachable_only_with_both_items() {
        let graph = build_region_graph(&core_only(Goal::ReachModelVillage)).unwrap();

        let empty = CollectedItems::new();
        let reached = graph.reachable_areas(&empty);
        assert_eq!(reached, BTreeSet::from([Area::Menu, Area::Hub]));

        let only_village: CollectedItems = [MODEL_VILLAGE_ACCESS].into_iter().collect();
        assert!(!graph.reachable_areas(&only_village).contains(&Area::ModelVillage));

        let only_pub: CollectedItems = [PUB_ACCESS].into_iter().collect();
        let reached = graph.reachable_areas(&only_pub);
        assert!(reached.contains(&Area::Pub));
        assert!(!reached.contains(&Area::ModelVillage));

        let both: CollectedItems = [PUB_ACCESS, MODEL_VILLAGE_ACCESS].into_iter().collect();
        assert!(graph.reachable_areas(&both).contains(&Area::ModelVillage));
    }

    #[test]
    fn locked_placement_targets_must_exist_and_be_empty() {
        let mut graph = build_region_graph(&core_only(Goal::AllMainTasks)).unwrap();
        assert!(graph.place_locked_item("Pick up Radio", "Golden Bell").is_err());

        graph
            .place_locked_item(catalog::PICK_UP_GOLDEN_BELL, catalog::GOLDEN_BELL)
            .unwrap();
        assert_eq!(graph.unfilled_check_count(), graph.check_count() - 1);
        assert!(graph
            .place_locked_item(catalog::PICK_UP_GOLDEN_BELL, catalog::GOLDEN_BELL)
            .is_err());
    }
}
