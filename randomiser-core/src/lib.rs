use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

pub mod catalog;
pub mod filler;
pub mod options;
pub mod pool;
pub mod prefill;
pub mod regions;
pub mod rules;
pub mod slot_data;

pub use options::GooseOptions;
pub use prefill::LockedPlacement;
pub use regions::{Area, RegionGraph};
pub use slot_data::SlotData;

#[derive(Debug, Error)]
pub enum RandomiserError {
    #[error("configuration error: {option} requires {requires}: {detail}")]
    Configuration {
        option: &'static str,
        requires: &'static str,
        detail: String,
    },
    #[error("generation invariant violated: {0}")]
    GenerationInvariant(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Options(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RandomiserError>;

/// Everything one slot hands to the placement search and the client.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedSlot {
    pub seed: u64,
    pub starting_item: &'static str,
    /// Pool items followed by filler, one per open check.
    pub item_pool: Vec<&'static str>,
    pub locked: Vec<LockedPlacement>,
    pub open_checks: Vec<&'static str>,
    pub slot_data: SlotData,
    pub regions: RegionGraph,
}

pub fn generate(options: &GooseOptions, seed: u64) -> Result<GeneratedSlot> {
    options.validate()?;

    let mut rng = StdRng::seed_from_u64(seed);

    let mut graph = regions::build_region_graph(options)?;
    let pool = pool::build_item_pool(options, &graph, &mut rng)?;
    let filler = filler::distribute_filler(options, pool.residual, &mut rng)?;
    let locked = prefill::apply_locked_placements(&mut graph, options.goal)?;

    let mut item_pool = pool.items;
    item_pool.extend(filler);

    let open_checks: Vec<&'static str> = graph.unfilled_checks().map(|c| c.name).collect();
    if item_pool.len() != open_checks.len() {
        return Err(RandomiserError::GenerationInvariant(format!(
            "{} items for {} open checks",
            item_pool.len(),
            open_checks.len()
        )));
    }

    debug!(locked = locked.len(), "locked placements applied");
    info!(
        seed,
        starting_item = pool.starting_item,
        checks = graph.check_count(),
        items = item_pool.len(),
        "generated slot"
    );

    Ok(GeneratedSlot {
        seed,
        starting_item: pool.starting_item,
        item_pool,
        locked,
        open_checks,
        slot_data: SlotData::new(options, pool.starting_item),
        regions: graph,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GOLDEN_BELL, GOLDEN_BELL_SOUL, MODEL_VILLAGE_ACCESS};
    use crate::options::{Goal, PeckGranularity, StartingArea, STARTING_ACCESS_ITEMS};

    fn core_only(goal: Goal) -> GooseOptions {
        GooseOptions {
            goal,
            include_item_pickups: false,
            include_drag_items: false,
            include_interactions: false,
            include_additional_goals: false,
            include_milestone_locations: false,
            include_model_church_pecks: PeckGranularity::Off,
            ..GooseOptions::default()
        }
    }

    #[test]
    fn same_seed_same_slot() {
        let opts = GooseOptions {
            include_npc_souls: true,
            include_model_church_pecks: PeckGranularity::Full,
            ..GooseOptions::default()
        };
        let a = serde_json::to_string(&generate(&opts, 1234).unwrap()).unwrap();
        let b = serde_json::to_string(&generate(&opts, 1234).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn core_only_pool_pads_to_the_core_checks() {
        let slot = generate(&core_only(Goal::AllMainTasks), 7).unwrap();

        assert_eq!(slot.regions.check_count(), 34);
        assert_eq!(slot.open_checks.len(), 32);
        assert_eq!(slot.item_pool.len(), 32);
        assert_eq!(slot.locked.len(), 2);

        let access: Vec<&str> = slot
            .item_pool
            .iter()
            .copied()
            .filter(|i| STARTING_ACCESS_ITEMS.contains(i) || *i == MODEL_VILLAGE_ACCESS)
            .collect();
        assert_eq!(access.len(), 4);
        assert!(!slot.item_pool.contains(&slot.starting_item));
        assert!(!slot.item_pool.contains(&GOLDEN_BELL));
        assert!(!slot.item_pool.contains(&GOLDEN_BELL_SOUL));
        assert!(slot.item_pool.iter().all(|i| !i.ends_with(" Soul")));
    }

    #[test]
    fn find_the_bell_pools_its_soul() {
        let slot = generate(&core_only(Goal::FindTheBell), 7).unwrap();
        assert_eq!(slot.regions.check_count(), 33);
        assert_eq!(slot.locked.len(), 1);
        assert_eq!(slot.item_pool.len(), 32);
        assert_eq!(
            slot.item_pool.iter().filter(|&&i| i == GOLDEN_BELL_SOUL).count(),
            1
        );
    }

    #[test]
    fn validation_runs_before_anything_else() {
        let opts = GooseOptions {
            goal: Goal::OnlySpeedrunTasks,
            include_speedrun_tasks: false,
            ..GooseOptions::default()
        };
        let err = generate(&opts, 0).unwrap_err();
        assert!(matches!(
            err,
            RandomiserError::Configuration {
                option: "goal",
                requires: "include_speedrun_tasks",
                ..
            }
        ));
    }

    #[test]
    fn pool_matches_open_checks_for_every_configuration() {
        let pecks = [
            PeckGranularity::Off,
            PeckGranularity::FirstPeckOnly,
            PeckGranularity::Full,
        ];
        let mut generated = 0;
        for goal in Goal::ALL {
            for peck in pecks {
                for bits in 0u32..512 {
                    let flag = |n: u32| bits & (1 << n) != 0;
                    let opts = GooseOptions {
                        goal,
                        starting_area: StartingArea::Random,
                        include_extra_tasks: flag(0),
                        include_speedrun_tasks: flag(1),
                        include_item_pickups: flag(2),
                        include_drag_items: flag(3),
                        include_interactions: flag(4),
                        include_additional_goals: flag(5),
                        include_milestone_locations: flag(6),
                        include_model_church_pecks: peck,
                        include_npc_souls: flag(7),
                        include_prop_souls: flag(8),
                        ..GooseOptions::default()
                    };
                    if opts.validate().is_err() {
                        continue;
                    }

                    let slot = generate(&opts, u64::from(bits)).unwrap();
                    assert_eq!(slot.item_pool.len(), slot.open_checks.len());
                    assert_eq!(
                        slot.open_checks.len() + slot.locked.len(),
                        slot.regions.check_count()
                    );
                    assert_ne!(slot.starting_item, MODEL_VILLAGE_ACCESS);
                    generated += 1;
                }
            }
        }
        assert!(generated > 0);
    }

    #[test]
    fn fixed_filler_overflow_is_an_invariant_error() {
        // 33 checks, 1 locked, 16 pooled: 16 open against 17 fixed filler.
        let opts = GooseOptions {
            include_npc_souls: true,
            filler_amount_mega_honk: 3,
            filler_amount_speedy_feet: 10,
            filler_amount_goose_day: 3,
            filler_active_silent_steps: true,
            ..core_only(Goal::FindTheBell)
        };
        let err = generate(&opts, 0).unwrap_err();
        assert!(matches!(err, RandomiserError::GenerationInvariant(_)));
    }

    #[test]
    fn catalog_universe_ignores_the_options() {
        let narrow = generate(&core_only(Goal::FindTheBell), 3).unwrap();
        let wide = generate(
            &GooseOptions {
                goal: Goal::AllTasks,
                include_extra_tasks: true,
                include_speedrun_tasks: true,
                include_model_church_pecks: PeckGranularity::Full,
                include_npc_souls: true,
                include_prop_souls: true,
                ..GooseOptions::default()
            },
            3,
        )
        .unwrap();

        let universe = catalog::all_location_ids();
        assert_eq!(universe, catalog::all_location_ids());
        assert_eq!(universe.len(), catalog::LOCATIONS.len());

        for slot in [&narrow, &wide] {
            for check in slot.regions.checks() {
                assert_eq!(universe.get(check.name), Some(&check.id));
            }
        }
        assert!(narrow.regions.check_count() < wide.regions.check_count());
        assert!(wide.regions.check_count() < universe.len());
    }

    #[test]
    fn slot_data_carries_the_resolved_start() {
        let opts = GooseOptions {
            starting_area: StartingArea::HighStreet,
            ..GooseOptions::default()
        };
        let slot = generate(&opts, 99).unwrap();
        assert_eq!(slot.starting_item, catalog::HIGH_STREET_ACCESS);
        assert_eq!(slot.slot_data.starting_area, catalog::HIGH_STREET_ACCESS);
        assert_eq!(slot.slot_data.goal, opts.goal.id());
    }
}
