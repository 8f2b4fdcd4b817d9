use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Serialize;
use tracing::debug;

use crate::catalog::{self, ItemGroup, GOLDEN_BELL_SOUL, MODEL_VILLAGE_ACCESS};
use crate::options::{Goal, GooseOptions, STARTING_ACCESS_ITEMS};
use crate::prefill::locked_item_count;
use crate::regions::RegionGraph;
use crate::{RandomiserError, Result};

/// Guaranteed items for one slot, before filler padding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemPool {
    /// Access item the player holds from the start. Never in `items`.
    pub starting_item: &'static str,
    pub items: Vec<&'static str>,
    /// Open checks still to be covered by filler.
    pub residual: usize,
}

/// The starting access item. This is the first thing drawn from the slot's
/// RNG, and only when the area is left random.
pub fn choose_starting_item(options: &GooseOptions, rng: &mut StdRng) -> Result<&'static str> {
    if let Some(item) = options.starting_area.fixed_access_item() {
        return Ok(item);
    }

    STARTING_ACCESS_ITEMS
        .choose(rng)
        .copied()
        .ok_or_else(|| RandomiserError::GenerationInvariant("no starting area to pick from".into()))
}

/// Open checks left after `placed` pool items and `locked` pinned items.
pub fn residual_slots(active_checks: usize, locked: usize, placed: usize) -> Result<usize> {
    active_checks
        .checked_sub(locked)
        .and_then(|open| open.checked_sub(placed))
        .ok_or_else(|| {
            RandomiserError::GenerationInvariant(format!(
                "{placed} pool items and {locked} locked items do not fit in {active_checks} checks"
            ))
        })
}

pub fn build_item_pool(
    options: &GooseOptions,
    graph: &RegionGraph,
    rng: &mut StdRng,
) -> Result<ItemPool> {
    let starting_item = choose_starting_item(options, rng)?;

    let mut items: Vec<&'static str> = STARTING_ACCESS_ITEMS
        .iter()
        .copied()
        .filter(|&item| item != starting_item)
        .collect();
    items.push(MODEL_VILLAGE_ACCESS);

    if options.goal == Goal::FindTheBell {
        items.push(GOLDEN_BELL_SOUL);
    }

    if options.include_npc_souls {
        items.extend(catalog::items_in(ItemGroup::NpcSoul).map(|i| i.name));
    }
    if options.include_prop_souls {
        items.extend(catalog::items_in(ItemGroup::PropSoul).map(|i| i.name));
    }

    let residual = residual_slots(
        graph.check_count(),
        locked_item_count(options.goal),
        items.len(),
    )?;

    debug!(
        starting_item,
        guaranteed = items.len(),
        residual,
        "built item pool"
    );

    Ok(ItemPool {
        starting_item,
        items,
        residual,
    })
}
