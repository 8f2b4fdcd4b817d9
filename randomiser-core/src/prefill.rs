//! Story items pinned to fixed checks before the general search runs.

use serde::Serialize;
use tracing::debug;

use crate::catalog::{GOLDEN_BELL, GOLDEN_BELL_SOUL, PICK_UP_GOLDEN_BELL};
use crate::options::Goal;
use crate::regions::{goal_location, RegionGraph};
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LockedPlacement {
    pub item: &'static str,
    pub check: &'static str,
}

/// Locked placements for a goal, in the order they are applied.
pub fn locked_placements(goal: Goal) -> Vec<LockedPlacement> {
    let mut placements = vec![LockedPlacement {
        item: GOLDEN_BELL,
        check: PICK_UP_GOLDEN_BELL,
    }];

    if let Some(check) = goal_location(goal) {
        placements.push(LockedPlacement {
            item: GOLDEN_BELL_SOUL,
            check,
        });
    }

    placements
}

pub fn locked_item_count(goal: Goal) -> usize {
    locked_placements(goal).len()
}

/// Pins every locked item into `graph`. Fails if a target check is not active.
pub fn apply_locked_placements(
    graph: &mut RegionGraph,
    goal: Goal,
) -> Result<Vec<LockedPlacement>> {
    let placements = locked_placements(goal);
    for placement in &placements {
        graph.place_locked_item(placement.check, placement.item)?;
        debug!(item = placement.item, check = placement.check, "locked item");
    }
    Ok(placements)
}
