use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, trace};

use crate::catalog::{A_GOOSE_DAY, MEGA_HONK, SILENT_STEPS, SPEEDY_FEET};
use crate::options::GooseOptions;
use crate::{RandomiserError, Result};

/// Kinds and weights in draw order. The first kind doubles as the fallback
/// when every weight is zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FillerWeightTable {
    entries: Vec<(&'static str, u32)>,
}

impl FillerWeightTable {
    pub fn new(entries: Vec<(&'static str, u32)>) -> Self {
        FillerWeightTable { entries }
    }

    pub fn from_options(options: &GooseOptions) -> Self {
        Self::new(options.filler_weights().to_vec())
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, w)| u64::from(w)).sum()
    }

    /// One weighted draw. Leaves `rng` untouched when the total is zero.
    pub fn pick(&self, rng: &mut StdRng) -> Option<&'static str> {
        let fallback = self.entries.first().map(|&(kind, _)| kind);
        let total = self.total();
        if total == 0 {
            return fallback;
        }

        let roll = rng.gen_range(1..=total);
        let mut running = 0u64;
        for &(kind, weight) in &self.entries {
            running += u64::from(weight);
            if running >= roll {
                return Some(kind);
            }
        }
        fallback
    }
}

/// Fills `residual` slots: Silent Steps, then the fixed-count fillers, then
/// weighted draws for whatever is left.
pub fn distribute_filler(
    options: &GooseOptions,
    residual: usize,
    rng: &mut StdRng,
) -> Result<Vec<&'static str>> {
    let mut fixed: Vec<&'static str> = Vec::new();
    if options.filler_active_silent_steps {
        fixed.push(SILENT_STEPS);
    }
    for (kind, count) in [
        (MEGA_HONK, options.filler_amount_mega_honk),
        (SPEEDY_FEET, options.filler_amount_speedy_feet),
        (A_GOOSE_DAY, options.filler_amount_goose_day),
    ] {
        fixed.extend(std::iter::repeat(kind).take(usize::from(count)));
    }

    if fixed.len() > residual {
        return Err(RandomiserError::GenerationInvariant(format!(
            "{} fixed filler items need more than the {residual} open checks",
            fixed.len()
        )));
    }

    let table = FillerWeightTable::from_options(options);
    let draws = residual - fixed.len();
    let mut filler = fixed;
    filler.reserve(draws);
    for _ in 0..draws {
        let kind = table.pick(rng).ok_or_else(|| {
            RandomiserError::GenerationInvariant("filler weight table is empty".into())
        })?;
        trace!(kind, "weighted filler");
        filler.push(kind);
    }

    debug!(total = filler.len(), weighted = draws, "distributed filler");
    Ok(filler)
}
