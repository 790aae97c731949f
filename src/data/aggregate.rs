use std::collections::BTreeMap;

use super::model::{BlockAverage, Record};

// ---------------------------------------------------------------------------
// Per-block averaging
// ---------------------------------------------------------------------------

/// Collapse all records of each block into their mean time.
///
/// Accumulates `block → (sum, count)` in an ordered map, so the input does
/// not need to be sorted or have contiguous blocks. The result is ordered
/// ascending by block and holds exactly one entry per distinct block.
pub fn average_by_block(records: &[Record]) -> Vec<BlockAverage> {
    let mut groups: BTreeMap<i64, (i128, usize)> = BTreeMap::new();
    for r in records {
        let (sum, count) = groups.entry(r.block).or_default();
        *sum += i128::from(r.time);
        *count += 1;
    }

    let averages: Vec<BlockAverage> = groups
        .into_iter()
        .map(|(block, (sum, count))| BlockAverage {
            block,
            average_time: sum as f64 / count as f64,
            samples: count,
        })
        .collect();

    log::debug!(
        "Averaged {} records into {} blocks",
        records.len(),
        averages.len()
    );
    averages
}
