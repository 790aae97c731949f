// ---------------------------------------------------------------------------
// Record – one row of the input CSV
// ---------------------------------------------------------------------------

/// A single timing sample: the block it was measured on and the elapsed time.
///
/// Field order matters: the derived `Ord` sorts by block first, then time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Record {
    pub block: i64,
    pub time: i64,
}

impl Record {
    pub fn new(block: i64, time: i64) -> Self {
        Record { block, time }
    }
}

// ---------------------------------------------------------------------------
// Dataset – all records, sorted
// ---------------------------------------------------------------------------

/// The full parsed input, sorted ascending by (block, time).
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Take ownership of `records` and sort them.
    pub fn from_records(mut records: Vec<Record>) -> Self {
        records.sort();
        Dataset { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct block ids.
    pub fn block_count(&self) -> usize {
        let mut count = 0;
        let mut last = None;
        for r in &self.records {
            if last != Some(r.block) {
                count += 1;
                last = Some(r.block);
            }
        }
        count
    }
}

// ---------------------------------------------------------------------------
// BlockAverage – one row of the averaged dataset
// ---------------------------------------------------------------------------

/// Mean time of every sample measured on one block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockAverage {
    pub block: i64,
    pub average_time: f64,
    /// How many records contributed to `average_time`.
    pub samples: usize,
}

// ---------------------------------------------------------------------------
// Series – what the reporter and the plot consume
// ---------------------------------------------------------------------------

/// An ordered sequence of values, each tagged with the block it came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pub blocks: Vec<i64>,
    pub values: Vec<f64>,
}

impl Series {
    /// Raw times, one point per record.
    pub fn from_records(records: &[Record]) -> Self {
        Series {
            blocks: records.iter().map(|r| r.block).collect(),
            values: records.iter().map(|r| r.time as f64).collect(),
        }
    }

    /// Averaged times, one point per block.
    pub fn from_averages(averages: &[BlockAverage]) -> Self {
        Series {
            blocks: averages.iter().map(|a| a.block).collect(),
            values: averages.iter().map(|a| a.average_time).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_sorts_by_block_then_time() {
        let ds = Dataset::from_records(vec![
            Record::new(2, 5),
            Record::new(1, 20),
            Record::new(1, 10),
        ]);
        assert_eq!(
            ds.records(),
            &[Record::new(1, 10), Record::new(1, 20), Record::new(2, 5)]
        );
        assert_eq!(ds.block_count(), 2);
    }

    #[test]
    fn series_keeps_block_tags() {
        let records = [Record::new(3, 7), Record::new(4, 9)];
        let series = Series::from_records(&records);
        assert_eq!(series.blocks, vec![3, 4]);
        assert_eq!(series.values, vec![7.0, 9.0]);
    }
}
