use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, Trim};

use super::model::{Dataset, Record};
use crate::error::LoadError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a timing dataset from a CSV file.
///
/// Layout: no header row, two integer columns per line:
///
/// ```text
/// 0,15324
/// 1,14980
/// 0,15102
/// ```
///
/// The first column is the block id, the second the measured time. The
/// file is closed before this returns; the records come back sorted.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening timing CSV {}", path.display()))?;
    let dataset = read_records(file).with_context(|| format!("parsing {}", path.display()))?;

    if dataset.is_empty() {
        log::warn!("{} contains no records", path.display());
    }
    log::info!(
        "Loaded {} records over {} blocks from {}",
        dataset.len(),
        dataset.block_count(),
        path.display()
    );
    Ok(dataset)
}

/// Parse headerless `block,time` rows from any reader.
pub fn read_records<R: Read>(input: R) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.context("reading CSV row")?;
        records.push(parse_row(&row)?);
    }

    Ok(Dataset::from_records(records))
}

fn parse_row(row: &StringRecord) -> Result<Record, LoadError> {
    let line = row.position().map(|p| p.line()).unwrap_or(0);
    if row.len() != 2 {
        return Err(LoadError::Arity {
            line,
            found: row.len(),
        });
    }
    let block = parse_field(row, 0, "block", line)?;
    let time = parse_field(row, 1, "time", line)?;
    Ok(Record::new(block, time))
}

fn parse_field(
    row: &StringRecord,
    idx: usize,
    column: &'static str,
    line: u64,
) -> Result<i64, LoadError> {
    let raw = row.get(idx).unwrap_or("");
    raw.parse::<i64>().map_err(|_| LoadError::Field {
        line,
        column,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn load(text: &str) -> Result<Dataset> {
        read_records(text.as_bytes())
    }

    #[test]
    fn parses_and_sorts_rows() {
        let ds = load("2,5\n1,20\n1,10\n").unwrap();
        assert_eq!(
            ds.records(),
            &[Record::new(1, 10), Record::new(1, 20), Record::new(2, 5)]
        );
    }

    #[test]
    fn output_is_sorted_by_block() {
        let ds = load("9,1\n3,4\n7,2\n3,1\n0,8\n7,7\n").unwrap();
        assert!(ds.records().windows(2).all(|w| w[0].block <= w[1].block));
    }

    #[test]
    fn trims_whitespace_and_skips_blank_lines() {
        let ds = load(" 4 , 100 \n\n5,200\n").unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[0], Record::new(4, 100));
    }

    #[test]
    fn accepts_negative_values() {
        let ds = load("-1,-3\n").unwrap();
        assert_eq!(ds.records(), &[Record::new(-1, -3)]);
    }

    #[test]
    fn empty_input_is_an_empty_dataset() {
        let ds = load("").unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn rejects_wrong_arity() {
        let err = load("1,2\n3,4,5\n").unwrap_err();
        assert_eq!(
            err.downcast_ref::<LoadError>(),
            Some(&LoadError::Arity { line: 2, found: 3 })
        );
    }

    #[test]
    fn rejects_non_integer_fields() {
        let err = load("1,2\n3,fast\n").unwrap_err();
        assert_eq!(
            err.downcast_ref::<LoadError>(),
            Some(&LoadError::Field {
                line: 2,
                column: "time",
                value: "fast".to_string(),
            })
        );
    }

    #[test]
    fn rejects_float_times() {
        let err = load("1,2.5\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::Field { column: "time", .. })
        ));
    }

    #[test]
    fn load_file_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1,10\n1,20\n2,5").unwrap();
        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.block_count(), 2);
    }

    #[test]
    fn load_file_names_missing_path() {
        let err = load_file(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.csv"));
    }
}
