use super::model::Series;

// ---------------------------------------------------------------------------
// Row limit: how many leading rows are analysed
// ---------------------------------------------------------------------------

/// Return the first `limit` items, or all of them when `limit` is `None`.
///
/// A limit past the end clamps to the full slice.
pub fn leading<T>(items: &[T], limit: Option<usize>) -> &[T] {
    match limit {
        Some(k) => &items[..k.min(items.len())],
        None => items,
    }
}

/// Apply [`leading`] to both columns of a series.
pub fn truncate_series(series: Series, limit: Option<usize>) -> Series {
    let keep = leading(&series.values, limit).len();
    log::debug!("Selected {keep} of {} rows", series.values.len());

    let Series {
        mut blocks,
        mut values,
    } = series;
    blocks.truncate(keep);
    values.truncate(keep);
    Series { blocks, values }
}
