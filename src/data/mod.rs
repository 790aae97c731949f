/// Data layer: core types, loading, averaging and row selection.
///
/// Architecture:
/// ```text
///   block,time CSV
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows → Dataset (sorted by block, time)
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  optional: mean time per block
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  select   │  keep the first N rows → Series
///   └──────────┘
/// ```

pub mod aggregate;
pub mod loader;
pub mod model;
pub mod select;
