/// Data layer: core types, loading, filtering and text rendering.
///
/// Architecture:
/// ```text
///  a.csv  b.csv  c.csv   (any encoding)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  sniff encoding → decode → parse → concatenate
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  Vec<Record>, union of column names
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  Criteria → first 100 matches, or "no matches"
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  render   │  fixed-width text table
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod render;
