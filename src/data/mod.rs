/// Data layer: core types and tolerant loading.
///
/// Architecture:
/// ```text
///  pasted tab-separated text
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  split lines → rows → (category, amount) pairs
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ AdjustmentSet  │  Vec<Observation> + ParseTally
///   └───────────────┘
///        │
///        ▼
///     analysis      (summary / distribution / coverage / …)
/// ```

pub mod loader;
pub mod model;
