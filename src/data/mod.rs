/// Data layer: metric types and directory loading.
///
/// Architecture:
/// ```text
///   data dir/
///     fps.txt  gpu.txt  ...
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  one file → MetricSeries
///   └──────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ MetricCollection │  name → MetricSeries
///   └──────────────────┘
/// ```

pub mod loader;
pub mod model;
