use std::collections::HashMap;

// ---------------------------------------------------------------------------
// MetricSeries – one input file
// ---------------------------------------------------------------------------

/// A named sequence of samples. Sample order is the file's line order and is
/// used as the x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    name: String,
    samples: Vec<f64>,
}

impl MetricSeries {
    pub fn new(name: impl Into<String>, samples: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            samples,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

// ---------------------------------------------------------------------------
// MetricCollection – the complete loaded directory
// ---------------------------------------------------------------------------

/// Metric name → series. The map itself is unordered; use [`sorted`] for a
/// deterministic view.
///
/// [`sorted`]: MetricCollection::sorted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricCollection {
    series: HashMap<String, MetricSeries>,
}

impl MetricCollection {
    /// Insert a series, returning the previous one stored under the same name.
    pub fn insert(&mut self, series: MetricSeries) -> Option<MetricSeries> {
        self.series.insert(series.name.clone(), series)
    }

    pub fn get(&self, name: &str) -> Option<&MetricSeries> {
        self.series.get(name)
    }

    /// All series ordered by name.
    pub fn sorted(&self) -> Vec<&MetricSeries> {
        let mut all: Vec<&MetricSeries> = self.series.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    /// Number of metrics.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether no metric was loaded.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl FromIterator<MetricSeries> for MetricCollection {
    fn from_iter<I: IntoIterator<Item = MetricSeries>>(iter: I) -> Self {
        let mut collection = MetricCollection::default();
        for series in iter {
            collection.insert(series);
        }
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_orders_by_name() {
        let collection: MetricCollection = ["gpu", "cpu", "frame"]
            .into_iter()
            .map(|n| MetricSeries::new(n, vec![1.0]))
            .collect();

        let names: Vec<&str> = collection.sorted().iter().map(|s| s.name()).collect();
        assert_eq!(names, ["cpu", "frame", "gpu"]);
    }

    #[test]
    fn insert_replaces_same_name() {
        let mut collection = MetricCollection::default();
        assert!(collection.insert(MetricSeries::new("a", vec![1.0])).is_none());
        let old = collection.insert(MetricSeries::new("a", vec![2.0, 3.0]));

        assert_eq!(old.map(|s| s.len()), Some(1));
        assert!(!collection.get("a").unwrap().is_empty());
        assert!(MetricSeries::new("empty", Vec::new()).is_empty());
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get("a").unwrap().samples(), &[2.0, 3.0]);
    }
}
