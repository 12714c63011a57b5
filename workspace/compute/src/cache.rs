use cached::{Cached, SizedCache};
use common::{ReportRow, ReportType};
use std::sync::Mutex;
use tracing::debug;

use crate::render::{ChartRender, resolve_render};

/// Hashable copy of a row, numbers compared by their bit patterns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RowKey {
    period: String,
    category: Option<String>,
    values: [Option<u64>; 4],
}

impl From<&ReportRow> for RowKey {
    fn from(row: &ReportRow) -> Self {
        Self {
            period: row.period.clone(),
            category: row.category.clone(),
            values: [row.revenue, row.deal_value, row.count, row.converted]
                .map(|value| value.map(f64::to_bits)),
        }
    }
}

/// A cache key for chart resolution, holding the rows by value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChartCacheKey {
    report_type: ReportType,
    chart_key: String,
    rows: Vec<RowKey>,
}

impl ChartCacheKey {
    pub fn new(report_type: ReportType, chart_key: &str, rows: &[ReportRow]) -> Self {
        Self {
            report_type,
            chart_key: chart_key.to_string(),
            rows: rows.iter().map(RowKey::from).collect(),
        }
    }
}

/// Memoizes [`resolve_render`] on the report type, the chart kind and the rows.
///
/// With the default capacity of one entry the previous result is reused until
/// any of the three inputs changes. The store can be swapped for any
/// [`Cached`] implementation.
pub struct ChartCache<C: Cached<ChartCacheKey, ChartRender> = SizedCache<ChartCacheKey, ChartRender>>
{
    cache: Mutex<C>,
}

impl<C: Cached<ChartCacheKey, ChartRender>> ChartCache<C> {
    pub fn new_with_store(cache_store: C) -> Self {
        Self {
            cache: Mutex::new(cache_store),
        }
    }

    /// Resolves the chart, reusing the cached result when the inputs are unchanged.
    pub fn resolve(&self, report_type: ReportType, chart_key: &str, rows: &[ReportRow]) -> ChartRender {
        let key = ChartCacheKey::new(report_type, chart_key, rows);

        let Ok(mut cache) = self.cache.lock() else {
            return resolve_render(report_type, chart_key, rows);
        };

        if let Some(render) = cache.cache_get(&key) {
            debug!(report_type = %key.report_type, chart_key = %key.chart_key, "Chart cache hit");
            return render.clone();
        }

        let render = resolve_render(report_type, chart_key, rows);
        cache.cache_set(key, render.clone());
        render
    }

    /// Clears all cached entries, forcing fresh resolution on the next call.
    pub fn clear(&self) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.cache_clear();
        }
    }

    pub fn size(&self) -> usize {
        self.cache.lock().map(|cache| cache.cache_size()).unwrap_or(0)
    }

    /// Number of calls answered from the cache, if the store counts them.
    pub fn hits(&self) -> Option<u64> {
        self.cache.lock().ok().and_then(|cache| cache.cache_hits())
    }
}

impl ChartCache<SizedCache<ChartCacheKey, ChartRender>> {
    /// Creates a cache holding up to `capacity` resolved charts.
    pub fn new(capacity: usize) -> Self {
        Self::new_with_store(SizedCache::with_size(capacity.max(1)))
    }
}

impl Default for ChartCache<SizedCache<ChartCacheKey, ChartRender>> {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{lead_rows, opportunity_rows, sales_rows};

    #[test]
    fn test_identical_inputs_reuse_result() {
        let cache: ChartCache = ChartCache::default();
        let rows = sales_rows();

        let first = cache.resolve(ReportType::Sales, "line", &rows);
        let second = cache.resolve(ReportType::Sales, "line", &rows.clone());

        assert_eq!(first, second);
        assert_eq!(cache.hits(), Some(1));
        assert_eq!(cache.size(), 1);
    }

    #[test]
    fn test_any_changed_input_recomputes() {
        let cache = ChartCache::new(1);
        let rows = sales_rows();

        cache.resolve(ReportType::Sales, "line", &rows);
        let bar = cache.resolve(ReportType::Sales, "bar", &rows);
        assert_eq!(bar.title(), Some("Sales Bar Chart"));

        let leads = cache.resolve(ReportType::Leads, "bar", &rows);
        assert_eq!(leads.title(), Some("Leads Bar Chart"));

        let mut changed = rows.clone();
        changed[0].revenue = Some(1.0);
        cache.resolve(ReportType::Leads, "bar", &changed);

        assert_eq!(cache.hits(), Some(0));
        assert_eq!(cache.size(), 1);
    }

    #[test]
    fn test_keys_differ_by_row_content() {
        let sales = ChartCacheKey::new(ReportType::Sales, "line", &sales_rows());
        let opportunities = ChartCacheKey::new(ReportType::Sales, "line", &opportunity_rows());
        assert_ne!(sales, opportunities);
        assert_eq!(sales, ChartCacheKey::new(ReportType::Sales, "line", &sales_rows()));
    }

    #[test]
    fn test_keys_compare_every_row_value() {
        let rows = lead_rows();
        let mut converted = rows.clone();
        converted[1].converted = Some(8.0);
        let mut recategorised = rows.clone();
        recategorised[0].category = None;

        let key = ChartCacheKey::new(ReportType::Leads, "bar", &rows);
        assert_ne!(key, ChartCacheKey::new(ReportType::Leads, "bar", &converted));
        assert_ne!(key, ChartCacheKey::new(ReportType::Leads, "bar", &recategorised));
        assert_ne!(key, ChartCacheKey::new(ReportType::Leads, "bar", &rows[..1]));
    }

    #[test]
    fn test_clear_empties_cache() {
        let cache = ChartCache::new(4);
        cache.resolve(ReportType::Sales, "line", &sales_rows());
        cache.resolve(ReportType::Opportunities, "bar", &opportunity_rows());
        assert_eq!(cache.size(), 2);

        cache.clear();
        assert_eq!(cache.size(), 0);
    }
}
