//! Storage boundary and record orchestration.
//!
//! The core is pure; everything stateful lives behind [`StockStore`]. The
//! free functions here wire the pure engines to a store: allocating an
//! identifier on insert, renumbering survivors after a deletion, and
//! producing a forecast with its accuracy evaluation for one item.
//!
//! The store is assumed single-writer and synchronous. In particular, the
//! count read for identifier allocation and the subsequent insert must not
//! interleave with another insert for the same item; a store that detects
//! a stale count reports it as [`StokError::NonMonotonicCount`].

use chrono::NaiveDate;

use crate::error::{Result, StokError};
use crate::forecast::{next_period_forecast, weighted_moving_average};
use crate::ident::{allocate_id, renumber, IdReassignment, RenumberScheme, StockRecord};
use crate::metrics::{evaluate_forecast, ForecastAccuracy};

/// The record store the core collaborates with.
///
/// Implementations own persistence and ordering; `load_series` must return
/// values in ascending date order.
pub trait StockStore {
    /// Ordered (date, value) series for one item, oldest first.
    fn load_series(&self, item_name: &str) -> Vec<(NaiveDate, f64)>;

    /// Number of records currently held for an item.
    fn count_records(&self, item_name: &str) -> usize;

    /// All records for one item, ordered by identifier.
    fn records_for_item(&self, item_name: &str) -> Vec<StockRecord>;

    /// All records in the store, ordered by identifier.
    fn all_records(&self) -> Vec<StockRecord>;

    /// Inserts a record. Fails with [`StokError::NonMonotonicCount`] if the
    /// identifier collides with an existing one (a stale count was used).
    fn insert(&mut self, record: StockRecord) -> Result<()>;

    /// Deletes the given identifiers, returning the `(id, item_name)` pairs
    /// actually removed.
    fn delete(&mut self, ids: &[String]) -> Vec<(String, String)>;

    /// Rewrites one record's identifier.
    fn write_identifier(&mut self, old_id: &str, new_id: &str);
}

/// Allocates an identifier from the store's current count and inserts the
/// new record. Returns the identifier written.
pub fn insert_record<S: StockStore>(
    store: &mut S,
    item_name: &str,
    date: NaiveDate,
    value: f64,
) -> Result<String> {
    let count = store.count_records(item_name);
    let id = allocate_id(item_name, count)?;
    store.insert(StockRecord {
        id: id.clone(),
        item_name: item_name.to_string(),
        date,
        value,
    })?;
    Ok(id)
}

/// Deletes the given records, then renumbers the records that survive.
///
/// Deletion happens first; renumbering then operates on what remains, so
/// survivors end up with dense sequences. Under
/// [`RenumberScheme::PerItem`] only the items that lost records are
/// renumbered; under [`RenumberScheme::Global`] every surviving record is
/// moved onto the flat `DATA-NNN` sequence.
///
/// Returns the reassignments written back (identifiers that were already
/// correct are skipped).
pub fn delete_and_renumber<S: StockStore>(
    store: &mut S,
    ids: &[String],
    scheme: RenumberScheme,
) -> Result<Vec<IdReassignment>> {
    let removed = store.delete(ids);

    let survivors = match scheme {
        RenumberScheme::PerItem => {
            let mut affected: Vec<&str> = removed.iter().map(|(_, item)| item.as_str()).collect();
            affected.sort_unstable();
            affected.dedup();

            let mut records = Vec::new();
            for item_name in affected {
                records.extend(store.records_for_item(item_name));
            }
            records
        }
        RenumberScheme::Global => store.all_records(),
    };

    let reassignments = renumber(&survivors, scheme)?;
    let mut applied = Vec::new();
    for r in reassignments {
        if r.old_id != r.new_id {
            store.write_identifier(&r.old_id, &r.new_id);
            applied.push(r);
        }
    }

    Ok(applied)
}

/// Forecast and accuracy evaluation for one item.
#[derive(Debug, Clone)]
pub struct ItemForecast {
    /// Dates of the item's series, ascending
    pub dates: Vec<NaiveDate>,
    /// Actual values aligned with `dates`
    pub actual: Vec<f64>,
    /// Smoothed series aligned with `dates`
    pub smoothed: Vec<f64>,
    /// Next-period forecast (last smoothed value)
    pub next_period: f64,
    /// Accuracy evaluation of the smoothed series
    pub accuracy: ForecastAccuracy,
}

/// Loads an item's series and produces its forecast with the accuracy
/// evaluation. Fails if the item has fewer observations than the weight
/// vector.
pub fn forecast_item<S: StockStore>(
    store: &S,
    item_name: &str,
    weights: &[f64],
) -> Result<ItemForecast> {
    let series = store.load_series(item_name);
    if series.len() < weights.len() {
        return Err(StokError::InsufficientData {
            needed: weights.len(),
            got: series.len(),
        });
    }

    let (dates, actual): (Vec<NaiveDate>, Vec<f64>) = series.into_iter().unzip();
    let smoothed = weighted_moving_average(&actual, weights)?;
    let next_period = next_period_forecast(&actual, weights)?;
    let accuracy = evaluate_forecast(&dates, &actual, &smoothed, weights.len())?;

    Ok(ItemForecast {
        dates,
        actual,
        smoothed,
        next_period,
        accuracy,
    })
}

/// In-memory [`StockStore`] for tests and examples.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: Vec<StockRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records across all items.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl StockStore for MemoryStore {
    fn load_series(&self, item_name: &str) -> Vec<(NaiveDate, f64)> {
        let mut series: Vec<(NaiveDate, f64)> = self
            .records
            .iter()
            .filter(|r| r.item_name == item_name)
            .map(|r| (r.date, r.value))
            .collect();
        series.sort_by_key(|(date, _)| *date);
        series
    }

    fn count_records(&self, item_name: &str) -> usize {
        self.records.iter().filter(|r| r.item_name == item_name).count()
    }

    fn records_for_item(&self, item_name: &str) -> Vec<StockRecord> {
        let mut records: Vec<StockRecord> = self
            .records
            .iter()
            .filter(|r| r.item_name == item_name)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        records
    }

    fn all_records(&self) -> Vec<StockRecord> {
        let mut records = self.records.clone();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        records
    }

    fn insert(&mut self, record: StockRecord) -> Result<()> {
        if self.records.iter().any(|r| r.id == record.id) {
            let count = self.count_records(&record.item_name);
            return Err(StokError::NonMonotonicCount {
                item: record.item_name,
                count,
            });
        }
        self.records.push(record);
        Ok(())
    }

    fn delete(&mut self, ids: &[String]) -> Vec<(String, String)> {
        let mut removed = Vec::new();
        self.records.retain(|r| {
            if ids.contains(&r.id) {
                removed.push((r.id.clone(), r.item_name.clone()));
                false
            } else {
                true
            }
        });
        removed
    }

    fn write_identifier(&mut self, old_id: &str, new_id: &str) {
        if let Some(record) = self.records.iter_mut().find(|r| r.id == old_id) {
            record.id = new_id.to_string();
        }
    }
}
