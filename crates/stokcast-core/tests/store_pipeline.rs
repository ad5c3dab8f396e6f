//! End-to-end pipeline over an in-memory store: insert with identifier
//! allocation, forecast with accuracy evaluation, delete with survivor
//! renumbering.

use approx::assert_relative_eq;
use chrono::NaiveDate;

use stokcast_core::{
    delete_and_renumber, forecast_item, insert_record, AccuracyRating, MemoryStore,
    RenumberScheme, StockStore,
};

const WEIGHTS: [f64; 3] = [0.5, 0.3, 0.2];

fn month(m: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, m, 1).unwrap()
}

fn seeded_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    let values = [100.0, 120.0, 110.0, 130.0, 125.0, 140.0];
    for (i, value) in values.iter().enumerate() {
        insert_record(&mut store, "Beras Putih", month(i as u32 + 1), *value).unwrap();
    }
    for (i, value) in [50.0, 55.0, 52.0].iter().enumerate() {
        insert_record(&mut store, "Minyak Goreng", month(i as u32 + 1), *value).unwrap();
    }
    store
}

#[test]
fn insert_allocates_dense_per_item_ids() {
    let store = seeded_store();
    let ids: Vec<String> = store
        .records_for_item("Beras Putih")
        .iter()
        .map(|r| r.id.clone())
        .collect();
    assert_eq!(
        ids,
        vec![
            "BP-ASIH-001",
            "BP-ASIH-002",
            "BP-ASIH-003",
            "BP-ASIH-004",
            "BP-ASIH-005",
            "BP-ASIH-006"
        ]
    );
    assert_eq!(store.count_records("Minyak Goreng"), 3);
}

#[test]
fn forecast_matches_hand_computed_values() {
    let store = seeded_store();
    let result = forecast_item(&store, "Beras Putih", &WEIGHTS).unwrap();

    // Hand-computed weighted moving average of
    // [100, 120, 110, 130, 125, 140] with weights [0.5, 0.3, 0.2].
    let expected = [50.0, 90.0, 111.0, 122.0, 123.5, 133.5];
    assert_eq!(result.smoothed.len(), expected.len());
    for (got, want) in result.smoothed.iter().zip(expected.iter()) {
        assert_relative_eq!(got, want, epsilon = 1e-9);
    }

    assert_relative_eq!(result.next_period, 133.5, epsilon = 1e-9);
}

#[test]
fn accuracy_evaluation_matches_hand_computed_values() {
    let store = seeded_store();
    let result = forecast_item(&store, "Beras Putih", &WEIGHTS).unwrap();
    let accuracy = &result.accuracy;

    // Headline MAPE over positions 2..=5:
    // mean(1/110, 8/130, 1.5/125, 6.5/140) * 100
    assert_relative_eq!(accuracy.headline_mape, 3.226448551449, epsilon = 1e-9);
    assert_eq!(accuracy.headline_rating, AccuracyRating::Good);

    // Cumulative table has one entry per position past the window,
    // tagged with that position's date.
    assert_eq!(accuracy.cumulative.len(), 3);
    assert_eq!(accuracy.cumulative[0].0, month(4));
    assert_eq!(accuracy.cumulative[2].0, month(6));

    // First entry covers the whole prefix including the partial-window
    // positions: mean(0.5, 0.25, 1/110, 8/130) * 100
    assert_relative_eq!(accuracy.cumulative[0].1, 20.515734265734, epsilon = 1e-9);

    // The running MAPE improves as history accumulates here, so the max
    // is the first entry and the min the last.
    assert_relative_eq!(accuracy.max_mape.unwrap(), accuracy.cumulative[0].1, epsilon = 1e-12);
    assert_relative_eq!(accuracy.min_mape.unwrap(), accuracy.cumulative[2].1, epsilon = 1e-12);
    assert_eq!(accuracy.worst_rating.unwrap(), AccuracyRating::Acceptable);
}

#[test]
fn delete_then_renumber_leaves_survivors_dense() {
    let mut store = seeded_store();

    let applied = delete_and_renumber(
        &mut store,
        &["BP-ASIH-002".to_string(), "BP-ASIH-005".to_string()],
        RenumberScheme::PerItem,
    )
    .unwrap();

    // Survivors 001, 003, 004, 006 become 001..004.
    let ids: Vec<String> = store
        .records_for_item("Beras Putih")
        .iter()
        .map(|r| r.id.clone())
        .collect();
    assert_eq!(
        ids,
        vec!["BP-ASIH-001", "BP-ASIH-002", "BP-ASIH-003", "BP-ASIH-004"]
    );

    // 001 kept its identifier, so only three writes happened.
    assert_eq!(applied.len(), 3);

    // The other item is untouched.
    let other: Vec<String> = store
        .records_for_item("Minyak Goreng")
        .iter()
        .map(|r| r.id.clone())
        .collect();
    assert_eq!(other, vec!["MG-AKNG-001", "MG-AKNG-002", "MG-AKNG-003"]);
}

#[test]
fn global_renumber_after_removing_whole_item() {
    let mut store = seeded_store();

    let bp_ids: Vec<String> = store
        .records_for_item("Beras Putih")
        .iter()
        .map(|r| r.id.clone())
        .collect();
    delete_and_renumber(&mut store, &bp_ids, RenumberScheme::Global).unwrap();

    assert_eq!(store.count_records("Beras Putih"), 0);
    let ids: Vec<String> = store.all_records().iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, vec!["DATA-001", "DATA-002", "DATA-003"]);
}

#[test]
fn forecast_after_renumber_is_unchanged() {
    // Renumbering rewrites identifiers only; the series and its forecast
    // stay the same.
    let mut store = seeded_store();
    let before = forecast_item(&store, "Minyak Goreng", &WEIGHTS).unwrap();

    delete_and_renumber(
        &mut store,
        &["BP-ASIH-001".to_string()],
        RenumberScheme::PerItem,
    )
    .unwrap();

    let after = forecast_item(&store, "Minyak Goreng", &WEIGHTS).unwrap();
    assert_eq!(before.actual, after.actual);
    assert_eq!(before.smoothed, after.smoothed);
}
