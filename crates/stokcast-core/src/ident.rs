//! Record identifier allocation and renumbering.
//!
//! Identifiers are human-readable keys of the form `<INITIALS>-<TAIL>-<SEQ>`
//! derived from an item name plus a per-item sequence number. Allocation is
//! a pure function of the name and the current record count; after
//! deletions, [`renumber`] recomputes identifiers so the surviving records
//! of an item carry dense sequences 001..00n again.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::{Result, StokError};

/// A stock record as held by the external store.
///
/// The core never mutates stored records; it only computes the identifier
/// values the store should write.
#[derive(Debug, Clone, PartialEq)]
pub struct StockRecord {
    /// Current identifier
    pub id: String,
    /// Item name, at least two words
    pub item_name: String,
    /// Observation date
    pub date: NaiveDate,
    /// Stock value
    pub value: f64,
}

/// How surviving records are renumbered after a deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenumberScheme {
    /// Each item keeps its own `<INITIALS>-<TAIL>-NNN` prefix; sequences
    /// restart at 001 per item.
    PerItem,
    /// All records are renumbered under the flat `DATA-NNN` scheme,
    /// regardless of item.
    Global,
}

/// An identifier change the store should apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdReassignment {
    pub old_id: String,
    pub new_id: String,
}

/// Allocates an identifier for a new record of the given item.
///
/// The item name must contain at least two whitespace-separated words.
/// The identifier is built from the uppercased first letter of each of the
/// first two words, the uppercased last two letters of each of the first
/// two words, and the record count plus one, zero-padded to three digits.
///
/// The count must be the accurate number of records the store currently
/// holds for this item; the store is responsible for reading it and
/// writing the result back atomically with respect to concurrent inserts.
///
/// # Example
/// ```
/// use stokcast_core::ident::allocate_id;
/// assert_eq!(allocate_id("Beras Putih", 0).unwrap(), "BP-ASIH-001");
/// ```
pub fn allocate_id(item_name: &str, existing_count: usize) -> Result<String> {
    let (initials, tail) = item_abbreviation(item_name)?;
    Ok(format!("{}-{}-{:03}", initials, tail, existing_count + 1))
}

/// Recomputes identifiers for a set of surviving records.
///
/// Records are ordered by their prior identifier (insertion order proxy),
/// with the date as tie-break, and assigned contiguous sequences starting
/// at 1. Under [`RenumberScheme::PerItem`] ordering and numbering happen
/// within each item; under [`RenumberScheme::Global`] the whole set shares
/// one `DATA-NNN` sequence.
///
/// Returns one reassignment per record, including those whose identifier
/// is already correct; callers may skip no-op writes.
pub fn renumber(records: &[StockRecord], scheme: RenumberScheme) -> Result<Vec<IdReassignment>> {
    match scheme {
        RenumberScheme::PerItem => {
            let mut groups: BTreeMap<&str, Vec<&StockRecord>> = BTreeMap::new();
            for record in records {
                groups.entry(record.item_name.as_str()).or_default().push(record);
            }

            let mut out = Vec::with_capacity(records.len());
            for (item_name, mut group) in groups {
                let (initials, tail) = item_abbreviation(item_name)?;
                sort_by_prior_id(&mut group);
                for (idx, record) in group.iter().enumerate() {
                    out.push(IdReassignment {
                        old_id: record.id.clone(),
                        new_id: format!("{}-{}-{:03}", initials, tail, idx + 1),
                    });
                }
            }
            Ok(out)
        }
        RenumberScheme::Global => {
            let mut ordered: Vec<&StockRecord> = records.iter().collect();
            sort_by_prior_id(&mut ordered);
            Ok(ordered
                .iter()
                .enumerate()
                .map(|(idx, record)| IdReassignment {
                    old_id: record.id.clone(),
                    new_id: format!("DATA-{:03}", idx + 1),
                })
                .collect())
        }
    }
}

fn sort_by_prior_id(records: &mut [&StockRecord]) {
    records.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.date.cmp(&b.date)));
}

/// Derives the (initials, tail) abbreviation pair from an item name.
///
/// Initials are the uppercased first letters of the first two words; the
/// tail is the uppercased last two letters of each of the first two words,
/// concatenated. A one-letter word contributes itself as its tail part.
fn item_abbreviation(item_name: &str) -> Result<(String, String)> {
    let words: Vec<&str> = item_name.split_whitespace().collect();
    if words.len() < 2 {
        return Err(StokError::InvalidItemName(item_name.to_string()));
    }

    let initials: String = words[..2]
        .iter()
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    let tail: String = words[..2]
        .iter()
        .flat_map(|w| {
            let chars: Vec<char> = w.chars().collect();
            let start = chars.len().saturating_sub(2);
            chars[start..].to_vec()
        })
        .flat_map(char::to_uppercase)
        .collect();

    Ok((initials, tail))
}
