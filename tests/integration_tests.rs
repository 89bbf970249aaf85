//! Integration tests for recstore
//!
//! Exercises the index and the page together the way an outer table layer
//! composes them: records land in pages, the primary key index maps keys to
//! encoded rids, and updates rewrite rids in place.

use recstore::{IndexConfig, OrderedIndex, Record, RecordPage, WriteOutcome};

// =============================================================================
// Table-style Composition
// =============================================================================

#[test]
fn test_insert_then_lookup_through_index() {
    let mut index = OrderedIndex::new(IndexConfig::default());
    let mut page = RecordPage::new(4);

    // Outer-layer insert path: write the physical record, register the
    // primary key with the encoded rid
    for (key, rid) in [(100, 1u64), (200, 2), (300, 3)] {
        let slot = page
            .write(Record::new(None, rid, 0, 0, vec![key, key * 10]))
            .slot()
            .expect("page has room");
        assert_eq!(slot as u64, rid - 1);
        index.insert(key, rid.to_string());
    }

    // Lookup path: key → rid → slot scan
    let rid: u64 = index.get(200).unwrap().parse().unwrap();
    let record = page
        .read_all()
        .into_iter()
        .find(|r| r.rid == rid)
        .expect("record for rid 2");
    assert_eq!(record.columns, vec![200, 2000]);
}

#[test]
fn test_page_rollover_on_full() {
    let mut pages = vec![RecordPage::new(2)];

    // The full outcome is the signal to open a new page, not an error
    for rid in 0..5u64 {
        let record = Record::new(None, rid, 0, 0, vec![rid as i64]);
        match pages.last_mut().unwrap().write(record.clone()) {
            WriteOutcome::Slot(_) => {}
            WriteOutcome::Full => {
                let mut fresh = RecordPage::new(2);
                assert_eq!(fresh.write(record), WriteOutcome::Slot(0));
                pages.push(fresh);
            }
        }
    }

    assert_eq!(pages.len(), 3);
    assert_eq!(pages[0].len(), 2);
    assert_eq!(pages[1].len(), 2);
    assert_eq!(pages[2].len(), 1);
}

#[test]
fn test_update_rewrites_rid_and_range_scan_sees_keys() {
    let mut index = OrderedIndex::new(IndexConfig::default());
    let mut page = RecordPage::new(8);

    index
        .batch_insert(
            (1..=5)
                .map(|key| (key, format!("{key}")))
                .collect(),
        )
        .unwrap();
    for rid in 1..=5u64 {
        page.write(Record::new(None, rid, 0, 0, vec![rid as i64]));
    }

    // Tombstone the record behind key 3 by rewriting its rid
    let victim: u64 = index.get(3).unwrap().parse().unwrap();
    let slot = (victim - 1) as usize;
    page.overwrite_rid(slot, u64::MAX).unwrap();

    // The index is untouched by the physical update
    let scanned = index.range_query(2, 5);
    assert_eq!(scanned.keys().copied().collect::<Vec<_>>(), vec![2, 3, 4]);

    // Only the victim's rid changed
    assert_eq!(page.read_index(slot).unwrap().rid, u64::MAX);
    assert_eq!(page.read_index(slot).unwrap().columns, vec![3]);
    assert_eq!(page.read_index(0).unwrap().rid, 1);
}
