//! Seed observations loaded into the store at startup.
//!
//! The service boots with the same five observations the dashboard client
//! was built against: Aarhus N and Copenhagen across three April days.
//! Ids are assigned by the store as the drafts are inserted, so the seed
//! records come up as ids 1 through 5.

use weathercast_types::{ObservedAt, Place, RecordDraft};

/// The seed observations, in insertion order.
pub fn seed_drafts() -> Vec<RecordDraft> {
    let aarhus = Place {
        name: String::from("Aarhus N"),
        latitude: 56.17,
        longitude: 10.22,
    };
    let copenhagen = Place {
        name: String::from("Copenhagen"),
        latitude: 55.67,
        longitude: 12.56,
    };

    vec![
        RecordDraft {
            observed_at: ObservedAt::new("20240415", "10:15"),
            place: aarhus.clone(),
            temperature: 13.1,
            humidity: 70,
        },
        RecordDraft {
            observed_at: ObservedAt::new("20240415", "11:30"),
            place: copenhagen.clone(),
            temperature: 15.5,
            humidity: 65,
        },
        RecordDraft {
            observed_at: ObservedAt::new("20240416", "09:00"),
            place: aarhus.clone(),
            temperature: 10.0,
            humidity: 80,
        },
        RecordDraft {
            observed_at: ObservedAt::new("20240416", "14:00"),
            place: copenhagen,
            temperature: 12.8,
            humidity: 75,
        },
        RecordDraft {
            observed_at: ObservedAt::new("20240417", "08:30"),
            place: aarhus,
            temperature: 9.5,
            humidity: 85,
        },
    ]
}

#[cfg(test)]
mod tests {
    use weathercast_store::RecordStore;

    use super::*;

    #[test]
    fn seed_drafts_insert_cleanly_as_ids_one_through_five() {
        let mut store = RecordStore::new();
        for draft in seed_drafts() {
            assert!(store.insert(draft).is_ok());
        }

        let ids: Vec<&str> = store.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn seed_timestamps_are_pairwise_distinct() {
        let drafts = seed_drafts();
        for (i, a) in drafts.iter().enumerate() {
            for b in drafts.iter().skip(i.saturating_add(1)) {
                assert_ne!(a.observed_at, b.observed_at);
            }
        }
    }
}
