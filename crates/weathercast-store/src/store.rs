//! The record store: an ordered, append/update-only collection.
//!
//! The [`RecordStore`] holds every weather record accepted since service
//! start, in insertion order. It enforces two invariants:
//!
//! 1. Record ids are unique; new ids are assigned as one greater than the
//!    maximum numeric id present (ids that do not parse as integers are
//!    skipped, not rejected -- robustness against foreign or legacy ids).
//! 2. Observation timestamps are unique across the store at insert time.
//!    Updates are exempt: only creation is checked against the conflict
//!    rule.

use weathercast_types::{RecordDraft, RecordId, WeatherRecord};

use crate::error::StoreError;

/// The ordered collection of weather records for this process.
///
/// All operations are synchronous, bounded scans or appends; the store
/// never suspends. A failed mutation leaves the collection untouched.
#[derive(Debug, Default)]
pub struct RecordStore {
    /// All records, in insertion order.
    records: Vec<WeatherRecord>,
}

impl RecordStore {
    /// Create a new empty store.
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Build a store over records recovered from elsewhere (e.g. an
    /// import).
    ///
    /// The records are trusted as-is, including ids that do not parse as
    /// integers; id assignment resumes above the maximum numeric id
    /// present.
    pub fn from_records(records: Vec<WeatherRecord>) -> Self {
        Self { records }
    }

    /// Return the number of records in the store.
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Return whether the store holds no records.
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert a new record under a freshly assigned id.
    ///
    /// The id is one greater than the maximum numeric id currently present
    /// (zero when the store is empty or no id parses). If any existing
    /// record shares the draft's observation timestamp the insert is
    /// rejected and the store is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateObservation`] when the draft's
    /// `observed_at` collides with an existing record.
    pub fn insert(&mut self, draft: RecordDraft) -> Result<&WeatherRecord, StoreError> {
        if self
            .records
            .iter()
            .any(|record| record.observed_at == draft.observed_at)
        {
            return Err(StoreError::DuplicateObservation(draft.observed_at));
        }

        let id = RecordId::from_number(self.max_numeric_id().saturating_add(1));
        self.records.push(draft.into_record(id));

        // Return a reference to the record we just pushed.
        self.records
            .last()
            .ok_or(StoreError::Internal("failed to retrieve record after append"))
    }

    /// Look up a record by id.
    pub fn get(&self, id: &RecordId) -> Option<&WeatherRecord> {
        self.records.iter().find(|record| record.id == *id)
    }

    /// Replace every field of an existing record except its id.
    ///
    /// The new observation timestamp is not re-checked against the
    /// uniqueness rule; only creation detects conflicts.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no record carries `id`; the
    /// store is unchanged in that case.
    pub fn update(
        &mut self,
        id: &RecordId,
        draft: RecordDraft,
    ) -> Result<&WeatherRecord, StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == *id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        record.observed_at = draft.observed_at;
        record.place = draft.place;
        record.temperature = draft.temperature;
        record.humidity = draft.humidity;

        Ok(record)
    }

    /// All records, in insertion order.
    pub fn records(&self) -> &[WeatherRecord] {
        &self.records
    }

    /// All records whose observation date exactly equals `date`.
    ///
    /// Comparison is an exact string match -- no punctuation
    /// normalization -- so `2024.04.15` and `20240415` are distinct keys.
    pub fn records_on_date(&self, date: &str) -> Vec<&WeatherRecord> {
        self.records
            .iter()
            .filter(|record| record.observed_at.date == date)
            .collect()
    }

    /// The `n` chronologically latest records.
    ///
    /// Ordered by (date, time) descending using lexical comparison per
    /// component; ties keep insertion order. Returns an empty vector when
    /// the store is empty.
    pub fn latest(&self, n: usize) -> Vec<&WeatherRecord> {
        let mut sorted: Vec<&WeatherRecord> = self.records.iter().collect();
        // Stable sort: equal keys keep insertion order.
        sorted.sort_by(|a, b| b.observed_at.cmp(&a.observed_at));
        sorted.truncate(n);
        sorted
    }

    /// The maximum numeric id present, skipping ids that fail to parse.
    fn max_numeric_id(&self) -> u64 {
        self.records
            .iter()
            .filter_map(|record| record.id.numeric())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use weathercast_types::{ObservedAt, Place};

    use super::*;

    /// Convenience: a draft observed at the given date and time.
    fn draft(date: &str, time: &str) -> RecordDraft {
        RecordDraft {
            observed_at: ObservedAt::new(date, time),
            place: Place {
                name: String::from("Aarhus N"),
                latitude: 56.17,
                longitude: 10.22,
            },
            temperature: 13.1,
            humidity: 70,
        }
    }

    fn seeded() -> RecordStore {
        let mut store = RecordStore::new();
        let _ = store.insert(draft("20240415", "10:15"));
        let _ = store.insert(draft("20240415", "11:30"));
        let _ = store.insert(draft("20240416", "09:00"));
        store
    }

    #[test]
    fn new_store_is_empty() {
        let store = RecordStore::new();
        assert!(store.is_empty());
        assert_eq!(store.latest(3).len(), 0);
    }

    #[test]
    fn insert_assigns_strictly_increasing_ids() {
        let store = seeded();
        let ids: Vec<&str> = store.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn id_assignment_resumes_above_preexisting_ids() {
        let existing = draft("20240410", "09:00").into_record(RecordId::from("7"));
        let mut store = RecordStore::from_records(vec![existing]);

        let result = store.insert(draft("20240415", "10:15"));
        assert!(matches!(result, Ok(record) if record.id.as_str() == "8"));
    }

    #[test]
    fn id_assignment_skips_unparsable_ids() {
        let foreign = draft("20240410", "09:00").into_record(RecordId::from("station-7"));
        let numeric = draft("20240411", "09:00").into_record(RecordId::from("2"));
        let mut store = RecordStore::from_records(vec![foreign, numeric]);

        let result = store.insert(draft("20240415", "10:15"));
        assert!(matches!(result, Ok(record) if record.id.as_str() == "3"));
    }

    #[test]
    fn insert_rejects_duplicate_observation() {
        let mut store = seeded();
        let before = store.len();

        let result = store.insert(draft("20240415", "10:15"));

        assert_eq!(
            result,
            Err(StoreError::DuplicateObservation(ObservedAt::new(
                "20240415", "10:15",
            ))),
        );
        assert_eq!(store.len(), before);
    }

    #[test]
    fn duplicate_check_is_exact_string_match() {
        let mut store = seeded();
        // Punctuated date differs from the stored digit-only form, so this
        // is not a conflict.
        let result = store.insert(draft("2024.04.15", "10:15"));
        assert!(result.is_ok());
    }

    #[test]
    fn get_finds_by_id() {
        let store = seeded();
        assert!(store.get(&RecordId::from("2")).is_some());
        assert!(store.get(&RecordId::from("99")).is_none());
    }

    #[test]
    fn update_replaces_every_field_except_id() {
        let mut store = seeded();
        let mut replacement = draft("20240418", "12:00");
        replacement.temperature = 99.9;
        replacement.humidity = 55;
        replacement.place.name = String::from("Risskov");

        assert!(store.update(&RecordId::from("2"), replacement).is_ok());

        let updated = store.get(&RecordId::from("2"));
        assert!(matches!(
            updated,
            Some(record)
                if record.observed_at == ObservedAt::new("20240418", "12:00")
                    && record.place.name == "Risskov"
                    && record.humidity == 55
                    && (record.temperature - 99.9).abs() < f64::EPSILON
        ));
    }

    #[test]
    fn update_unknown_id_leaves_store_untouched() {
        let mut store = seeded();
        let before: Vec<WeatherRecord> = store.records().to_vec();

        let result = store.update(&RecordId::from("42"), draft("20240418", "12:00"));

        assert_eq!(result, Err(StoreError::NotFound(RecordId::from("42"))));
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn update_is_exempt_from_the_conflict_rule() {
        let mut store = seeded();
        // Move record 3 onto record 1's timestamp: allowed, only creation
        // is checked.
        let result = store.update(&RecordId::from("3"), draft("20240415", "10:15"));
        assert!(result.is_ok());
    }

    #[test]
    fn latest_sorts_chronologically_descending() {
        let mut store = seeded();
        let _ = store.insert(draft("20240417", "08:30"));

        let latest: Vec<&str> = store
            .latest(3)
            .iter()
            .map(|r| r.observed_at.date.as_str())
            .collect();

        assert_eq!(latest, ["20240417", "20240416", "20240415"]);
    }

    #[test]
    fn latest_caps_at_n() {
        let store = seeded();
        assert_eq!(store.latest(1).len(), 1);
        assert_eq!(store.latest(10).len(), 3);
    }

    #[test]
    fn latest_breaks_timestamp_ties_by_insertion_order() {
        // Identical timestamps can only exist through updates or imports;
        // the sort must keep insertion order among them.
        let first = draft("20240415", "10:15").into_record(RecordId::from("1"));
        let second = draft("20240415", "10:15").into_record(RecordId::from("2"));
        let store = RecordStore::from_records(vec![first, second]);

        let latest: Vec<&str> = store.latest(2).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(latest, ["1", "2"]);
    }

    #[test]
    fn records_on_date_filters_exactly() {
        let store = seeded();
        assert_eq!(store.records_on_date("20240415").len(), 2);
        assert_eq!(store.records_on_date("20240416").len(), 1);
        assert_eq!(store.records_on_date("2024-04-15").len(), 0);
    }
}
