use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single stored object — free-form JSON, no schema imposed beyond the
/// string `id` the API assigns on create. Records round-trip verbatim.
pub type Record = serde_json::Map<String, Value>;

/// The whole backing file: five named, ordered collections. Loaded fresh per
/// request and rewritten as a unit on every mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub latest: Vec<Record>,
    #[serde(default, rename = "upcomingMovies")]
    pub upcoming_movies: Vec<Record>,
    #[serde(default)]
    pub events: Vec<Record>,
    #[serde(default)]
    pub users: Vec<Record>,
    #[serde(default)]
    pub bookings: Vec<Record>,
}

/// The `id` field of a record, if present and a string.
pub fn record_id(record: &Record) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

/// Linear scan of a collection for a matching `id`.
pub fn find_by_id<'a>(records: &'a [Record], id: &str) -> Option<&'a Record> {
    records.iter().find(|r| record_id(r) == Some(id))
}

// ── Query parameters ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct BookingFilters {
    /// Exact-match filter on the booking's `user` field.
    pub user: Option<String>,
}
