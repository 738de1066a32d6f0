use indexmap::IndexMap;
use potluck_application::{EventId, EventSnapshot, EventSource, EventSourceError, EventSummary};
use potluck_domain::{Expense, ExpenseId, Guest, Money, ParticipantId};
use rust_decimal::Decimal;
use serde::Deserialize;
use smol_str::SmolStr;
use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read events from '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed events document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("event '{0}' is defined more than once")]
    DuplicateEvent(SmolStr),
}

// Row shapes mirror what the hosted backend returns for the
// `events`, `event_guests` and `expenses` queries.
#[derive(Deserialize)]
struct EventsDocument {
    events: Vec<EventRecord>,
}

#[derive(Deserialize)]
struct EventRecord {
    id: SmolStr,
    event_name: SmolStr,
    event_date: SmolStr,
    #[serde(default)]
    guests: Vec<GuestRecord>,
    #[serde(default)]
    expenses: Vec<ExpenseRecord>,
}

#[derive(Deserialize)]
struct UserProfileRecord {
    id: SmolStr,
    display_name: SmolStr,
}

#[derive(Deserialize)]
struct GuestRecord {
    user_profiles: UserProfileRecord,
}

#[derive(Deserialize)]
struct ExpenseRecord {
    id: SmolStr,
    amount: Decimal,
    recorded_by: SmolStr,
    user_profiles: UserProfileRecord,
}

impl From<GuestRecord> for Guest {
    fn from(record: GuestRecord) -> Self {
        Guest {
            id: ParticipantId(record.user_profiles.id),
            name: record.user_profiles.display_name,
        }
    }
}

impl From<ExpenseRecord> for Expense {
    fn from(record: ExpenseRecord) -> Self {
        if record.recorded_by != record.user_profiles.id {
            tracing::warn!(
                expense_id = %record.id,
                recorded_by = %record.recorded_by,
                profile_id = %record.user_profiles.id,
                "Expense recorder differs from its joined profile; using the profile"
            );
        }
        Expense {
            id: ExpenseId(record.id),
            amount: Money::from_decimal(record.amount),
            payer: ParticipantId(record.user_profiles.id),
            payer_name: record.user_profiles.display_name,
        }
    }
}

/// Read-only event source backed by a JSON document loaded at startup.
#[derive(Debug, Default)]
pub struct JsonEventStore {
    events: IndexMap<EventId, EventSnapshot>,
}

impl JsonEventStore {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_reader(BufReader::new(file))?;
        tracing::info!(
            path = %path.display(),
            event_count = store.len(),
            "Loaded events"
        );
        Ok(store)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, StoreError> {
        let document: EventsDocument = serde_json::from_reader(reader)?;
        Self::from_document(document)
    }

    fn from_document(document: EventsDocument) -> Result<Self, StoreError> {
        let mut events = IndexMap::with_capacity(document.events.len());
        for record in document.events {
            let id = EventId(record.id);
            if events.contains_key(&id) {
                return Err(StoreError::DuplicateEvent(id.0));
            }
            let snapshot = EventSnapshot {
                summary: EventSummary {
                    id: id.clone(),
                    name: record.event_name,
                    date: record.event_date,
                },
                guests: record.guests.into_iter().map(Guest::from).collect(),
                expenses: record.expenses.into_iter().map(Expense::from).collect(),
            };
            events.insert(id, snapshot);
        }
        Ok(Self { events })
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl FromStr for JsonEventStore {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let document: EventsDocument = serde_json::from_str(s)?;
        Self::from_document(document)
    }
}

impl EventSource for JsonEventStore {
    fn load_event(&self, event_id: &EventId) -> Result<Option<EventSnapshot>, EventSourceError> {
        Ok(self.events.get(event_id).cloned())
    }

    fn event_ids(&self) -> Vec<EventId> {
        self.events.keys().cloned().collect()
    }
}
