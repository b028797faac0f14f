//! Consumed event interface.
//!
//! The host event tap hands the engine opaque records. Rather than
//! reflecting over host objects, the engine reads them through
//! [`EventFields`], a narrow capability trait the adapter implements per
//! concrete event shape. [`FieldMap`] is the plain-map implementation used
//! by simple adapters and by tests.

use hashbrown::HashMap;

/// Field names the builders read, in the host tap's camelCase vocabulary.
pub mod field {
    pub const TURN_NUMBER: &str = "turnNumber";
    pub const ACTIVE_SEAT_ID: &str = "activeSeatId";
    pub const PHASE: &str = "phase";
    pub const STEP: &str = "step";
    pub const ZONE: &str = "zone";
    pub const OWNER_SEAT_ID: &str = "ownerSeatId";
    pub const COUNT: &str = "count";
    pub const SEAT_ID: &str = "seatId";
    pub const DELTA: &str = "delta";
    pub const LIFE_TOTAL: &str = "lifeTotal";
    pub const AMOUNT: &str = "amount";
    pub const TARGET_NAME: &str = "targetName";
    pub const CARD_NAME: &str = "cardName";
    pub const CHANGE: &str = "change";
    pub const COUNTER_TYPE: &str = "counterType";
    pub const WINNING_SEAT_ID: &str = "winningSeatId";
}

/// Read access to one delivered game event.
///
/// Missing fields return `None`; the builders decide whether a missing
/// field is optional or makes the event malformed.
pub trait EventFields {
    /// The event's kind name, e.g. `"TurnChangedEvent"`.
    fn kind_name(&self) -> &str;

    fn get_int(&self, name: &str) -> Option<i64>;
    fn get_str(&self, name: &str) -> Option<&str>;
    fn get_bool(&self, name: &str) -> Option<bool>;

    /// Nested record field, if the event carries one.
    fn get_record(&self, name: &str) -> Option<&dyn EventFields>;
}

/// A single field value inside a [`FieldMap`].
#[derive(Debug, Clone)]
pub enum FieldValue {
    Int(i64),
    Str(String),
    Bool(bool),
    Record(FieldMap),
}

/// Map-backed [`EventFields`] implementation.
#[derive(Debug, Clone)]
pub struct FieldMap {
    kind_name: String,
    fields: HashMap<String, FieldValue>,
}

impl FieldMap {
    pub fn new(kind_name: impl Into<String>) -> Self {
        Self {
            kind_name: kind_name.into(),
            fields: HashMap::new(),
        }
    }

    pub fn with_int(mut self, name: &str, value: i64) -> Self {
        self.fields.insert(name.to_string(), FieldValue::Int(value));
        self
    }

    pub fn with_str(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(name.to_string(), FieldValue::Str(value.into()));
        self
    }

    pub fn with_bool(mut self, name: &str, value: bool) -> Self {
        self.fields
            .insert(name.to_string(), FieldValue::Bool(value));
        self
    }

    pub fn with_record(mut self, name: &str, value: FieldMap) -> Self {
        self.fields
            .insert(name.to_string(), FieldValue::Record(value));
        self
    }
}

impl EventFields for FieldMap {
    fn kind_name(&self) -> &str {
        &self.kind_name
    }

    fn get_int(&self, name: &str) -> Option<i64> {
        match self.fields.get(name) {
            Some(FieldValue::Int(v)) => Some(*v),
            _ => None,
        }
    }

    fn get_str(&self, name: &str) -> Option<&str> {
        match self.fields.get(name) {
            Some(FieldValue::Str(v)) => Some(v),
            _ => None,
        }
    }

    fn get_bool(&self, name: &str) -> Option<bool> {
        match self.fields.get(name) {
            Some(FieldValue::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    fn get_record(&self, name: &str) -> Option<&dyn EventFields> {
        match self.fields.get(name) {
            Some(FieldValue::Record(v)) => Some(v),
            _ => None,
        }
    }
}
