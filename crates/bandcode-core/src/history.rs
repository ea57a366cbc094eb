use chrono::{DateTime, Local};
use serde::Serialize;

use crate::{CapacitorResult, ComponentKind, DecodeError, ResistorResult};

/// Maximum note length in characters.
pub const NOTE_LIMIT: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "component", rename_all = "snake_case")]
pub enum DecodedComponent {
    Capacitor(CapacitorResult),
    Resistor(ResistorResult),
}

impl DecodedComponent {
    pub fn kind(&self) -> ComponentKind {
        match self {
            DecodedComponent::Capacitor(_) => ComponentKind::Capacitor,
            DecodedComponent::Resistor(_) => ComponentKind::Resistor,
        }
    }
}

impl From<CapacitorResult> for DecodedComponent {
    fn from(result: CapacitorResult) -> Self {
        DecodedComponent::Capacitor(result)
    }
}

impl From<ResistorResult> for DecodedComponent {
    fn from(result: ResistorResult) -> Self {
        DecodedComponent::Resistor(result)
    }
}

/// One decoded part in a session, with the time it was recorded and an
/// optional note.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComponentEntry {
    pub recorded_at: DateTime<Local>,
    pub component: DecodedComponent,
    note: String,
}

impl ComponentEntry {
    pub fn new(component: impl Into<DecodedComponent>) -> Self {
        Self::with_timestamp(component, Local::now())
    }

    pub fn with_timestamp(
        component: impl Into<DecodedComponent>,
        recorded_at: DateTime<Local>,
    ) -> Self {
        Self {
            recorded_at,
            component: component.into(),
            note: String::new(),
        }
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    /// Replace the note. Surrounding whitespace is trimmed before the length check.
    pub fn set_note(&mut self, note: &str) -> Result<(), DecodeError> {
        let note = note.trim();
        let len = note.chars().count();
        if len > NOTE_LIMIT {
            return Err(DecodeError::NoteTooLong {
                len,
                limit: NOTE_LIMIT,
            });
        }
        self.note = note.to_string();
        Ok(())
    }
}
