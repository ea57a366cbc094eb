use bandcode_core::{ComponentEntry, DecodeError, DecodedComponent};

/// The wizard's history and the result currently on screen.
///
/// A decoded result only joins the history once the user keeps it, by adding a note or
/// exporting. Each result is recorded at most once.
#[derive(Debug, Default)]
pub struct Session {
    history: Vec<ComponentEntry>,
    pending: Option<DecodedComponent>,
    /// Index of the current result in `history`, once recorded.
    current: Option<usize>,
    /// Entries covered by the last export, counted from the front.
    exported: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[ComponentEntry] {
        &self.history
    }

    /// Replace the current result. Any previous result that was not kept is dropped.
    pub fn show(&mut self, component: DecodedComponent) {
        self.pending = Some(component);
        self.current = None;
    }

    pub fn current(&self) -> Option<&DecodedComponent> {
        match (&self.pending, self.current) {
            (Some(component), _) => Some(component),
            (None, Some(index)) => self.history.get(index).map(|entry| &entry.component),
            (None, None) => None,
        }
    }

    pub fn current_entry(&self) -> Option<&ComponentEntry> {
        self.current.and_then(|index| self.history.get(index))
    }

    /// Append the current result to the history unless it is already there.
    pub fn record_current(&mut self) -> Option<usize> {
        if let Some(component) = self.pending.take() {
            self.history.push(ComponentEntry::new(component));
            self.current = Some(self.history.len() - 1);
        }
        self.current
    }

    /// Record the current result and set its note.
    ///
    /// Changing the note of an exported entry makes it unexported again.
    pub fn set_note(&mut self, note: &str) -> Result<(), DecodeError> {
        let Some(index) = self.record_current() else {
            return Ok(());
        };
        let Some(entry) = self.history.get_mut(index) else {
            return Ok(());
        };
        let before = entry.note().to_string();
        entry.set_note(note)?;
        if entry.note() != before {
            self.exported = self.exported.min(index);
        }
        Ok(())
    }

    pub fn mark_exported(&mut self) {
        self.exported = self.history.len();
    }

    pub fn has_unexported(&self) -> bool {
        self.exported < self.history.len()
    }
}
