//! Edit session for repeatable record lists
//!
//! The working copy of a list during one edit interaction. The UI layer
//! issues structural commands (add, remove-at-index, field updates) against
//! the session and re-renders from it; on commit the finalized list replaces
//! the persisted one wholesale. The session lives for a single request round
//! trip, independent of the persisted copy.

use serde::Serialize;

use crate::icons::types::ListRecord;
use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
	/// Loaded, unmodified
	Clean,
	/// At least one add/remove/edit applied
	Dirty,
	/// Commit succeeded
	Committed,
	/// Commit attempted, validation failed. Retry allowed.
	Errored,
}

pub struct EditSession<R: ListRecord> {
	records: Vec<R>,
	errors: Vec<FieldError>,
	state: SessionState,
}

impl<R: ListRecord> EditSession<R> {
	/// Initializes the working copy from the persisted list
	pub fn load(persisted: Vec<R>) -> Self {
		Self { records: persisted, errors: Vec::new(), state: SessionState::Clean }
	}

	pub fn records(&self) -> &[R] {
		&self.records
	}

	pub fn errors(&self) -> &[FieldError] {
		&self.errors
	}

	pub fn state(&self) -> SessionState {
		self.state
	}

	/// Appends an empty record. Never fails.
	pub fn add_record(&mut self) {
		self.records.push(R::default());
		self.state = SessionState::Dirty;
	}

	/// Removes the record at `index`, shifting later records down by one.
	/// Out-of-range indexes are a silent no-op: index derivation from
	/// transient UI row identifiers is racy across concurrent submissions.
	pub fn remove_record(&mut self, index: usize) {
		if index >= self.records.len() {
			debug!("remove_record: index {} out of range, ignoring", index);
			return;
		}
		self.records.remove(index);

		// Drop errors of the removed record, shift the rest down
		self.errors.retain(|err| err.index != Some(index));
		for err in &mut self.errors {
			if let Some(i) = err.index
				&& i > index
			{
				err.index = Some(i - 1);
			}
		}
		self.state = SessionState::Dirty;
	}

	/// Sets one field on the record at `index` and validates it. An invalid
	/// value is stored anyway and its error attached to the session; other
	/// fields remain editable.
	pub fn update_field(&mut self, index: usize, field: &str, value: &serde_json::Value) {
		let Some(record) = self.records.get_mut(index) else {
			debug!("update_field: index {} out of range, ignoring", index);
			return;
		};

		let error = match record.set_field(field, value) {
			Ok(()) => record.validate_field(field),
			Err(message) => Some(message),
		};

		self.errors.retain(|err| !(err.index == Some(index) && &*err.field == field));
		if let Some(message) = error {
			self.errors.push(FieldError::at(index, field, message));
		}
		self.state = SessionState::Dirty;
	}

	/// Validates every record and finalizes the list for persistence.
	/// On failure the session keeps its errors and stays retryable.
	pub fn commit(&mut self) -> Result<Vec<R>, &[FieldError]> {
		let errors: Vec<FieldError> = self
			.records
			.iter()
			.enumerate()
			.flat_map(|(index, record)| record.validate(index))
			.collect();

		if errors.is_empty() {
			self.errors.clear();
			self.state = SessionState::Committed;
			Ok(self.records.clone())
		} else {
			self.errors = errors;
			self.state = SessionState::Errored;
			Err(&self.errors)
		}
	}

	/// Marks a commit as failed after the fact, attaching the given errors.
	/// Used when the asset references turn out to be unresolvable.
	pub fn fail(&mut self, errors: Vec<FieldError>) {
		self.errors.extend(errors);
		self.state = SessionState::Errored;
	}
}


// vim: ts=4
