/// In-progress values of the registration form
///
/// Date fields show a muted YYYY-MM-DD hint while empty. The hint is display
/// only and is stripped before anything reaches the store.

use crate::db::MemberInput;
use crate::error::{MemberError, Result};
use crate::form::fields::{FieldKind, MemberField, DATE_HINT};

/// How a field's text is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Normal,
    Muted,
}

/// Displayed text of one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry {
    field: MemberField,
    text: String,
    style: TextStyle,
}

impl FieldEntry {
    fn new(field: MemberField) -> Self {
        let mut entry = Self {
            field,
            text: String::new(),
            style: TextStyle::Normal,
        };
        entry.apply_hint();
        entry
    }

    pub fn field(&self) -> MemberField {
        self.field
    }

    /// Text as currently shown, hint included
    pub fn displayed(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> TextStyle {
        self.style
    }

    pub fn is_showing_hint(&self) -> bool {
        self.field.is_date() && self.text == DATE_HINT
    }

    /// Real value of the field; a visible hint counts as empty
    pub fn value(&self) -> &str {
        if self.is_showing_hint() {
            ""
        } else {
            &self.text
        }
    }

    fn apply_hint(&mut self) {
        if self.field.is_date() && self.text.is_empty() {
            self.text.push_str(DATE_HINT);
            self.style = TextStyle::Muted;
        }
    }

    fn focus_in(&mut self) {
        if self.text == DATE_HINT {
            self.text.clear();
            self.style = TextStyle::Normal;
        }
    }

    fn focus_out(&mut self) {
        self.apply_hint();
    }

    fn set(&mut self, value: &str) -> Result<()> {
        if let FieldKind::Choice(choices) = self.field.kind() {
            if !value.is_empty() && !choices.contains(&value) {
                return Err(MemberError::InvalidChoice {
                    field: self.field.label().to_string(),
                    value: value.to_string(),
                });
            }
        }

        self.text = value.to_string();
        self.style = TextStyle::Normal;
        Ok(())
    }

    fn reset(&mut self) {
        self.text.clear();
        self.style = TextStyle::Normal;
        self.apply_hint();
    }
}

/// Current values of every field on the entry tabs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    entries: Vec<FieldEntry>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// Fresh form: everything empty, hints on date fields
    pub fn new() -> Self {
        Self {
            entries: MemberField::ALL.iter().map(|f| FieldEntry::new(*f)).collect(),
        }
    }

    pub fn entries(&self) -> &[FieldEntry] {
        &self.entries
    }

    pub fn entry(&self, field: MemberField) -> &FieldEntry {
        &self.entries[Self::index(field)]
    }

    fn entry_mut(&mut self, field: MemberField) -> &mut FieldEntry {
        &mut self.entries[Self::index(field)]
    }

    // Entries are built from MemberField::ALL, so the position always exists
    fn index(field: MemberField) -> usize {
        MemberField::ALL
            .iter()
            .position(|f| *f == field)
            .unwrap_or_default()
    }

    /// The field gained input focus
    pub fn focus_in(&mut self, field: MemberField) {
        self.entry_mut(field).focus_in();
    }

    /// The field lost input focus
    pub fn focus_out(&mut self, field: MemberField) {
        self.entry_mut(field).focus_out();
    }

    /// Replace a field's text; choice fields only take listed values or ""
    pub fn set(&mut self, field: MemberField, value: &str) -> Result<()> {
        self.entry_mut(field).set(value)
    }

    /// Real value of a field, without any hint
    pub fn value(&self, field: MemberField) -> &str {
        self.entry(field).value()
    }

    /// Empty every field and put the date hints back
    pub fn reset(&mut self) {
        for entry in &mut self.entries {
            entry.reset();
        }
    }

    /// Compose the record to store from the current values
    pub fn to_input(&self) -> MemberInput {
        let mut input = MemberInput::default();
        for entry in &self.entries {
            input.set(entry.field, entry.value());
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_shows_hints() {
        let form = FormState::new();

        for entry in form.entries() {
            if entry.field().is_date() {
                assert_eq!(entry.displayed(), DATE_HINT);
                assert_eq!(entry.style(), TextStyle::Muted);
            } else {
                assert_eq!(entry.displayed(), "");
                assert_eq!(entry.style(), TextStyle::Normal);
            }
            assert_eq!(entry.value(), "");
        }
    }

    #[test]
    fn test_focus_clears_and_restores_hint() {
        let mut form = FormState::new();

        form.focus_in(MemberField::DateOfBirth);
        assert_eq!(form.entry(MemberField::DateOfBirth).displayed(), "");
        assert_eq!(form.entry(MemberField::DateOfBirth).style(), TextStyle::Normal);

        // Left empty: hint comes back
        form.focus_out(MemberField::DateOfBirth);
        assert_eq!(form.entry(MemberField::DateOfBirth).displayed(), DATE_HINT);
        assert_eq!(form.entry(MemberField::DateOfBirth).style(), TextStyle::Muted);
    }

    #[test]
    fn test_focus_keeps_real_dates() {
        let mut form = FormState::new();

        form.focus_in(MemberField::DateOfBaptism);
        form.set(MemberField::DateOfBaptism, "2001-09-09").unwrap();
        form.focus_out(MemberField::DateOfBaptism);
        form.focus_in(MemberField::DateOfBaptism);

        assert_eq!(form.entry(MemberField::DateOfBaptism).displayed(), "2001-09-09");
        assert_eq!(form.value(MemberField::DateOfBaptism), "2001-09-09");
    }

    #[test]
    fn test_focus_ignores_non_date_fields() {
        let mut form = FormState::new();

        form.focus_in(MemberField::City);
        form.focus_out(MemberField::City);
        assert_eq!(form.entry(MemberField::City).displayed(), "");
    }

    #[test]
    fn test_unfocused_hint_is_not_data() {
        let form = FormState::new();
        let input = form.to_input();

        assert_eq!(input.dob, "");
        assert_eq!(input.salvation_date, "");
        assert_eq!(input.baptism_date, "");
        assert!(input.is_blank());
    }

    #[test]
    fn test_choice_validation() {
        let mut form = FormState::new();

        form.set(MemberField::Gender, "Other").unwrap();
        assert_eq!(form.value(MemberField::Gender), "Other");

        let result = form.set(MemberField::Gender, "Robot");
        match result {
            Err(MemberError::InvalidChoice { field, value }) => {
                assert_eq!(field, "Gender");
                assert_eq!(value, "Robot");
            }
            _ => panic!("Expected InvalidChoice error"),
        }
        // Rejected value leaves the old one in place
        assert_eq!(form.value(MemberField::Gender), "Other");

        form.set(MemberField::Gender, "").unwrap();
        assert_eq!(form.value(MemberField::Gender), "");
    }

    #[test]
    fn test_to_input_maps_by_name() {
        let mut form = FormState::new();
        form.set(MemberField::FullName, "Jane Doe").unwrap();
        form.set(MemberField::PhoneNumber, "555-0100").unwrap();
        form.set(MemberField::PreviousChurchLocation, "Peoria, IL").unwrap();
        form.set(MemberField::MinistryInvolvement, "Young Adult").unwrap();
        form.set(MemberField::PrayerRequests, "Line one\nLine two").unwrap();

        let input = form.to_input();
        assert_eq!(input.full_name, "Jane Doe");
        assert_eq!(input.phone, "555-0100");
        assert_eq!(input.previous_church_location, "Peoria, IL");
        assert_eq!(input.ministry, "Young Adult");
        assert_eq!(input.prayer_requests, "Line one\nLine two");
        assert_eq!(input.interests, "");
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut form = FormState::new();
        for field in MemberField::ALL {
            let value = match field.kind() {
                FieldKind::Choice(choices) => choices[0],
                _ => "something",
            };
            form.focus_in(field);
            form.set(field, value).unwrap();
            form.focus_out(field);
        }

        form.reset();

        assert_eq!(form, FormState::new());
    }
}
