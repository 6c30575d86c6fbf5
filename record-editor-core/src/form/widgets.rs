//! Input widget models
//!
//! Hold the raw values a form reads and writes. Rendering is left to the frontend.

use chrono::NaiveDate;

use crate::types::Entity;

/// Restriction applied to user input in a [`TextField`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputConstraint {
    #[default]
    None,
    /// Digits only
    Integer,
    /// Digits with at most one decimal point
    Decimal,
    /// At most `n` characters
    MaxLength(usize),
}

impl InputConstraint {
    /// Whether `text` is an acceptable field value.
    pub fn allows(self, text: &str) -> bool {
        match self {
            Self::None => true,
            Self::Integer => text.chars().all(|c| c.is_ascii_digit()),
            Self::Decimal => {
                let mut parts = text.splitn(2, '.');
                let whole = parts.next().unwrap_or_default();
                let fraction = parts.next().unwrap_or_default();
                whole.chars().all(|c| c.is_ascii_digit())
                    && fraction.chars().all(|c| c.is_ascii_digit())
            }
            Self::MaxLength(max) => text.chars().count() <= max,
        }
    }
}

/// Single-line text input
#[derive(Debug, Clone, Default)]
pub struct TextField {
    text: String,
    constraint: InputConstraint,
}

impl TextField {
    pub fn new(constraint: InputConstraint) -> Self {
        Self {
            text: String::new(),
            constraint,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the content programmatically (no constraint check).
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Replaces the content with user input.
    ///
    /// Input that violates the constraint is rejected and the old content kept.
    pub fn input(&mut self, text: &str) -> bool {
        if !self.constraint.allows(text) {
            return false;
        }
        self.text = text.to_string();
        true
    }

    /// Appends one typed character, subject to the constraint.
    pub fn push_char(&mut self, ch: char) -> bool {
        let mut next = self.text.clone();
        next.push(ch);
        self.input(&next)
    }

    pub fn pop_char(&mut self) {
        self.text.pop();
    }
}

/// Calendar date input
#[derive(Debug, Clone)]
pub struct DatePicker {
    value: Option<NaiveDate>,
    format: String,
}

impl DatePicker {
    /// `format` is a `chrono` format string used for text entry and display.
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            value: None,
            format: format.into(),
        }
    }

    pub fn value(&self) -> Option<NaiveDate> {
        self.value
    }

    pub fn set_value(&mut self, value: Option<NaiveDate>) {
        self.value = value;
    }

    /// Selected date rendered with the picker's format, empty when unset.
    pub fn text(&self) -> String {
        self.value
            .map(|d| d.format(&self.format).to_string())
            .unwrap_or_default()
    }

    /// Sets the date from typed text. Blank text clears the value;
    /// unparsable text is rejected and the old value kept.
    pub fn input(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            self.value = None;
            return true;
        }
        match NaiveDate::parse_from_str(text.trim(), &self.format) {
            Ok(date) => {
                self.value = Some(date);
                true
            }
            Err(_) => false,
        }
    }
}

/// Drop-down selection over a cached item list
#[derive(Debug, Clone)]
pub struct ComboBox<T: Entity> {
    items: Vec<T>,
    value: Option<T>,
    label: fn(&T) -> String,
}

impl<T: Entity> ComboBox<T> {
    /// `label` renders each item in the list and in the button cell.
    pub fn new(label: fn(&T) -> String) -> Self {
        Self {
            items: Vec::new(),
            value: None,
            label,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Replaces the item list.
    ///
    /// A selected value still present (same id) is re-pointed at the new
    /// item; with nothing selected the first item is selected.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        match self.value.take() {
            None => self.select_first(),
            Some(current) => {
                let refreshed = self
                    .items
                    .iter()
                    .find(|item| item.same_identity(&current))
                    .cloned();
                self.value = Some(refreshed.unwrap_or(current));
            }
        }
    }

    /// Selects `value`, or the first item when `value` is `None`.
    pub fn set_value(&mut self, value: Option<T>) {
        match value {
            Some(value) => self.value = Some(value),
            None => self.select_first(),
        }
    }

    pub fn select_first(&mut self) {
        self.value = self.items.first().cloned();
    }

    /// Selects the item at `index`; out of range leaves the selection unchanged.
    pub fn select(&mut self, index: usize) -> bool {
        match self.items.get(index) {
            Some(item) => {
                self.value = Some(item.clone());
                true
            }
            None => false,
        }
    }

    /// Item labels in list order
    pub fn labels(&self) -> Vec<String> {
        self.items.iter().map(self.label).collect()
    }

    /// Label of the selected value, empty when nothing is selected
    pub fn selected_label(&self) -> String {
        self.value.as_ref().map(self.label).unwrap_or_default()
    }
}

/// Per-field validation message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorLabel {
    text: String,
}

impl ErrorLabel {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Shows `message`, or clears the label when there is none.
    pub fn show(&mut self, message: Option<&str>) {
        match message {
            Some(message) => self.set_text(message),
            None => self.clear(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::types::Department;

    fn departments() -> Vec<Department> {
        vec![
            Department::new(Some(1), "Books"),
            Department::new(Some(2), "Computers"),
        ]
    }

    fn department_combo() -> ComboBox<Department> {
        ComboBox::new(|d: &Department| d.name.clone())
    }

    #[test]
    fn integer_field_rejects_letters() {
        let mut field = TextField::new(InputConstraint::Integer);
        assert!(field.push_char('4'));
        assert!(field.push_char('2'));
        assert!(!field.push_char('x'));
        assert_eq!(field.text(), "42");
    }

    #[test]
    fn decimal_field_allows_one_point() {
        let mut field = TextField::new(InputConstraint::Decimal);
        assert!(field.input("1500."));
        assert!(field.input("1500.25"));
        assert!(!field.input("1500.25.1"));
        assert!(!field.input("-3"));
        assert_eq!(field.text(), "1500.25");
    }

    #[test]
    fn max_length_counts_chars() {
        let mut field = TextField::new(InputConstraint::MaxLength(3));
        assert!(field.input("Ção"));
        assert!(!field.push_char('!'));
        field.pop_char();
        assert_eq!(field.text(), "Çã");
    }

    #[test]
    fn set_text_skips_constraint() {
        let mut field = TextField::new(InputConstraint::Integer);
        field.set_text("abc");
        assert_eq!(field.text(), "abc");
    }

    #[test]
    fn date_picker_parses_with_format() {
        let mut picker = DatePicker::new("%d/%m/%Y");
        assert!(picker.input("01/01/2000"));
        assert_eq!(picker.value(), NaiveDate::from_ymd_opt(2000, 1, 1));
        assert_eq!(picker.text(), "01/01/2000");

        assert!(!picker.input("2000-01-01"));
        assert_eq!(picker.value(), NaiveDate::from_ymd_opt(2000, 1, 1));

        assert!(picker.input(""));
        assert_eq!(picker.value(), None);
    }

    #[test]
    fn combo_selects_first_when_nothing_selected() {
        let mut combo = department_combo();
        combo.set_value(None);
        assert_eq!(combo.value(), None);

        combo.set_items(departments());
        assert_eq!(combo.value().map(|d| d.name.as_str()), Some("Books"));
        assert_eq!(combo.labels(), vec!["Books", "Computers"]);
    }

    #[test]
    fn combo_keeps_selection_by_id() {
        let mut combo = department_combo();
        combo.set_value(Some(Department::new(Some(2), "Old name")));
        combo.set_items(departments());

        assert_eq!(combo.selected_label(), "Computers");
        assert!(combo.select(0));
        assert!(!combo.select(5));
        assert_eq!(combo.selected_label(), "Books");
    }

    #[test]
    fn error_label_shows_and_clears() {
        let mut label = ErrorLabel::default();
        label.show(Some("Field can't be empty"));
        assert_eq!(label.text(), "Field can't be empty");
        label.show(None);
        assert!(label.is_empty());
    }
}
