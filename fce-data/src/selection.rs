use crate::record::EmissionRecord;
use serde::{Deserialize, Serialize};

/// The (country, year) pair highlighted across coordinated views.
///
/// Both fields always come from the same activated cell; a partially-bound
/// selection cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    Empty,
    Bound { country: String, year: i32 },
}

/// Events that drive the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A heatmap cell was activated; carries the clicked record's keys.
    CellActivated { country: String, year: i32 },
    /// Explicit deselect, returning all coordinated views to their empty
    /// state.
    Clear,
}

impl SelectionEvent {
    /// The event a cell click on this record emits.
    pub fn activated(record: &EmissionRecord) -> Self {
        SelectionEvent::CellActivated {
            country: record.country.clone(),
            year: record.year,
        }
    }
}

impl Selection {
    /// Reduce an event into the next selection state.
    ///
    /// `CellActivated` binds both fields atomically, overwriting any prior
    /// selection wholesale; `Clear` empties from any state.
    pub fn apply(&self, event: SelectionEvent) -> Selection {
        match event {
            SelectionEvent::CellActivated { country, year } => Selection::Bound { country, year },
            SelectionEvent::Clear => Selection::Empty,
        }
    }

    pub fn is_bound(&self) -> bool {
        matches!(self, Selection::Bound { .. })
    }

    /// The bound (country, year), or `None` when empty.
    pub fn bound(&self) -> Option<(&str, i32)> {
        match self {
            Selection::Bound { country, year } => Some((country.as_str(), *year)),
            Selection::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(country: &str, year: i32) -> EmissionRecord {
        EmissionRecord {
            country: country.to_string(),
            year,
            total: 1.0,
            population: 0.0,
            gdp: 0.0,
            coal: 1.0,
            oil: 0.0,
            gas: 0.0,
            cement: 0.0,
            flaring: 0.0,
            other: 0.0,
        }
    }

    #[test]
    fn test_starts_empty() {
        assert_eq!(Selection::default(), Selection::Empty);
        assert!(!Selection::default().is_bound());
    }

    #[test]
    fn test_cell_activated_binds_both_fields() {
        let selection = Selection::Empty.apply(SelectionEvent::activated(&record("China", 2020)));
        assert_eq!(selection.bound(), Some(("China", 2020)));
    }

    #[test]
    fn test_rebind_overwrites_wholesale() {
        // successive activations never mix fields from two records
        let first = Selection::Empty.apply(SelectionEvent::activated(&record("China", 2020)));
        let second = first.apply(SelectionEvent::activated(&record("India", 2015)));
        assert_eq!(second.bound(), Some(("India", 2015)));
    }

    #[test]
    fn test_clear_empties_from_any_state() {
        let bound = Selection::Empty.apply(SelectionEvent::activated(&record("China", 2020)));
        assert_eq!(bound.apply(SelectionEvent::Clear), Selection::Empty);
        assert_eq!(Selection::Empty.apply(SelectionEvent::Clear), Selection::Empty);
    }
}
