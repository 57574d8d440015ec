use crate::record::EmissionRecord;
use serde::{Deserialize, Serialize};

/// The six emission-source categories, in fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Coal,
    Oil,
    Gas,
    Cement,
    Flaring,
    Other,
}

impl Category {
    /// Display order for pie wedges, legends, and share lists.
    pub const ALL: [Category; 6] = [
        Category::Coal,
        Category::Oil,
        Category::Gas,
        Category::Cement,
        Category::Flaring,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Coal => "Coal",
            Category::Oil => "Oil",
            Category::Gas => "Gas",
            Category::Cement => "Cement",
            Category::Flaring => "Flaring",
            Category::Other => "Other",
        }
    }

    pub fn value_of(&self, record: &EmissionRecord) -> f64 {
        match self {
            Category::Coal => record.coal,
            Category::Oil => record.oil,
            Category::Gas => record.gas,
            Category::Cement => record.cement,
            Category::Flaring => record.flaring,
            Category::Other => record.other,
        }
    }
}

/// One category's contribution to a record's total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub label: &'static str,
    pub value: f64,
    /// Percentage of the record's total, rounded to two decimals.
    /// 0.0 when the total is zero (no meaningful share exists).
    pub percentage: f64,
}

/// Split a record's total into the six category shares, in display order.
///
/// A record with a zero total has undefined percentages; they are all
/// reported as 0.0 so no division-by-zero result can reach a view.
pub fn breakdown(record: &EmissionRecord) -> Vec<CategoryShare> {
    Category::ALL
        .iter()
        .map(|category| {
            let value = category.value_of(record);
            let percentage = if record.total > 0.0 {
                round2(100.0 * value / record.total)
            } else {
                0.0
            };
            CategoryShare {
                label: category.label(),
                value,
                percentage,
            }
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
