use crate::dataset::EmissionDataset;
use crate::record::EmissionRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A country's 1-based position among the countries recorded for one year,
/// ordered by descending total emissions.
///
/// `out_of` is the number of records for that year -- not a constant, since
/// the per-year country count varies across the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankLabel {
    pub rank: usize,
    pub out_of: usize,
}

impl fmt::Display for RankLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.rank, self.out_of)
    }
}

/// Rankings for every (country, year) pair in the dataset's year domain.
///
/// Recomputed wholesale from the dataset; it has no lifecycle of its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankTable {
    by_country: HashMap<String, HashMap<i32, RankLabel>>,
}

impl RankTable {
    pub fn compute(dataset: &EmissionDataset) -> Self {
        let mut by_country: HashMap<String, HashMap<i32, RankLabel>> = HashMap::new();
        for year in dataset.years() {
            let mut year_records: Vec<&EmissionRecord> = dataset
                .in_domain_records()
                .into_iter()
                .filter(|r| r.year == year)
                .collect();
            // stable sort: equal totals keep dataset order
            year_records.sort_by(|a, b| b.total.total_cmp(&a.total));
            let out_of = year_records.len();
            for (position, record) in year_records.iter().enumerate() {
                by_country.entry(record.country.clone()).or_default().insert(
                    year,
                    RankLabel {
                        rank: position + 1,
                        out_of,
                    },
                );
            }
        }
        RankTable { by_country }
    }

    /// Look up a country's rank for a year.
    ///
    /// `None` means the country has no record for that year; it is never
    /// rank zero.
    pub fn get(&self, country: &str, year: i32) -> Option<RankLabel> {
        self.by_country
            .get(country)
            .and_then(|per_year| per_year.get(&year))
            .copied()
    }
}
