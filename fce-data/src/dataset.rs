use crate::record::EmissionRecord;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// First year any view displays.
pub const YEAR_MIN: i32 = 2003;
/// Last year any view displays.
pub const YEAR_MAX: i32 = 2023;

/// The loaded record set, immutable after construction.
///
/// Every derived view (year/country domains, rankings, per-country series)
/// is recomputed from the records on demand; nothing here is cached or
/// incrementally maintained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmissionDataset {
    records: Vec<EmissionRecord>,
}

/// A data-quality finding from [`EmissionDataset::validate`].
///
/// Findings are reported, never fatal: the dataset stays usable as parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum QualityIssue {
    /// The six category fields do not sum to the record's total within
    /// tolerance.
    CategorySumMismatch {
        country: String,
        year: i32,
        total: f64,
        category_sum: f64,
    },
    /// More than one record shares the same (country, year) pair.
    DuplicateRecord { country: String, year: i32 },
}

impl fmt::Display for QualityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityIssue::CategorySumMismatch {
                country,
                year,
                total,
                category_sum,
            } => write!(
                f,
                "{} {}: categories sum to {:.2} but total is {:.2}",
                country, year, category_sum, total
            ),
            QualityIssue::DuplicateRecord { country, year } => {
                write!(f, "{} {}: duplicate record", country, year)
            }
        }
    }
}

impl EmissionDataset {
    pub fn new(records: Vec<EmissionRecord>) -> Self {
        EmissionDataset { records }
    }

    pub fn records(&self) -> &[EmissionRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records inside the displayed year domain, in dataset order.
    pub fn in_domain_records(&self) -> Vec<&EmissionRecord> {
        self.records
            .iter()
            .filter(|r| (YEAR_MIN..=YEAR_MAX).contains(&r.year))
            .collect()
    }

    /// Distinct years present in the data, ascending, clamped to the
    /// displayed domain. Out-of-domain rows never surface in any view.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self
            .in_domain_records()
            .iter()
            .map(|r| r.year)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        years.sort_unstable();
        years
    }

    /// Distinct countries, descending by summed total across all in-domain
    /// years. Countries with equal sums keep first-encountered dataset
    /// order (stable sort, no secondary key).
    pub fn countries(&self) -> Vec<String> {
        let mut order: Vec<String> = Vec::new();
        let mut sums: HashMap<String, f64> = HashMap::new();
        for record in self.in_domain_records() {
            if !sums.contains_key(&record.country) {
                order.push(record.country.clone());
            }
            *sums.entry(record.country.clone()).or_insert(0.0) += record.total;
        }
        order.sort_by(|a, b| sums[b].total_cmp(&sums[a]));
        order
    }

    /// The `n` countries with the highest total in the latest in-domain
    /// year. Ties keep dataset order.
    pub fn top_countries(&self, n: usize) -> Vec<String> {
        let latest = match self.years().last() {
            Some(&year) => year,
            None => return Vec::new(),
        };
        let mut latest_records: Vec<&EmissionRecord> = self
            .in_domain_records()
            .into_iter()
            .filter(|r| r.year == latest)
            .collect();
        latest_records.sort_by(|a, b| b.total.total_cmp(&a.total));
        latest_records
            .iter()
            .take(n)
            .map(|r| r.country.clone())
            .collect()
    }

    /// Look up the record for a (country, year) pair.
    ///
    /// A miss means "no measurement", not zero; callers must treat `None`
    /// as not applicable.
    pub fn record_for(&self, country: &str, year: i32) -> Option<&EmissionRecord> {
        self.records
            .iter()
            .find(|r| r.country == country && r.year == year)
    }

    /// The in-domain time series for one country, ascending by year.
    pub fn country_series(&self, country: &str) -> Vec<&EmissionRecord> {
        let mut series: Vec<&EmissionRecord> = self
            .in_domain_records()
            .into_iter()
            .filter(|r| r.country == country)
            .collect();
        series.sort_by_key(|r| r.year);
        series
    }

    /// Check the approximate invariant that category fields sum to the
    /// total, and that (country, year) pairs are unique.
    ///
    /// `tolerance_pct` is the allowed deviation as a percentage of the
    /// total; records with a non-positive total are not checked for the
    /// sum invariant.
    pub fn validate(&self, tolerance_pct: f64) -> Vec<QualityIssue> {
        let mut issues = Vec::new();
        let mut seen: HashSet<(&str, i32)> = HashSet::new();
        for record in &self.records {
            if !seen.insert((record.country.as_str(), record.year)) {
                issues.push(QualityIssue::DuplicateRecord {
                    country: record.country.clone(),
                    year: record.year,
                });
            }
            if record.total > 0.0 {
                let category_sum = record.category_sum();
                let deviation = (category_sum - record.total).abs();
                if deviation > record.total * tolerance_pct / 100.0 {
                    issues.push(QualityIssue::CategorySumMismatch {
                        country: record.country.clone(),
                        year: record.year,
                        total: record.total,
                        category_sum,
                    });
                }
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(country: &str, year: i32, total: f64) -> EmissionRecord {
        EmissionRecord {
            country: country.to_string(),
            year,
            total,
            population: 0.0,
            gdp: 0.0,
            coal: total,
            oil: 0.0,
            gas: 0.0,
            cement: 0.0,
            flaring: 0.0,
            other: 0.0,
        }
    }

    #[test]
    fn test_years_ascending_and_domain_filtered() {
        let dataset = EmissionDataset::new(vec![
            record("A", 2021, 10.0),
            record("A", 1999, 5.0),
            record("A", 2003, 7.0),
            record("B", 2021, 3.0),
            record("A", 2030, 9.0),
        ]);
        assert_eq!(dataset.years(), vec![2003, 2021]);
    }

    #[test]
    fn test_years_excludes_out_of_domain_even_when_only_years() {
        let dataset = EmissionDataset::new(vec![record("A", 2002, 1.0), record("A", 2024, 1.0)]);
        assert!(dataset.years().is_empty());
    }

    #[test]
    fn test_countries_descending_by_summed_total() {
        let dataset = EmissionDataset::new(vec![
            record("A", 2020, 100.0),
            record("B", 2020, 50.0),
            record("A", 2021, 80.0),
        ]);
        // A sums to 180 across years, B to 50
        assert_eq!(dataset.countries(), vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_countries_tie_keeps_dataset_order() {
        let dataset = EmissionDataset::new(vec![
            record("X", 2020, 40.0),
            record("Y", 2020, 40.0),
            record("Z", 2020, 90.0),
        ]);
        assert_eq!(
            dataset.countries(),
            vec!["Z".to_string(), "X".to_string(), "Y".to_string()]
        );
    }

    #[test]
    fn test_countries_excludes_out_of_domain_totals() {
        // B's huge 1990 row must not influence the in-domain ordering
        let dataset = EmissionDataset::new(vec![
            record("A", 2020, 100.0),
            record("B", 2020, 50.0),
            record("B", 1990, 10000.0),
        ]);
        assert_eq!(dataset.countries(), vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_top_countries_uses_latest_year() {
        let dataset = EmissionDataset::new(vec![
            record("A", 2020, 100.0),
            record("B", 2020, 500.0),
            record("A", 2021, 90.0),
            record("B", 2021, 10.0),
            record("C", 2021, 50.0),
        ]);
        // latest in-domain year is 2021: A=90, C=50, B=10
        assert_eq!(
            dataset.top_countries(2),
            vec!["A".to_string(), "C".to_string()]
        );
    }

    #[test]
    fn test_top_countries_empty_dataset() {
        let dataset = EmissionDataset::default();
        assert!(dataset.top_countries(15).is_empty());
    }

    #[test]
    fn test_record_for_miss_is_none() {
        let dataset = EmissionDataset::new(vec![record("A", 2020, 100.0)]);
        assert!(dataset.record_for("A", 2020).is_some());
        assert!(dataset.record_for("A", 2019).is_none());
        assert!(dataset.record_for("B", 2020).is_none());
    }

    #[test]
    fn test_country_series_sorted_ascending() {
        let dataset = EmissionDataset::new(vec![
            record("A", 2021, 80.0),
            record("B", 2020, 1.0),
            record("A", 2003, 60.0),
            record("A", 2020, 100.0),
            record("A", 1998, 5.0),
        ]);
        let series = dataset.country_series("A");
        let years: Vec<i32> = series.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2003, 2020, 2021]);
    }

    #[test]
    fn test_validate_category_sum_mismatch() {
        let mut bad = record("A", 2020, 100.0);
        bad.coal = 50.0; // categories now sum to 50, total is 100
        let dataset = EmissionDataset::new(vec![bad, record("B", 2020, 10.0)]);
        let issues = dataset.validate(5.0);
        assert_eq!(issues.len(), 1);
        match &issues[0] {
            QualityIssue::CategorySumMismatch {
                country,
                year,
                total,
                category_sum,
            } => {
                assert_eq!(country, "A");
                assert_eq!(*year, 2020);
                assert_eq!(*total, 100.0);
                assert_eq!(*category_sum, 50.0);
            }
            other => panic!("unexpected issue: {:?}", other),
        }
    }

    #[test]
    fn test_validate_within_tolerance_is_clean() {
        let mut near = record("A", 2020, 100.0);
        near.coal = 97.0;
        let dataset = EmissionDataset::new(vec![near]);
        assert!(dataset.validate(5.0).is_empty());
    }

    #[test]
    fn test_validate_zero_total_not_checked_for_sum() {
        let zero = record("A", 2020, 0.0);
        let dataset = EmissionDataset::new(vec![zero]);
        assert!(dataset.validate(5.0).is_empty());
    }

    #[test]
    fn test_validate_duplicate_records() {
        let dataset = EmissionDataset::new(vec![
            record("A", 2020, 100.0),
            record("A", 2020, 100.0),
        ]);
        let issues = dataset.validate(5.0);
        assert!(issues
            .iter()
            .any(|i| matches!(i, QualityIssue::DuplicateRecord { country, year } if country == "A" && *year == 2020)));
    }
}
