use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One (country, year) row of emissions and economic data.
///
/// Emission fields are megatons of CO2; `gdp` is billion USD. The six
/// category fields approximately sum to `total` in well-formed data, but
/// the source does not guarantee it -- see
/// [`EmissionDataset::validate`](crate::dataset::EmissionDataset::validate).
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct EmissionRecord {
    pub country: String,
    pub year: i32,
    pub total: f64,
    pub population: f64,
    pub gdp: f64,
    pub coal: f64,
    pub oil: f64,
    pub gas: f64,
    pub cement: f64,
    pub flaring: f64,
    pub other: f64,
}

impl EmissionRecord {
    /// Sum of the six emission-source category fields.
    pub fn category_sum(&self) -> f64 {
        self.coal + self.oil + self.gas + self.cement + self.flaring + self.other
    }
}

/// Maps normalized (lowercased, trimmed) header names to column positions.
///
/// The source CSV's header casing drifted across snapshots ("GDP" vs "gdp",
/// "Country" vs "country"), so all lookups go through this one table.
struct HeaderIndex(HashMap<String, usize>);

impl HeaderIndex {
    fn new(headers: &StringRecord) -> Self {
        let mut index = HashMap::new();
        for (position, name) in headers.iter().enumerate() {
            index.entry(name.trim().to_lowercase()).or_insert(position);
        }
        HeaderIndex(index)
    }

    fn field<'r>(&self, row: &'r StringRecord, column: &str) -> Option<&'r str> {
        self.0.get(column).and_then(|&position| row.get(position))
    }
}

/// Coerce a raw CSV field to a finite number.
///
/// Empty, missing, and non-numeric fields all become 0.0, never an error;
/// non-finite parses (NaN, inf) are normalized to 0.0 as well so no
/// non-numeric residue survives the parse boundary.
fn coerce(field: Option<&str>) -> f64 {
    match field {
        Some(s) => match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => 0.0,
        },
        None => 0.0,
    }
}

/// Parse the emissions CSV into records.
///
/// Input row order is preserved and no deduplication is performed; rows
/// without a country name are skipped and counted. Year-domain filtering
/// happens downstream in the dataset, not here.
pub fn parse_records(csv_text: &str) -> Vec<EmissionRecord> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let headers = match rdr.headers() {
        Ok(h) => h.clone(),
        Err(e) => {
            log::error!("emissions CSV has no readable header row: {}", e);
            return Vec::new();
        }
    };
    let index = HeaderIndex::new(&headers);

    let mut records = Vec::new();
    let mut skipped = 0u32;
    for result in rdr.records() {
        let row = match result {
            Ok(r) => r,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        let country = index.field(&row, "country").unwrap_or("").trim();
        if country.is_empty() {
            skipped += 1;
            continue;
        }
        records.push(EmissionRecord {
            country: country.to_string(),
            year: coerce(index.field(&row, "year")) as i32,
            total: coerce(index.field(&row, "total")),
            population: coerce(index.field(&row, "population")),
            gdp: coerce(index.field(&row, "gdp")),
            coal: coerce(index.field(&row, "coal")),
            oil: coerce(index.field(&row, "oil")),
            gas: coerce(index.field(&row, "gas")),
            cement: coerce(index.field(&row, "cement")),
            flaring: coerce(index.field(&row, "flaring")),
            other: coerce(index.field(&row, "other")),
        });
    }
    log::info!(
        "parsed {} emission records, skipped {} unusable rows",
        records.len(),
        skipped
    );
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV_FIXTURE: &str = "\
Country,Year,Total,Population,GDP,Coal,Oil,Gas,Cement,Flaring,Other
China,2020,10668.0,1411.1,14722.7,7956.7,1659.4,770.9,232.0,4.2,44.8
United States,2020,4713.0,331.5,20893.7,879.2,1983.2,1646.0,41.3,68.5,94.8
";

    #[test]
    fn test_parse_basic() {
        let records = parse_records(CSV_FIXTURE);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].country, "China");
        assert_eq!(records[0].year, 2020);
        assert_eq!(records[0].total, 10668.0);
        assert_eq!(records[1].gdp, 20893.7);
        assert_eq!(records[1].flaring, 68.5);
    }

    #[test]
    fn test_parse_preserves_row_order_and_duplicates() {
        let csv = "\
Country,Year,Total,Population,GDP,Coal,Oil,Gas,Cement,Flaring,Other
B,2020,50,1,1,50,0,0,0,0,0
A,2020,100,1,1,60,40,0,0,0,0
B,2020,50,1,1,50,0,0,0,0,0
";
        let records = parse_records(csv);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].country, "B");
        assert_eq!(records[1].country, "A");
        assert_eq!(records[2].country, "B");
    }

    #[test]
    fn test_parse_normalizes_header_casing() {
        let csv = "\
country,YEAR,total,population,gdp,COAL,oil,gas,cement,flaring,other
India,2019,2456.3,1366.4,2870.5,1569.0,620.4,137.9,112.0,2.2,14.8
";
        let records = parse_records(csv);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].year, 2019);
        assert_eq!(records[0].coal, 1569.0);
        assert_eq!(records[0].gdp, 2870.5);
    }

    #[test]
    fn test_coercion_defaults_to_zero() {
        let csv = "\
Country,Year,Total,Population,GDP,Coal,Oil,Gas,Cement,Flaring,Other
Russia,2020,1577.1,,not-a-number,NaN,inf,397.0,,,
";
        let records = parse_records(csv);
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.population, 0.0);
        assert_eq!(r.gdp, 0.0);
        // NaN and inf parse as f64 but are not finite measurements
        assert_eq!(r.coal, 0.0);
        assert_eq!(r.oil, 0.0);
        assert_eq!(r.gas, 397.0);
        assert_eq!(r.cement, 0.0);
    }

    #[test]
    fn test_parser_totality_all_fields_finite() {
        let csv = "\
Country,Year,Total,Population,GDP,Coal,Oil,Gas,Cement,Flaring,Other
A,garbage,--,x,y,z,,,,,
";
        let records = parse_records(csv);
        assert_eq!(records.len(), 1);
        let r = &records[0];
        for value in [
            r.total, r.population, r.gdp, r.coal, r.oil, r.gas, r.cement, r.flaring, r.other,
        ] {
            assert!(value.is_finite());
            assert_eq!(value, 0.0);
        }
        assert_eq!(r.year, 0);
    }

    #[test]
    fn test_rows_without_country_are_skipped() {
        let csv = "\
Country,Year,Total,Population,GDP,Coal,Oil,Gas,Cement,Flaring,Other
,2020,100,1,1,100,0,0,0,0,0
Japan,2020,1030.8,125.8,5057.8,439.2,352.4,211.9,24.1,0.3,2.9
";
        let records = parse_records(csv);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].country, "Japan");
    }

    #[test]
    fn test_short_rows_coerce_missing_fields() {
        // flexible reader: rows narrower than the header still parse
        let csv = "\
Country,Year,Total,Population,GDP,Coal,Oil,Gas,Cement,Flaring,Other
Brazil,2020,467.2
";
        let records = parse_records(csv);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].total, 467.2);
        assert_eq!(records[0].coal, 0.0);
        assert_eq!(records[0].other, 0.0);
    }

    #[test]
    fn test_category_sum() {
        let records = parse_records(CSV_FIXTURE);
        let expected = 7956.7 + 1659.4 + 770.9 + 232.0 + 4.2 + 44.8;
        assert!((records[0].category_sum() - expected).abs() < 1e-9);
    }
}
