pub mod breakdown;
pub mod dataset;
pub mod metric;
pub mod ranking;
pub mod record;
pub mod selection;

#[cfg(test)]
mod tests {
    use crate::breakdown::breakdown;
    use crate::dataset::EmissionDataset;
    use crate::ranking::RankTable;
    use crate::record::parse_records;

    // Parse -> extract -> rank -> break down, end to end.
    #[test]
    fn test_csv_to_coordinated_views() {
        let csv = "\
Country,Year,Total,Population,GDP,Coal,Oil,Gas,Cement,Flaring,Other
A,2020,100,10,1000,60,40,0,0,0,0
B,2020,50,5,500,50,0,0,0,0,0
A,2021,80,10,1100,48,32,0,0,0,0
";
        let dataset = EmissionDataset::new(parse_records(csv));

        // A's cross-year total (180) outranks B's (50)
        assert_eq!(dataset.countries(), vec!["A".to_string(), "B".to_string()]);
        assert_eq!(dataset.years(), vec![2020, 2021]);

        let rankings = RankTable::compute(&dataset);
        assert_eq!(rankings.get("A", 2020).unwrap().to_string(), "1/2");
        assert_eq!(rankings.get("B", 2020).unwrap().to_string(), "2/2");
        assert_eq!(rankings.get("A", 2021).unwrap().to_string(), "1/1");
        assert!(rankings.get("B", 2021).is_none());

        let selected = dataset.record_for("A", 2020).unwrap();
        let shares = breakdown(selected);
        assert_eq!(shares[0].label, "Coal");
        assert_eq!(shares[0].value, 60.0);
        assert_eq!(shares[0].percentage, 60.0);
        assert_eq!(shares[1].label, "Oil");
        assert_eq!(shares[1].value, 40.0);
        assert_eq!(shares[1].percentage, 40.0);
        for share in &shares[2..] {
            assert_eq!(share.value, 0.0);
            assert_eq!(share.percentage, 0.0);
        }
    }
}
