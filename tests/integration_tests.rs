use chrono::{DateTime, TimeZone, Utc};
use summer_schools::source::{CsvFileSource, StaticSource, parse_records};
use summer_schools::{Continent, DataSource, FilterController, RegionFilter, transform};

const FIXTURE: &[u8] = include_bytes!("fixtures/summer_schools.csv");

fn reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap()
}

fn names(records: &[summer_schools::EnrichedRecord]) -> Vec<&str> {
    records.iter().map(|r| r.name()).collect()
}

#[test]
fn test_full_pipeline() {
    let records = parse_records(FIXTURE).expect("Failed to parse fixture");
    assert_eq!(records.len(), 11);

    let listing = transform(&records, reference(), &RegionFilter::All);

    assert_eq!(listing.open_count() + listing.closed_count(), records.len());
    assert_eq!(
        names(&listing.open),
        vec![
            "Berlin Systems Summer School",
            "Prague Quantum School",
            "Deep Learning Indaba",
            "Lost City Symposium",
            "Tokyo Computer Vision Summer School",
            "Sydney Robotics Camp",
            "Santiago Astro School",
        ]
    );
    assert_eq!(
        names(&listing.closed),
        vec![
            "Lisbon Machine Learning School",
            "Montreal NLP School",
            "Oxford Logic School",
            "Rolling Admissions Workshop",
        ]
    );
    assert_eq!(
        listing.available_regions,
        vec![
            Continent::Africa,
            Continent::Asia,
            Continent::Europe,
            Continent::NorthAmerica,
            Continent::Oceania,
            Continent::SouthAmerica,
        ]
    );
}

#[test]
fn test_europe_filter() {
    let records = parse_records(FIXTURE).unwrap();
    let listing = transform(&records, reference(), &RegionFilter::from(Continent::Europe));

    assert_eq!(
        names(&listing.open),
        vec!["Berlin Systems Summer School", "Prague Quantum School"]
    );
    assert_eq!(
        names(&listing.closed),
        vec![
            "Lisbon Machine Learning School",
            "Oxford Logic School",
            "Rolling Admissions Workshop",
        ]
    );
    assert_eq!(listing.available_regions.len(), 6);
}

#[test]
fn test_filter_from_shared_url() {
    let records = parse_records(FIXTURE).unwrap();
    let url = reqwest::Url::parse("https://schools.example.org/?region=OC").unwrap();
    let controller = FilterController::new(url);

    let listing = transform(&records, reference(), controller.region());
    assert_eq!(names(&listing.open), vec!["Sydney Robotics Camp"]);
    assert!(listing.closed.is_empty());
}

#[test]
fn test_every_region_filter_is_a_subset_of_all() {
    let records = parse_records(FIXTURE).unwrap();
    let all = transform(&records, reference(), &RegionFilter::All);

    let mut listed = 0;
    for region in &all.available_regions {
        let filtered = transform(&records, reference(), &RegionFilter::from(*region));
        assert_eq!(filtered.available_regions, all.available_regions);
        for r in filtered.open.iter().chain(&filtered.closed) {
            assert_eq!(r.country_info.as_ref().map(|i| i.continent), Some(*region));
        }
        listed += filtered.open_count() + filtered.closed_count();
    }
    // Only the Atlantis row has no region.
    assert_eq!(listed, records.len() - 1);
}

#[tokio::test]
async fn test_file_source_matches_static_source() {
    let path = std::env::temp_dir().join("summer_schools_integration.csv");
    std::fs::write(&path, FIXTURE).unwrap();

    let from_file = CsvFileSource::new(&path).fetch_all().await.unwrap();
    let from_memory = StaticSource(parse_records(FIXTURE).unwrap())
        .fetch_all()
        .await
        .unwrap();
    assert_eq!(from_file, from_memory);

    std::fs::remove_file(&path).unwrap();
}
