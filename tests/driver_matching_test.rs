use food_quick::core::Driver;
use food_quick::{DriverMatcher, LocalStorage, MatchOutcome};
use std::fs;
use tempfile::TempDir;

fn storage_with_roster(content: &str) -> (TempDir, LocalStorage) {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("drivers.txt"), content).unwrap();
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    (temp_dir, storage)
}

#[test]
fn test_lowest_load_driver_is_found() {
    let (_temp_dir, storage) = storage_with_roster("Sam,CapeTown,3\nLee,CapeTown,1\n");
    let matcher = DriverMatcher::new(&storage, "drivers.txt");

    assert_eq!(
        matcher.find_driver("CapeTown"),
        MatchOutcome::Found(Driver::new("Lee", "CapeTown", 1))
    );
}

#[test]
fn test_first_of_equal_loads_wins() {
    let (_temp_dir, storage) =
        storage_with_roster("Ayanda, Durban, 4\nBongi, Durban, 2\nCarl, durban, 2\n");
    let matcher = DriverMatcher::new(&storage, "drivers.txt");

    let outcome = matcher.find_driver("DURBAN");
    assert_eq!(outcome.driver().map(|d| d.name.as_str()), Some("Bongi"));
}

#[test]
fn test_no_matching_location() {
    let (_temp_dir, storage) = storage_with_roster("Sam,CapeTown,3\n");
    let matcher = DriverMatcher::new(&storage, "drivers.txt");

    assert_eq!(matcher.find_driver("Bloemfontein"), MatchOutcome::NoneFound);
}

#[test]
fn test_bad_lines_do_not_hide_good_ones() {
    let (_temp_dir, storage) =
        storage_with_roster("Sam,CapeTown\nLee,CapeTown,one\nMo,CapeTown,6\n");
    let matcher = DriverMatcher::new(&storage, "drivers.txt");

    let roster = matcher.load_roster().unwrap();
    assert_eq!(roster.rejected().len(), 2);
    assert_eq!(
        matcher.find_driver("capetown"),
        MatchOutcome::Found(Driver::new("Mo", "CapeTown", 6))
    );
}

#[test]
fn test_unreadable_roster_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    let matcher = DriverMatcher::new(&storage, "missing.txt");

    match matcher.find_driver("CapeTown") {
        MatchOutcome::SourceUnavailable(reason) => assert!(reason.contains("missing.txt")),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(matcher.load_roster().is_err());
}
