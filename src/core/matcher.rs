//! Driver roster parsing and selection.
//!
//! The roster holds one `name, location, load` record per line with no header.
//! Lines that do not fit that shape are skipped individually and reported,
//! so one bad line never hides the rest of the roster.

use crate::core::location::locations_match;
use crate::domain::model::Driver;
use crate::domain::ports::Storage;
use crate::utils::error::{OrderError, Result};
use serde::Serialize;

const FIELDS_PER_RECORD: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedLine {
    pub line: u64,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DriverRoster {
    drivers: Vec<Driver>,
    rejected: Vec<RejectedLine>,
}

impl DriverRoster {
    pub fn parse(content: &str) -> Self {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .quoting(false)
            .comment(Some(b'#'))
            .from_reader(content.as_bytes());

        let mut roster = DriverRoster::default();
        for result in reader.records() {
            let parsed = result.map_err(OrderError::from).and_then(|record| {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                if record.len() == 1 && record[0].is_empty() {
                    return Ok(None);
                }
                parse_record(&record, line).map(Some)
            });

            match parsed {
                Ok(Some(driver)) => roster.drivers.push(driver),
                Ok(None) => {}
                Err(OrderError::MalformedDriverRecord { line, reason }) => {
                    tracing::warn!("Skipping driver record on line {}: {}", line, reason);
                    roster.rejected.push(RejectedLine { line, reason });
                }
                Err(e) => {
                    let line = match &e {
                        OrderError::CsvError(csv_err) => {
                            csv_err.position().map(|p| p.line()).unwrap_or(0)
                        }
                        _ => 0,
                    };
                    tracing::warn!("Skipping unreadable driver record on line {}: {}", line, e);
                    roster.rejected.push(RejectedLine {
                        line,
                        reason: e.to_string(),
                    });
                }
            }
        }

        tracing::debug!(
            "Parsed driver roster: {} drivers, {} rejected lines",
            roster.drivers.len(),
            roster.rejected.len()
        );
        roster
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn rejected(&self) -> &[RejectedLine] {
        &self.rejected
    }

    pub fn best_for(&self, location: &str) -> Option<&Driver> {
        select_driver(&self.drivers, location)
    }
}

fn parse_record(record: &csv::StringRecord, line: u64) -> Result<Driver> {
    if record.len() != FIELDS_PER_RECORD {
        return Err(OrderError::MalformedDriverRecord {
            line,
            reason: format!(
                "expected {} fields, found {}",
                FIELDS_PER_RECORD,
                record.len()
            ),
        });
    }

    let name = &record[0];
    let location = &record[1];
    let raw_load = &record[2];

    if name.is_empty() || location.is_empty() {
        return Err(OrderError::MalformedDriverRecord {
            line,
            reason: "name and location must not be empty".to_string(),
        });
    }

    let load = raw_load
        .parse::<u32>()
        .map_err(|_| OrderError::MalformedDriverRecord {
            line,
            reason: format!("load '{}' is not a non-negative integer", raw_load),
        })?;

    Ok(Driver::new(name, location, load))
}

/// Picks the driver at `location` with the lowest load. On equal loads the
/// earliest driver in iteration order is kept.
pub fn select_driver<'a, I>(drivers: I, location: &str) -> Option<&'a Driver>
where
    I: IntoIterator<Item = &'a Driver>,
{
    let mut best: Option<&'a Driver> = None;
    for driver in drivers {
        if !locations_match(&driver.location, location) {
            continue;
        }
        if best.map_or(true, |current| driver.load < current.load) {
            best = Some(driver);
        }
    }
    best
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Found(Driver),
    NoneFound,
    /// The roster could not be read at all.
    SourceUnavailable(String),
}

impl MatchOutcome {
    pub fn driver(&self) -> Option<&Driver> {
        match self {
            MatchOutcome::Found(driver) => Some(driver),
            _ => None,
        }
    }
}

pub struct DriverMatcher<'a, S: Storage> {
    storage: &'a S,
    drivers_file: &'a str,
}

impl<'a, S: Storage> DriverMatcher<'a, S> {
    pub fn new(storage: &'a S, drivers_file: &'a str) -> Self {
        Self {
            storage,
            drivers_file,
        }
    }

    pub fn load_roster(&self) -> Result<DriverRoster> {
        let content = self.storage.read_file(self.drivers_file)?;
        Ok(DriverRoster::parse(&content))
    }

    pub fn find_driver(&self, location: &str) -> MatchOutcome {
        let roster = match self.load_roster() {
            Ok(roster) => roster,
            Err(e) => {
                tracing::error!("Failed to read driver roster {}: {}", self.drivers_file, e);
                return MatchOutcome::SourceUnavailable(e.to_string());
            }
        };

        match roster.best_for(location) {
            Some(driver) => {
                tracing::info!(
                    "Matched driver {} (load {}) for {}",
                    driver.name,
                    driver.load,
                    location
                );
                MatchOutcome::Found(driver.clone())
            }
            None => {
                tracing::info!("No driver available in {}", location);
                MatchOutcome::NoneFound
            }
        }
    }
}
