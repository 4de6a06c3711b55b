//! Hearing resolution: dates, times, duration, and venue.
//!
//! Given the hearing number referenced by a correspondence selection, this
//! module locates the hearing in the case's collection and renders its
//! display fields. A missing reference or unmatched number is not an error —
//! every hearing-derived field falls back to the empty string — but an
//! unrecognised venue code on a Scotland-tagged request is a data-integrity
//! violation and fails the whole assembly.

use chrono::NaiveDate;
use corres_types::Jurisdiction;

use crate::case::Hearing;
use crate::constants::{DISPLAY_DATE_FORMAT, DISPLAY_TIME_FORMAT};
use crate::{AssemblyError, AssemblyResult};

/// Errors surfaced by a venue directory collaborator.
#[derive(Debug, thiserror::Error)]
pub enum VenueLookupError {
    /// The directory itself failed (I/O, upstream service, corrupt data).
    #[error("venue directory failure: {0}")]
    Directory(String),
}

/// Venue address directory, implemented elsewhere.
///
/// `Ok(None)` means the code is simply not in the directory; how that is
/// treated depends on jurisdiction and is the engine's decision, not the
/// directory's.
pub trait VenueAddressReader {
    /// Look up the display address for a hearing venue.
    fn venue_address(
        &self,
        jurisdiction: Jurisdiction,
        managing_office: &str,
        venue_code: &str,
    ) -> Result<Option<String>, VenueLookupError>;
}

/// Rendered hearing fields, all empty when no hearing matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HearingFields {
    /// Comma-joined human-readable date list.
    pub date: String,
    /// `"{date} at {time}"` when exactly one date and a start time exist.
    pub date_time: String,
    /// Bare start time under the same single-date condition.
    pub time: String,
    pub venue: String,
    /// `"{n} {unit}"` with the unit pluralized when n != 1.
    pub duration: String,
}

/// Format one date the way letters print it, e.g. `25 November 2019`.
pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

fn duration_text(value: u32, unit: &str) -> String {
    if unit.is_empty() {
        return String::new();
    }
    if value == 1 {
        format!("{value} {unit}")
    } else {
        format!("{value} {unit}s")
    }
}

/// Resolve the referenced hearing into display fields.
///
/// # Errors
///
/// Returns [`AssemblyError::UnrecognisedScottishVenue`] when the matched
/// hearing's venue code is absent from the directory under Scotland, and
/// propagates any [`VenueLookupError`] from the collaborator unchanged.
pub fn resolve(
    hearing_number: Option<&str>,
    hearings: &[Hearing],
    jurisdiction: Jurisdiction,
    managing_office: &str,
    case_number: &str,
    venues: &dyn VenueAddressReader,
) -> AssemblyResult<HearingFields> {
    let hearing = hearing_number
        .and_then(|number| hearings.iter().find(|h| h.hearing_number == number));

    let Some(hearing) = hearing else {
        tracing::debug!(
            hearing_number,
            case_number,
            "no matching hearing, emitting empty hearing fields"
        );
        return Ok(HearingFields::default());
    };

    let date = hearing
        .listed_dates
        .iter()
        .map(|d| display_date(*d))
        .collect::<Vec<_>>()
        .join(", ");

    let (date_time, time) = match (hearing.listed_dates.as_slice(), hearing.start_time) {
        ([only], Some(start)) => {
            let time = start.format(DISPLAY_TIME_FORMAT).to_string();
            (format!("{} at {}", display_date(*only), time), time)
        }
        _ => (String::new(), String::new()),
    };

    let venue = if hearing.venue_code.is_empty() {
        String::new()
    } else {
        match venues.venue_address(jurisdiction, managing_office, &hearing.venue_code)? {
            Some(address) => address,
            None if jurisdiction == Jurisdiction::Scotland => {
                return Err(AssemblyError::UnrecognisedScottishVenue {
                    venue_code: hearing.venue_code.clone(),
                    case_number: case_number.to_string(),
                });
            }
            None => String::new(),
        }
    };

    Ok(HearingFields {
        date,
        date_time,
        time,
        venue,
        duration: duration_text(hearing.duration_value, &hearing.duration_unit),
    })
}
