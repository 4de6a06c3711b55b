//! Case payload wire model.
//!
//! This module defines the serde representation of the case data consumed by
//! the assembly engine: parties, representatives, hearings, and the
//! correspondence selection itself.
//!
//! Notes:
//! - Payloads arrive from the upstream case-management platform, so the
//!   model tolerates unknown keys and defaults absent optionals. This is the
//!   opposite of the strictness used for formats this workspace owns.
//! - The model carries no behaviour; formatting and resolution live in the
//!   pipeline modules.

use chrono::{NaiveDate, NaiveTime};
use corres_types::{CorrespondenceCode, Jurisdiction};
use serde::{Deserialize, Serialize};

use crate::{AssemblyError, AssemblyResult};

/// A postal address as supplied by the platform. Every component is
/// optional; the formatter substitutes empty strings downstream.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub line1: Option<String>,
    #[serde(default)]
    pub line2: Option<String>,
    #[serde(default)]
    pub line3: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
}

/// A claimant's record on the case.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub name: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub fax: Option<String>,
}

/// A respondent's record on the case.
///
/// Respondent ordering is the platform's collection order and is preserved
/// throughout aggregation; the ordinal is the index in
/// [`CaseData::respondents`].
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Respondent {
    pub name: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub fax: Option<String>,
    /// Struck-out or withdrawn respondents carry `false` and are excluded
    /// from aggregated party fields. They still receive address labels.
    #[serde(default = "default_true")]
    pub active: bool,
    /// When the response has been struck out, representative override is
    /// suppressed for the document contexts that require it.
    #[serde(default)]
    pub response_struck_out: bool,
    #[serde(default)]
    pub representative: Option<Representative>,
}

fn default_true() -> bool {
    true
}

/// A representative attached to a party. When present and in effect it
/// supersedes the party's own name and address for display purposes.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Representative {
    pub name: String,
    #[serde(default)]
    pub organisation: Option<String>,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub fax: Option<String>,
}

/// A listed hearing on the case.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Hearing {
    pub hearing_number: String,
    #[serde(default)]
    pub listed_dates: Vec<NaiveDate>,
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    #[serde(default)]
    pub duration_value: u32,
    /// Native length unit in singular form, as supplied ("day", "Minute").
    #[serde(default)]
    pub duration_unit: String,
    #[serde(default)]
    pub venue_code: String,
}

/// The correspondence selection: which document, which section.
///
/// Exactly one of the two jurisdiction sections is populated; this is a
/// caller contract, and seeing both is surfaced as a payload-corruption
/// error rather than silently picking one.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CorrespondenceSelection {
    #[serde(default)]
    pub england_wales: Option<SectionCode>,
    #[serde(default)]
    pub scotland: Option<SectionCode>,
    /// Number of the hearing this letter refers to, if any.
    #[serde(default)]
    pub hearing_number: Option<String>,
    #[serde(default)]
    pub labels: Option<LabelSelection>,
}

impl CorrespondenceSelection {
    /// The jurisdiction this selection was made under.
    ///
    /// # Errors
    ///
    /// Returns `AssemblyError::AmbiguousJurisdiction` when both sections are
    /// populated. An empty selection defaults to England & Wales, matching
    /// the platform's single-jurisdiction cases.
    pub fn jurisdiction(&self, case_number: &str) -> AssemblyResult<Jurisdiction> {
        match (&self.england_wales, &self.scotland) {
            (Some(_), Some(_)) => Err(AssemblyError::AmbiguousJurisdiction {
                case_number: case_number.to_string(),
            }),
            (None, Some(_)) => Ok(Jurisdiction::Scotland),
            _ => Ok(Jurisdiction::EnglandWales),
        }
    }

    /// The populated section, if any.
    pub fn section(&self) -> Option<&SectionCode> {
        self.england_wales.as_ref().or(self.scotland.as_ref())
    }
}

/// A two-level classification code: top-level topic plus optional part.
///
/// Tokens are validated at the parse boundary; a present section with an
/// empty or malformed topic is payload corruption, while "no selection at
/// all" is modelled by the section's absence.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SectionCode {
    pub topic: CorrespondenceCode,
    #[serde(default)]
    pub part: Option<CorrespondenceCode>,
}

/// Which parties receive address labels, and how the label pages paginate.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LabelSelection {
    #[serde(default)]
    pub claimant: bool,
    #[serde(default)]
    pub claimant_rep: bool,
    #[serde(default)]
    pub respondents: bool,
    #[serde(default)]
    pub respondent_reps: bool,
    /// 1-based slot number the first label occupies on the first page.
    #[serde(default = "default_one")]
    pub start_index: u32,
    /// Consecutive copies emitted per selected entry.
    #[serde(default = "default_one")]
    pub copies: u32,
}

fn default_one() -> u32 {
    1
}

impl Default for LabelSelection {
    fn default() -> Self {
        Self {
            claimant: false,
            claimant_rep: false,
            respondents: false,
            respondent_reps: false,
            start_index: 1,
            copies: 1,
        }
    }
}

/// Replacement court-address fields allocated to a request. Each populated
/// field replaces the corresponding static one in full; fields are not
/// merged at sub-field granularity.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AllocatedOfficeOverride {
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub address_line3: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub fax: Option<String>,
    #[serde(default)]
    pub dx: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// One case as consumed by the assembly engine.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CaseData {
    pub case_number: String,
    #[serde(default)]
    pub submission_reference: Option<String>,
    #[serde(default)]
    pub managing_office: String,
    #[serde(default)]
    pub clerk_responsible: Option<String>,
    #[serde(default)]
    pub claimant: Option<Party>,
    #[serde(default)]
    pub claimant_representative: Option<Representative>,
    #[serde(default)]
    pub respondents: Vec<Respondent>,
    #[serde(default)]
    pub hearings: Vec<Hearing>,
    #[serde(default)]
    pub allocated_office: Option<AllocatedOfficeOverride>,
    #[serde(default)]
    pub correspondence: Option<CorrespondenceSelection>,
}

/// Parse a case payload from JSON text.
///
/// This uses `serde_path_to_error` to surface a best-effort "path" (e.g.
/// `hearings[0].listedDates`) to the failing field when the JSON does not
/// match the wire model.
///
/// # Errors
///
/// Returns [`AssemblyError::CaseParse`] naming the failing path when the
/// payload has an unexpected shape or field type.
pub fn case_from_json(json_text: &str) -> AssemblyResult<CaseData> {
    let deserializer = &mut serde_json::Deserializer::from_str(json_text);

    match serde_path_to_error::deserialize::<_, CaseData>(deserializer) {
        Ok(parsed) => Ok(parsed),
        Err(err) => {
            let path = err.path().to_string();
            let source = err.into_inner();
            let path = if path.is_empty() || path == "." {
                "<root>".to_string()
            } else {
                path
            };
            Err(AssemblyError::CaseParse {
                path,
                message: source.to_string(),
            })
        }
    }
}
