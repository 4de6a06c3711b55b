//! Party display formatting and multi-respondent aggregation.
//!
//! Responsibilities:
//! - Resolve the displayed name/address for a party, applying the
//!   representative-override rule (a representative in effect supersedes the
//!   party's own details; a struck-out response suppresses the override).
//! - Build the numbered primary/other-respondent strings used by templates
//!   that address several respondents at once.
//!
//! All single-party scalar fields come back as empty strings when absent so
//! the data-map key set stays stable across templates.

use crate::case::{Address, Representative, Respondent};
use crate::constants::COUNTRY_SUFFIX;

/// The displayed identity of one party after representative override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayIdentity {
    pub name: String,
    pub organisation: String,
    pub address_line1: String,
    pub address_line2: String,
    pub address_line3: String,
    pub town: String,
    pub county: String,
    pub postcode: String,
    pub reference: String,
}

impl DisplayIdentity {
    /// Comma-joins the non-empty address components and appends the fixed
    /// country suffix, the shape used in aggregated respondent addresses.
    pub fn full_address(&self) -> String {
        let mut parts: Vec<&str> = [
            self.address_line1.as_str(),
            self.address_line2.as_str(),
            self.address_line3.as_str(),
            self.town.as_str(),
            self.county.as_str(),
            self.postcode.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
        parts.push(COUNTRY_SUFFIX);
        parts.join(", ")
    }
}

fn text(value: &Option<String>) -> String {
    value.as_deref().unwrap_or_default().to_string()
}

fn identity_from_address(
    name: &str,
    organisation: Option<&str>,
    address: &Address,
    reference: Option<&str>,
) -> DisplayIdentity {
    DisplayIdentity {
        name: name.to_string(),
        organisation: organisation.unwrap_or_default().to_string(),
        address_line1: text(&address.line1),
        address_line2: text(&address.line2),
        address_line3: text(&address.line3),
        town: text(&address.town),
        county: text(&address.county),
        postcode: text(&address.postcode),
        reference: reference.unwrap_or_default().to_string(),
    }
}

/// Resolve a party's displayed identity.
///
/// When `representative` is present and `override_suppressed` is false, the
/// representative's name, organisation, address, and reference are used in
/// place of the party's own. Otherwise the party's own details are used and
/// the organisation field is empty.
pub fn format_party(
    name: &str,
    address: &Address,
    reference: Option<&str>,
    representative: Option<&Representative>,
    override_suppressed: bool,
) -> DisplayIdentity {
    match representative {
        Some(rep) if !override_suppressed => identity_from_address(
            &rep.name,
            rep.organisation.as_deref(),
            &rep.address,
            rep.reference.as_deref(),
        ),
        _ => identity_from_address(name, None, address, reference),
    }
}

/// Resolve a respondent's displayed identity, applying the struck-out
/// suppression rule to its representative.
pub fn format_respondent(respondent: &Respondent) -> DisplayIdentity {
    format_party(
        &respondent.name,
        &respondent.address,
        respondent.reference.as_deref(),
        respondent.representative.as_ref(),
        respondent.response_struck_out,
    )
}

/// Aggregated respondent strings for multi-respondent templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RespondentAggregate {
    /// First active respondent; numbered (`"1. {name},"`) only when more
    /// than one respondent is active.
    pub primary: String,
    /// `", "`-joined `"{n}. {name}"` for active respondents 2..N.
    pub others: String,
    /// Entries `"{n}. {full address}"` for active respondents 2..N joined by
    /// the two-character literal `\n` expected by the merge engine.
    pub others_addresses: String,
}

/// Build the aggregated respondent strings.
///
/// Only active respondents participate; ordering is strictly the case's
/// respondent-collection order. Struck-out or withdrawn respondents are
/// skipped before numbering, so the emitted ordinals are contiguous.
pub fn aggregate_respondents(respondents: &[Respondent]) -> RespondentAggregate {
    let active: Vec<&Respondent> = respondents.iter().filter(|r| r.active).collect();

    match active.as_slice() {
        [] => RespondentAggregate::default(),
        [only] => RespondentAggregate {
            primary: format_respondent(only).name,
            ..Default::default()
        },
        [first, rest @ ..] => {
            let others = rest
                .iter()
                .enumerate()
                .map(|(i, r)| format!("{}. {}", i + 2, format_respondent(r).name))
                .collect::<Vec<_>>()
                .join(", ");
            let others_addresses = rest
                .iter()
                .enumerate()
                .map(|(i, r)| format!("{}. {}", i + 2, format_respondent(r).full_address()))
                .collect::<Vec<_>>()
                .join("\\n");
            RespondentAggregate {
                primary: format!("1. {},", format_respondent(first).name),
                others,
                others_addresses,
            }
        }
    }
}
