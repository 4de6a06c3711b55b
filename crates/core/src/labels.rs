//! Address-label entry building and pagination.
//!
//! The address-label template prints sheets of postal labels. Label-worthy
//! parties are collected in a fixed selection order (claimant, claimant
//! representative, each respondent in collection order, each respondent
//! representative), repeated per requested copy count, and sliced into
//! fixed-capacity pages of numbered slots. A page boundary only ever falls
//! between whole slots; one copy's sub-fields are never split.
//!
//! Labels are postal artefacts: inactive respondents still receive them,
//! unlike the aggregated display fields.

use crate::case::{CaseData, LabelSelection};

/// One label-worthy party's printable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressLabelEntry {
    pub name: String,
    /// Second name line; the representative's organisation when present.
    pub name2: String,
    pub address_lines: [String; 5],
    pub telephone: String,
    pub fax: String,
    /// Representative-organisation reference; empty for the party's own label.
    pub reference: String,
    pub case_reference: String,
}

/// One emitted label page: numbered slots in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelPage {
    pub slots: Vec<(usize, AddressLabelEntry)>,
}

impl LabelPage {
    /// Render this page's slots as ordered data-map fields.
    ///
    /// Slot `NN` emits, in order: `Label_NN_Entity_Name_01/02`,
    /// `Label_NN_Address_Line_01..05`, `Label_NN_Telephone`,
    /// `Label_NN_Fax`, `lbl_NN_Ref`, `lbl_NN_Case_Ref`.
    pub fn fields(&self) -> Vec<(String, String)> {
        let mut out = Vec::with_capacity(self.slots.len() * 10);
        for (position, entry) in &self.slots {
            let nn = format!("{position:02}");
            out.push((format!("Label_{nn}_Entity_Name_01"), entry.name.clone()));
            out.push((format!("Label_{nn}_Entity_Name_02"), entry.name2.clone()));
            for (i, line) in entry.address_lines.iter().enumerate() {
                out.push((format!("Label_{nn}_Address_Line_{:02}", i + 1), line.clone()));
            }
            out.push((format!("Label_{nn}_Telephone"), entry.telephone.clone()));
            out.push((format!("Label_{nn}_Fax"), entry.fax.clone()));
            out.push((format!("lbl_{nn}_Ref"), entry.reference.clone()));
            out.push((format!("lbl_{nn}_Case_Ref"), entry.case_reference.clone()));
        }
        out
    }
}

fn opt(value: &Option<String>) -> String {
    value.as_deref().unwrap_or_default().to_string()
}

fn address_lines(address: &crate::case::Address) -> [String; 5] {
    let town_county = [address.town.as_deref(), address.county.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    [
        opt(&address.line1),
        opt(&address.line2),
        opt(&address.line3),
        town_county,
        opt(&address.postcode),
    ]
}

/// Collect label entries from the case in selection order.
///
/// Only the categories ticked in the selection contribute, and only parties
/// that actually exist on the case.
pub fn collect_entries(case: &CaseData, selection: &LabelSelection) -> Vec<AddressLabelEntry> {
    let mut entries = Vec::new();
    let case_reference = case.case_number.clone();

    if selection.claimant {
        if let Some(claimant) = &case.claimant {
            entries.push(AddressLabelEntry {
                name: claimant.name.clone(),
                name2: String::new(),
                address_lines: address_lines(&claimant.address),
                telephone: opt(&claimant.telephone),
                fax: opt(&claimant.fax),
                reference: String::new(),
                case_reference: case_reference.clone(),
            });
        }
    }

    if selection.claimant_rep {
        if let Some(rep) = &case.claimant_representative {
            entries.push(AddressLabelEntry {
                name: rep.name.clone(),
                name2: opt(&rep.organisation),
                address_lines: address_lines(&rep.address),
                telephone: opt(&rep.telephone),
                fax: opt(&rep.fax),
                reference: opt(&rep.reference),
                case_reference: case_reference.clone(),
            });
        }
    }

    if selection.respondents {
        for respondent in &case.respondents {
            entries.push(AddressLabelEntry {
                name: respondent.name.clone(),
                name2: String::new(),
                address_lines: address_lines(&respondent.address),
                telephone: opt(&respondent.telephone),
                fax: opt(&respondent.fax),
                reference: String::new(),
                case_reference: case_reference.clone(),
            });
        }
    }

    if selection.respondent_reps {
        for respondent in &case.respondents {
            if let Some(rep) = &respondent.representative {
                entries.push(AddressLabelEntry {
                    name: rep.name.clone(),
                    name2: opt(&rep.organisation),
                    address_lines: address_lines(&rep.address),
                    telephone: opt(&rep.telephone),
                    fax: opt(&rep.fax),
                    reference: opt(&rep.reference),
                    case_reference: case_reference.clone(),
                });
            }
        }
    }

    entries
}

/// Slice label entries into fixed-capacity pages of numbered slots.
///
/// Each entry is repeated `copies` times consecutively before the next
/// entry. Slot numbering starts at `start_index` (1-based) on the first
/// page and wraps to `01` at the start of each new page once `capacity`
/// positions are filled. An empty entry list produces an empty page list.
pub fn paginate(
    entries: &[AddressLabelEntry],
    start_index: u32,
    copies: u32,
    capacity: usize,
) -> Vec<LabelPage> {
    let mut pages = Vec::new();
    let mut current: Vec<(usize, AddressLabelEntry)> = Vec::new();
    let mut position = start_index.max(1) as usize;

    for entry in entries {
        for _ in 0..copies.max(1) {
            if position > capacity {
                pages.push(LabelPage { slots: current });
                current = Vec::new();
                position = 1;
            }
            current.push((position, entry.clone()));
            position += 1;
        }
    }

    if !current.is_empty() {
        pages.push(LabelPage { slots: current });
    }

    pages
}
