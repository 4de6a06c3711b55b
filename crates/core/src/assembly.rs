//! Request-scoped correspondence assembly.
//!
//! One case plus one correspondence selection in, one assembled document
//! out. The assembler resolves the classification, populates the data map in
//! the canonical field order (party, hearing, flag, court, image, trailer),
//! and hands the ordered fields to the document builder. The address-label
//! template routes into the parallel label pipeline instead of the standard
//! field set.
//!
//! The assembly date is injected by the caller rather than read from a
//! clock, so identical inputs always produce byte-identical output.

use chrono::NaiveDate;

use crate::case::{CaseData, CorrespondenceSelection};
use crate::classification;
use crate::config::EngineConfig;
use crate::constants::ADDRESS_LABELS_PAGE_KEY;
use crate::document::{AssembledDocument, OrderedDocumentBuilder};
use crate::hearing::{self, VenueAddressReader};
use crate::office;
use crate::party::{self, DisplayIdentity};
use crate::{flags, labels, AssemblyResult};

/// Assembles correspondence documents for one case at a time.
pub struct CorrespondenceAssembler<'a> {
    config: &'a EngineConfig,
    venues: &'a dyn VenueAddressReader,
}

impl<'a> CorrespondenceAssembler<'a> {
    pub fn new(config: &'a EngineConfig, venues: &'a dyn VenueAddressReader) -> Self {
        Self { config, venues }
    }

    /// Assemble the document content for a case and its correspondence
    /// selection.
    ///
    /// # Errors
    ///
    /// Fails fast on an unrecognised Scottish venue code, a venue directory
    /// failure, or a selection with both jurisdiction sections populated.
    /// Missing optional data never fails; it degrades to empty fields.
    pub fn assemble(
        &self,
        case: &CaseData,
        access_key: &str,
        today: NaiveDate,
    ) -> AssemblyResult<AssembledDocument> {
        let default_selection = CorrespondenceSelection::default();
        let selection = case.correspondence.as_ref().unwrap_or(&default_selection);
        let jurisdiction = selection.jurisdiction(&case.case_number)?;

        let section = selection.section();
        let topic = section.map(|s| s.topic.as_str()).unwrap_or_default();
        let part = section.and_then(|s| s.part.as_ref().map(|p| p.as_str()));

        let resolution = classification::resolve(jurisdiction, topic, part);
        tracing::debug!(
            case_number = case.case_number.as_str(),
            template = resolution.template_name.as_str(),
            "resolved correspondence template"
        );

        let mut builder = OrderedDocumentBuilder::new();

        if resolution.is_address_labels() {
            let default_labels = crate::case::LabelSelection::default();
            let label_selection = selection.labels.as_ref().unwrap_or(&default_labels);
            let entries = labels::collect_entries(case, label_selection);
            let pages = labels::paginate(
                &entries,
                label_selection.start_index,
                label_selection.copies,
                self.config.label_page_capacity(),
            );
            builder.pages(ADDRESS_LABELS_PAGE_KEY, pages);
        } else {
            self.claimant_fields(case, &mut builder);
            self.respondent_fields(case, &mut builder);

            let hearing_fields = hearing::resolve(
                selection.hearing_number.as_deref(),
                &case.hearings,
                jurisdiction,
                &case.managing_office,
                &case.case_number,
                self.venues,
            )?;
            builder
                .field("hearing_date", hearing_fields.date)
                .field("hearing_date_time", hearing_fields.date_time)
                .field("hearing_time", hearing_fields.time)
                .field("hearing_venue", hearing_fields.venue)
                .field("Hearing_duration", hearing_fields.duration);

            if let Some(flag_field) = &resolution.flag_field {
                builder.field(flag_field.clone(), "true");
            }

            let court = office::resolve_court_block(
                &case.managing_office,
                case.allocated_office.as_ref(),
            );
            builder
                .field("Court_addressLine1", court.address_line1)
                .field("Court_addressLine2", court.address_line2)
                .field("Court_addressLine3", court.address_line3)
                .field("Court_town", court.town)
                .field("Court_county", court.county)
                .field("Court_postcode", court.postcode)
                .field("Court_telephone", court.telephone)
                .field("Court_fax", court.fax)
                .field("Court_DX", court.dx)
                .field("Court_Email", court.email);

            for image in flags::compose(jurisdiction, part) {
                builder.field(image.key, image.value);
            }
        }

        builder
            .field("Clerk", case.clerk_responsible.as_deref().unwrap_or_default())
            .field("Today_date", hearing::display_date(today))
            .field("case_no", case.case_number.as_str())
            .field(
                "submission_ref",
                case.submission_reference.as_deref().unwrap_or_default(),
            );

        Ok(builder.build(access_key, &resolution.template_name))
    }

    /// Assemble and render the wire envelope in one step.
    pub fn assemble_to_wire(
        &self,
        case: &CaseData,
        access_key: &str,
        today: NaiveDate,
    ) -> AssemblyResult<String> {
        Ok(self.assemble(case, access_key, today)?.render())
    }

    fn claimant_fields(&self, case: &CaseData, builder: &mut OrderedDocumentBuilder) {
        let identity = match &case.claimant {
            Some(claimant) => party::format_party(
                &claimant.name,
                &claimant.address,
                claimant.reference.as_deref(),
                case.claimant_representative.as_ref(),
                false,
            ),
            None => DisplayIdentity::default(),
        };
        let own_name = case
            .claimant
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_default();

        builder
            .field("claimant_or_rep_full_name", identity.name)
            .field("claimant_rep_organisation", identity.organisation)
            .field("claimant_or_rep_address_line1", identity.address_line1)
            .field("claimant_or_rep_address_line2", identity.address_line2)
            .field("claimant_or_rep_address_line3", identity.address_line3)
            .field("claimant_or_rep_town", identity.town)
            .field("claimant_or_rep_county", identity.county)
            .field("claimant_or_rep_postcode", identity.postcode)
            .field("claimant_reference", identity.reference)
            .field("claimant_full_name", own_name);
    }

    fn respondent_fields(&self, case: &CaseData, builder: &mut OrderedDocumentBuilder) {
        let aggregate = party::aggregate_respondents(&case.respondents);
        builder
            .field("Respondent", aggregate.primary)
            .field("resp_others", aggregate.others)
            .field("resp_others_addresses", aggregate.others_addresses);

        let identity = case
            .respondents
            .iter()
            .find(|r| r.active)
            .map(party::format_respondent)
            .unwrap_or_default();
        builder
            .field("respondent_or_rep_full_name", identity.name)
            .field("respondent_rep_organisation", identity.organisation)
            .field("respondent_or_rep_address_line1", identity.address_line1)
            .field("respondent_or_rep_address_line2", identity.address_line2)
            .field("respondent_or_rep_address_line3", identity.address_line3)
            .field("respondent_or_rep_town", identity.town)
            .field("respondent_or_rep_county", identity.county)
            .field("respondent_or_rep_postcode", identity.postcode)
            .field("respondent_reference", identity.reference);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::{
        Address, CorrespondenceSelection, Hearing, LabelSelection, Party, Representative,
        Respondent, SectionCode,
    };
    use crate::hearing::VenueLookupError;
    use chrono::{NaiveDate, NaiveTime};
    use corres_types::{CorrespondenceCode, Jurisdiction};

    fn code(token: &str) -> CorrespondenceCode {
        CorrespondenceCode::new(token).expect("valid code")
    }

    struct StubVenues;

    impl VenueAddressReader for StubVenues {
        fn venue_address(
            &self,
            _jurisdiction: Jurisdiction,
            _managing_office: &str,
            venue_code: &str,
        ) -> Result<Option<String>, VenueLookupError> {
            match venue_code {
                "Manchester" => Ok(Some("Alexandra House, 14-22 The Parsonage".to_string())),
                _ => Ok(None),
            }
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).expect("valid date")
    }

    fn respondent(name: &str) -> Respondent {
        Respondent {
            name: name.to_string(),
            address: Address {
                line1: Some("11 Small Street".to_string()),
                town: Some("Manchester".to_string()),
                postcode: Some("M12 42R".to_string()),
                ..Default::default()
            },
            reference: None,
            telephone: None,
            fax: None,
            active: true,
            response_struck_out: false,
            representative: None,
        }
    }

    fn scenario_case() -> CaseData {
        CaseData {
            case_number: "6000001/2026".to_string(),
            submission_reference: Some("2220010/2026".to_string()),
            managing_office: "Manchester".to_string(),
            clerk_responsible: Some("Juan Diego".to_string()),
            claimant: Some(Party {
                name: "Mr A J Rodriguez".to_string(),
                address: Address {
                    line1: Some("34 Low Street".to_string()),
                    town: Some("Manchester".to_string()),
                    postcode: Some("M3 6gw".to_string()),
                    ..Default::default()
                },
                ..Default::default()
            }),
            claimant_representative: Some(Representative {
                name: "RepresentativeNameClaimant".to_string(),
                organisation: Some("RepresentativeOrganisation".to_string()),
                address: Address {
                    line1: Some("56 Block C".to_string()),
                    line2: Some("Ellesmere Street".to_string()),
                    town: Some("Manchester".to_string()),
                    postcode: Some("M3 KJR".to_string()),
                    ..Default::default()
                },
                reference: Some("1111111111".to_string()),
                ..Default::default()
            }),
            respondents: vec![
                respondent("Antonio Vazquez"),
                respondent("Juan Garcia"),
                respondent("Mike Jordan"),
            ],
            hearings: vec![Hearing {
                hearing_number: "2".to_string(),
                listed_dates: vec![NaiveDate::from_ymd_opt(2019, 11, 25).expect("valid date")],
                start_time: Some(NaiveTime::from_hms_opt(10, 30, 0).expect("valid time")),
                duration_value: 2,
                duration_unit: "day".to_string(),
                venue_code: "Manchester".to_string(),
            }],
            allocated_office: None,
            correspondence: Some(CorrespondenceSelection {
                england_wales: Some(SectionCode {
                    topic: code("4"),
                    part: Some(code("4.2")),
                }),
                scotland: None,
                hearing_number: Some("2".to_string()),
                labels: None,
            }),
        }
    }

    fn field<'d>(document: &'d AssembledDocument, key: &str) -> &'d str {
        document
            .data
            .iter()
            .find_map(|(k, v)| {
                (k == key).then(|| match v {
                    crate::document::FieldValue::Scalar(s) => s.as_str(),
                    crate::document::FieldValue::Pages(_) => panic!("{key} is nested"),
                })
            })
            .unwrap_or_else(|| panic!("missing field {key}"))
    }

    #[test]
    fn assembles_the_multi_respondent_hearing_scenario() {
        let config = EngineConfig::default();
        let assembler = CorrespondenceAssembler::new(&config, &StubVenues);
        let document = assembler
            .assemble(&scenario_case(), "key-abc", today())
            .expect("assemble");

        assert_eq!(document.template_name, "TRB-COR-ENG-00013.docx");
        assert_eq!(document.output_name, "document.docx");
        assert_eq!(field(&document, "claimant_or_rep_full_name"), "RepresentativeNameClaimant");
        assert_eq!(field(&document, "claimant_rep_organisation"), "RepresentativeOrganisation");
        assert_eq!(field(&document, "claimant_full_name"), "Mr A J Rodriguez");
        assert_eq!(field(&document, "Respondent"), "1. Antonio Vazquez,");
        assert_eq!(field(&document, "resp_others"), "2. Juan Garcia, 3. Mike Jordan");
        assert_eq!(
            field(&document, "resp_others_addresses"),
            "2. 11 Small Street, Manchester, M12 42R, United Kingdom\\n\
             3. 11 Small Street, Manchester, M12 42R, United Kingdom"
        );
        assert_eq!(field(&document, "hearing_date"), "25 November 2019");
        assert_eq!(field(&document, "hearing_date_time"), "25 November 2019 at 10:30");
        assert_eq!(field(&document, "Hearing_duration"), "2 days");
        assert_eq!(field(&document, "hearing_venue"), "Alexandra House, 14-22 The Parsonage");
        assert_eq!(field(&document, "t4_2"), "true");
        assert_eq!(field(&document, "Court_addressLine1"), "Alexandra House");
        assert_eq!(field(&document, "i4_2_enhmcts"), "[userImage:enhmcts.png]");
        assert_eq!(field(&document, "iScot_schmcts"), "[userImage:schmcts.png]");
        assert_eq!(field(&document, "Clerk"), "Juan Diego");
        assert_eq!(field(&document, "case_no"), "6000001/2026");
        assert_eq!(field(&document, "submission_ref"), "2220010/2026");
    }

    #[test]
    fn empty_case_renders_the_full_empty_envelope() {
        let config = EngineConfig::default();
        let assembler = CorrespondenceAssembler::new(&config, &StubVenues);
        let case = CaseData {
            case_number: "6000007/2026".to_string(),
            ..Default::default()
        };
        let wire = assembler
            .assemble_to_wire(&case, "key", today())
            .expect("assemble");

        let expected = "{\n\
\"accessKey\":\"key\",\n\
\"templateName\":\".docx\",\n\
\"outputName\":\"document.docx\",\n\
\"data\":{\n\
\"claimant_or_rep_full_name\":\"\",\n\
\"claimant_rep_organisation\":\"\",\n\
\"claimant_or_rep_address_line1\":\"\",\n\
\"claimant_or_rep_address_line2\":\"\",\n\
\"claimant_or_rep_address_line3\":\"\",\n\
\"claimant_or_rep_town\":\"\",\n\
\"claimant_or_rep_county\":\"\",\n\
\"claimant_or_rep_postcode\":\"\",\n\
\"claimant_reference\":\"\",\n\
\"claimant_full_name\":\"\",\n\
\"Respondent\":\"\",\n\
\"resp_others\":\"\",\n\
\"resp_others_addresses\":\"\",\n\
\"respondent_or_rep_full_name\":\"\",\n\
\"respondent_rep_organisation\":\"\",\n\
\"respondent_or_rep_address_line1\":\"\",\n\
\"respondent_or_rep_address_line2\":\"\",\n\
\"respondent_or_rep_address_line3\":\"\",\n\
\"respondent_or_rep_town\":\"\",\n\
\"respondent_or_rep_county\":\"\",\n\
\"respondent_or_rep_postcode\":\"\",\n\
\"respondent_reference\":\"\",\n\
\"hearing_date\":\"\",\n\
\"hearing_date_time\":\"\",\n\
\"hearing_time\":\"\",\n\
\"hearing_venue\":\"\",\n\
\"Hearing_duration\":\"\",\n\
\"Court_addressLine1\":\"\",\n\
\"Court_addressLine2\":\"\",\n\
\"Court_addressLine3\":\"\",\n\
\"Court_town\":\"\",\n\
\"Court_county\":\"\",\n\
\"Court_postcode\":\"\",\n\
\"Court_telephone\":\"\",\n\
\"Court_fax\":\"\",\n\
\"Court_DX\":\"\",\n\
\"Court_Email\":\"\",\n\
\"iScot_schmcts\":\"[userImage:schmcts.png]\",\n\
\"Clerk\":\"\",\n\
\"Today_date\":\"7 August 2026\",\n\
\"case_no\":\"6000007/2026\",\n\
\"submission_ref\":\"\",\n\
}\n\
}\n";
        assert_eq!(wire, expected);
    }

    #[test]
    fn double_assembly_is_byte_identical() {
        let config = EngineConfig::default();
        let assembler = CorrespondenceAssembler::new(&config, &StubVenues);
        let case = scenario_case();
        let first = assembler
            .assemble_to_wire(&case, "key-abc", today())
            .expect("assemble");
        let second = assembler
            .assemble_to_wire(&case, "key-abc", today())
            .expect("assemble");
        assert_eq!(first, second);
    }

    #[test]
    fn scotland_part_with_unknown_venue_fails_fast() {
        let config = EngineConfig::default();
        let assembler = CorrespondenceAssembler::new(&config, &StubVenues);
        let mut case = scenario_case();
        case.managing_office = "Glasgow".to_string();
        case.hearings[0].venue_code = "Leeds".to_string();
        case.correspondence = Some(CorrespondenceSelection {
            england_wales: None,
            scotland: Some(SectionCode {
                topic: code("7"),
                part: Some(code("7_1")),
            }),
            hearing_number: Some("2".to_string()),
            labels: None,
        });

        let err = assembler
            .assemble(&case, "key", today())
            .expect_err("Scottish venue miss must abort assembly");
        assert!(matches!(
            err,
            crate::AssemblyError::UnrecognisedScottishVenue { .. }
        ));
    }

    #[test]
    fn labels_selection_routes_into_the_label_pipeline() {
        let config = EngineConfig::default();
        let assembler = CorrespondenceAssembler::new(&config, &StubVenues);
        let mut case = scenario_case();
        case.correspondence = Some(CorrespondenceSelection {
            england_wales: Some(SectionCode {
                topic: code("Labels"),
                part: Some(code("Labels")),
            }),
            scotland: None,
            hearing_number: None,
            labels: Some(LabelSelection {
                claimant: true,
                claimant_rep: false,
                respondents: true,
                respondent_reps: false,
                start_index: 1,
                copies: 2,
            }),
        });

        let document = assembler.assemble(&case, "key", today()).expect("assemble");
        assert_eq!(document.template_name, "TRB-COR-ENG-00110.docx");

        let pages = document
            .data
            .iter()
            .find_map(|(k, v)| match v {
                crate::document::FieldValue::Pages(pages) if k == "address_labels_page" => {
                    Some(pages)
                }
                _ => None,
            })
            .expect("label pages present");
        // claimant + 3 respondents, 2 copies each = 8 slots on one page of 14.
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].slots.len(), 8);
        assert_eq!(pages[0].slots[0].1.name, "Mr A J Rodriguez");
        assert_eq!(pages[0].slots[2].1.name, "Antonio Vazquez");

        // No party/hearing fields on a label document; the trailer remains.
        assert!(document.data.iter().all(|(k, _)| k != "claimant_full_name"));
        assert_eq!(field(&document, "case_no"), "6000001/2026");
    }

    #[test]
    fn empty_label_selection_still_emits_the_pages_key() {
        let config = EngineConfig::default();
        let assembler = CorrespondenceAssembler::new(&config, &StubVenues);
        let case = CaseData {
            case_number: "6000008/2026".to_string(),
            correspondence: Some(CorrespondenceSelection {
                england_wales: Some(SectionCode {
                    topic: code("Labels"),
                    part: Some(code("Labels")),
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        let wire = assembler
            .assemble_to_wire(&case, "key", today())
            .expect("assemble");
        assert!(wire.contains("\"address_labels_page\":[\n],\n"));
    }
}
