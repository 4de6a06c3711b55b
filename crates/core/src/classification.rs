//! Correspondence classification tables and template resolution.
//!
//! Two independent, jurisdiction-partitioned tables map a part code to the
//! physical template filename and to the flag field marking the selected
//! document section. The tables are declarative `const` data — read-only,
//! process-wide, safe for unlimited concurrent readers — and the resolver
//! itself stays small.
//!
//! Absence of a matching entry is not an error: a present topic with an
//! unmatched part falls back to the custom-letter escape hatch
//! (`{topic}.docx` with a best-effort flag field).

use corres_types::Jurisdiction;

use crate::constants::{
    ADDRESS_LABELS_PART, ADDRESS_LABELS_TEMPLATE_EW, ADDRESS_LABELS_TEMPLATE_SC,
};

/// One static classification row: part code to template and flag field.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationEntry {
    pub part: &'static str,
    pub template: &'static str,
    pub flag: &'static str,
}

const fn entry(
    part: &'static str,
    template: &'static str,
    flag: &'static str,
) -> ClassificationEntry {
    ClassificationEntry {
        part,
        template,
        flag,
    }
}

/// England & Wales classification table.
///
/// Part codes follow the printed correspondence menu: `{topic}.{section}`.
pub const ENGLAND_WALES_TABLE: &[ClassificationEntry] = &[
    // Topic 1 — claim acknowledgment
    entry("1.1", "TRB-COR-ENG-00001.docx", "t1_1"),
    entry("1.2", "TRB-COR-ENG-00002.docx", "t1_2"),
    entry("1.3", "TRB-COR-ENG-00003.docx", "t1_3"),
    entry("1.4", "TRB-COR-ENG-00004.docx", "t1_4"),
    // Topic 2 — claim rejection and reconsideration
    entry("2.1", "TRB-COR-ENG-00005.docx", "t2_1"),
    entry("2.2", "TRB-COR-ENG-00006.docx", "t2_2"),
    entry("2.2A", "TRB-COR-ENG-00007.docx", "t2_2A"),
    entry("2.3", "TRB-COR-ENG-00008.docx", "t2_3"),
    // Topic 3 — response acknowledgment
    entry("3.1", "TRB-COR-ENG-00009.docx", "t3_1"),
    entry("3.2", "TRB-COR-ENG-00010.docx", "t3_2"),
    entry("3.3", "TRB-COR-ENG-00011.docx", "t3_3"),
    // Topic 4 — response rejection and default judgment warning
    entry("4.1", "TRB-COR-ENG-00012.docx", "t4_1"),
    entry("4.2", "TRB-COR-ENG-00013.docx", "t4_2"),
    entry("4.3", "TRB-COR-ENG-00014.docx", "t4_3"),
    entry("4.4", "TRB-COR-ENG-00015.docx", "t4_4"),
    // Topic 5 — case management orders
    entry("5.1", "TRB-COR-ENG-00016.docx", "t5_1"),
    entry("5.2", "TRB-COR-ENG-00017.docx", "t5_2"),
    entry("5.3", "TRB-COR-ENG-00018.docx", "t5_3"),
    entry("5.4", "TRB-COR-ENG-00019.docx", "t5_4"),
    // Topic 6 — preliminary hearing notices
    entry("6.1", "TRB-COR-ENG-00020.docx", "t6_1"),
    entry("6.2", "TRB-COR-ENG-00021.docx", "t6_2"),
    entry("6.3", "TRB-COR-ENG-00022.docx", "t6_3"),
    // Topic 7 — final hearing notices
    entry("7.1", "TRB-COR-ENG-00023.docx", "t7_1"),
    entry("7.2", "TRB-COR-ENG-00024.docx", "t7_2"),
    entry("7.3", "TRB-COR-ENG-00025.docx", "t7_3"),
    entry("7.4", "TRB-COR-ENG-00026.docx", "t7_4"),
    // Topic 8 — postponements and adjournments
    entry("8.1", "TRB-COR-ENG-00027.docx", "t8_1"),
    entry("8.2", "TRB-COR-ENG-00028.docx", "t8_2"),
    entry("8.3", "TRB-COR-ENG-00029.docx", "t8_3"),
    // Topic 9 — witness orders and disclosure
    entry("9.1", "TRB-COR-ENG-00030.docx", "t9_1"),
    entry("9.2", "TRB-COR-ENG-00031.docx", "t9_2"),
    // Topic 10 — judgments
    entry("10.1", "TRB-COR-ENG-00032.docx", "t10_1"),
    entry("10.2", "TRB-COR-ENG-00033.docx", "t10_2"),
    entry("10.3", "TRB-COR-ENG-00034.docx", "t10_3"),
    // Topic 11 — reconsideration of judgment
    entry("11.1", "TRB-COR-ENG-00035.docx", "t11_1"),
    entry("11.2", "TRB-COR-ENG-00036.docx", "t11_2"),
    // Topic 12 — costs and deposits
    entry("12.1", "TRB-COR-ENG-00037.docx", "t12_1"),
    entry("12.2", "TRB-COR-ENG-00038.docx", "t12_2"),
    entry("12.3", "TRB-COR-ENG-00039.docx", "t12_3"),
    // Topic 13 — withdrawals and dismissals
    entry("13.1", "TRB-COR-ENG-00040.docx", "t13_1"),
    entry("13.2", "TRB-COR-ENG-00041.docx", "t13_2"),
    entry("13.3", "TRB-COR-ENG-00042.docx", "t13_3"),
    // Address labels
    entry(ADDRESS_LABELS_PART, ADDRESS_LABELS_TEMPLATE_EW, ""),
];

/// Scotland classification table.
///
/// The Scottish correspondence menu numbers its parts with underscores and
/// carries a handful of standalone `Scot_*` letters with no England & Wales
/// counterpart. The same part token under the two jurisdictions may map to
/// unrelated templates.
pub const SCOTLAND_TABLE: &[ClassificationEntry] = &[
    // Topic 1 — claim acknowledgment
    entry("1_1", "TRB-COR-SCO-00001.docx", "t_1_1"),
    entry("1_2", "TRB-COR-SCO-00002.docx", "t_1_2"),
    entry("1_3", "TRB-COR-SCO-00003.docx", "t_1_3"),
    // Topic 2 — claim rejection and reconsideration
    entry("2_1", "TRB-COR-SCO-00004.docx", "t_2_1"),
    entry("2_2", "TRB-COR-SCO-00005.docx", "t_2_2"),
    // Topic 3 — response acknowledgment
    entry("3_1", "TRB-COR-SCO-00006.docx", "t_3_1"),
    entry("3_2", "TRB-COR-SCO-00007.docx", "t_3_2"),
    // Topic 4 — response rejection
    entry("4_1", "TRB-COR-SCO-00008.docx", "t_4_1"),
    entry("4_2", "TRB-COR-SCO-00009.docx", "t_4_2"),
    // Topic 5 — case management orders
    entry("5_1", "TRB-COR-SCO-00010.docx", "t_5_1"),
    entry("5_2", "TRB-COR-SCO-00011.docx", "t_5_2"),
    entry("5_3", "TRB-COR-SCO-00012.docx", "t_5_3"),
    // Topic 6 — preliminary hearing notices
    entry("6_1", "TRB-COR-SCO-00013.docx", "t_6_1"),
    entry("6_2", "TRB-COR-SCO-00014.docx", "t_6_2"),
    // Topic 7 — final hearing notices
    entry("7_1", "TRB-COR-SCO-00015.docx", "t_7_1"),
    entry("7_2", "TRB-COR-SCO-00016.docx", "t_7_2"),
    entry("7_3", "TRB-COR-SCO-00017.docx", "t_7_3"),
    // Topic 8 — postponements
    entry("8_1", "TRB-COR-SCO-00018.docx", "t_8_1"),
    entry("8_2", "TRB-COR-SCO-00019.docx", "t_8_2"),
    // Topic 9 — witness orders
    entry("9_1", "TRB-COR-SCO-00020.docx", "t_9_1"),
    // Topic 10 — judgments
    entry("10_1", "TRB-COR-SCO-00021.docx", "t_10_1"),
    entry("10_2", "TRB-COR-SCO-00022.docx", "t_10_2"),
    // Topic 11 — reconsideration of judgment
    entry("11_1", "TRB-COR-SCO-00023.docx", "t_11_1"),
    // Topic 12 — expenses and deposits
    entry("12_1", "TRB-COR-SCO-00024.docx", "t_12_1"),
    entry("12_2", "TRB-COR-SCO-00025.docx", "t_12_2"),
    // Topic 13 — withdrawals and dismissals
    entry("13_1", "TRB-COR-SCO-00026.docx", "t_13_1"),
    entry("13_2", "TRB-COR-SCO-00027.docx", "t_13_2"),
    // Standalone Scottish letters
    entry("Scot_5", "TRB-COR-SCO-00031.docx", "t_Scot_5"),
    entry("Scot_24", "TRB-COR-SCO-00032.docx", "t_Scot_24"),
    entry("Scot_32", "TRB-COR-SCO-00033.docx", "t_Scot_32"),
    entry("Scot_40", "TRB-COR-SCO-00034.docx", "t_Scot_40"),
    // Address labels
    entry(ADDRESS_LABELS_PART, ADDRESS_LABELS_TEMPLATE_SC, ""),
];

/// A resolved classification: the physical template and the flag field
/// marking the active document section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateResolution {
    pub template_name: String,
    pub flag_field: Option<String>,
}

impl TemplateResolution {
    /// Whether this resolution selected the address-label template.
    pub fn is_address_labels(&self) -> bool {
        self.template_name == ADDRESS_LABELS_TEMPLATE_EW
            || self.template_name == ADDRESS_LABELS_TEMPLATE_SC
    }
}

fn table_for(jurisdiction: Jurisdiction) -> &'static [ClassificationEntry] {
    match jurisdiction {
        Jurisdiction::EnglandWales => ENGLAND_WALES_TABLE,
        Jurisdiction::Scotland => SCOTLAND_TABLE,
    }
}

/// Resolve a classification code to a template filename and flag field.
///
/// An empty topic means no correspondence selection was made at all: the
/// template name degenerates to `.docx` (empty stem) and no flag field is
/// produced. A present topic with no table match falls back to the
/// custom-letter escape hatch: `{topic}.docx`, flag `t{part}` under
/// England & Wales or `t_{part}` under Scotland when a part code exists.
pub fn resolve(jurisdiction: Jurisdiction, topic: &str, part: Option<&str>) -> TemplateResolution {
    if topic.is_empty() {
        return TemplateResolution {
            template_name: ".docx".to_string(),
            flag_field: None,
        };
    }

    if let Some(part) = part {
        if let Some(hit) = table_for(jurisdiction)
            .iter()
            .find(|candidate| candidate.part == part)
        {
            return TemplateResolution {
                template_name: hit.template.to_string(),
                flag_field: (!hit.flag.is_empty()).then(|| hit.flag.to_string()),
            };
        }
    }

    tracing::warn!(
        jurisdiction = jurisdiction.as_str(),
        topic,
        part,
        "no classification entry matched, using custom letter fallback"
    );

    let flag_field = part.map(|part| match jurisdiction {
        Jurisdiction::EnglandWales => format!("t{part}"),
        Jurisdiction::Scotland => format!("t_{part}"),
    });

    TemplateResolution {
        template_name: format!("{topic}.docx"),
        flag_field,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_england_wales_part() {
        let resolved = resolve(Jurisdiction::EnglandWales, "4", Some("4.2"));
        assert_eq!(resolved.template_name, "TRB-COR-ENG-00013.docx");
        assert_eq!(resolved.flag_field.as_deref(), Some("t4_2"));
    }

    #[test]
    fn resolves_known_scotland_part() {
        let resolved = resolve(Jurisdiction::Scotland, "7", Some("7_1"));
        assert_eq!(resolved.template_name, "TRB-COR-SCO-00015.docx");
        assert_eq!(resolved.flag_field.as_deref(), Some("t_7_1"));
    }

    #[test]
    fn same_token_maps_independently_per_jurisdiction() {
        let ew = resolve(Jurisdiction::EnglandWales, "Labels", Some("Scot_32"));
        let sc = resolve(Jurisdiction::Scotland, "Labels", Some("Scot_32"));
        // No England & Wales entry exists for the Scottish token.
        assert_eq!(ew.template_name, "Labels.docx");
        assert_eq!(sc.template_name, "TRB-COR-SCO-00033.docx");
    }

    #[test]
    fn empty_topic_yields_empty_stem_and_no_flag() {
        let resolved = resolve(Jurisdiction::EnglandWales, "", None);
        assert_eq!(resolved.template_name, ".docx");
        assert_eq!(resolved.flag_field, None);
    }

    #[test]
    fn unmatched_part_falls_back_to_custom_letter() {
        let ew = resolve(Jurisdiction::EnglandWales, "4", Some("4.99"));
        assert_eq!(ew.template_name, "4.docx");
        assert_eq!(ew.flag_field.as_deref(), Some("t4.99"));

        let sc = resolve(Jurisdiction::Scotland, "4", Some("4_99"));
        assert_eq!(sc.template_name, "4.docx");
        assert_eq!(sc.flag_field.as_deref(), Some("t_4_99"));
    }

    #[test]
    fn topic_without_part_falls_back_flagless() {
        let resolved = resolve(Jurisdiction::EnglandWales, "14", None);
        assert_eq!(resolved.template_name, "14.docx");
        assert_eq!(resolved.flag_field, None);
    }

    #[test]
    fn labels_part_routes_to_label_template() {
        let ew = resolve(Jurisdiction::EnglandWales, "Labels", Some("Labels"));
        assert!(ew.is_address_labels());
        assert_eq!(ew.flag_field, None);

        let sc = resolve(Jurisdiction::Scotland, "Labels", Some("Labels"));
        assert!(sc.is_address_labels());
        assert_eq!(sc.template_name, "TRB-COR-SCO-00110.docx");
    }

    #[test]
    fn tables_have_no_duplicate_part_codes() {
        for table in [ENGLAND_WALES_TABLE, SCOTLAND_TABLE] {
            let mut seen = std::collections::HashSet::new();
            for row in table {
                assert!(seen.insert(row.part), "duplicate part code {}", row.part);
            }
        }
    }
}
