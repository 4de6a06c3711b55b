//! Tribunal office address table.
//!
//! The court/tribunal address block printed on letterheads is resolved from
//! a static per-office table keyed by the case's managing office. The table
//! is `const` data, initialized at compile time and shared read-only across
//! requests. An `AllocatedOfficeOverride` on the request replaces individual
//! fields in full; fields are never merged at sub-field granularity.

use crate::case::AllocatedOfficeOverride;

/// One tribunal office's letterhead details.
#[derive(Debug, Clone, Copy)]
pub struct OfficeAddress {
    pub office: &'static str,
    pub address_line1: &'static str,
    pub address_line2: &'static str,
    pub address_line3: &'static str,
    pub town: &'static str,
    pub county: &'static str,
    pub postcode: &'static str,
    pub telephone: &'static str,
    pub fax: &'static str,
    pub dx: &'static str,
    pub email: &'static str,
}

/// Static office table covering both jurisdictions' tribunal offices.
pub const OFFICE_TABLE: &[OfficeAddress] = &[
    OfficeAddress {
        office: "Manchester",
        address_line1: "Alexandra House",
        address_line2: "14-22 The Parsonage",
        address_line3: "",
        town: "Manchester",
        county: "",
        postcode: "M3 2JA",
        telephone: "0161 833 6100",
        fax: "0870 739 4433",
        dx: "DX 743570 Manchester 66",
        email: "manchesteret@justice.gov.uk",
    },
    OfficeAddress {
        office: "Leeds",
        address_line1: "4th Floor, City Exchange",
        address_line2: "11 Albion Street",
        address_line3: "",
        town: "Leeds",
        county: "West Yorkshire",
        postcode: "LS1 5ES",
        telephone: "0113 245 9741",
        fax: "0870 739 4410",
        dx: "DX 742940 Leeds 75",
        email: "leedset@justice.gov.uk",
    },
    OfficeAddress {
        office: "London Central",
        address_line1: "Victory House",
        address_line2: "30-34 Kingsway",
        address_line3: "",
        town: "London",
        county: "",
        postcode: "WC2B 6EX",
        telephone: "020 7273 8603",
        fax: "0870 739 4420",
        dx: "DX 141420 Bloomsbury 7",
        email: "londoncentralet@justice.gov.uk",
    },
    OfficeAddress {
        office: "Bristol",
        address_line1: "Bristol Civil and Family Justice Centre",
        address_line2: "2 Redcliff Street",
        address_line3: "",
        town: "Bristol",
        county: "",
        postcode: "BS1 6GR",
        telephone: "0117 929 8261",
        fax: "0870 739 4009",
        dx: "DX 95903 Bristol 3",
        email: "bristolet@justice.gov.uk",
    },
    OfficeAddress {
        office: "Watford",
        address_line1: "3rd Floor, Radius House",
        address_line2: "51 Clarendon Road",
        address_line3: "",
        town: "Watford",
        county: "Hertfordshire",
        postcode: "WD17 1HP",
        telephone: "01923 281 750",
        fax: "01923 281 781",
        dx: "DX 155650 Watford 3",
        email: "watfordet@justice.gov.uk",
    },
    OfficeAddress {
        office: "Newcastle",
        address_line1: "Kings Court",
        address_line2: "Earl Grey Way",
        address_line3: "Royal Quays",
        town: "North Shields",
        county: "Tyne and Wear",
        postcode: "NE29 6AR",
        telephone: "0191 260 6900",
        fax: "0870 739 4206",
        dx: "DX 742770 North Shields 2",
        email: "newcastleet@justice.gov.uk",
    },
    OfficeAddress {
        office: "Cardiff",
        address_line1: "Cardiff Magistrates Court",
        address_line2: "Fitzalan Place",
        address_line3: "",
        town: "Cardiff",
        county: "",
        postcode: "CF24 0RZ",
        telephone: "029 2067 8100",
        fax: "0870 761 7635",
        dx: "DX 99500 Cardiff 6",
        email: "cardiffet@justice.gov.uk",
    },
    OfficeAddress {
        office: "Glasgow",
        address_line1: "Glasgow Tribunals Centre",
        address_line2: "20 York Street",
        address_line3: "",
        town: "Glasgow",
        county: "",
        postcode: "G2 8GT",
        telephone: "0141 204 0730",
        fax: "0870 761 7766",
        dx: "DX 580003 Glasgow 19",
        email: "glasgowet@justice.gov.uk",
    },
    OfficeAddress {
        office: "Edinburgh",
        address_line1: "54-56 Melville Street",
        address_line2: "",
        address_line3: "",
        town: "Edinburgh",
        county: "",
        postcode: "EH3 7HF",
        telephone: "0131 226 5584",
        fax: "0870 761 7725",
        dx: "DX ED147 Edinburgh",
        email: "edinburghet@justice.gov.uk",
    },
    OfficeAddress {
        office: "Aberdeen",
        address_line1: "Ground Floor, AB1",
        address_line2: "48 Huntly Street",
        address_line3: "",
        town: "Aberdeen",
        county: "",
        postcode: "AB10 1SH",
        telephone: "01224 593 137",
        fax: "0870 761 7766",
        dx: "DX AB77 Aberdeen",
        email: "aberdeenet@justice.gov.uk",
    },
    OfficeAddress {
        office: "Dundee",
        address_line1: "Endeavour House",
        address_line2: "1 Greenmarket",
        address_line3: "",
        town: "Dundee",
        county: "",
        postcode: "DD1 4QB",
        telephone: "01382 221 578",
        fax: "0870 761 7766",
        dx: "DX DD51 Dundee",
        email: "dundeeet@justice.gov.uk",
    },
];

/// The court address block as emitted into the data map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourtBlock {
    pub address_line1: String,
    pub address_line2: String,
    pub address_line3: String,
    pub town: String,
    pub county: String,
    pub postcode: String,
    pub telephone: String,
    pub fax: String,
    pub dx: String,
    pub email: String,
}

/// Look up an office's static letterhead details by managing office name.
pub fn office_address(managing_office: &str) -> Option<&'static OfficeAddress> {
    OFFICE_TABLE.iter().find(|o| o.office == managing_office)
}

/// Resolve the court block for a managing office, applying any allocated
/// office override on the request.
///
/// An unknown managing office is tolerated absence: every field comes back
/// empty. Each populated override field replaces the corresponding static
/// one in full.
pub fn resolve_court_block(
    managing_office: &str,
    override_fields: Option<&AllocatedOfficeOverride>,
) -> CourtBlock {
    let mut block = match office_address(managing_office) {
        Some(office) => CourtBlock {
            address_line1: office.address_line1.to_string(),
            address_line2: office.address_line2.to_string(),
            address_line3: office.address_line3.to_string(),
            town: office.town.to_string(),
            county: office.county.to_string(),
            postcode: office.postcode.to_string(),
            telephone: office.telephone.to_string(),
            fax: office.fax.to_string(),
            dx: office.dx.to_string(),
            email: office.email.to_string(),
        },
        None => {
            if !managing_office.is_empty() {
                tracing::warn!(managing_office, "unknown managing office, court block empty");
            }
            CourtBlock::default()
        }
    };

    if let Some(allocated) = override_fields {
        let apply = |target: &mut String, replacement: &Option<String>| {
            if let Some(value) = replacement {
                *target = value.clone();
            }
        };
        apply(&mut block.address_line1, &allocated.address_line1);
        apply(&mut block.address_line2, &allocated.address_line2);
        apply(&mut block.address_line3, &allocated.address_line3);
        apply(&mut block.town, &allocated.town);
        apply(&mut block.county, &allocated.county);
        apply(&mut block.postcode, &allocated.postcode);
        apply(&mut block.telephone, &allocated.telephone);
        apply(&mut block.fax, &allocated.fax);
        apply(&mut block.dx, &allocated.dx);
        apply(&mut block.email, &allocated.email);
    }

    block
}
