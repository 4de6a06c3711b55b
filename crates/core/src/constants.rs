//! Constants used throughout the correspondence core crate.
//!
//! This module contains the fixed filenames, field names, and placeholder
//! tokens shared by the assembly pipeline so each is defined in exactly one
//! place.

/// Output filename carried on every assembled document envelope.
pub const OUTPUT_FILENAME: &str = "document.docx";

/// Address-label template for England & Wales correspondence.
pub const ADDRESS_LABELS_TEMPLATE_EW: &str = "TRB-COR-ENG-00110.docx";

/// Address-label template for Scotland correspondence.
pub const ADDRESS_LABELS_TEMPLATE_SC: &str = "TRB-COR-SCO-00110.docx";

/// Part code that routes a selection into the address-label pipeline.
pub const ADDRESS_LABELS_PART: &str = "Labels";

/// Data-map key holding the nested address-label pages.
pub const ADDRESS_LABELS_PAGE_KEY: &str = "address_labels_page";

/// Country suffix appended to aggregated respondent addresses.
pub const COUNTRY_SUFFIX: &str = "United Kingdom";

/// England & Wales crest image substituted by the merge engine.
pub const IMAGE_EW: &str = "enhmcts.png";

/// Scotland crest image substituted by the merge engine.
pub const IMAGE_SC: &str = "schmcts.png";

/// Default number of label slots per address-label page.
pub const DEFAULT_LABEL_PAGE_CAPACITY: usize = 14;

/// Upper bound on label page capacity; slot numbers are rendered two-digit.
pub const MAX_LABEL_PAGE_CAPACITY: usize = 99;

/// Human-readable date format used for hearing dates and the date stamp.
pub const DISPLAY_DATE_FORMAT: &str = "%-d %B %Y";

/// Display format for hearing start times.
pub const DISPLAY_TIME_FORMAT: &str = "%H:%M";
