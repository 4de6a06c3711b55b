//! # Correspondence Core
//!
//! Correspondence content assembly for the tribunal case-management
//! platform.
//!
//! This crate turns one case (claimant, respondents, representatives,
//! hearings) plus one correspondence selection code into the ordered,
//! byte-stable data map an external document-generation engine merges into a
//! physical template:
//! - classification-code resolution against jurisdiction-partitioned tables
//! - party display formatting with representative override
//! - multi-respondent aggregation
//! - hearing date/time/venue/duration resolution
//! - address-label pagination
//! - ordered serialization of the wire envelope
//!
//! **No API concerns**: persistence, document merging, and delivery belong
//! to the surrounding platform; the only collaborator consumed here is the
//! venue address directory behind [`hearing::VenueAddressReader`].

pub mod assembly;
pub mod case;
pub mod classification;
pub mod config;
pub mod constants;
pub mod document;
mod error;
pub mod flags;
pub mod hearing;
pub mod labels;
pub mod office;
pub mod party;

pub use assembly::CorrespondenceAssembler;
pub use case::{case_from_json, CaseData, CorrespondenceSelection};
pub use config::EngineConfig;
pub use document::{AssembledDocument, OrderedDocumentBuilder};
pub use error::{AssemblyError, AssemblyResult};
pub use hearing::{VenueAddressReader, VenueLookupError};
