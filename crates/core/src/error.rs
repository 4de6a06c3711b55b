//! Error types for the correspondence assembly engine.
//!
//! Two policies coexist and are both intentional: absent optional data
//! (missing hearing, missing representative, unmatched classification code)
//! is never an error and falls back to empty-string defaults, while
//! internally-detected data-integrity violations fail fast with the
//! offending value and the case context attached.

use crate::hearing::VenueLookupError;

#[derive(Debug, thiserror::Error)]
pub enum AssemblyError {
    /// A Scotland-tagged hearing referenced a venue the directory does not
    /// know. Unlike an absent hearing this is present-but-invalid data, so
    /// assembly is abandoned rather than defaulted.
    #[error("unrecognised Scottish venue code '{venue_code}' on case {case_number}")]
    UnrecognisedScottishVenue {
        venue_code: String,
        case_number: String,
    },

    /// The venue directory collaborator itself failed.
    #[error("venue directory lookup failed: {0}")]
    VenueLookup(#[from] VenueLookupError),

    /// Both jurisdiction tags were populated on one selection. The caller
    /// contract is exactly one; seeing both means the payload is corrupt.
    #[error("both jurisdiction sections populated on case {case_number}")]
    AmbiguousJurisdiction { case_number: String },

    /// Configuration or caller input outside the supported range.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A case payload that does not match the wire model, with the failing
    /// field path when one could be determined.
    #[error("case payload schema mismatch at {path}: {message}")]
    CaseParse { path: String, message: String },
}

pub type AssemblyResult<T> = std::result::Result<T, AssemblyError>;
