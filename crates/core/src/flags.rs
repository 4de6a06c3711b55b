//! Crest image placeholder fields.
//!
//! These fields exist purely to drive merge-engine image substitution and
//! carry no business data. The home-nation key is derived from the resolved
//! part code; the other-nation key is fixed and always present.

use corres_types::Jurisdiction;

use crate::constants::{IMAGE_EW, IMAGE_SC};

/// One image placeholder field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFlag {
    pub key: String,
    pub value: String,
}

fn placeholder(image: &str) -> String {
    format!("[userImage:{image}]")
}

/// Key-safe form of a part code: dots map to underscores.
fn key_token(part: &str) -> String {
    part.replace('.', "_")
}

/// Compose the image placeholder fields for a resolved part code.
///
/// The home-nation flag is keyed by the part code and emitted only when a
/// part code resolved; the fixed other-nation flag is always present
/// regardless of jurisdiction, matching the letterhead footer carried on
/// every template.
pub fn compose(jurisdiction: Jurisdiction, part: Option<&str>) -> Vec<ImageFlag> {
    let mut flags = Vec::with_capacity(2);

    if let Some(part) = part {
        let token = key_token(part);
        let (key, image) = match jurisdiction {
            Jurisdiction::EnglandWales => (format!("i{token}_enhmcts"), IMAGE_EW),
            Jurisdiction::Scotland => (format!("iScot_{token}_schmcts"), IMAGE_SC),
        };
        flags.push(ImageFlag {
            key,
            value: placeholder(image),
        });
    }

    flags.push(ImageFlag {
        key: "iScot_schmcts".to_string(),
        value: placeholder(IMAGE_SC),
    });

    flags
}
