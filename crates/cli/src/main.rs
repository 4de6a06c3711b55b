use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use corres_core::hearing::{VenueAddressReader, VenueLookupError};
use corres_core::office::OFFICE_TABLE;
use corres_core::{case_from_json, classification, CorrespondenceAssembler, EngineConfig};
use corres_types::{CorrespondenceCode, Jurisdiction};

#[derive(Parser)]
#[command(name = "corres")]
#[command(about = "Correspondence content assembly CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble a correspondence document from a case file
    Assemble {
        /// Path to the case JSON payload
        case: PathBuf,
        /// Access key stamped on the envelope
        #[arg(long, default_value = "local-dev-key")]
        access_key: String,
        /// Assembly date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Label slots per address-label page
        #[arg(long)]
        label_page_capacity: Option<usize>,
    },
    /// Resolve a classification code to its template and flag field
    Resolve {
        /// Jurisdiction (englandWales or scotland)
        jurisdiction: Jurisdiction,
        /// Top-level correspondence code
        topic: CorrespondenceCode,
        /// Part code (optional)
        #[arg(long)]
        part: Option<CorrespondenceCode>,
    },
    /// List the static tribunal office address table
    Offices,
}

/// Offline venue directory backed by the static office table.
///
/// Real deployments consult the platform's venue address service; for local
/// assembly each office doubles as its own hearing venue.
struct StaticVenueDirectory;

impl VenueAddressReader for StaticVenueDirectory {
    fn venue_address(
        &self,
        _jurisdiction: Jurisdiction,
        _managing_office: &str,
        venue_code: &str,
    ) -> Result<Option<String>, VenueLookupError> {
        Ok(OFFICE_TABLE.iter().find(|o| o.office == venue_code).map(|o| {
            [o.address_line1, o.address_line2, o.address_line3, o.town, o.postcode]
                .into_iter()
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(", ")
        }))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Assemble {
            case,
            access_key,
            today,
            label_page_capacity,
        }) => {
            let json = std::fs::read_to_string(&case)?;
            let case_data = case_from_json(&json)?;
            let config = match label_page_capacity {
                Some(capacity) => EngineConfig::new(capacity)?,
                None => EngineConfig::default(),
            };
            let assembler = CorrespondenceAssembler::new(&config, &StaticVenueDirectory);
            let today = today.unwrap_or_else(|| Utc::now().date_naive());
            match assembler.assemble_to_wire(&case_data, &access_key, today) {
                Ok(wire) => print!("{wire}"),
                Err(e) => eprintln!("Error assembling correspondence: {e}"),
            }
        }
        Some(Commands::Resolve {
            jurisdiction,
            topic,
            part,
        }) => {
            let resolved =
                classification::resolve(jurisdiction, topic.as_str(), part.as_ref().map(|p| p.as_str()));
            println!("Template: {}", resolved.template_name);
            match resolved.flag_field {
                Some(flag) => println!("Flag field: {flag}"),
                None => println!("Flag field: (none)"),
            }
        }
        Some(Commands::Offices) => {
            for office in OFFICE_TABLE {
                println!(
                    "{}: {}, {} {} (tel {})",
                    office.office, office.address_line1, office.town, office.postcode,
                    office.telephone
                );
            }
        }
        None => {
            println!("Use 'corres --help' for commands");
        }
    }

    Ok(())
}
