//! Ordered document assembly and wire rendering.
//!
//! Downstream consumers compare the serialized envelope textually, so output
//! order and punctuation are part of the contract: fields serialize in
//! insertion order, every data line carries the trailing comma-and-newline
//! idiom, and scalar values are rendered as JSON strings even when they hold
//! numbers or booleans. An unordered map cannot honour that contract; the
//! builder keeps an append-only pair sequence instead.

use crate::constants::OUTPUT_FILENAME;
use crate::labels::LabelPage;

/// One data-map value: a scalar string or the nested label-page list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Scalar(String),
    Pages(Vec<LabelPage>),
}

/// Append-only, order-preserving field accumulator.
#[derive(Debug, Default)]
pub struct OrderedDocumentBuilder {
    fields: Vec<(String, FieldValue)>,
}

impl OrderedDocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a scalar field. Insertion order is serialized order.
    pub fn field(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.fields.push((key.into(), FieldValue::Scalar(value.into())));
        self
    }

    /// Append the nested label-page list.
    pub fn pages(&mut self, key: impl Into<String>, pages: Vec<LabelPage>) -> &mut Self {
        self.fields.push((key.into(), FieldValue::Pages(pages)));
        self
    }

    /// Finish the document with its envelope identity.
    pub fn build(self, access_key: &str, template_name: &str) -> AssembledDocument {
        AssembledDocument {
            access_key: access_key.to_string(),
            template_name: template_name.to_string(),
            output_name: OUTPUT_FILENAME.to_string(),
            data: self.fields,
        }
    }
}

/// A fully assembled document ready for the merge engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledDocument {
    pub access_key: String,
    pub template_name: String,
    pub output_name: String,
    pub data: Vec<(String, FieldValue)>,
}

/// JSON string form of a scalar value (quotes and escapes included).
fn json_string(value: &str) -> String {
    serde_json::to_string(value).expect("string serialization is infallible")
}

impl AssembledDocument {
    /// Render the exact wire envelope.
    ///
    /// The output is byte-stable for identical inputs: key order is the
    /// builder's insertion order and every data line ends with a comma and
    /// newline, including the last (the idiom the merge engine and the
    /// golden-file corpus expect).
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("{\n");
        out.push_str("\"accessKey\":");
        out.push_str(&json_string(&self.access_key));
        out.push_str(",\n");
        out.push_str("\"templateName\":");
        out.push_str(&json_string(&self.template_name));
        out.push_str(",\n");
        out.push_str("\"outputName\":");
        out.push_str(&json_string(&self.output_name));
        out.push_str(",\n");
        out.push_str("\"data\":{\n");
        for (key, value) in &self.data {
            match value {
                FieldValue::Scalar(scalar) => {
                    out.push('"');
                    out.push_str(key);
                    out.push_str("\":");
                    out.push_str(&json_string(scalar));
                    out.push_str(",\n");
                }
                FieldValue::Pages(pages) => {
                    out.push('"');
                    out.push_str(key);
                    out.push_str("\":[\n");
                    for page in pages {
                        out.push_str("{\n");
                        for (slot_key, slot_value) in page.fields() {
                            out.push('"');
                            out.push_str(&slot_key);
                            out.push_str("\":");
                            out.push_str(&json_string(&slot_value));
                            out.push_str(",\n");
                        }
                        out.push_str("},\n");
                    }
                    out.push_str("],\n");
                }
            }
        }
        out.push_str("}\n");
        out.push_str("}\n");
        out
    }
}
