//! Engine configuration.
//!
//! This module defines configuration that should be resolved once at process
//! startup and then passed into the assembler. The intent is to avoid
//! reading process-wide environment variables during request handling, which
//! can lead to inconsistent behaviour in multi-threaded runtimes and test
//! harnesses.

use crate::constants::{DEFAULT_LABEL_PAGE_CAPACITY, MAX_LABEL_PAGE_CAPACITY};
use crate::{AssemblyError, AssemblyResult};

/// Engine configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    label_page_capacity: usize,
}

impl EngineConfig {
    /// Create a new `EngineConfig`.
    ///
    /// # Errors
    ///
    /// Returns `AssemblyError::InvalidInput` if `label_page_capacity` is
    /// zero or exceeds the two-digit slot-numbering bound.
    pub fn new(label_page_capacity: usize) -> AssemblyResult<Self> {
        if label_page_capacity == 0 || label_page_capacity > MAX_LABEL_PAGE_CAPACITY {
            return Err(AssemblyError::InvalidInput(format!(
                "label page capacity must be between 1 and {}",
                MAX_LABEL_PAGE_CAPACITY
            )));
        }

        Ok(Self {
            label_page_capacity,
        })
    }

    /// Number of label slots per address-label page.
    pub fn label_page_capacity(&self) -> usize {
        self.label_page_capacity
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            label_page_capacity: DEFAULT_LABEL_PAGE_CAPACITY,
        }
    }
}
