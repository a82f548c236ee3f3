use std::collections::HashMap;
use std::path::Path;

use crate::input::{InputError, load_records};
use crate::model::cell::Record;
use crate::model::row::canonical_code;
use crate::model::schema::ReferenceSchema;
use crate::model::table::ReferenceTable;

pub const NO_BASELINE_WARNING: &str = "We don't have any baseline data for this center";
pub const NOT_PARTICIPATING_WARNING: &str = "This center is not participating in IOTA";

/// Center code to display name.
#[derive(Debug, Clone, Default)]
pub struct CenterDirectory {
    names: HashMap<String, String>,
}

impl CenterDirectory {
    pub fn from_records(records: &[Record], schema: &ReferenceSchema) -> Self {
        let mut names = HashMap::new();
        for record in records {
            let code = record
                .get(&schema.directory_code)
                .and_then(|c| c.as_text());
            let name = record
                .get(&schema.directory_name)
                .and_then(|c| c.as_text());
            if let (Some(code), Some(name)) = (code, name) {
                names.insert(canonical_code(&code), name);
            }
        }
        Self { names }
    }

    pub fn load(path: &Path, schema: &ReferenceSchema) -> Result<Self, InputError> {
        let records = load_records(path)?;
        let directory = Self::from_records(&records, schema);
        tracing::info!(centers = directory.len(), "center directory loaded");
        Ok(directory)
    }

    /// Like [`CenterDirectory::load`], but a missing or unreadable file
    /// yields an empty directory.
    pub fn load_or_empty(path: &Path, schema: &ReferenceSchema) -> Self {
        match Self::load(path, schema) {
            Ok(d) => d,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "center directory unavailable");
                Self::default()
            }
        }
    }

    pub fn name_of(&self, code: &str) -> Option<&str> {
        self.names.get(&canonical_code(code)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// The center's last reported performance-year values, used to prefill a
/// scoring request.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Prefill {
    pub num_transplants: Option<f64>,
    pub offer_accept_rate: Option<f64>,
    /// On the 0-100 scale, rounded to one decimal.
    pub graft_survival: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CenterLookup {
    pub code: String,
    pub name: Option<String>,
    pub exists: bool,
    pub participating: bool,
    pub prefill: Option<Prefill>,
    pub warning: Option<&'static str>,
}

/// Warnings are only raised once the code has its full length.
pub fn lookup_center(
    table: &ReferenceTable,
    directory: &CenterDirectory,
    code: &str,
    code_len: usize,
) -> CenterLookup {
    let canonical = canonical_code(code);
    let row = table.find(&canonical);
    let exists = row.is_some();
    let participating = row.is_some_and(|r| r.iota);

    let warning = if canonical.chars().count() != code_len {
        None
    } else if !exists {
        Some(NO_BASELINE_WARNING)
    } else if !participating {
        Some(NOT_PARTICIPATING_WARNING)
    } else {
        None
    };

    let prefill = row.map(|r| Prefill {
        num_transplants: r.performance_transplants,
        offer_accept_rate: r.acceptance_rate,
        graft_survival: r.graft_survival_pct().map(|g| (g * 10.0).round() / 10.0),
    });

    CenterLookup {
        name: directory.name_of(&canonical).map(str::to_string),
        code: canonical,
        exists,
        participating,
        prefill,
        warning,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/centers.rs"]
mod tests;
