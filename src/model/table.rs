use std::collections::HashMap;

use crate::model::cell::Record;
use crate::model::row::{CenterRow, canonical_code};
use crate::model::schema::ReferenceSchema;

/// Read-only national reference table. Row order is preserved; the first
/// row carrying a given code wins lookups.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    rows: Vec<CenterRow>,
    by_code: HashMap<String, usize>,
}

impl ReferenceTable {
    pub fn new(rows: Vec<CenterRow>) -> Self {
        let mut by_code = HashMap::with_capacity(rows.len());
        for (idx, row) in rows.iter().enumerate() {
            if row.code.is_empty() {
                continue;
            }
            by_code.entry(row.code.clone()).or_insert(idx);
        }
        Self { rows, by_code }
    }

    pub fn from_records(records: &[Record], schema: &ReferenceSchema) -> Self {
        let rows = records
            .iter()
            .map(|r| CenterRow::from_record(r, schema))
            .collect();
        Self::new(rows)
    }

    pub fn rows(&self) -> &[CenterRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn find(&self, code: &str) -> Option<&CenterRow> {
        let code = canonical_code(code);
        if code.is_empty() {
            return None;
        }
        self.by_code.get(&code).map(|&idx| &self.rows[idx])
    }

    pub fn non_pediatric(&self) -> impl Iterator<Item = &CenterRow> {
        self.rows.iter().filter(|r| !r.pediatric)
    }
}

/// The national summary plus the optional dedicated graft-survival table,
/// together with the schema both were read with.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    pub summary: ReferenceTable,
    pub graft: ReferenceTable,
    pub schema: ReferenceSchema,
}

impl ReferenceTables {
    pub fn new(summary: ReferenceTable, graft: ReferenceTable) -> Self {
        Self {
            summary,
            graft,
            schema: ReferenceSchema::default(),
        }
    }

    pub fn summary_only(summary: ReferenceTable) -> Self {
        Self::new(summary, ReferenceTable::default())
    }

    pub fn with_schema(mut self, schema: ReferenceSchema) -> Self {
        self.schema = schema;
        self
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/table.rs"]
mod tests;
