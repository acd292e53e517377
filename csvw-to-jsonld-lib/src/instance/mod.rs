mod value;
mod virtuals;

use serde_json::{json, Map, Value};

use crate::schema::template::TemplateResolver;
use crate::schema::SchemaIndex;
use value::convert_value;

/// One CSV data row: column titles paired with raw string values, in
/// header order. Transient; discarded after conversion.
#[derive(Debug, Clone)]
pub struct Row {
    entries: Vec<(String, String)>,
}

impl Row {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    pub fn from_record(headers: &[String], record: &csv::StringRecord) -> Self {
        let entries = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.clone(), value.to_string()))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(title, value)| (title.as_str(), value.as_str()))
    }
}

/// A row keyed by internal column name instead of CSV title. Insertion
/// order is preserved so node properties come out in column order.
#[derive(Debug, Default, Clone)]
pub struct InternalRow {
    entries: Vec<(String, String)>,
}

impl InternalRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, overwriting in place when the name is already
    /// present (later titles mapping to the same column win).
    pub fn insert(&mut self, name: String, value: String) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// Converts one CSV row into a JSON-LD node.
///
/// Holds only the read-only schema index and the template resolver, so a
/// single instance can process any number of rows; each conversion is a
/// pure function of the row.
pub struct RowProcessor {
    index: SchemaIndex,
    templates: TemplateResolver,
}

impl RowProcessor {
    pub fn new(index: SchemaIndex) -> Self {
        Self {
            index,
            templates: TemplateResolver::new(),
        }
    }

    /// Full conversion for one row: ordinary columns, the row identifier,
    /// then both virtual-column passes.
    pub fn process_row(&self, row: &Row) -> Map<String, Value> {
        let internal = self.internal_row(row);
        let mut node = self.map_row(&internal);
        self.apply_virtual_columns(&mut node, &internal);
        node
    }

    /// Translate a row from CSV titles to internal column names. Titles
    /// the schema does not know are dropped.
    pub fn internal_row(&self, row: &Row) -> InternalRow {
        let mut internal = InternalRow::new();
        for (title, value) in row.entries() {
            match self.index.resolve_column_name(title) {
                Some(name) => internal.insert(name.to_string(), value.to_string()),
                None => {
                    tracing::debug!("Dropping unrecognized column title '{}'", title);
                }
            }
        }
        internal
    }

    /// Produce the row's primary node from its ordinary columns, then
    /// assign the `@id` from the schema-level `aboutUrl` template.
    pub fn map_row(&self, row: &InternalRow) -> Map<String, Value> {
        let mut node = Map::new();

        for (name, value) in row.entries() {
            let Some(column) = self.index.column_by_name(name) else {
                continue;
            };

            let property = column.property_url.clone().unwrap_or_else(|| name.to_string());

            let object_value = if let Some(value_url) = &column.value_url {
                let resolved = self.templates.resolve(value_url, row);
                if resolved.is_empty() {
                    continue;
                }
                json!({ "@id": resolved })
            } else {
                convert_value(value, column.datatype.as_ref())
            };

            if !column.suppress_output {
                node.insert(property, object_value);
            }
        }

        if let Some(about_url) = self.index.about_url() {
            let id = self.templates.resolve(about_url, row);
            if !id.is_empty() {
                node.insert("@id".to_string(), Value::String(id));
            }
        }

        node
    }
}
