pub mod template;

use std::collections::HashMap;

use crate::metadata::{Column, TableSchema};

/// Read-only lookup structure built once from the table schema.
///
/// Maps every column title (one per language when titles are a language
/// map) to the column's internal name, and internal names back to their
/// column definitions. Later columns overwrite earlier ones on title
/// collision.
pub struct SchemaIndex {
    columns: Vec<Column>,
    title_to_name: HashMap<String, String>,
    name_to_index: HashMap<String, usize>,
    about_url: Option<String>,
}

impl SchemaIndex {
    pub fn new(schema: &TableSchema) -> Self {
        let columns = schema.columns.clone();
        let mut title_to_name = HashMap::new();
        let mut name_to_index = HashMap::new();

        for (index, column) in columns.iter().enumerate() {
            if let Some(titles) = &column.titles {
                for title in titles.values() {
                    title_to_name.insert(title.to_string(), column.name.clone());
                }
            }
            name_to_index.insert(column.name.clone(), index);
        }

        tracing::debug!(
            "Built schema index: {} columns, {} titles",
            columns.len(),
            title_to_name.len()
        );

        Self {
            columns,
            title_to_name,
            name_to_index,
            about_url: schema.about_url.clone(),
        }
    }

    /// Translate a CSV header title into the column's internal name.
    pub fn resolve_column_name(&self, title: &str) -> Option<&str> {
        self.title_to_name.get(title).map(String::as_str)
    }

    /// Look up a column definition by internal name.
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.name_to_index.get(name).map(|&i| &self.columns[i])
    }

    /// Virtual columns in declaration order.
    pub fn virtual_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.is_virtual)
    }

    /// The schema-level `aboutUrl` template for row identifiers, if any.
    pub fn about_url(&self) -> Option<&str> {
        self.about_url.as_deref()
    }
}
