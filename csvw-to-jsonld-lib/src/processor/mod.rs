use std::path::PathBuf;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::ProcessorError;
use crate::instance::{Row, RowProcessor};
use crate::metadata::Metadata;
use crate::schema::SchemaIndex;
use crate::source::DataSource;
use crate::vocabulary::property_label_nodes;

/// Drives a whole conversion: fetches the CSV named by the metadata
/// document, converts each row in input order, and assembles the output
/// envelope.
pub struct Processor {
    metadata: Arc<Metadata>,
    rows: RowProcessor,
    base_path: PathBuf,
}

impl Processor {
    /// `base_path` anchors relative CSV paths, normally the directory the
    /// metadata document was loaded from.
    pub fn with_base_path<P: Into<PathBuf>>(metadata: Metadata, base_path: P) -> Self {
        let base_path = base_path.into();
        tracing::info!("Creating processor with base path: {:?}", base_path);
        let rows = RowProcessor::new(SchemaIndex::new(&metadata.table_schema));
        Self {
            metadata: Arc::new(metadata),
            rows,
            base_path,
        }
    }

    pub async fn process(&self) -> Result<Value, ProcessorError> {
        let url = self.metadata.url.as_deref().ok_or_else(|| {
            ProcessorError::InvalidMetadata(
                "The metadata file does not contain a CSV URL or file path".into(),
            )
        })?;

        let bytes = DataSource::parse(url, &self.base_path).read().await?;

        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| ProcessorError::Processing(format!("Failed to read CSV headers: {}", e)))?
            .iter()
            .map(|h| h.to_string())
            .collect();
        tracing::debug!("CSV headers: {:?}", headers);

        let mut graph = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| {
                ProcessorError::Processing(format!("Failed to read CSV record: {}", e))
            })?;
            let row = Row::from_record(&headers, &record);
            graph.push(Value::Object(self.rows.process_row(&row)));
        }
        tracing::info!("Converted {} rows", graph.len());

        Ok(self.assemble(graph))
    }

    /// Wrap the per-row nodes in the output envelope: the metadata
    /// `@context` and the `@graph`, followed by every other metadata field
    /// (the CSV location, the schema, and the dialect stay internal) and
    /// the property label nodes.
    fn assemble(&self, graph: Vec<Value>) -> Value {
        let mut output = Map::new();
        output.insert("@context".to_string(), self.metadata.context.clone());
        output.insert("@graph".to_string(), Value::Array(graph));

        for (key, value) in &self.metadata.extra {
            output.insert(key.clone(), value.clone());
        }

        for (key, value) in property_label_nodes(&self.metadata.table_schema) {
            output.insert(key, value);
        }

        Value::Object(output)
    }
}
