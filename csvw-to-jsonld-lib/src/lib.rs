//! CSVW to JSON-LD Converter Library
//!
//! This library converts tabular data (CSV rows) into JSON-LD graph nodes,
//! driven by a CSV-on-the-Web (CSVW) table-schema description.

mod error;
mod instance;
mod metadata;
mod processor;
mod schema;
mod source;
mod vocabulary;

pub use error::ProcessorError;
pub use instance::{InternalRow, Row, RowProcessor};
pub use metadata::{Column, Datatype, Metadata, TableSchema, Titles};
pub use processor::Processor;
pub use schema::template::TemplateResolver;
pub use schema::SchemaIndex;
pub use source::DataSource;
pub use vocabulary::property_label_nodes;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Once;
    use tracing::info;

    static INIT: Once = Once::new();

    /// Initialize logging exactly once for all tests
    fn init_logging() {
        INIT.call_once(|| {
            tracing_subscriber::fmt()
                .with_test_writer()
                .with_max_level(tracing::Level::DEBUG)
                .init();
        });
    }

    #[tokio::test]
    async fn test_end_to_end_conversion() {
        init_logging();

        info!("Loading test metadata");
        let metadata = Metadata::from_file("../test-data/metadata.jsonld").unwrap();
        metadata.validate().unwrap();

        let processor = Processor::with_base_path(metadata, "../test-data");
        let output = processor.process().await.unwrap();

        let graph = output["@graph"].as_array().unwrap();
        assert_eq!(graph.len(), 2);

        info!("Checking the first row's node");
        let ann = &graph[0];
        assert_eq!(ann["@id"], json!("http://example.org/person/1"));
        assert_eq!(ann["schema:name"], json!("Ann"));
        assert_eq!(
            ann["schema:age"],
            json!({ "@value": 34, "@type": "xsd:integer" })
        );
        assert_eq!(
            ann["schema:birthDate"],
            json!({ "@value": "1990-01-15", "@type": "xsd:date" })
        );
        assert_eq!(
            ann["schema:url"],
            json!({ "@id": "http://example.org/page/ann" })
        );
        // Suppressed columns never surface as keys.
        assert!(ann.get("id").is_none());
        assert!(ann.get("color").is_none());
        // The virtual car node carries the color attached by the second pass.
        assert_eq!(
            ann["schema:owns"],
            json!({ "@id": "http://example.org/car/1", "schema:color": "red" })
        );

        info!("Checking the second row's node");
        let ben = &graph[1];
        assert_eq!(ben["@id"], json!("http://example.org/person/2"));
        // Unparseable integer propagates as a null sentinel, not an error.
        assert_eq!(
            ben["schema:age"],
            json!({ "@value": null, "@type": "xsd:integer" })
        );
        // Empty homepage empties the valueUrl template, omitting the property.
        assert!(ben.get("schema:url").is_none());
        assert_eq!(
            ben["schema:owns"],
            json!({ "@id": "http://example.org/car/2", "schema:color": "blue" })
        );

        info!("Checking the envelope");
        assert_eq!(output["dc:title"], json!("Example people data"));
        assert!(output.get("url").is_none());
        assert!(output.get("tableSchema").is_none());
        assert!(output.get("dialect").is_none());

        let name_labels = output["schema:name"]["rdfs:label"].as_array().unwrap();
        assert!(name_labels.contains(&json!({ "@value": "Name", "@language": "en" })));
        assert!(name_labels.contains(&json!({ "@value": "Nom", "@language": "fr" })));
    }

    #[tokio::test]
    async fn test_conversion_is_deterministic() {
        init_logging();

        let metadata = Metadata::from_file("../test-data/metadata.jsonld").unwrap();
        let processor = Processor::with_base_path(metadata, "../test-data");

        let first = processor.process().await.unwrap();
        let second = processor.process().await.unwrap();

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[tokio::test]
    async fn test_missing_url_aborts_processing() {
        init_logging();

        let metadata: Metadata = serde_json::from_str(
            r#"{
                "@context": {},
                "tableSchema": { "columns": [{ "name": "id", "titles": "ID" }] }
            }"#,
        )
        .unwrap();
        let processor = Processor::with_base_path(metadata, ".");

        let result = processor.process().await;
        assert!(matches!(result, Err(ProcessorError::InvalidMetadata(_))));
    }
}
