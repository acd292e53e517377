use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

use json_comments::StripComments;
use serde::{Deserialize, Serialize};

use crate::error::ProcessorError;

/// One or more human-readable titles for a column: either a single string
/// or a mapping from language tag to title.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum Titles {
    Single(String),
    ByLanguage(BTreeMap<String, String>),
}

impl Titles {
    /// All title strings, regardless of language.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Titles::Single(title) => vec![title.as_str()],
            Titles::ByLanguage(map) => map.values().map(String::as_str).collect(),
        }
    }
}

/// A declared cell datatype: either a bare name ("integer") or an object
/// carrying the base name ({"base": "integer"}).
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum Datatype {
    Base(String),
    Described { base: String },
}

impl Datatype {
    pub fn base(&self) -> &str {
        match self {
            Datatype::Base(base) => base,
            Datatype::Described { base } => base,
        }
    }
}

/// A column definition from `tableSchema.columns`.
///
/// Direct columns carry CSV data; columns flagged `virtual` synthesize
/// additional graph structure from already-resolved row values.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Column {
    #[serde(default)]
    pub name: String,
    pub titles: Option<Titles>,
    #[serde(rename = "propertyUrl")]
    pub property_url: Option<String>,
    pub datatype: Option<Datatype>,
    #[serde(rename = "valueUrl")]
    pub value_url: Option<String>,
    #[serde(rename = "aboutUrl")]
    pub about_url: Option<String>,
    #[serde(default, rename = "suppressOutput")]
    pub suppress_output: bool,
    #[serde(default, rename = "virtual")]
    pub is_virtual: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TableSchema {
    #[serde(rename = "aboutUrl")]
    pub about_url: Option<String>,
    #[serde(default)]
    pub columns: Vec<Column>,
}

/// A CSVW metadata document: the `@context` and `tableSchema` drive the
/// conversion, `url` locates the CSV data, and any other top-level fields
/// are carried through into the output envelope untouched.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Metadata {
    #[serde(rename = "@context")]
    pub context: serde_json::Value,
    pub url: Option<String>,
    #[serde(rename = "tableSchema")]
    pub table_schema: TableSchema,
    pub dialect: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Metadata {
    /// Load a metadata document from disk. Comments are stripped first so
    /// annotated `.jsonc` documents load the same as plain JSON.
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Result<Self, ProcessorError> {
        let path = path.into();
        tracing::info!("Loading metadata from {:?}", path);
        let file = std::fs::File::open(&path)?;
        let metadata = serde_json::from_reader(StripComments::new(file))?;
        tracing::info!("Successfully loaded metadata: {}", path.display());
        Ok(metadata)
    }

    /// Light structural checks. Nothing here changes conversion output;
    /// suspicious-but-workable shapes are warned about, not rejected.
    pub fn validate(&self) -> Result<(), ProcessorError> {
        tracing::info!("Validating metadata...");

        match &self.url {
            Some(url) if !url.is_empty() => {}
            _ => {
                return Err(ProcessorError::InvalidMetadata(
                    "The metadata file does not contain a CSV URL or file path".into(),
                ));
            }
        }

        if self.table_schema.columns.is_empty() {
            return Err(ProcessorError::InvalidMetadata(
                "tableSchema must declare at least one column".into(),
            ));
        }

        let mut seen_titles = HashSet::new();
        for column in &self.table_schema.columns {
            if let Some(titles) = &column.titles {
                for title in titles.values() {
                    if !seen_titles.insert(title.to_string()) {
                        tracing::warn!(
                            "Duplicate column title '{}'; the last column declaring it wins",
                            title
                        );
                    }
                }
            }

            if column.is_virtual && column.value_url.is_none() {
                tracing::warn!(
                    "Virtual column '{}' has no valueUrl and will produce nothing",
                    column.name
                );
            }
        }

        tracing::info!("Metadata validation successful");
        Ok(())
    }
}
