use serde_json::{json, Map, Value};

use crate::metadata::{TableSchema, Titles};

/// Build one label node per column that declares a `propertyUrl`, keyed by
/// that `propertyUrl`. Each node annotates the property with the column's
/// human-readable titles as `rdfs:label` entries; a single string title is
/// tagged as English.
///
/// The caller decides placement; the converter merges these into the
/// output envelope as top-level fields.
pub fn property_label_nodes(schema: &TableSchema) -> Map<String, Value> {
    let mut nodes = Map::new();

    for column in &schema.columns {
        let Some(property_url) = &column.property_url else {
            continue;
        };
        let Some(titles) = &column.titles else {
            continue;
        };

        let labels: Vec<Value> = match titles {
            Titles::Single(title) => {
                vec![json!({ "@value": title, "@language": "en" })]
            }
            Titles::ByLanguage(map) => map
                .iter()
                .map(|(lang, title)| json!({ "@value": title, "@language": lang }))
                .collect(),
        };

        if labels.is_empty() {
            continue;
        }

        nodes.insert(
            property_url.clone(),
            json!({ "@id": property_url, "rdfs:label": labels }),
        );
    }

    tracing::debug!("Built {} property label nodes", nodes.len());
    nodes
}
