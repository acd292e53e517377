pub const BASIC_METADATA: &str = r#"{
  // Standard JSON-LD context - prefixes used by property URLs below
  "@context": {
    "schema": "http://schema.org/",
    "rdfs": "http://www.w3.org/2000/01/rdf-schema#",
    "xsd": "http://www.w3.org/2001/XMLSchema#"
  },
  // CSV location: a local path (relative to this file) or an http(s) URL
  "url": "data.csv",
  "tableSchema": {
    // Template for each row's @id, resolved against the row's values
    "aboutUrl": "http://example.org/thing/{id}",
    "columns": [
      {
        // Internal name, referenced by {placeholders} in templates
        "name": "id",
        // Title as it appears in the CSV header
        "titles": "ID",
        // Used for templates only; never emitted as a property
        "suppressOutput": true
      },
      {
        "name": "name",
        // One title per language is also accepted
        "titles": { "en": "Name" },
        // Output property key; defaults to the internal name
        "propertyUrl": "schema:name"
      },
      {
        "name": "age",
        "titles": "Age",
        // integer, decimal, and date get typed @value objects
        "datatype": "integer",
        "propertyUrl": "schema:age"
      },
      {
        // Virtual columns have no CSV data; they synthesize extra
        // structure from already-resolved row values
        "name": "link",
        "virtual": true,
        "propertyUrl": "schema:url",
        "valueUrl": "http://example.org/page/{id}"
      }
    ]
  }
}"#;
