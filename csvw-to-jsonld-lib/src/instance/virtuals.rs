use serde_json::{json, Map, Value};

use super::{InternalRow, RowProcessor};

impl RowProcessor {
    /// Apply virtual columns to an already-mapped node, in two passes over
    /// the column list, each in declaration order.
    ///
    /// Pass 1 handles node-creating columns (no `aboutUrl`): the resolved
    /// `valueUrl` becomes a reference object directly on the primary node.
    ///
    /// Pass 2 handles node-attaching columns (with `aboutUrl`): the node
    /// whose `@id` equals the resolved `aboutUrl` is located anywhere in
    /// the subtree — including nodes created by pass 1 or nested inside
    /// other properties — and receives the resolved value. Values that look
    /// like references (containing `/`) are wrapped as `{"@id": ...}`;
    /// bare values attach as strings. When no node matches, the attachment
    /// is dropped without touching the tree.
    pub fn apply_virtual_columns(&self, node: &mut Map<String, Value>, row: &InternalRow) {
        for column in self.index.virtual_columns() {
            if column.about_url.is_some() {
                continue;
            }
            let Some(value_url) = &column.value_url else {
                continue;
            };
            let Some(property) = &column.property_url else {
                continue;
            };

            let resolved = self.templates.resolve(value_url, row);
            if resolved.is_empty() {
                continue;
            }
            node.insert(property.clone(), json!({ "@id": resolved }));
        }

        for column in self.index.virtual_columns() {
            let Some(about_url) = &column.about_url else {
                continue;
            };
            let Some(value_url) = &column.value_url else {
                continue;
            };
            let Some(property) = &column.property_url else {
                continue;
            };

            let resolved = self.templates.resolve(value_url, row);
            if resolved.is_empty() {
                continue;
            }

            let target = self.templates.resolve(about_url, row);
            let Some(target_node) = find_node_in_map(node, &target) else {
                tracing::debug!(
                    "No node with @id '{}' for virtual column '{}'; skipping",
                    target,
                    column.name
                );
                continue;
            };

            let attached = if resolved.contains('/') {
                json!({ "@id": resolved })
            } else {
                Value::String(resolved)
            };
            target_node.insert(property.clone(), attached);
        }
    }
}

/// Depth-first search of a node for the first object (itself included)
/// whose `@id` equals `id`, visiting properties in key order.
fn find_node_in_map<'a>(
    map: &'a mut Map<String, Value>,
    id: &str,
) -> Option<&'a mut Map<String, Value>> {
    if map.get("@id").and_then(Value::as_str) == Some(id) {
        return Some(map);
    }
    map.iter_mut().find_map(|(_, child)| find_node(child, id))
}

fn find_node<'a>(value: &'a mut Value, id: &str) -> Option<&'a mut Map<String, Value>> {
    match value {
        Value::Object(map) => find_node_in_map(map, id),
        Value::Array(items) => items.iter_mut().find_map(|item| find_node(item, id)),
        _ => None,
    }
}
