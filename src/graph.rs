//! Entity graph data model
//!
//! Nodes and edges as produced by the upstream data source. The search
//! engine only ever reads these.

use crate::error::GraphError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Attribute value attached to a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum AttributeValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Date(DateTime<Utc>),
}

impl AttributeValue {
    /// Text of a string-typed value; other kinds are never searchable
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeValue::String(s) => write!(f, "{}", s),
            AttributeValue::Number(n) => write!(f, "{}", n),
            AttributeValue::Boolean(b) => write!(f, "{}", b),
            AttributeValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

/// A node in the entity graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeValue>,
    /// Depth in the hierarchy (0 = root)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl Node {
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            attributes: BTreeMap::new(),
            level: None,
            parent_id: None,
        }
    }

    /// Builder-style attribute insertion
    pub fn with_attribute(mut self, key: impl Into<String>, value: AttributeValue) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// String-typed attribute values, in key order
    pub fn text_attributes(&self) -> impl Iterator<Item = &str> {
        self.attributes.values().filter_map(AttributeValue::as_text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    #[default]
    Single,
    Double,
    Weighted,
}

/// A directed relation between two nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, rename = "type")]
    pub kind: EdgeKind,
}

/// A complete graph snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl GraphData {
    /// Read a JSON snapshot from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GraphError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| GraphError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let graph: GraphData = serde_json::from_str(&raw)?;

        info!(
            "Loaded graph snapshot from {}: {} nodes, {} edges",
            path.display(),
            graph.nodes.len(),
            graph.edges.len()
        );

        Ok(graph)
    }

    /// Check structural sanity of the snapshot
    ///
    /// Empty ids are rejected. Duplicate ids and dangling edge endpoints
    /// are only reported: lookup resolves to the first node with an id and
    /// edges are never indexed.
    pub fn validate(&self) -> Result<(), GraphError> {
        let mut seen = HashSet::with_capacity(self.nodes.len());

        for (position, node) in self.nodes.iter().enumerate() {
            if node.id.is_empty() {
                return Err(GraphError::InvalidInput(format!(
                    "node at position {} has an empty id",
                    position
                )));
            }
            if !seen.insert(node.id.as_str()) {
                warn!("Duplicate node id '{}' at position {}", node.id, position);
            }
        }

        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !seen.contains(endpoint.as_str()) {
                    warn!("Edge '{}' references unknown node '{}'", edge.id, endpoint);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::Write;

    #[test]
    fn test_text_attributes_skip_non_strings() {
        let date = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let node = Node::new("n1", "Acme", "")
            .with_attribute("city", AttributeValue::String("Berlin".to_string()))
            .with_attribute("employees", AttributeValue::Number(42.0))
            .with_attribute("active", AttributeValue::Boolean(true))
            .with_attribute("founded", AttributeValue::Date(date));

        let texts: Vec<&str> = node.text_attributes().collect();
        assert_eq!(texts, vec!["Berlin"]);
    }

    #[test]
    fn test_attribute_value_serde_shape() {
        let value = AttributeValue::String("Berlin".to_string());
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"type":"string","value":"Berlin"}"#);

        let parsed: AttributeValue =
            serde_json::from_str(r#"{"type":"number","value":3.5}"#).unwrap();
        assert_eq!(parsed, AttributeValue::Number(3.5));
    }

    #[test]
    fn test_parse_snapshot_defaults() {
        let raw = r#"{
            "nodes": [
                {"id": "n1", "name": "Alice", "parentId": "root", "level": 1},
                {"id": "root", "name": "Root", "description": "top"}
            ],
            "edges": [{"id": "e1", "source": "root", "target": "n1"}]
        }"#;
        let graph: GraphData = serde_json::from_str(raw).unwrap();

        assert_eq!(graph.nodes[0].description, "");
        assert_eq!(graph.nodes[0].parent_id.as_deref(), Some("root"));
        assert_eq!(graph.nodes[0].level, Some(1));
        assert_eq!(graph.edges[0].kind, EdgeKind::Single);
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_id() {
        let graph = GraphData {
            nodes: vec![Node::new("", "Nameless", "")],
            edges: vec![],
        };
        assert!(matches!(graph.validate(), Err(GraphError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_tolerates_duplicates_and_dangling_edges() {
        let graph = GraphData {
            nodes: vec![Node::new("n1", "A", ""), Node::new("n1", "B", "")],
            edges: vec![Edge {
                id: "e1".to_string(),
                source: "n1".to_string(),
                target: "missing".to_string(),
                label: None,
                weight: None,
                kind: EdgeKind::Weighted,
            }],
        };
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"nodes":[{{"id":"n1","name":"Alice"}}]}}"#).unwrap();

        let graph = GraphData::from_path(file.path()).unwrap();
        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_from_path_errors() {
        let missing = GraphData::from_path("/definitely/not/here.json");
        assert!(matches!(missing, Err(GraphError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let malformed = GraphData::from_path(file.path());
        assert!(matches!(malformed, Err(GraphError::Parse(_))));
    }
}
