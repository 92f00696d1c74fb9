//! Insertion-ordered report tree and its builder.
//!
//! The audit output is a single tree rooted at a `healthcheck` object. The
//! tree is deliberately simple: leaves hold scalar JSON values, arrays hold
//! ordered children, objects hold uniquely named ordered children. Insertion
//! order is part of the output contract (stored reports are diffed), so
//! serialization must never fall back to hash order.

use serde_json::Value;

use crate::error::{HealthCheckError, Result};

/// One node of the finished report tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportNode {
    Leaf(Value),
    Array(Vec<ReportNode>),
    Object(Vec<(String, ReportNode)>),
}

impl ReportNode {
    /// Looks up a direct child of an object node by name.
    pub fn get(&self, name: &str) -> Option<&ReportNode> {
        match self {
            ReportNode::Object(children) => children
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, node)| node),
            _ => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&Value> {
        match self {
            ReportNode::Leaf(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[ReportNode]> {
        match self {
            ReportNode::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Renders the tree to JSON. Object member order equals insertion order
    /// (serde_json is built with `preserve_order`).
    pub fn to_json(&self) -> Value {
        match self {
            ReportNode::Leaf(v) => v.clone(),
            ReportNode::Array(items) => {
                Value::Array(items.iter().map(ReportNode::to_json).collect())
            }
            ReportNode::Object(children) => {
                let mut map = serde_json::Map::new();
                for (name, node) in children {
                    map.insert(name.clone(), node.to_json());
                }
                Value::Object(map)
            }
        }
    }

    /// Rebuilds a tree from JSON produced by [`ReportNode::to_json`].
    pub fn from_json(value: &Value) -> ReportNode {
        match value {
            Value::Array(items) => {
                ReportNode::Array(items.iter().map(ReportNode::from_json).collect())
            }
            Value::Object(map) => ReportNode::Object(
                map.iter()
                    .map(|(name, v)| (name.clone(), ReportNode::from_json(v)))
                    .collect(),
            ),
            scalar => ReportNode::Leaf(scalar.clone()),
        }
    }
}

/// Handle to a node inside a [`ReportBuilder`]. Only valid for the builder
/// that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug)]
enum BuilderNode {
    Leaf(Value),
    Object { children: Vec<(String, NodeId)> },
    Array { items: Vec<NodeId> },
}

/// Arena-backed builder for the report tree.
///
/// The tree is acyclic by construction: children are always freshly
/// allocated, and no API hands out a way to re-parent an existing node.
#[derive(Debug)]
pub struct ReportBuilder {
    nodes: Vec<BuilderNode>,
}

impl ReportBuilder {
    /// Creates a builder whose root is an empty object.
    pub fn new() -> Self {
        ReportBuilder {
            nodes: vec![BuilderNode::Object {
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Adds a scalar leaf under an object. Duplicate names are rejected.
    pub fn add_leaf(
        &mut self,
        parent: NodeId,
        name: &str,
        value: impl Into<Value>,
    ) -> Result<()> {
        let id = self.alloc(BuilderNode::Leaf(value.into()));
        self.attach(parent, name, id)
    }

    /// Adds an empty object under an object and returns its handle.
    pub fn add_object(&mut self, parent: NodeId, name: &str) -> Result<NodeId> {
        let id = self.alloc(BuilderNode::Object {
            children: Vec::new(),
        });
        self.attach(parent, name, id)?;
        Ok(id)
    }

    /// Adds an empty array under an object and returns its handle.
    pub fn add_array(&mut self, parent: NodeId, name: &str) -> Result<NodeId> {
        let id = self.alloc(BuilderNode::Array { items: Vec::new() });
        self.attach(parent, name, id)?;
        Ok(id)
    }

    /// Appends a fresh object to an array and returns its handle.
    pub fn add_array_object(&mut self, array: NodeId) -> NodeId {
        let id = self.alloc(BuilderNode::Object {
            children: Vec::new(),
        });
        match &mut self.nodes[array.0] {
            BuilderNode::Array { items } => items.push(id),
            _ => panic!("add_array_object: handle is not an array"),
        }
        id
    }

    /// Grafts an already finished subtree under an object.
    pub fn add_node(&mut self, parent: NodeId, name: &str, node: ReportNode) -> Result<()> {
        let id = self.import(node);
        self.attach(parent, name, id)
    }

    /// Consumes the builder and returns the immutable tree.
    pub fn finish(self) -> ReportNode {
        self.materialize(NodeId(0))
    }

    fn alloc(&mut self, node: BuilderNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    fn attach(&mut self, parent: NodeId, name: &str, child: NodeId) -> Result<()> {
        match &mut self.nodes[parent.0] {
            BuilderNode::Object { children } => {
                if children.iter().any(|(n, _)| n == name) {
                    return Err(HealthCheckError::DuplicateName(name.to_string()));
                }
                children.push((name.to_string(), child));
                Ok(())
            }
            _ => panic!("attach: parent handle is not an object"),
        }
    }

    fn import(&mut self, node: ReportNode) -> NodeId {
        match node {
            ReportNode::Leaf(v) => self.alloc(BuilderNode::Leaf(v)),
            ReportNode::Array(items) => {
                let ids: Vec<NodeId> = items.into_iter().map(|n| self.import(n)).collect();
                self.alloc(BuilderNode::Array { items: ids })
            }
            ReportNode::Object(children) => {
                let entries: Vec<(String, NodeId)> = children
                    .into_iter()
                    .map(|(name, n)| (name, self.import(n)))
                    .collect();
                self.alloc(BuilderNode::Object { children: entries })
            }
        }
    }

    fn materialize(&self, id: NodeId) -> ReportNode {
        match &self.nodes[id.0] {
            BuilderNode::Leaf(v) => ReportNode::Leaf(v.clone()),
            BuilderNode::Array { items } => {
                ReportNode::Array(items.iter().map(|i| self.materialize(*i)).collect())
            }
            BuilderNode::Object { children } => ReportNode::Object(
                children
                    .iter()
                    .map(|(name, i)| (name.clone(), self.materialize(*i)))
                    .collect(),
            ),
        }
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut builder = ReportBuilder::new();
        let root = builder.root();
        builder.add_leaf(root, "zulu", "z").unwrap();
        builder.add_leaf(root, "alpha", 1).unwrap();
        builder.add_leaf(root, "mike", true).unwrap();

        let tree = builder.finish();
        let rendered = serde_json::to_string(&tree.to_json()).unwrap();
        assert_eq!(rendered, r#"{"zulu":"z","alpha":1,"mike":true}"#);
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let mut builder = ReportBuilder::new();
        let root = builder.root();
        builder.add_leaf(root, "os", "Linux").unwrap();
        let err = builder.add_leaf(root, "os", "Windows").unwrap_err();
        assert!(matches!(err, HealthCheckError::DuplicateName(name) if name == "os"));
    }

    #[test]
    fn test_empty_containers_still_serialize() {
        let mut builder = ReportBuilder::new();
        let root = builder.root();
        builder.add_array(root, "warnings").unwrap();
        builder.add_object(root, "system").unwrap();

        let json = builder.finish().to_json();
        assert_eq!(json["warnings"], json!([]));
        assert_eq!(json["system"], json!({}));
    }

    #[test]
    fn test_nested_array_objects() {
        let mut builder = ReportBuilder::new();
        let root = builder.root();
        let servers = builder.add_array(root, "ldapservers").unwrap();
        for id in 1..=2 {
            let entry = builder.add_array_object(servers);
            builder.add_leaf(entry, "id", id.to_string()).unwrap();
        }

        let tree = builder.finish();
        let items = tree.get("ldapservers").unwrap().as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].get("id").unwrap().as_leaf().unwrap(), "1");
    }

    #[test]
    fn test_json_round_trip_preserves_shape() {
        let mut builder = ReportBuilder::new();
        let root = builder.root();
        builder.add_leaf(root, "jss_url", "https://jss.example.com").unwrap();
        builder.add_leaf(root, "totalcomputers", 42).unwrap();
        let system = builder.add_object(root, "system").unwrap();
        builder.add_leaf(system, "os", "Red Hat Enterprise Linux").unwrap();
        let tables = builder.add_array(system, "largeSQLtables").unwrap();
        let entry = builder.add_array_object(tables);
        builder.add_leaf(entry, "table_name", "event_logs").unwrap();
        builder.add_leaf(entry, "table_size", 812.0).unwrap();

        let tree = builder.finish();
        let round_tripped = ReportNode::from_json(&tree.to_json());
        assert_eq!(tree, round_tripped);
    }

    #[test]
    fn test_graft_finished_subtree() {
        let mut inner = ReportBuilder::new();
        let iroot = inner.root();
        inner.add_leaf(iroot, "frequency", "15").unwrap();
        let fragment = inner.finish();

        let mut builder = ReportBuilder::new();
        let root = builder.root();
        builder.add_node(root, "computercheckin", fragment).unwrap();

        let tree = builder.finish();
        let checkin = tree.get("computercheckin").unwrap();
        assert_eq!(checkin.get("frequency").unwrap().as_leaf().unwrap(), "15");
    }
}
