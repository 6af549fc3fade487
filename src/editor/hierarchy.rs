use crate::value::{Record, array_or_empty};
use serde_json::Value;

const LABEL_KEY: &str = "category";
const CHILDREN_KEY: &str = "subCategories";

/// One category node of a hierarchy field.
///
/// Keys other than the label and the children are carried in `extra` so edits elsewhere
/// in the tree write them back untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchyNode {
    pub category: String,
    pub sub_categories: Vec<HierarchyNode>,
    pub extra: Record,
}

impl HierarchyNode {
    /// Lenient read: a missing or non-list child list is empty, a non-text label is `""`.
    pub fn from_value(value: &Value) -> Self {
        let Value::Object(map) = value else {
            return Self::default();
        };
        Self {
            category: map
                .get(LABEL_KEY)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            sub_categories: array_or_empty(map.get(CHILDREN_KEY))
                .iter()
                .map(HierarchyNode::from_value)
                .collect(),
            extra: map
                .iter()
                .filter(|(k, _)| *k != LABEL_KEY && *k != CHILDREN_KEY)
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    pub fn into_value(self) -> Value {
        let mut map = Record::new();
        map.insert(LABEL_KEY.to_string(), Value::String(self.category));
        map.insert(
            CHILDREN_KEY.to_string(),
            Value::Array(
                self.sub_categories
                    .into_iter()
                    .map(HierarchyNode::into_value)
                    .collect(),
            ),
        );
        map.extend(self.extra);
        Value::Object(map)
    }

    fn depth(&self) -> usize {
        1 + self
            .sub_categories
            .iter()
            .map(HierarchyNode::depth)
            .max()
            .unwrap_or(0)
    }
}

/// An ordered forest of category nodes, addressed by sibling-index paths from the roots.
///
/// Every operation consumes the hierarchy and returns the updated one. Paths that do not
/// lead to an existing node leave the hierarchy unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hierarchy {
    pub roots: Vec<HierarchyNode>,
}

impl Hierarchy {
    /// Reads a hierarchy value node by node. An unset or non-list value is empty.
    pub fn from_value(current: Option<&Value>) -> Self {
        let roots = array_or_empty(current)
            .iter()
            .map(HierarchyNode::from_value)
            .collect();
        Self { roots }
    }

    pub fn into_value(self) -> Value {
        Value::Array(
            self.roots
                .into_iter()
                .map(HierarchyNode::into_value)
                .collect(),
        )
    }

    pub fn add_root(mut self) -> Self {
        self.roots.push(HierarchyNode::default());
        self
    }

    pub fn rename(mut self, path: &[usize], label: &str) -> Self {
        if let Some(node) = self.node_mut(path) {
            node.category = label.to_string();
        }
        self
    }

    pub fn add_child(mut self, path: &[usize]) -> Self {
        if let Some(node) = self.node_mut(path) {
            node.sub_categories.push(HierarchyNode::default());
        }
        self
    }

    /// Removes the node at `path` together with its whole subtree.
    pub fn remove(mut self, path: &[usize]) -> Self {
        if let Some((&index, parent)) = path.split_last() {
            if let Some(siblings) = self.children_mut(parent) {
                if index < siblings.len() {
                    siblings.remove(index);
                }
            }
        }
        self
    }

    pub fn node(&self, path: &[usize]) -> Option<&HierarchyNode> {
        let (first, rest) = path.split_first()?;
        let mut node = self.roots.get(*first)?;
        for &index in rest {
            node = node.sub_categories.get(index)?;
        }
        Some(node)
    }

    /// Number of levels along the deepest branch.
    pub fn depth(&self) -> usize {
        self.roots
            .iter()
            .map(HierarchyNode::depth)
            .max()
            .unwrap_or(0)
    }

    fn node_mut(&mut self, path: &[usize]) -> Option<&mut HierarchyNode> {
        let (first, rest) = path.split_first()?;
        let mut node = self.roots.get_mut(*first)?;
        for &index in rest {
            node = node.sub_categories.get_mut(index)?;
        }
        Some(node)
    }

    fn children_mut(&mut self, parent: &[usize]) -> Option<&mut Vec<HierarchyNode>> {
        if parent.is_empty() {
            Some(&mut self.roots)
        } else {
            self.node_mut(parent).map(|node| &mut node.sub_categories)
        }
    }
}
