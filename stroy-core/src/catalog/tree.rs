//! Category tree
//!
//! The backend delivers categories as a flat parent-pointer list. Both the
//! nested display tree and the descendant closure used by filtering read
//! from a `parent_id -> children` index built in one pass.

use serde::Serialize;
use shared::CategoryNode;
use std::collections::{BTreeMap, HashMap};

/// `parent_id -> children` multimap over the flat category list
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    nodes: HashMap<i64, CategoryNode>,
    children: HashMap<i64, Vec<i64>>,
    /// Departments in input order
    departments: Vec<i64>,
}

impl CategoryIndex {
    /// Build the index in a single pass.
    ///
    /// Self-edges (`id == parent_id`, the root sentinel convention) are not
    /// recorded as children. Duplicate ids keep the first occurrence.
    pub fn build(categories: &[CategoryNode]) -> Self {
        let mut index = Self {
            nodes: HashMap::with_capacity(categories.len()),
            children: HashMap::new(),
            departments: Vec::new(),
        };

        for node in categories {
            if index.nodes.contains_key(&node.id) {
                tracing::warn!(id = node.id, "Duplicate category id ignored");
                continue;
            }
            index.nodes.insert(node.id, node.clone());
            if node.is_department() {
                index.departments.push(node.id);
            }
            if node.id != node.parent_id {
                index.children.entry(node.parent_id).or_default().push(node.id);
            }
        }

        index
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node(&self, id: i64) -> Option<&CategoryNode> {
        self.nodes.get(&id)
    }

    /// Direct children in input order
    pub fn children(&self, id: i64) -> &[i64] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Nodes whose parent is the root sentinel
    pub fn departments(&self) -> &[i64] {
        &self.departments
    }

    fn name(&self, id: i64) -> String {
        self.nodes.get(&id).map(|n| n.name.clone()).unwrap_or_default()
    }
}

/// Group level: id -> name
pub type Groups = BTreeMap<i64, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subsection {
    pub name: String,
    pub groups: Groups,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub name: String,
    pub subsections: BTreeMap<i64, Subsection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Department {
    pub name: String,
    pub sections: BTreeMap<i64, Section>,
}

/// Nested department → section → subsection → group tree
///
/// Serializes as `{ "<deptId>": { "name", "sections": { ... } } }`. Empty
/// levels are kept as empty maps. Nodes not reachable from a department
/// (orphans) never appear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryTree {
    pub departments: BTreeMap<i64, Department>,
}

impl CategoryTree {
    /// Build from the flat list
    pub fn build(categories: &[CategoryNode]) -> Self {
        Self::from_index(&CategoryIndex::build(categories))
    }

    /// Build from an existing index (O(N))
    pub fn from_index(index: &CategoryIndex) -> Self {
        let departments = index
            .departments()
            .iter()
            .map(|&dept_id| {
                let sections = index
                    .children(dept_id)
                    .iter()
                    .map(|&section_id| {
                        let subsections = index
                            .children(section_id)
                            .iter()
                            .map(|&sub_id| {
                                let groups = index
                                    .children(sub_id)
                                    .iter()
                                    .map(|&group_id| (group_id, index.name(group_id)))
                                    .collect();
                                (
                                    sub_id,
                                    Subsection {
                                        name: index.name(sub_id),
                                        groups,
                                    },
                                )
                            })
                            .collect();
                        (
                            section_id,
                            Section {
                                name: index.name(section_id),
                                subsections,
                            },
                        )
                    })
                    .collect();
                (
                    dept_id,
                    Department {
                        name: index.name(dept_id),
                        sections,
                    },
                )
            })
            .collect();

        Self { departments }
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }

    /// Number of nodes in the tree, all levels
    pub fn node_count(&self) -> usize {
        self.departments
            .values()
            .map(|d| {
                1 + d
                    .sections
                    .values()
                    .map(|s| {
                        1 + s
                            .subsections
                            .values()
                            .map(|sub| 1 + sub.groups.len())
                            .sum::<usize>()
                    })
                    .sum::<usize>()
            })
            .sum()
    }
}
