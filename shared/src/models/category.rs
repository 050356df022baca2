//! Category Model
//!
//! The catalog is a four-level tree (department → section → subsection →
//! group) delivered as a flat parent-pointer list.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Parent id carried by department nodes
pub const ROOT_PARENT_ID: i64 = 1;

/// Flat category node as returned by the catalog backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryNode {
    #[serde(rename = "MaterialTreeId", alias = "id")]
    pub id: i64,
    #[serde(rename = "ParId", alias = "parentId")]
    pub parent_id: i64,
    #[serde(rename = "MaterialTreeName", alias = "name", default)]
    pub name: String,
}

impl CategoryNode {
    pub fn new(id: i64, parent_id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            parent_id,
            name: name.into(),
        }
    }

    /// Department nodes hang directly off the root sentinel
    pub fn is_department(&self) -> bool {
        self.parent_id == ROOT_PARENT_ID
    }
}

/// Tree level, from most general to most specific
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryLevel {
    Department,
    Section,
    Subsection,
    Group,
}

impl CategoryLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Department => "department",
            Self::Section => "section",
            Self::Subsection => "subsection",
            Self::Group => "group",
        }
    }
}

impl fmt::Display for CategoryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selector: up to one id per tree level
///
/// Callers may set any subset of the fields. Filtering always resolves the
/// most specific field that is set (group > subsection > section >
/// department) and walks the tree from there; the coarser fields are not
/// required to be consistent with it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPath {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subsection: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<i64>,
}

impl CategoryPath {
    /// Selector with no field set (matches every product)
    pub fn all() -> Self {
        Self::default()
    }

    pub fn department(id: i64) -> Self {
        Self {
            department: Some(id),
            ..Self::default()
        }
    }

    pub fn section(id: i64) -> Self {
        Self {
            section: Some(id),
            ..Self::default()
        }
    }

    pub fn subsection(id: i64) -> Self {
        Self {
            subsection: Some(id),
            ..Self::default()
        }
    }

    pub fn group(id: i64) -> Self {
        Self {
            group: Some(id),
            ..Self::default()
        }
    }

    /// Set a single level, keeping the others
    pub fn with(mut self, level: CategoryLevel, id: i64) -> Self {
        match level {
            CategoryLevel::Department => self.department = Some(id),
            CategoryLevel::Section => self.section = Some(id),
            CategoryLevel::Subsection => self.subsection = Some(id),
            CategoryLevel::Group => self.group = Some(id),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.most_specific().is_none()
    }

    /// Most specific field that is set
    pub fn most_specific(&self) -> Option<(CategoryLevel, i64)> {
        self.group
            .map(|id| (CategoryLevel::Group, id))
            .or_else(|| self.subsection.map(|id| (CategoryLevel::Subsection, id)))
            .or_else(|| self.section.map(|id| (CategoryLevel::Section, id)))
            .or_else(|| self.department.map(|id| (CategoryLevel::Department, id)))
    }

    /// Canonical cache-key fragment; an empty selector collapses to `all`
    pub fn cache_key(&self) -> String {
        if self.is_empty() {
            return "all".to_string();
        }
        fn part(v: Option<i64>) -> String {
            v.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())
        }
        format!(
            "d{}.s{}.u{}.g{}",
            part(self.department),
            part(self.section),
            part(self.subsection),
            part(self.group)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_specific_wins() {
        let path = CategoryPath {
            department: Some(1),
            section: Some(2),
            subsection: None,
            group: Some(4),
        };
        assert_eq!(path.most_specific(), Some((CategoryLevel::Group, 4)));

        let path = CategoryPath::department(1).with(CategoryLevel::Section, 2);
        assert_eq!(path.most_specific(), Some((CategoryLevel::Section, 2)));

        assert_eq!(CategoryPath::all().most_specific(), None);
        assert!(CategoryPath::all().is_empty());
    }

    #[test]
    fn test_cache_key() {
        assert_eq!(CategoryPath::all().cache_key(), "all");
        assert_eq!(CategoryPath::section(2).cache_key(), "d-.s2.u-.g-");
        assert_ne!(
            CategoryPath::section(2).cache_key(),
            CategoryPath::subsection(2).cache_key()
        );
        assert_eq!(
            CategoryPath::group(4).cache_key(),
            CategoryPath::group(4).cache_key()
        );
    }

    #[test]
    fn test_node_wire_format() {
        let node: CategoryNode = serde_json::from_str(
            r#"{"MaterialTreeId": 12, "ParId": 1, "MaterialTreeName": "Бетон и растворы"}"#,
        )
        .unwrap();
        assert_eq!(node, CategoryNode::new(12, 1, "Бетон и растворы"));
        assert!(node.is_department());

        let node: CategoryNode =
            serde_json::from_str(r#"{"id": 3, "parentId": 2, "name": "Sub"}"#).unwrap();
        assert_eq!(node, CategoryNode::new(3, 2, "Sub"));
        assert!(!node.is_department());
    }

    #[test]
    fn test_path_persisted_form() {
        let json = serde_json::to_string(&CategoryPath::group(4)).unwrap();
        assert_eq!(json, r#"{"group":4}"#);
        let back: CategoryPath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CategoryPath::group(4));
    }
}
