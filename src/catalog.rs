//! Tree definition for the selection step.
//!
//! A [`Catalog`] is the static, two-level tree of cost-saving actions
//! (groups) and the options (items) each one owns. It is loaded once per
//! session, either from the built-in list or from a JSON file, and never
//! changes shape afterwards.
//!
//! # Built-in Catalog
//!
//! | Group                   | Items |
//! |-------------------------|-------|
//! | `start-stop-resources`  | ec2, rds, light-sail, amazon-neptune |
//! | `pause-resume-resource` | redshift-clusters, aurora-serverless-v2 |
//! | `resource-cleanup`      | terminate-ec2, delete-ebs-volume, delete-ebs-snapshot, delete-rds, delete-rds-snapshot |

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{CatalogError, Result};

/// A leaf option. Belongs to exactly one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub parent_id: String,
}

impl Item {
    pub fn new(id: &str, name: &str, parent_id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            parent_id: parent_id.to_string(),
        }
    }
}

/// A top-level action owning a fixed, ordered list of items.
///
/// Item order only matters for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Group {
    /// Build a group whose items all point back at it.
    ///
    /// `items` is a list of `(id, name)` pairs.
    pub fn with_items(id: &str, name: &str, items: &[(&str, &str)]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            items: items
                .iter()
                .map(|(item_id, item_name)| Item::new(item_id, item_name, id))
                .collect(),
        }
    }

    /// Iterate over the ids of the items this group owns.
    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.id.as_str())
    }

    /// Whether the group owns the given item.
    pub fn owns(&self, item_id: &str) -> bool {
        self.items.iter().any(|item| item.id == item_id)
    }
}

/// The complete, immutable tree of groups and items.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub groups: Vec<Group>,
}

impl Catalog {
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    /// The cost-saving actions offered by the account setup wizard.
    pub fn builtin() -> Self {
        Self::new(vec![
            Group::with_items(
                "start-stop-resources",
                "Start/Stop Resources",
                &[
                    ("ec2", "EC2"),
                    ("rds", "RDS"),
                    ("light-sail", "Light Sail"),
                    ("amazon-neptune", "Amazon Neptune"),
                ],
            ),
            Group::with_items(
                "pause-resume-resource",
                "Pause/Resume Resource",
                &[
                    ("redshift-clusters", "Redshift Clusters"),
                    ("aurora-serverless-v2", "Aurora Serverless v2"),
                ],
            ),
            Group::with_items(
                "resource-cleanup",
                "Resource Cleanup",
                &[
                    ("terminate-ec2", "Terminate EC2"),
                    ("delete-ebs-volume", "Delete EBS Volume"),
                    ("delete-ebs-snapshot", "Delete EBS Snapshot"),
                    ("delete-rds", "Delete RDS"),
                    ("delete-rds-snapshot", "Delete RDS Snapshot"),
                ],
            ),
        ])
    }

    /// Save the catalog to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        tracing::debug!("Catalog written to {:?}", path.as_ref());
        Ok(())
    }

    /// Load a catalog from a JSON file and validate its structure
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let catalog: Self = serde_json::from_str(&content)?;
        catalog.validate()?;

        tracing::debug!(
            "Loaded catalog from {:?}: {} groups, {} items",
            path.as_ref(),
            catalog.groups.len(),
            catalog.item_count()
        );
        Ok(catalog)
    }

    /// Validate the tree shape.
    ///
    /// Ids must be non-empty, group ids unique, item ids unique across the
    /// whole tree, and each item's `parent_id` must name its enclosing group.
    /// Groups without items are accepted.
    pub fn validate(&self) -> std::result::Result<(), CatalogError> {
        let mut group_ids = HashSet::new();
        let mut item_ids = HashSet::new();

        for (position, group) in self.groups.iter().enumerate() {
            if group.id.trim().is_empty() {
                return Err(CatalogError::EmptyGroupId(position));
            }
            if !group_ids.insert(group.id.as_str()) {
                return Err(CatalogError::DuplicateGroup(group.id.clone()));
            }

            for (position, item) in group.items.iter().enumerate() {
                if item.id.trim().is_empty() {
                    return Err(CatalogError::EmptyItemId {
                        group: group.id.clone(),
                        position,
                    });
                }
                if item.parent_id != group.id {
                    return Err(CatalogError::ParentMismatch {
                        item: item.id.clone(),
                        declared: item.parent_id.clone(),
                        group: group.id.clone(),
                    });
                }
                if !item_ids.insert(item.id.as_str()) {
                    return Err(CatalogError::DuplicateItem(item.id.clone()));
                }
            }
        }

        Ok(())
    }

    /// Look up a group by id
    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.id == id)
    }

    /// Total number of items across all groups
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|group| group.items.len()).sum()
    }
}
