use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A region in the electoral hierarchy, e.g. a district containing villages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionNode {
    /// Region name.
    #[serde(default)]
    pub name: String,
    /// Votes counted directly in this region.
    pub votes: u64,
    /// Contained regions. A leaf has an empty list; a missing list is malformed.
    #[serde(default)]
    pub sub_regions: Option<Vec<RegionNode>>,
}

impl RegionNode {
    /// Create a region with the given children.
    pub fn new(name: impl Into<String>, votes: u64, sub_regions: Vec<RegionNode>) -> Self {
        Self {
            name: name.into(),
            votes,
            sub_regions: Some(sub_regions),
        }
    }

    /// Create a region with no children.
    pub fn leaf(name: impl Into<String>, votes: u64) -> Self {
        Self::new(name, votes, Vec::new())
    }
}

/// Total the votes of a region and all of its sub-regions.
/// An absent tree has zero votes.
pub fn count_votes_in_regions(region_tree: Option<&RegionNode>) -> Result<u64> {
    let region = match region_tree {
        Some(region) => region,
        None => return Ok(0),
    };
    let sub_regions = region.sub_regions.as_ref().ok_or_else(|| {
        warn!("Region {} has no sub-region list", region.name);
        Error::MalformedRegion {
            region: region.name.clone(),
        }
    })?;

    sub_regions.iter().try_fold(region.votes, |sum, sub_region| {
        sum.checked_add(count_votes_in_regions(Some(sub_region))?)
            .ok_or(Error::VoteOverflow)
    })
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_level() {
        let tree = RegionNode::new("Root", 5, vec![RegionNode::leaf("Child", 3)]);
        assert_eq!(count_votes_in_regions(Some(&tree)), Ok(8));
    }

    #[test]
    fn nested() {
        assert_eq!(count_votes_in_regions(Some(&RegionNode::example())), Ok(21));
    }

    #[test]
    fn absent_tree() {
        assert_eq!(count_votes_in_regions(None), Ok(0));
    }

    #[test]
    fn missing_sub_regions() {
        let tree = RegionNode::new(
            "Root",
            5,
            vec![RegionNode {
                name: "Broken".to_string(),
                votes: 1,
                sub_regions: None,
            }],
        );
        assert_eq!(
            count_votes_in_regions(Some(&tree)),
            Err(Error::MalformedRegion {
                region: "Broken".to_string()
            })
        );
    }

    #[test]
    fn overflow() {
        let tree = RegionNode::new("Root", u64::MAX, vec![RegionNode::leaf("Child", 1)]);
        assert_eq!(count_votes_in_regions(Some(&tree)), Err(Error::VoteOverflow));
    }

    #[test]
    fn from_json() {
        let tree: RegionNode = serde_json::from_str(
            r#"{"votes": 5, "subRegions": [{"name": "Ward 1", "votes": 3, "subRegions": []}]}"#,
        )
        .unwrap();
        assert_eq!(count_votes_in_regions(Some(&tree)), Ok(8));

        let leaf_without_list: RegionNode =
            serde_json::from_str(r#"{"name": "Ward 2", "votes": 3}"#).unwrap();
        assert!(count_votes_in_regions(Some(&leaf_without_list)).is_err());
    }
}
