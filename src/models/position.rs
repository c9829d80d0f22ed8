use crate::core::types::PositionKind;
use serde::{Deserialize, Serialize};

/// Advisory ordering of member ids.
///
/// `values` may name ids that no longer exist and may omit ids that were never
/// reordered; an empty `values` means the parent was never reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub id: u64,
    #[serde(default)]
    pub values: Vec<u64>,
    pub revision: u64,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<PositionKind>,
}

impl Position {
    pub fn is_reordered(&self) -> bool {
        !self.values.is_empty()
    }

    /// Order `ids` by this position: listed ids first in `values` order, the rest after
    /// in their original order. Stale entries in `values` are ignored.
    pub fn sort_ids(&self, ids: &[u64]) -> Vec<u64> {
        let mut ordered: Vec<u64> = self
            .values
            .iter()
            .copied()
            .filter(|id| ids.contains(id))
            .collect();
        ordered.extend(ids.iter().copied().filter(|id| !self.values.contains(id)));
        ordered
    }
}
