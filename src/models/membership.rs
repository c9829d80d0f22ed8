use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipState {
    Pending,
    Accepted,
    Rejected,
}

/// A user's share of a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub id: u64,
    pub user_id: u64,
    pub list_id: u64,
    pub state: MembershipState,
    #[serde(default)]
    pub owner: bool,
    #[serde(default)]
    pub muted: bool,
    pub revision: u64,
}
