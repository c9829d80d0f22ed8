use crate::client::{endpoint, require_id, require_text, revisioned, Client};
use crate::core::error::Result;
use crate::models::{Membership, MembershipState};
use serde::Serialize;

#[derive(Serialize)]
struct Invitation<'a> {
    list_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    muted: bool,
}

#[derive(Serialize)]
struct Acceptance {
    state: MembershipState,
    revision: u64,
    muted: bool,
}

impl Client {
    /// Memberships visible to the user, optionally restricted to one list.
    pub async fn memberships(&self, list_id: Option<u64>) -> Result<Vec<Membership>> {
        match list_id {
            Some(list_id) => {
                require_id("list_id", list_id)?;
                self.get(&endpoint(
                    "memberships",
                    &[("list_id", list_id.to_string())],
                ))
                .await
            }
            None => self.get("memberships").await,
        }
    }

    /// Invite an existing user to a list. Only `201 Created` counts as success.
    pub async fn invite_member_by_user_id(
        &self,
        list_id: u64,
        user_id: u64,
        muted: bool,
    ) -> Result<Membership> {
        require_id("list_id", list_id)?;
        require_id("user_id", user_id)?;
        let body = Invitation {
            list_id,
            user_id: Some(user_id),
            email: None,
            muted,
        };
        self.post("memberships", &body).await
    }

    pub async fn invite_member_by_email(
        &self,
        list_id: u64,
        email: &str,
        muted: bool,
    ) -> Result<Membership> {
        require_id("list_id", list_id)?;
        require_text("email", email)?;
        let body = Invitation {
            list_id,
            user_id: None,
            email: Some(email),
            muted,
        };
        self.post("memberships", &body).await
    }

    pub async fn accept_membership(
        &self,
        membership: &Membership,
        muted: bool,
    ) -> Result<Membership> {
        require_id("membership.id", membership.id)?;
        let body = Acceptance {
            state: MembershipState::Accepted,
            revision: membership.revision,
            muted,
        };
        self.patch(&format!("memberships/{}", membership.id), &body)
            .await
    }

    pub async fn reject_invite(&self, membership: &Membership) -> Result<()> {
        require_id("membership.id", membership.id)?;
        self.delete(&revisioned(
            "memberships",
            membership.id,
            membership.revision,
        ))
        .await
    }

    /// Remove a member from a list. Same wire call as rejecting an invitation.
    pub async fn remove_member(&self, membership: &Membership) -> Result<()> {
        self.reject_invite(membership).await
    }
}
