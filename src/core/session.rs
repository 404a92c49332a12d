use crate::domain::{UserId, UserProfile};
use crate::errors::{Result, TrackerError};

/// The signed-in user, passed explicitly to whatever needs an identity.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<UserProfile>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, profile: UserProfile) {
        tracing::info!(uid = %profile.uid, "user signed in");
        self.user = Some(profile);
    }

    pub fn logout(&mut self) {
        if let Some(profile) = self.user.take() {
            tracing::info!(uid = %profile.uid, "user signed out");
        }
    }

    pub fn current_user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Identity of the signed-in user, or `NotLoggedIn`.
    pub fn require_user(&self) -> Result<&UserId> {
        self.user
            .as_ref()
            .map(|profile| &profile.uid)
            .ok_or(TrackerError::NotLoggedIn)
    }

    /// Replaces the editable profile fields of the signed-in user.
    pub fn update_profile(
        &mut self,
        display_name: Option<String>,
        photo_url: Option<String>,
    ) -> Result<&UserProfile> {
        let profile = self.user.as_mut().ok_or(TrackerError::NotLoggedIn)?;
        if display_name.is_some() {
            profile.display_name = display_name;
        }
        if photo_url.is_some() {
            profile.photo_url = photo_url;
        }
        Ok(profile)
    }
}
