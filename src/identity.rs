/// Who the current session belongs to
///
/// Resolved by the caller before a session opens. Only `user_id` matters to
/// the core: it scopes which rows are loaded and who owns new ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    user_id: Option<String>,
    display_name: String,
}

impl Identity {
    /// Local mode: no owner, every row in the backend is visible
    pub fn anonymous() -> Self {
        Self {
            user_id: None,
            display_name: "Guest".to_string(),
        }
    }

    pub fn user(user_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            display_name: display_name.into(),
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn is_anonymous(&self) -> bool {
        self.user_id.is_none()
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::anonymous()
    }
}
