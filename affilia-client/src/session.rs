//! Per-session environment context.
//!
//! Visitor-facing operations forward the caller's environment (user agent,
//! language, client IP, accepted encoding) so the platform can attribute
//! actions correctly. The context is captured once per session and injected
//! into the [`ApiClient`](crate::client::ApiClient) at construction; models
//! read it from there rather than reaching into ambient state.

/// Environment values describing the end user's session.
///
/// Any field may be unset; server-side integrations often have no user agent
/// or encoding to report. Unset fields are omitted from request payloads.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    /// The visitor's user agent string.
    pub user_agent: Option<String>,
    /// The visitor's preferred language.
    pub language: Option<String>,
    /// The visitor's client IP address.
    pub client_ip: Option<String>,
    /// The visitor's accepted content encoding.
    pub encoding: Option<String>,
}

impl SessionContext {
    /// Creates an empty session context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the preferred language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the client IP address.
    pub fn with_client_ip(mut self, client_ip: impl Into<String>) -> Self {
        self.client_ip = Some(client_ip.into());
        self
    }

    /// Sets the accepted content encoding.
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let session = SessionContext::new()
            .with_user_agent("Mozilla/5.0")
            .with_language("en-GB")
            .with_client_ip("203.0.113.7");

        assert_eq!(session.user_agent.as_deref(), Some("Mozilla/5.0"));
        assert_eq!(session.language.as_deref(), Some("en-GB"));
        assert_eq!(session.client_ip.as_deref(), Some("203.0.113.7"));
        assert!(session.encoding.is_none());
    }
}
