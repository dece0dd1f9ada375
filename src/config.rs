//! Configuration for the generation service connection.
//!
//! Every knob lives in one [`ServiceConfig`] struct built via its builder,
//! so a configured client can be shared, logged, and diffed as a single
//! value. The library deliberately does **not** read the environment or
//! judge the values it is given — where the endpoint and token come from
//! (env vars, `.env`, flags) is the caller's concern, and a missing token
//! simply surfaces later as an HTTP 401 from the service.

use std::fmt;

/// Fixed default filename offered for the exported PDF.
pub const DEFAULT_PDF_FILENAME: &str = "documentation.pdf";

/// Connection settings for the remote generation service.
///
/// # Example
/// ```rust
/// use promptdoc::ServiceConfig;
///
/// let config = ServiceConfig::builder()
///     .endpoint("https://api.example.com/generate")
///     .token("secret")
///     .request_timeout_secs(90)
///     .build();
/// ```
#[derive(Clone)]
pub struct ServiceConfig {
    /// Full URL the generation request is POSTed to.
    pub endpoint: String,

    /// Bearer token sent in the `Authorization` header.
    pub token: String,

    /// Whole-request timeout in seconds. Default: 120.
    ///
    /// Generation backends routinely take tens of seconds for large code
    /// snippets, so this is generous; there are no retries, the single
    /// request either resolves or times out.
    pub request_timeout_secs: u64,

    /// Filename suggested for the exported PDF. Default: `documentation.pdf`.
    pub pdf_filename: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            token: String::new(),
            request_timeout_secs: 120,
            pdf_filename: DEFAULT_PDF_FILENAME.to_string(),
        }
    }
}

// Manual Debug so a token never lands in logs.
impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("pdf_filename", &self.pdf_filename)
            .finish()
    }
}

impl ServiceConfig {
    /// Create a new builder.
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ServiceConfig`].
#[derive(Debug)]
pub struct ServiceConfigBuilder {
    config: ServiceConfig,
}

impl ServiceConfigBuilder {
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.config.endpoint = url.into();
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config.token = token.into();
        self
    }

    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.config.request_timeout_secs = secs.max(1);
        self
    }

    pub fn pdf_filename(mut self, name: impl Into<String>) -> Self {
        self.config.pdf_filename = name.into();
        self
    }

    pub fn build(self) -> ServiceConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let c = ServiceConfig::builder().build();
        assert_eq!(c.request_timeout_secs, 120);
        assert_eq!(c.pdf_filename, DEFAULT_PDF_FILENAME);
    }

    #[test]
    fn timeout_floor_is_one_second() {
        let c = ServiceConfig::builder().request_timeout_secs(0).build();
        assert_eq!(c.request_timeout_secs, 1);
    }

    #[test]
    fn debug_redacts_token() {
        let c = ServiceConfig::builder().token("sk-very-secret").build();
        let shown = format!("{c:?}");
        assert!(!shown.contains("sk-very-secret"));
        assert!(shown.contains("<redacted>"));
    }
}
