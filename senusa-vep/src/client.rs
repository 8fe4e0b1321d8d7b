//! VEP region endpoint client.
//!
//! This module provides the [`AnnotationService`] seam the batch submitter talks
//! to, and [`VepClient`], its HTTP implementation, with a builder for the
//! endpoint and timeout settings.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;

use senusa_core::models::{AnnotationResult, VariantDescriptor};

use super::consts::{DEFAULT_VEP_API, JSON_MEDIA_TYPE};
use super::errors::ServiceError;

/// Anything able to annotate one chunk of variant descriptors.
///
/// Implementations return one result per annotated variant, in the order the
/// service produced them.
pub trait AnnotationService {
    fn annotate(&self, chunk: &[VariantDescriptor]) -> Result<Vec<AnnotationResult>, ServiceError>;
}

impl<T: AnnotationService + ?Sized> AnnotationService for &T {
    fn annotate(&self, chunk: &[VariantDescriptor]) -> Result<Vec<AnnotationResult>, ServiceError> {
        (**self).annotate(chunk)
    }
}

/// Request body of the region endpoint.
#[derive(Serialize, Debug)]
pub struct VariantRequest<'a> {
    pub variants: &'a [VariantDescriptor],
}

/// Builder for constructing a [`VepClient`] with custom configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use senusa_vep::client::VepClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = VepClient::builder()
///     .with_endpoint("https://grch37.rest.ensembl.org/vep/human/region/".to_string())
///     .finish()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct VepClientBuilder {
    endpoint: Option<String>,
    timeout: Option<Duration>,
}

impl VepClientBuilder {
    /// Creates a new, empty VepClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the annotation endpoint URL.
    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets a per-request timeout. Requests wait indefinitely when unset.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Consumes the builder and creates a VepClient.
    pub fn finish(self) -> Result<VepClient, ServiceError> {
        let endpoint = self.endpoint.unwrap_or_else(|| DEFAULT_VEP_API.to_string());

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ServiceError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(VepClient { endpoint, client })
    }
}

/// Blocking HTTP client for the VEP region endpoint.
///
/// Each call to [`AnnotationService::annotate`] is one POST carrying
/// `{ "variants": [...] }` with JSON content type and accept headers. No
/// authentication header is attached.
pub struct VepClient {
    /// Annotation endpoint URL
    pub endpoint: String,
    client: Client,
}

impl VepClient {
    /// Creates a new builder for constructing a [`VepClient`].
    pub fn builder() -> VepClientBuilder {
        VepClientBuilder::default()
    }
}

impl AnnotationService for VepClient {
    fn annotate(&self, chunk: &[VariantDescriptor]) -> Result<Vec<AnnotationResult>, ServiceError> {
        let body = VariantRequest { variants: chunk };

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, JSON_MEDIA_TYPE)
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .json(&body)
            .send()
            .map_err(|e| ServiceError::Transport(format!("POST {}: {}", self.endpoint, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Vec<AnnotationResult>>()
            .map_err(|e| ServiceError::MalformedBody(e.to_string()))
    }
}
