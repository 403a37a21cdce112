//! SDK version lookup.
//!
//! The response body reports the version of the AWS SDK bundled with the
//! function. `build.rs` records the resolved `aws-config` version from
//! `Cargo.lock`; `BundledSdkVersion` reads it back.

use crate::error::HandlerError;

/// Yields the version string embedded in the response body.
pub trait VersionProvider: Send + Sync {
    fn sdk_version(&self) -> Result<String, HandlerError>;
}

/// Version of the `aws-config` crate this binary was built against.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSdkVersion;

impl VersionProvider for BundledSdkVersion {
    fn sdk_version(&self) -> Result<String, HandlerError> {
        option_env!("AWS_SDK_VERSION")
            .map(str::to_string)
            .ok_or_else(|| {
                HandlerError::SdkVersionUnavailable(
                    "aws-config was not found in Cargo.lock at build time".to_string(),
                )
            })
    }
}

/// A fixed version string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticVersion(pub String);

impl StaticVersion {
    pub fn new(version: impl Into<String>) -> Self {
        StaticVersion(version.into())
    }
}

impl VersionProvider for StaticVersion {
    fn sdk_version(&self) -> Result<String, HandlerError> {
        Ok(self.0.clone())
    }
}
