use crate::constants::{AWS_DEFAULT_REGION, AWS_REGION};
use crate::provide_credential::EnvCredentialProvider;
use crate::Credential;
use laws_core::{Context, Error, ProvideCredential, Result};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// ClientConfig carries everything [`crate::authenticate`] needs besides the
/// request itself.
#[derive(Clone)]
pub struct ClientConfig {
    /// Region used in the credential scope, like `us-east-1`.
    pub region: String,
    credential: Arc<dyn ProvideCredential<Credential = Credential>>,
}

impl Debug for ClientConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("region", &self.region)
            .field("credential", &self.credential)
            .finish()
    }
}

impl ClientConfig {
    /// Create a config with the given region and credential provider.
    pub fn new(
        region: &str,
        credential: impl ProvideCredential<Credential = Credential>,
    ) -> Self {
        Self {
            region: region.to_string(),
            credential: Arc::new(credential),
        }
    }

    /// Load config from the context env.
    ///
    /// Region comes from `AWS_REGION` or `AWS_DEFAULT_REGION`, credentials
    /// are read from env on every signing.
    pub fn from_env(ctx: &Context) -> Result<Self> {
        let lookup = |key: &str| ctx.env_var(key).filter(|v| !v.is_empty());
        let region = lookup(AWS_REGION)
            .or_else(|| lookup(AWS_DEFAULT_REGION))
            .ok_or_else(|| {
                Error::config_invalid(format!(
                    "region is required, please set {AWS_REGION} or {AWS_DEFAULT_REGION}"
                ))
            })?;

        Ok(Self::new(&region, EnvCredentialProvider::new()))
    }

    pub(crate) fn credential_provider(
        &self,
    ) -> Arc<dyn ProvideCredential<Credential = Credential>> {
        self.credential.clone()
    }
}
