use crate::{Context, Error, ProvideCredential, Result, SignRequest, SigningCredential};
use bytes::Bytes;
use std::sync::Arc;

/// Signer is the main struct used to sign the request.
///
/// Credentials are loaded from the provider on every call and never kept.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    provider: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        provider: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,

            provider: Arc::new(provider),
            builder: Arc::new(builder),
        }
    }

    /// Signing request.
    pub async fn sign(&self, req: &http::Request<Bytes>) -> Result<http::Request<Bytes>> {
        let cred = self
            .provider
            .provide_credential(&self.ctx)
            .await?
            .ok_or_else(|| Error::credential_invalid("no credential provided"))?;

        if !cred.is_valid() {
            return Err(Error::credential_invalid(
                "credential provided is incomplete",
            ));
        }

        self.builder.sign_request(&self.ctx, req, &cred).await
    }
}
