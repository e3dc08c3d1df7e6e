use crate::{Context, Result};
use bytes::Bytes;
use std::fmt::Debug;
use std::sync::Arc;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is complete enough to sign with.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used by signer to load the credential.
///
/// It's invoked once for every signing call, implementations may perform
/// I/O and suspend. Returning `Ok(None)` means no credential is available.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load credential from current context.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

#[async_trait::async_trait]
impl<T: ProvideCredential + ?Sized> ProvideCredential for Arc<T> {
    type Credential = T::Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.as_ref().provide_credential(ctx).await
    }
}

/// SignRequest is the trait used by signer to produce the signed request.
#[async_trait::async_trait]
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this builder.
    type Credential: Send + Sync + Unpin + 'static;

    /// Sign the request.
    ///
    /// The input request is left untouched, a new request carrying the
    /// authentication headers is returned.
    async fn sign_request(
        &self,
        ctx: &Context,
        req: &http::Request<Bytes>,
        credential: &Self::Credential,
    ) -> Result<http::Request<Bytes>>;
}
