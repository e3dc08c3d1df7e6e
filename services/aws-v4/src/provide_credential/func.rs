use crate::Credential;
use async_trait::async_trait;
use laws_core::{Context, ProvideCredential, Result};
use std::fmt::{Debug, Formatter};
use std::future::Future;

/// CredentialFn turns an async closure into a credential provider.
///
/// The closure is called once for every signing request, its error is
/// returned to the caller unchanged. Build it with [`credential_fn`].
pub struct CredentialFn<F> {
    f: F,
}

impl<F> Debug for CredentialFn<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialFn").finish_non_exhaustive()
    }
}

/// Create a provider from an async closure returning a [`Credential`].
///
/// ```
/// use laws_aws_v4::{credential_fn, Credential};
///
/// let provider = credential_fn(|| async {
///     Ok(Credential {
///         access_key_id: "access_key_id".to_string(),
///         secret_access_key: "secret_access_key".to_string(),
///         session_token: None,
///     })
/// });
/// ```
pub fn credential_fn<F, Fut>(f: F) -> CredentialFn<F>
where
    F: Fn() -> Fut + Send + Sync + Unpin + 'static,
    Fut: Future<Output = Result<Credential>> + Send + 'static,
{
    CredentialFn { f }
}

#[async_trait]
impl<F, Fut> ProvideCredential for CredentialFn<F>
where
    F: Fn() -> Fut + Send + Sync + Unpin + 'static,
    Fut: Future<Output = Result<Credential>> + Send + 'static,
{
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        (self.f)().await.map(Some)
    }
}
