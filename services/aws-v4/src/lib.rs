//! AWS SigV4 signing for laws.
//!
//! This crate signs `http::Request<Bytes>` with the AWS Signature Version 4
//! header scheme.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bytes::Bytes;
//! use laws_aws_v4::{authenticate, ClientConfig, StaticCredentialProvider};
//! use laws_core::{Context, OsEnv};
//!
//! # async fn example() -> laws_core::Result<()> {
//! let ctx = Context::new().with_env(OsEnv);
//! let config = ClientConfig::new(
//!     "us-east-1",
//!     StaticCredentialProvider::new("access_key_id", "secret_access_key"),
//! );
//!
//! let req = http::Request::post("https://dynamodb.us-east-1.amazonaws.com/")
//!     .header("x-amz-target", "DynamoDB_20120810.ListTables")
//!     .body(Bytes::from_static(b"{}"))?;
//!
//! let signed = authenticate(&ctx, &req, &config, "dynamodb").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Credential Sources
//!
//! - [`StaticCredentialProvider`]: fixed access key and secret
//! - [`EnvCredentialProvider`]: `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and `AWS_SESSION_TOKEN`
//! - [`credential_fn`]: any async closure
//!
//! Credentials are requested on every signing, nothing is cached.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;

mod config;
pub use config::ClientConfig;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::{authenticate, RequestSigner};

mod provide_credential;
pub use provide_credential::*;
