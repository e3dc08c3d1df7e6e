mod env;
pub use env::EnvCredentialProvider;

mod func;
pub use func::{credential_fn, CredentialFn};

mod r#static;
pub use r#static::StaticCredentialProvider;
