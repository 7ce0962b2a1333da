//! Session token model and the credential providers injected into the gateway.

pub mod credentials;
pub mod token;

pub use credentials::*;
pub use token::*;
