//! Qpid JMS connection factory handle.
//!
//! A configuration-only model of the client library's connection factory: it holds the
//! remote URI, credentials, client id, delivery flags, timeouts and the object-message
//! deserialization policy. It opens no sockets; a messaging runtime consumes it.
//!
//! # Core Features
//!
//! - **URI options**: `jms.*` query parameters on the remote URI are applied to the factory
//!   and stripped from the stored URI. Unknown `jms.*` options are rejected.
//! - **Deserialization policy**: [`DefaultDeserializationPolicy`] holds allow/deny lists of
//!   type names, packages and `prefix.*` patterns; deny always wins.
//! - **Pluggable policy**: any [`DeserializationPolicy`] implementation can be installed.
//!
//! # Examples
//!
//! ```rust
//! use qpid_jms::{ConnectionFactory, DeserializationPolicy, JmsError};
//!
//! # fn main() -> Result<(), JmsError> {
//! let factory = ConnectionFactory::from_uri(
//!     "amqp://broker:5672?jms.clientID=orders&jms.deserializationPolicy.whiteList=com.acme.*",
//! )?;
//!
//! assert_eq!(factory.remote_uri(), "amqp://broker:5672");
//! assert_eq!(factory.client_id(), Some("orders"));
//! assert!(factory.deserialization_policy().is_trusted_type("com.acme.Order"));
//! assert!(!factory.deserialization_policy().is_trusted_type("java.net.URL"));
//! # Ok(())
//! # }
//! ```

mod error;
mod factory;
mod policy;
mod uri;

pub use error::{JmsError, JmsErrorExt};
pub use factory::{ConnectionFactory, DEFAULT_REMOTE_URI};
pub use policy::{
    CATCH_ALL_WILDCARD, DEFAULT_ALLOW_LIST, DEFAULT_DENY_LIST, DefaultDeserializationPolicy,
    DeserializationPolicy,
};
