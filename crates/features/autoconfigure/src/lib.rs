//! # Qpid JMS auto-configuration
//!
//! Turns a [`QpidJmsProperties`](qpid_domain::properties::QpidJmsProperties) record into a
//! ready-to-use [`qpid_jms::ConnectionFactory`].
//!
//! ## Resolution
//!
//! 1.  **Endpoint ([`resolve_remote_uri`]):** the configured remote URL, or
//!     `amqp://localhost:5672` when it is absent or empty.
//! 2.  **Transport seed:** the factory is created from the endpoint; `jms.*` options in the
//!     URL are applied by the transport at this point.
//! 3.  **Explicit overrides ([`ConnectionFactoryBuilder`]):** credentials and client id when
//!     non-empty; receive-local flags whenever they are set, even to `false`.
//! 4.  **Deserialization policy ([`PolicyBuilder`]):** configured allow/deny lists replace
//!     the factory's lists verbatim.
//!
//! Empty strings are treated as absent everywhere. Every failure is reported as a
//! [`ConstructionError`].
//!
//! ## Example
//!
//! ```rust
//! use qpid_autoconfigure::ConnectionFactoryBuilder;
//! use qpid_domain::properties::QpidJmsProperties;
//!
//! let props = QpidJmsProperties {
//!     remote_url: Some("amqp://broker:5672?jms.receiveLocalOnly=false".into()),
//!     receive_local_only: Some(true),
//!     ..Default::default()
//! };
//!
//! let factory = ConnectionFactoryBuilder::new(&props).build()?;
//! assert_eq!(factory.remote_uri(), "amqp://broker:5672");
//! assert!(factory.is_receive_local_only());
//! # Ok::<(), qpid_autoconfigure::ConstructionError>(())
//! ```

mod builder;
mod error;
mod policy;
mod resolver;

pub use crate::builder::ConnectionFactoryBuilder;
pub use crate::error::{ConstructionError, ConstructionErrorExt};
pub use crate::policy::PolicyBuilder;
pub use crate::resolver::resolve_remote_uri;
