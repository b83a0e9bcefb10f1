//! Facade crate for Qpid JMS auto-configuration.
//! Re-exports the record, loader, transport handle and builder crates.
//! Keep this crate thin: it should compose other crates, not implement resolution logic.
//!
//! ## Usage
//! - Load a [`domain::properties::QpidJmsProperties`] with [`kernel::config::load_properties`].
//! - Call [`connection_factory`] to get a configured [`jms::ConnectionFactory`].

pub use qpid_autoconfigure as autoconfigure;
use qpid_autoconfigure::{ConnectionFactoryBuilder, ConstructionError};
pub use qpid_domain as domain;
use qpid_domain::properties::QpidJmsProperties;
pub use qpid_jms as jms;
use qpid_jms::ConnectionFactory;
pub use qpid_kernel as kernel;

/// Builds a connection factory from `properties` with the default deserialization policy.
///
/// # Errors
/// Returns [`ConstructionError`] if the remote URL or one of its options is rejected.
pub fn connection_factory(
    properties: &QpidJmsProperties,
) -> Result<ConnectionFactory, ConstructionError> {
    ConnectionFactoryBuilder::new(properties).build()
}
