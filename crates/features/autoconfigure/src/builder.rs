use crate::error::ConstructionError;
use crate::policy::PolicyBuilder;
use crate::resolver::resolve_remote_uri;
use qpid_domain::properties::QpidJmsProperties;
use qpid_jms::{ConnectionFactory, DeserializationPolicy};
use tracing::{debug, error};

/// Builds [`ConnectionFactory`] instances from a [`QpidJmsProperties`] record.
///
/// Precedence, lowest first: client defaults, `jms.*` options embedded in the remote
/// URL, then the explicit properties. Explicit values only apply when present and
/// non-empty; the tri-state flags apply whenever they are `Some`, including `Some(false)`.
///
/// The builder borrows the record and never mutates it, so [`ConnectionFactoryBuilder::build`]
/// can be called repeatedly and every call yields an independent factory.
#[derive(Debug)]
pub struct ConnectionFactoryBuilder<'a> {
    properties: &'a QpidJmsProperties,
    policy: Option<Box<dyn DeserializationPolicy>>,
}

impl<'a> ConnectionFactoryBuilder<'a> {
    #[must_use]
    pub const fn new(properties: &'a QpidJmsProperties) -> Self {
        Self { properties, policy: None }
    }

    /// Installs a custom deserialization policy in place of the client default.
    ///
    /// Configured allow/deny lists cannot be applied to a custom policy; building with
    /// both fails with [`ConstructionError::PolicyUnavailable`].
    #[must_use]
    pub fn deserialization_policy(mut self, policy: Box<dyn DeserializationPolicy>) -> Self {
        self.policy = Some(policy);
        self
    }

    /// The endpoint the factory will be seeded with.
    #[must_use]
    pub fn remote_uri(&self) -> &str {
        resolve_remote_uri(self.properties.remote_url())
    }

    /// Creates a configured connection factory.
    ///
    /// # Errors
    /// * [`ConstructionError::Transport`] if the remote URL or one of its `jms.*` options
    ///   is rejected.
    /// * [`ConstructionError::PolicyUnavailable`] if allow/deny lists are configured while
    ///   a custom policy is installed.
    pub fn build(&self) -> Result<ConnectionFactory, ConstructionError> {
        self.try_build().inspect_err(|e| {
            error!(error = %e, "Exception while creating Qpid JMS connection factory");
        })
    }

    fn try_build(&self) -> Result<ConnectionFactory, ConstructionError> {
        let props = self.properties;

        let mut factory = ConnectionFactory::new();
        if let Some(policy) = &self.policy {
            factory.set_deserialization_policy(policy.copy());
        }
        factory.set_remote_uri(self.remote_uri())?;

        if let Some(username) = props.username() {
            debug!(username, "Overriding username");
            factory.set_username(username);
        }
        if let Some(password) = props.password() {
            debug!("Overriding password");
            factory.set_password(password);
        }
        if let Some(client_id) = props.client_id() {
            debug!(client_id, "Overriding client id");
            factory.set_client_id(client_id);
        }
        if let Some(enabled) = props.receive_local_only {
            debug!(enabled, "Overriding receiveLocalOnly");
            factory.set_receive_local_only(enabled);
        }
        if let Some(enabled) = props.receive_no_wait_local_only {
            debug!(enabled, "Overriding receiveNoWaitLocalOnly");
            factory.set_receive_no_wait_local_only(enabled);
        }

        self.configure_deserialization_policy(&mut factory)?;

        Ok(factory)
    }

    fn configure_deserialization_policy(
        &self,
        factory: &mut ConnectionFactory,
    ) -> Result<(), ConstructionError> {
        let lists = &self.properties.deserialization_policy;
        let (allow, deny) = (lists.white_list(), lists.black_list());

        let Some(policy) = factory.default_deserialization_policy_mut() else {
            if allow.is_none() && deny.is_none() {
                debug!("Keeping custom deserialization policy");
                return Ok(());
            }
            return Err(ConstructionError::PolicyUnavailable {
                message: "allow/deny lists require the default deserialization policy".into(),
                context: None,
            });
        };

        *policy = PolicyBuilder::from(policy.clone()).allow_list(allow).deny_list(deny).build();
        Ok(())
    }
}
