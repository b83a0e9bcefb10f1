use crate::error::JmsError;
use crate::policy::{DefaultDeserializationPolicy, DeserializationPolicy};
use crate::uri::{JMS_OPTION_PREFIX, parse_remote_uri};
use qpid_domain::redact::{REDACTED, redact_uri};
use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Remote URI used when nothing else is configured.
pub const DEFAULT_REMOTE_URI: &str = "amqp://localhost:5672";

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
const DEFAULT_CLOSE_TIMEOUT: Duration = Duration::from_secs(60);

/// A fully configured, not yet connected, Qpid JMS connection factory.
///
/// The factory only carries settings. Connections are opened by the messaging
/// runtime that receives it.
///
/// `jms.*` query options embedded in the remote URI are applied to the factory when
/// the URI is set and removed from the stored URI; other options are left for the
/// transport.
pub struct ConnectionFactory {
    remote_uri: String,
    username: Option<String>,
    password: Option<String>,
    client_id: Option<String>,
    receive_local_only: bool,
    receive_no_wait_local_only: bool,
    force_async_send: bool,
    force_sync_send: bool,
    local_message_priority: bool,
    local_message_expiry: bool,
    validate_property_names: bool,
    connect_timeout: Duration,
    close_timeout: Duration,
    send_timeout: Option<Duration>,
    request_timeout: Option<Duration>,
    queue_prefix: Option<String>,
    topic_prefix: Option<String>,
    deserialization_policy: Box<dyn DeserializationPolicy>,
}

impl Default for ConnectionFactory {
    fn default() -> Self {
        Self {
            remote_uri: DEFAULT_REMOTE_URI.to_owned(),
            username: None,
            password: None,
            client_id: None,
            receive_local_only: false,
            receive_no_wait_local_only: false,
            force_async_send: false,
            force_sync_send: false,
            local_message_priority: false,
            local_message_expiry: true,
            validate_property_names: true,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            close_timeout: DEFAULT_CLOSE_TIMEOUT,
            send_timeout: None,
            request_timeout: None,
            queue_prefix: None,
            topic_prefix: None,
            deserialization_policy: Box::new(DefaultDeserializationPolicy::default()),
        }
    }
}

impl ConnectionFactory {
    /// Creates a factory pointing at [`DEFAULT_REMOTE_URI`] with client defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a factory from a remote URI, applying its `jms.*` options.
    ///
    /// # Errors
    /// See [`ConnectionFactory::set_remote_uri`].
    pub fn from_uri(remote_uri: &str) -> Result<Self, JmsError> {
        let mut factory = Self::new();
        factory.set_remote_uri(remote_uri)?;
        Ok(factory)
    }

    /// Replaces the remote URI and applies the `jms.*` options it carries.
    ///
    /// Options are validated as a whole: on error the factory is left unchanged.
    ///
    /// # Errors
    /// * [`JmsError::InvalidUri`] if `remote_uri` cannot be parsed.
    /// * [`JmsError::InvalidOption`] if a known option has an unparsable value.
    /// * [`JmsError::UnusedOptions`] if any `jms.*` option is unknown.
    /// * [`JmsError::IncompatiblePolicy`] if a `jms.deserializationPolicy.*` option is used
    ///   while a custom policy is installed.
    pub fn set_remote_uri(&mut self, remote_uri: &str) -> Result<(), JmsError> {
        let parsed = parse_remote_uri(remote_uri)?;

        let mut staged = self.clone();
        let mut unused = Vec::new();
        for (option, value) in &parsed.jms_options {
            if !staged.apply_option(option, value)? {
                unused.push(format!("{JMS_OPTION_PREFIX}{option}"));
            }
        }

        if !unused.is_empty() {
            return Err(JmsError::UnusedOptions { options: unused, context: None });
        }

        staged.remote_uri = parsed.uri;
        debug!(
            remote_uri = %redact_uri(&staged.remote_uri),
            options = parsed.jms_options.len(),
            "Applied remote URI to connection factory"
        );
        *self = staged;
        Ok(())
    }

    /// Applies a single option; returns `Ok(false)` when the option is unknown.
    fn apply_option(&mut self, option: &str, value: &str) -> Result<bool, JmsError> {
        match option {
            "username" => self.username = Some(value.to_owned()),
            "password" => self.password = Some(value.to_owned()),
            "clientID" => self.client_id = Some(value.to_owned()),
            "receiveLocalOnly" => self.receive_local_only = parse_bool(option, value)?,
            "receiveNoWaitLocalOnly" => {
                self.receive_no_wait_local_only = parse_bool(option, value)?;
            },
            "forceAsyncSend" => self.force_async_send = parse_bool(option, value)?,
            "forceSyncSend" => self.force_sync_send = parse_bool(option, value)?,
            "localMessagePriority" => self.local_message_priority = parse_bool(option, value)?,
            "localMessageExpiry" => self.local_message_expiry = parse_bool(option, value)?,
            "validatePropertyNames" => {
                self.validate_property_names = parse_bool(option, value)?;
            },
            "connectTimeout" => self.connect_timeout = parse_millis(option, value)?,
            "closeTimeout" => self.close_timeout = parse_millis(option, value)?,
            "sendTimeout" => self.send_timeout = parse_optional_millis(option, value)?,
            "requestTimeout" => self.request_timeout = parse_optional_millis(option, value)?,
            "queuePrefix" => self.queue_prefix = Some(value.to_owned()),
            "topicPrefix" => self.topic_prefix = Some(value.to_owned()),
            "deserializationPolicy.whiteList" => {
                self.default_policy_for(option)?.set_allow_list(value);
            },
            "deserializationPolicy.blackList" => {
                self.default_policy_for(option)?.set_deny_list(value);
            },
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn default_policy_for(
        &mut self,
        option: &str,
    ) -> Result<&mut DefaultDeserializationPolicy, JmsError> {
        let context = format!("{JMS_OPTION_PREFIX}{option}");
        self.default_deserialization_policy_mut().ok_or_else(|| JmsError::IncompatiblePolicy {
            message: "list options require the default deserialization policy".into(),
            context: Some(context.into()),
        })
    }

    /// The remote URI without `jms.*` options.
    ///
    /// Userinfo and transport options are kept as given and may hold secrets; pass the
    /// value through [`qpid_domain::redact::redact_uri`] before logging it.
    #[must_use]
    pub fn remote_uri(&self) -> &str {
        &self.remote_uri
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = Some(username.into());
    }

    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = Some(password.into());
    }

    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub fn set_client_id(&mut self, client_id: impl Into<String>) {
        self.client_id = Some(client_id.into());
    }

    /// Whether `receive()` with a timeout only returns messages already buffered locally.
    #[must_use]
    pub const fn is_receive_local_only(&self) -> bool {
        self.receive_local_only
    }

    pub const fn set_receive_local_only(&mut self, enabled: bool) {
        self.receive_local_only = enabled;
    }

    /// Whether `receiveNoWait()` only returns messages already buffered locally.
    #[must_use]
    pub const fn is_receive_no_wait_local_only(&self) -> bool {
        self.receive_no_wait_local_only
    }

    pub const fn set_receive_no_wait_local_only(&mut self, enabled: bool) {
        self.receive_no_wait_local_only = enabled;
    }

    #[must_use]
    pub const fn is_force_async_send(&self) -> bool {
        self.force_async_send
    }

    #[must_use]
    pub const fn is_force_sync_send(&self) -> bool {
        self.force_sync_send
    }

    #[must_use]
    pub const fn is_local_message_priority(&self) -> bool {
        self.local_message_priority
    }

    #[must_use]
    pub const fn is_local_message_expiry(&self) -> bool {
        self.local_message_expiry
    }

    #[must_use]
    pub const fn is_validate_property_names(&self) -> bool {
        self.validate_property_names
    }

    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    #[must_use]
    pub const fn close_timeout(&self) -> Duration {
        self.close_timeout
    }

    /// `None` means no timeout.
    #[must_use]
    pub const fn send_timeout(&self) -> Option<Duration> {
        self.send_timeout
    }

    /// `None` means no timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    #[must_use]
    pub fn queue_prefix(&self) -> Option<&str> {
        self.queue_prefix.as_deref()
    }

    #[must_use]
    pub fn topic_prefix(&self) -> Option<&str> {
        self.topic_prefix.as_deref()
    }

    #[must_use]
    pub fn deserialization_policy(&self) -> &dyn DeserializationPolicy {
        &*self.deserialization_policy
    }

    pub fn set_deserialization_policy(&mut self, policy: Box<dyn DeserializationPolicy>) {
        self.deserialization_policy = policy;
    }

    /// The installed policy, if it is the [`DefaultDeserializationPolicy`].
    #[must_use]
    pub fn default_deserialization_policy(&self) -> Option<&DefaultDeserializationPolicy> {
        let policy: &dyn DeserializationPolicy = &*self.deserialization_policy;
        let policy: &dyn Any = policy;
        policy.downcast_ref()
    }

    /// Mutable access to the installed policy, if it is the [`DefaultDeserializationPolicy`].
    pub fn default_deserialization_policy_mut(
        &mut self,
    ) -> Option<&mut DefaultDeserializationPolicy> {
        let policy: &mut dyn DeserializationPolicy = &mut *self.deserialization_policy;
        let policy: &mut dyn Any = policy;
        policy.downcast_mut()
    }
}

impl Clone for ConnectionFactory {
    fn clone(&self) -> Self {
        Self {
            remote_uri: self.remote_uri.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            client_id: self.client_id.clone(),
            receive_local_only: self.receive_local_only,
            receive_no_wait_local_only: self.receive_no_wait_local_only,
            force_async_send: self.force_async_send,
            force_sync_send: self.force_sync_send,
            local_message_priority: self.local_message_priority,
            local_message_expiry: self.local_message_expiry,
            validate_property_names: self.validate_property_names,
            connect_timeout: self.connect_timeout,
            close_timeout: self.close_timeout,
            send_timeout: self.send_timeout,
            request_timeout: self.request_timeout,
            queue_prefix: self.queue_prefix.clone(),
            topic_prefix: self.topic_prefix.clone(),
            deserialization_policy: self.deserialization_policy.copy(),
        }
    }
}

impl fmt::Debug for ConnectionFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionFactory")
            .field("remote_uri", &redact_uri(&self.remote_uri))
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .field("client_id", &self.client_id)
            .field("receive_local_only", &self.receive_local_only)
            .field("receive_no_wait_local_only", &self.receive_no_wait_local_only)
            .field("force_async_send", &self.force_async_send)
            .field("force_sync_send", &self.force_sync_send)
            .field("local_message_priority", &self.local_message_priority)
            .field("local_message_expiry", &self.local_message_expiry)
            .field("validate_property_names", &self.validate_property_names)
            .field("connect_timeout", &self.connect_timeout)
            .field("close_timeout", &self.close_timeout)
            .field("send_timeout", &self.send_timeout)
            .field("request_timeout", &self.request_timeout)
            .field("queue_prefix", &self.queue_prefix)
            .field("topic_prefix", &self.topic_prefix)
            .field("deserialization_policy", &self.deserialization_policy)
            .finish()
    }
}

fn invalid_option(option: &str, message: impl Into<Cow<'static, str>>) -> JmsError {
    JmsError::InvalidOption {
        option: format!("{JMS_OPTION_PREFIX}{option}").into(),
        message: message.into(),
        context: None,
    }
}

fn parse_bool(option: &str, value: &str) -> Result<bool, JmsError> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(invalid_option(option, format!("expected 'true' or 'false', got '{value}'")))
    }
}

fn parse_millis(option: &str, value: &str) -> Result<Duration, JmsError> {
    value
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| invalid_option(option, format!("expected milliseconds, got '{value}': {e}")))
}

/// Negative values disable the timeout.
fn parse_optional_millis(option: &str, value: &str) -> Result<Option<Duration>, JmsError> {
    let millis = value
        .parse::<i64>()
        .map_err(|e| invalid_option(option, format!("expected milliseconds, got '{value}': {e}")))?;
    Ok(u64::try_from(millis).ok().map(Duration::from_millis))
}
