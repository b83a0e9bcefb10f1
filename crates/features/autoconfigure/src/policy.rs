use qpid_domain::properties::non_empty;
use qpid_jms::{CATCH_ALL_WILDCARD, DefaultDeserializationPolicy};
use tracing::{debug, warn};

/// Derives the allow/deny lists attached to a connection factory.
///
/// Starts from the client defaults (`*` allowed, nothing denied) or from an existing
/// policy, and replaces a list only when a non-empty value is supplied. Supplied values
/// are kept verbatim; they are never merged with what was there before.
///
/// The default allow list trusts every type. Production deployments should supply the
/// packages they actually exchange; [`PolicyBuilder::build`] logs a warning whenever the
/// resulting allow list is the bare catch-all.
#[derive(Debug, Clone, Default)]
pub struct PolicyBuilder {
    policy: DefaultDeserializationPolicy,
}

impl PolicyBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn allow_list(mut self, list: Option<&str>) -> Self {
        if let Some(list) = non_empty(list) {
            debug!(allow_list = list, "Overriding deserialization allow list");
            self.policy.set_allow_list(list);
        }
        self
    }

    #[must_use]
    pub fn deny_list(mut self, list: Option<&str>) -> Self {
        if let Some(list) = non_empty(list) {
            debug!(deny_list = list, "Overriding deserialization deny list");
            self.policy.set_deny_list(list);
        }
        self
    }

    #[must_use]
    pub fn build(self) -> DefaultDeserializationPolicy {
        if self.policy.allow_entries() == [CATCH_ALL_WILDCARD] {
            warn!(
                "Deserialization allow list is '{CATCH_ALL_WILDCARD}': every object message type is trusted. \
                 Configure deserializationPolicy.whiteList to restrict it"
            );
        }
        self.policy
    }
}

impl From<DefaultDeserializationPolicy> for PolicyBuilder {
    fn from(policy: DefaultDeserializationPolicy) -> Self {
        Self { policy }
    }
}
