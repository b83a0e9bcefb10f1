use qpid_domain::properties::{DeserializationPolicyProperties, QpidJmsProperties};
use qpid_jms::DeserializationPolicy;

pub fn properties(remote_url: &str) -> QpidJmsProperties {
    QpidJmsProperties { remote_url: Some(remote_url.to_owned()), ..Default::default() }
}

pub fn policy_lists(allow: Option<&str>, deny: Option<&str>) -> DeserializationPolicyProperties {
    DeserializationPolicyProperties {
        white_list: allow.map(str::to_owned),
        black_list: deny.map(str::to_owned),
    }
}

/// Trusts only `java.lang` types; stands in for an application-provided policy.
#[derive(Debug, Clone)]
pub struct JavaLangOnly;

impl DeserializationPolicy for JavaLangOnly {
    fn is_trusted_type(&self, type_name: &str) -> bool {
        type_name.starts_with("java.lang.")
    }

    fn copy(&self) -> Box<dyn DeserializationPolicy> {
        Box::new(self.clone())
    }
}
