use crate::redact::{REDACTED, redact_uri};
use serde::{Deserialize, Deserializer, de};
use std::fmt;

/// Qpid JMS client settings supplied by the host application.
///
/// Every field is optional. An empty string carries the same meaning as an absent
/// value; use the accessor methods, which apply that rule, instead of reading the
/// fields directly.
///
/// Keys are accepted in the documented camelCase form (`remoteURL`, `clientId`, ...)
/// as well as `snake_case`, which is what environment-variable sources produce.
#[derive(Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QpidJmsProperties {
    #[serde(rename = "remoteURL", alias = "remoteUrl", alias = "remote_url", alias = "remoteurl")]
    pub remote_url: Option<String>,

    pub username: Option<String>,

    pub password: Option<String>,

    #[serde(rename = "clientId", alias = "client_id", alias = "clientid")]
    pub client_id: Option<String>,

    /// Tri-state: `None` keeps whatever the remote URL (or the client default) says.
    #[serde(
        rename = "receiveLocalOnly",
        alias = "receive_local_only",
        alias = "receivelocalonly",
        deserialize_with = "deserialize_flag"
    )]
    pub receive_local_only: Option<bool>,

    /// Tri-state: `None` keeps whatever the remote URL (or the client default) says.
    #[serde(
        rename = "receiveNoWaitLocalOnly",
        alias = "receive_no_wait_local_only",
        alias = "receivenowaitlocalonly",
        deserialize_with = "deserialize_flag"
    )]
    pub receive_no_wait_local_only: Option<bool>,

    #[serde(
        rename = "deserializationPolicy",
        alias = "deserialization_policy",
        alias = "deserializationpolicy"
    )]
    pub deserialization_policy: DeserializationPolicyProperties,
}

/// Allow/deny lists restricting which object-message payload types may be deserialized.
///
/// Both are comma separated lists of type names, package names or `prefix.*` patterns.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeserializationPolicyProperties {
    #[serde(rename = "whiteList", alias = "white_list", alias = "whitelist")]
    pub white_list: Option<String>,

    #[serde(rename = "blackList", alias = "black_list", alias = "blacklist")]
    pub black_list: Option<String>,
}

impl QpidJmsProperties {
    #[must_use]
    pub fn remote_url(&self) -> Option<&str> {
        non_empty(self.remote_url.as_deref())
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        non_empty(self.username.as_deref())
    }

    #[must_use]
    pub fn password(&self) -> Option<&str> {
        non_empty(self.password.as_deref())
    }

    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        non_empty(self.client_id.as_deref())
    }
}

impl DeserializationPolicyProperties {
    #[must_use]
    pub fn white_list(&self) -> Option<&str> {
        non_empty(self.white_list.as_deref())
    }

    #[must_use]
    pub fn black_list(&self) -> Option<&str> {
        non_empty(self.black_list.as_deref())
    }
}

impl QpidJmsProperties {
    /// Layers `other` on top of `self`: every value `other` supplies wins.
    ///
    /// Empty strings in `other` count as absent and do not hide the value below.
    #[must_use]
    pub fn overlay(self, other: Self) -> Self {
        Self {
            remote_url: pick(self.remote_url, other.remote_url),
            username: pick(self.username, other.username),
            password: pick(self.password, other.password),
            client_id: pick(self.client_id, other.client_id),
            receive_local_only: other.receive_local_only.or(self.receive_local_only),
            receive_no_wait_local_only: other
                .receive_no_wait_local_only
                .or(self.receive_no_wait_local_only),
            deserialization_policy: DeserializationPolicyProperties {
                white_list: pick(
                    self.deserialization_policy.white_list,
                    other.deserialization_policy.white_list,
                ),
                black_list: pick(
                    self.deserialization_policy.black_list,
                    other.deserialization_policy.black_list,
                ),
            },
        }
    }
}

fn pick(lower: Option<String>, upper: Option<String>) -> Option<String> {
    upper.filter(|v| !v.is_empty()).or(lower)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Text(String),
}

/// Reads a tri-state flag from a boolean or a `true`/`false` string.
///
/// An empty string is absent, like everywhere else in the record.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawFlag>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawFlag::Bool(flag)) => Ok(Some(flag)),
        Some(RawFlag::Text(text)) if text.is_empty() => Ok(None),
        Some(RawFlag::Text(text)) if text.eq_ignore_ascii_case("true") => Ok(Some(true)),
        Some(RawFlag::Text(text)) if text.eq_ignore_ascii_case("false") => Ok(Some(false)),
        Some(RawFlag::Text(text)) => {
            Err(de::Error::custom(format!("expected 'true' or 'false', got '{text}'")))
        },
    }
}

/// Treats `Some("")` as absent.
#[must_use]
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl fmt::Debug for QpidJmsProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QpidJmsProperties")
            .field("remote_url", &self.remote_url.as_deref().map(redact_uri))
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .field("client_id", &self.client_id)
            .field("receive_local_only", &self.receive_local_only)
            .field("receive_no_wait_local_only", &self.receive_no_wait_local_only)
            .field("deserialization_policy", &self.deserialization_policy)
            .finish()
    }
}
