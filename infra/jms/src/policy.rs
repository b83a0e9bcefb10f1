//! Object-message deserialization policy.
//!
//! A type name is trusted only if it matches an allow-list entry and no deny-list
//! entry. Entries are matched as:
//!
//! * `*` matches every type name,
//! * `prefix*` matches names that start with `prefix` (so `org.acme.*` covers every
//!   type below `org.acme.`),
//! * anything else matches the exact type name, or any type inside that package or one of
//!   its subpackages (`java.rmi` covers `java.rmi.server.UnicastRemoteObject`).

use std::any::Any;
use std::fmt;

/// The catch-all entry.
pub const CATCH_ALL_WILDCARD: &str = "*";

/// Allow list installed when nothing else is configured.
///
/// Permissive on purpose (it mirrors the client library default). Production
/// deployments should replace it with the packages they actually exchange.
pub const DEFAULT_ALLOW_LIST: &str = CATCH_ALL_WILDCARD;

/// Deny list installed when nothing else is configured.
pub const DEFAULT_DENY_LIST: &str = "";

const ENTRY_SEPARATORS: [char; 2] = [',', ';'];

/// Decides which payload types may be reconstituted from received messages.
pub trait DeserializationPolicy: Any + fmt::Debug + Send + Sync {
    /// Returns `true` when objects of `type_name` may be deserialized.
    fn is_trusted_type(&self, type_name: &str) -> bool;

    /// Returns an independent copy, used when the owning factory is cloned.
    fn copy(&self) -> Box<dyn DeserializationPolicy>;
}

/// Allow/deny-list policy used by every new connection factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultDeserializationPolicy {
    allow_list: String,
    deny_list: String,
    allow: Vec<String>,
    deny: Vec<String>,
}

impl Default for DefaultDeserializationPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOW_LIST, DEFAULT_DENY_LIST)
    }
}

impl DefaultDeserializationPolicy {
    #[must_use]
    pub fn new(allow_list: impl Into<String>, deny_list: impl Into<String>) -> Self {
        let allow_list = allow_list.into();
        let deny_list = deny_list.into();
        Self { allow: split_entries(&allow_list), deny: split_entries(&deny_list), allow_list, deny_list }
    }

    /// The allow list exactly as configured.
    #[must_use]
    pub fn allow_list(&self) -> &str {
        &self.allow_list
    }

    /// The deny list exactly as configured.
    #[must_use]
    pub fn deny_list(&self) -> &str {
        &self.deny_list
    }

    #[must_use]
    pub fn allow_entries(&self) -> &[String] {
        &self.allow
    }

    #[must_use]
    pub fn deny_entries(&self) -> &[String] {
        &self.deny
    }

    /// Replaces the allow list; the previous entries are discarded.
    pub fn set_allow_list(&mut self, list: impl Into<String>) {
        self.allow_list = list.into();
        self.allow = split_entries(&self.allow_list);
    }

    /// Replaces the deny list; the previous entries are discarded.
    pub fn set_deny_list(&mut self, list: impl Into<String>) {
        self.deny_list = list.into();
        self.deny = split_entries(&self.deny_list);
    }
}

impl DeserializationPolicy for DefaultDeserializationPolicy {
    fn is_trusted_type(&self, type_name: &str) -> bool {
        if self.deny.iter().any(|entry| matches_entry(type_name, entry)) {
            return false;
        }
        self.allow.iter().any(|entry| matches_entry(type_name, entry))
    }

    fn copy(&self) -> Box<dyn DeserializationPolicy> {
        Box::new(self.clone())
    }
}

impl fmt::Display for DefaultDeserializationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "allow=[{}] deny=[{}]", self.allow_list, self.deny_list)
    }
}

fn split_entries(list: &str) -> Vec<String> {
    list.split(ENTRY_SEPARATORS)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_owned)
        .collect()
}

fn matches_entry(type_name: &str, entry: &str) -> bool {
    if entry == CATCH_ALL_WILDCARD {
        return true;
    }
    if let Some(prefix) = entry.strip_suffix('*') {
        return type_name.starts_with(prefix);
    }
    type_name == entry || type_name.strip_prefix(entry).is_some_and(|rest| rest.starts_with('.'))
}
