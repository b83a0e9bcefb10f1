use std::borrow::Cow;

/// The single error surfaced while building a connection factory.
///
/// The underlying transport error, when there is one, is kept as the `source()`.
#[qpid_derive::qpid_error]
pub enum ConstructionError {
    /// The transport rejected the remote URL or one of its `jms.*` options.
    #[error(
        "Failed to create the Qpid JMS connection factory{}: {source}. Make sure the remote URL is well formed and the Qpid JMS client library is available",
        format_context(.context)
    )]
    Transport { source: qpid_jms::JmsError, context: Option<Cow<'static, str>> },

    /// The installed deserialization policy cannot take the configured allow/deny lists.
    #[error(
        "Failed to create the Qpid JMS connection factory{}: {message}. Make sure the deserialization policy is the client library default",
        format_context(.context)
    )]
    PolicyUnavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
