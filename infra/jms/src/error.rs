use std::borrow::Cow;

/// Errors raised while configuring a [`crate::ConnectionFactory`].
#[qpid_derive::qpid_error]
pub enum JmsError {
    /// The remote URI is not a syntactically valid URI.
    #[error("Invalid remote URI{}: {source}", format_context(.context))]
    InvalidUri { source: url::ParseError, context: Option<Cow<'static, str>> },

    /// A `jms.*` option was recognised but its value could not be parsed.
    #[error("Invalid value for option '{option}'{}: {message}", format_context(.context))]
    InvalidOption {
        option: Cow<'static, str>,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// One or more `jms.*` options are not known to the connection factory.
    #[error(
        "Not all jms options could be set on the ConnectionFactory{}. Check the options are spelled correctly. Unused parameters=[{}]. This connection factory cannot be started.",
        format_context(.context),
        .options.join(", ")
    )]
    UnusedOptions { options: Vec<String>, context: Option<Cow<'static, str>> },

    /// The installed deserialization policy does not support the requested operation.
    #[error("Incompatible deserialization policy{}: {message}", format_context(.context))]
    IncompatiblePolicy { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
