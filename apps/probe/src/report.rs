//! Plain-text report of a resolved connection factory.

use qpid::domain::constants::{
    BLACK_LIST, CLIENT_ID, DESERIALIZATION_POLICY, PASSWORD, RECEIVE_LOCAL_ONLY,
    RECEIVE_NO_WAIT_LOCAL_ONLY, REMOTE_URL, USERNAME, WHITE_LIST,
};
use qpid::domain::redact::{REDACTED, redact_uri};
use qpid::jms::ConnectionFactory;
use std::io::{self, Write};

const UNSET: &str = "<unset>";
const CUSTOM_POLICY: &str = "<custom policy>";

/// Writes the effective factory settings, one `key = value` line each.
///
/// The password is never printed, neither on its own nor inside the remote URI.
pub(crate) fn write_factory(out: &mut impl Write, factory: &ConnectionFactory) -> io::Result<()> {
    let password = factory.password().map_or(UNSET, |_| REDACTED);
    let (allow, deny) = factory
        .default_deserialization_policy()
        .map_or((CUSTOM_POLICY, CUSTOM_POLICY), |p| (p.allow_list(), p.deny_list()));

    let rows = [
        (REMOTE_URL.to_owned(), redact_uri(factory.remote_uri())),
        (USERNAME.to_owned(), factory.username().unwrap_or(UNSET).to_owned()),
        (PASSWORD.to_owned(), password.to_owned()),
        (CLIENT_ID.to_owned(), factory.client_id().unwrap_or(UNSET).to_owned()),
        (RECEIVE_LOCAL_ONLY.to_owned(), factory.is_receive_local_only().to_string()),
        (RECEIVE_NO_WAIT_LOCAL_ONLY.to_owned(), factory.is_receive_no_wait_local_only().to_string()),
        (format!("{DESERIALIZATION_POLICY}.{WHITE_LIST}"), allow.to_owned()),
        (format!("{DESERIALIZATION_POLICY}.{BLACK_LIST}"), deny.to_owned()),
    ];

    let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or_default();
    for (key, value) in rows {
        writeln!(out, "{key:<width$} = {value}")?;
    }
    Ok(())
}

/// Writes one verdict line per type name and returns how many were rejected.
pub(crate) fn write_checks(
    out: &mut impl Write,
    factory: &ConnectionFactory,
    type_names: &[String],
) -> io::Result<usize> {
    let policy = factory.deserialization_policy();
    let mut rejected = 0;

    for name in type_names {
        let verdict = if policy.is_trusted_type(name) {
            "TRUSTED "
        } else {
            rejected += 1;
            "REJECTED"
        };
        writeln!(out, "{verdict} {name}")?;
    }
    Ok(rejected)
}
