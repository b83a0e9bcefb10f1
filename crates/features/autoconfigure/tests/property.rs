use proptest::prelude::*;
use qpid_autoconfigure::{ConnectionFactoryBuilder, PolicyBuilder};
use qpid_domain::properties::QpidJmsProperties;

fn properties(remote_url: &str) -> QpidJmsProperties {
    QpidJmsProperties { remote_url: Some(remote_url.to_owned()), ..Default::default() }
}

fn credential() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[A-Za-z0-9_]{0,12}")
}

proptest! {
    #[test]
    fn explicit_flags_always_win(uri_flag: bool, explicit: Option<bool>) {
        let props = QpidJmsProperties {
            receive_local_only: explicit,
            ..properties(&format!("amqp://localhost:5672?jms.receiveLocalOnly={uri_flag}"))
        };

        let factory = ConnectionFactoryBuilder::new(&props).build().unwrap();

        prop_assert_eq!(factory.is_receive_local_only(), explicit.unwrap_or(uri_flag));
    }

    #[test]
    fn credentials_apply_only_when_non_empty(username in credential(), password in credential()) {
        let props = QpidJmsProperties {
            username: username.clone(),
            password: password.clone(),
            ..properties("amqp://localhost:5672?jms.username=uri&jms.password=uri-secret")
        };

        let factory = ConnectionFactoryBuilder::new(&props).build().unwrap();

        let expected_user = username.filter(|u| !u.is_empty()).unwrap_or_else(|| "uri".into());
        let expected_pass = password.filter(|p| !p.is_empty()).unwrap_or_else(|| "uri-secret".into());
        prop_assert_eq!(factory.username(), Some(expected_user.as_str()));
        prop_assert_eq!(factory.password(), Some(expected_pass.as_str()));
    }

    #[test]
    fn supplied_lists_are_kept_verbatim(allow in "[a-z][a-z.*,]{0,24}", deny in "[a-z][a-z.*;]{0,24}") {
        let policy = PolicyBuilder::new().allow_list(Some(&allow)).deny_list(Some(&deny)).build();

        prop_assert_eq!(policy.allow_list(), allow.as_str());
        prop_assert_eq!(policy.deny_list(), deny.as_str());
    }
}
