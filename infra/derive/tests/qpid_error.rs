use qpid_derive::qpid_error;
use std::borrow::Cow;

#[qpid_error]
pub enum PortError {
    #[error("Invalid number{}: {source}", format_context(.context))]
    Number { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u16, PortError> {
    Ok(raw.parse::<u16>()?)
}

#[test]
fn qpid_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/qpid_error_pass.rs");
}

#[test]
fn source_errors_convert_with_question_mark() {
    let err = parse("not-a-port").expect_err("parse should fail");
    assert!(matches!(err, PortError::Number { context: None, .. }));
    assert!(err.to_string().starts_with("Invalid number: "));
}

#[test]
fn context_is_attached_to_source_results() {
    let err = "70000".parse::<u16>().context("jms.connectTimeout").expect_err("should overflow");
    assert!(err.to_string().starts_with("Invalid number (jms.connectTimeout): "));
}

#[test]
fn context_overrides_existing_errors() {
    let result: Result<(), PortError> =
        Err(PortError::Rejected { message: "com.evil.Gadget".into(), context: None });

    let err = result.context("deny list").expect_err("error must be preserved");
    assert_eq!(err.to_string(), "Rejected (deny list): com.evil.Gadget");
}

#[test]
fn internal_variant_accepts_plain_strings() {
    let from_static: PortError = "policy missing".into();
    let from_owned: PortError = String::from("policy missing").into();

    assert_eq!(from_static.to_string(), "Internal error: policy missing");
    assert_eq!(from_owned.to_string(), from_static.to_string());
}
