use std::borrow::Cow;
use tether_derive::tether_error;

#[tether_error]
pub enum SampleError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Out of range{}: {message}", format_context(.context))]
    OutOfRange { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<i32, SampleError> {
    Ok(raw.parse::<i32>()?)
}

#[test]
fn tether_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/tether_error_pass.rs");
}

#[test]
fn source_errors_convert_through_question_mark() {
    let err = parse("x").unwrap_err();
    assert!(matches!(err, SampleError::Parse { context: None, .. }));
    assert!(err.to_string().starts_with("Parse error: "));
}

#[test]
fn context_is_attached_to_source_results() {
    let err = "x".parse::<i32>().context("reading port").unwrap_err();
    assert!(err.to_string().starts_with("Parse error (reading port): "));
}

#[test]
fn context_is_attached_to_own_results() {
    let res: Result<(), SampleError> =
        Err(SampleError::OutOfRange { message: "7 > 5".into(), context: None });
    let err = res.context("score").unwrap_err();
    assert_eq!(err.to_string(), "Out of range (score): 7 > 5");
}

#[test]
fn strings_become_internal_errors() {
    let borrowed: SampleError = "static failure".into();
    assert_eq!(borrowed.to_string(), "Internal error: static failure");

    let owned: SampleError = format!("failure #{}", 2).into();
    assert_eq!(owned.to_string(), "Internal error: failure #2");
}
