//! Integration with `?`-based error handling.

use std::num::ParseIntError;

use anyhow::{anyhow, Context, Result};
use verdict::{Fault, Outcome, UnitOutcome};

fn parse_port(raw: &str) -> Outcome<u16, String> {
    Outcome::capture_with(|| raw.parse::<u16>(), |e: ParseIntError| e.to_string())
        .verify(|port| *port >= 1024, || format!("port {} is privileged", raw))
}

fn configure(raw: &str) -> Result<u16> {
    let port = parse_port(raw).unwrap_or_raise(|e| anyhow!(e))?;
    Ok(port)
}

#[test]
fn unwrap_or_raise_feeds_question_mark() {
    assert_eq!(configure("8080").ok(), Some(8080));

    let error = configure("80").expect_err("privileged port must be rejected");
    assert_eq!(error.to_string(), "port 80 is privileged");

    assert!(configure("http").is_err());
}

#[test]
fn fault_is_a_std_error() {
    let outcome: UnitOutcome<Fault> = UnitOutcome::capture_panic(|| panic!("disk full"));
    let result = outcome.into_result().context("flushing cache");
    let error = result.expect_err("panic must surface as an error");
    assert_eq!(format!("{:#}", error), "flushing cache: computation panicked: disk full");
}
