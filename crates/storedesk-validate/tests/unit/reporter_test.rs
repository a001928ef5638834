//! Tests for report rendering

use crate::test_utils::{BAD_ORDER_CREATE, GOOD_ORDER_CREATE};
use storedesk_validate::{OutputFormat, Reporter, ValidationReport, fix, validate};

#[test]
fn test_output_format_parsing() {
    assert_eq!("human".parse::<OutputFormat>(), Ok(OutputFormat::Human));
    assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
    assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Human));
    assert!("yaml".parse::<OutputFormat>().is_err());
    assert_eq!(OutputFormat::default(), OutputFormat::Human);
}

#[test]
fn test_human_report_for_failed_validation() {
    let report = ValidationReport::new("order.graphql", validate(BAD_ORDER_CREATE));
    let output = Reporter::to_human_readable(&report);

    assert!(output.starts_with("=== Mutation Validation Report ==="));
    assert!(output.contains("Source:    order.graphql"));
    assert!(output.contains("Operation: orderCreate"));
    assert!(output.contains("Status: FAILED"));
    assert!(output.contains("--- Errors ---"));
    assert!(output.contains("  [MUT002] Field `orderCreate` has wrong syntax"));
    assert!(output.contains("--- Warnings ---"));
    assert!(output.contains("[MUT006] [legacy-order-input]"));
    assert!(output.contains("--- Suggestions ---"));
    assert!(output.contains("  $input: OrderInput!"));
    assert!(!output.contains("--- Fixed Mutation ---"));
}

#[test]
fn test_human_report_for_passed_validation() {
    let report = ValidationReport::new("<stdin>", validate(GOOD_ORDER_CREATE));
    let output = Reporter::render(&report, OutputFormat::Human);

    assert!(output.contains("Status: PASSED"));
    assert!(output.contains("Fields:      1 (orderCreate)"));
    assert!(!output.contains("--- Errors ---"));
    assert!(!output.contains("--- Warnings ---"));
}

#[test]
fn test_human_report_for_missing_header() {
    let report = ValidationReport::new("<stdin>", validate("{ shop { name } }"));
    let output = Reporter::to_human_readable(&report);

    assert!(output.contains("Operation: <missing>"));
    assert!(output.contains("Fields:      0"));
    assert!(output.contains("[MUT001]"));
    assert!(!output.contains("--- Variables ---"));
}

#[test]
fn test_fixed_text_is_rendered() {
    let fixed = fix(BAD_ORDER_CREATE);
    let report = ValidationReport::new("order.graphql", validate(&fixed)).with_fixed_text(fixed.clone());
    let output = Reporter::to_human_readable(&report);

    assert!(output.contains("--- Fixed Mutation ---"));
    assert!(output.contains(&fixed));
}

#[test]
fn test_json_report_shape() {
    let report = ValidationReport::new("order.graphql", validate(BAD_ORDER_CREATE));
    let json: serde_json::Value = serde_json::from_str(&Reporter::to_json(&report)).unwrap();

    assert_eq!(json["source"], "order.graphql");
    assert_eq!(json["result"]["valid"], false);
    assert_eq!(json["result"]["operation_name"], "orderCreate");
    assert_eq!(json["result"]["errors"][0]["code"], "MUT002");
    assert_eq!(json["result"]["errors"][0]["kind"], "Error");
    assert_eq!(json["result"]["errors"][0]["field"], "orderCreate");
    assert_eq!(json["result"]["variables"]["input"], "OrderInput!");
    assert_eq!(json["result"]["fields"][0]["name"], "orderCreate");
    assert!(json.get("fixed_text").is_none());
    assert!(
        chrono::DateTime::parse_from_rfc3339(json["timestamp"].as_str().unwrap()).is_ok()
    );
}

#[test]
fn test_json_report_round_trips() {
    let report = ValidationReport::new("a.graphql", validate(GOOD_ORDER_CREATE))
        .with_fixed_text(GOOD_ORDER_CREATE);
    let parsed: ValidationReport =
        serde_json::from_str(&Reporter::render(&report, OutputFormat::Json)).unwrap();

    assert_eq!(parsed.result, report.result);
    assert_eq!(parsed.fixed_text.as_deref(), Some(GOOD_ORDER_CREATE));
}
