//! Shared fixtures for storedesk-validate tests

#![allow(dead_code)] // Not every fixture is used by every test file

use storedesk_validate::{Diagnostic, ValidationResult};

/// The legacy orderCreate shape operators keep pasting in
pub const BAD_ORDER_CREATE: &str = r"mutation orderCreate($input: OrderInput!) {
  orderCreate(input: $input) { order { id name } userErrors { field message } }
}";

/// What `BAD_ORDER_CREATE` should become
pub const GOOD_ORDER_CREATE: &str = r"mutation orderCreate($order: OrderCreateOrderInput!) {
  orderCreate(order: $order) { order { id name } userErrors { field message } }
}";

pub const BAD_PRODUCT_CREATE: &str = r"mutation productCreate($input: ProductInput!) {
  productCreate(input: $input) { product { id } userErrors { field message } }
}";

/// Well-formed mutation on a field the registry does not check
pub const UNKNOWN_FIELD: &str = r"mutation tagsAdd($id: ID!, $tags: [String!]!) {
  tagsAdd(id: $id, tags: $tags) { node { id } userErrors { field message } }
}";

/// Valid apart from a hardcoded global ID
pub const HARDCODED_ID: &str = r#"mutation tagsAdd($tags: [String!]!) {
  tagsAdd(id: "gid://shopify/Order/1001", tags: $tags) { userErrors { field message } }
}"#;

pub fn codes(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics.iter().map(|d| d.code.as_str()).collect()
}

pub fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics.iter().map(|d| d.message.as_str()).collect()
}

pub fn any_message_contains(diagnostics: &[Diagnostic], needles: &[&str]) -> bool {
    diagnostics
        .iter()
        .any(|d| needles.iter().all(|n| d.message.contains(n)))
}

pub fn assert_clean(result: &ValidationResult) {
    assert!(result.valid, "expected valid, got errors: {:?}", result.errors);
    assert!(result.errors.is_empty());
    assert!(result.suggestions.is_empty());
}
