//! Anti-pattern table
//!
//! Textual idioms that are wrong regardless of which field they appear in.
//! Order is significant: warnings are reported in table order.

use once_cell::sync::Lazy;
use regex::Regex;

/// A known bad idiom and the remedy reported when it is found
#[derive(Debug, Clone)]
pub struct AntiPattern {
    /// Stable key, also used to disable the pattern from config
    pub id: &'static str,
    pub pattern: Regex,
    pub remedy: &'static str,
}

impl AntiPattern {
    fn new(id: &'static str, pattern: &str, remedy: &'static str) -> Self {
        Self {
            id,
            pattern: Regex::new(pattern).expect("Invalid regex"),
            remedy,
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

static STANDARD: Lazy<Vec<AntiPattern>> = Lazy::new(standard_anti_patterns);

/// Process-wide anti-pattern table
pub fn anti_patterns() -> &'static [AntiPattern] {
    &STANDARD
}

pub fn standard_anti_patterns() -> Vec<AntiPattern> {
    vec![
        AntiPattern::new(
            "inline-input-object",
            r"[(,]\s*[_A-Za-z]\w*\s*:\s*\{",
            "Inline input object in call arguments; declare a typed variable and pass it instead",
        ),
        AntiPattern::new(
            "hardcoded-global-id",
            r#""gid://[A-Za-z0-9_-]+/[A-Za-z0-9_]+/[^"\s]+""#,
            "Hardcoded global ID; pass record IDs through variables",
        ),
        AntiPattern::new(
            "numeric-id-literal",
            r"\b(?:id|productId|orderId|variantId|locationId)\s*:\s*\d+\b",
            "Numeric ID literal; Admin API IDs are global IDs (gid://shopify/...)",
        ),
        AntiPattern::new(
            "legacy-order-input",
            r"\borderCreate\s*\(\s*input\s*:",
            "orderCreate no longer accepts `input:`; use `order:` with `OrderCreateOrderInput!`",
        ),
        AntiPattern::new(
            "fulfillment-create-v2",
            r"\bfulfillmentCreateV2\s*\(",
            "fulfillmentCreateV2 is deprecated; use `fulfillmentCreate(fulfillment: $fulfillment)`",
        ),
        AntiPattern::new(
            "product-variant-update",
            r"\bproductVariantUpdate\s*\(",
            "productVariantUpdate is deprecated; use `productVariantsBulkUpdate(productId:, variants:)`",
        ),
        AntiPattern::new(
            "variant-inventory-quantity",
            r"\binventoryQuantity\s*:",
            "Variant `inventoryQuantity` input was removed; set stock with `inventorySetQuantities`",
        ),
    ]
}
