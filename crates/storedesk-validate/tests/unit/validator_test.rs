//! End-to-end properties of `validate` and `fix`

use crate::test_utils::{
    BAD_ORDER_CREATE, GOOD_ORDER_CREATE, HARDCODED_ID, UNKNOWN_FIELD, any_message_contains,
    assert_clean, codes,
};
use storedesk_validate::{
    MutationValidator, ValidationResult, ValidatorSettings, examples, fix, validate,
};

#[test]
fn test_validation_is_deterministic() {
    for text in [BAD_ORDER_CREATE, GOOD_ORDER_CREATE, UNKNOWN_FIELD, HARDCODED_ID] {
        let first = validate(text);
        let second = validate(text);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn test_valid_iff_no_errors() {
    let inputs = [
        BAD_ORDER_CREATE,
        GOOD_ORDER_CREATE,
        UNKNOWN_FIELD,
        HARDCODED_ID,
        "{ not a mutation }",
        "",
        "mutation m { orderCreate(order: $order) { order { id } } }",
    ];
    for text in inputs {
        let result = validate(text);
        assert_eq!(result.valid, result.errors.is_empty(), "input: {text}");
    }
}

#[test]
fn test_missing_operation_name_short_circuits() {
    let result = validate("{ not a mutation }");

    assert!(!result.valid);
    assert_eq!(codes(&result.errors), vec!["MUT001"]);
    assert!(result.warnings.is_empty());
    assert!(result.suggestions.is_empty());
    assert!(result.fields.is_empty());
    assert!(result.variables.is_empty());
    assert!(result.operation_name.is_none());
}

#[test]
fn test_missing_operation_name_skips_anti_patterns() {
    let result = validate(r#"{ tagsAdd(id: "gid://shopify/Order/1", tags: ["a"]) { node { id } } }"#);

    assert_eq!(result, ValidationResult::missing_operation_name());
}

#[test]
fn test_query_is_not_a_mutation() {
    let result = validate("query shop { shop { name } }");

    assert_eq!(codes(&result.errors), vec!["MUT001"]);
}

#[test]
fn test_unknown_field_passes_through() {
    let result = validate(UNKNOWN_FIELD);

    assert_clean(&result);
    assert_eq!(result.field_names(), vec!["tagsAdd"]);
    assert_eq!(result.fields[0].raw_args, "id: $id, tags: $tags");
    assert_eq!(result.variables.get("id").map(String::as_str), Some("ID!"));
    assert_eq!(
        result.variables.get("tags").map(String::as_str),
        Some("[String!]!")
    );
}

#[test]
fn test_legacy_order_create_is_rejected() {
    let result = validate(BAD_ORDER_CREATE);

    assert!(!result.valid);
    assert!(result.errors.len() >= 2);
    assert!(result.has_error_for("MUT002", "orderCreate"));
    assert!(result.has_error_for("MUT003", "orderCreate"));
    assert!(any_message_contains(&result.suggestions, &["`input:`", "`order:`"]));
    assert!(any_message_contains(&result.suggestions, &["`$input`", "`$order`"]));
}

#[test]
fn test_error_order_is_syntax_then_type() {
    let result = validate(BAD_ORDER_CREATE);

    assert_eq!(codes(&result.errors), vec!["MUT002", "MUT003"]);
}

#[test]
fn test_duplicate_calls_are_checked_independently() {
    let text = r"mutation orderCreate($input: OrderInput!) {
  first: orderCreate(input: $input) { order { id } }
  second: orderCreate(input: $input) { order { id } }
}";
    let result = validate(text);

    assert_eq!(result.field_names(), vec!["orderCreate", "orderCreate"]);
    assert_eq!(
        codes(&result.errors),
        vec!["MUT002", "MUT003", "MUT002", "MUT003"]
    );
}

#[test]
fn test_fix_is_idempotent() {
    let once = fix(BAD_ORDER_CREATE);
    let twice = fix(&once);

    assert_eq!(once, twice);
}

#[test]
fn test_fix_converges_to_valid_mutation() {
    let fixed = fix(BAD_ORDER_CREATE);
    let result = validate(&fixed);

    assert!(!result.has_error_for("MUT002", "orderCreate"));
    assert!(!result.has_error_for("MUT003", "orderCreate"));
    assert_clean(&result);
    assert!(result.warnings.is_empty());
    assert_eq!(fixed, GOOD_ORDER_CREATE);
}

#[test]
fn test_fix_leaves_good_mutations_untouched() {
    assert_eq!(fix(GOOD_ORDER_CREATE), GOOD_ORDER_CREATE);
    assert_eq!(fix(UNKNOWN_FIELD), UNKNOWN_FIELD);
    for (field, text) in examples() {
        assert_eq!(fix(text), *text, "catalog example for {field} changed");
    }
}

#[test]
fn test_unused_variable_reported_once() {
    let text = r"mutation tagsAdd($order: OrderCreateOrderInput!, $id: ID!, $tags: [String!]!) {
  tagsAdd(id: $id, tags: $tags) { userErrors { field message } }
}";
    let result = validate(text);

    assert_eq!(codes(&result.errors), vec!["MUT004"]);
    assert!(result.errors[0].message.ends_with(": order"));
}

#[test]
fn test_undeclared_variable_reported_once() {
    let text = r"mutation tagsAdd($id: ID!) {
  tagsAdd(id: $id, tags: $foo) { userErrors { field message } }
}";
    let result = validate(text);

    assert_eq!(codes(&result.errors), vec!["MUT005"]);
    assert!(result.errors[0].message.ends_with(": foo"));
}

#[test]
fn test_variable_names_are_sorted_and_joined() {
    let text = r"mutation tagsAdd($zeta: ID, $alpha: ID, $id: ID!) {
  tagsAdd(id: $id, tags: [$beta, $gamma]) { userErrors { field message } }
}";
    let result = validate(text);

    assert_eq!(codes(&result.errors), vec!["MUT004", "MUT005"]);
    assert!(result.errors[0].message.ends_with(": alpha, zeta"));
    assert!(result.errors[1].message.ends_with(": beta, gamma"));
}

#[test]
fn test_variable_errors_follow_field_errors() {
    let text = r"mutation orderCreate($input: OrderInput!, $unused: String) {
  orderCreate(input: $input, note: $missing) { order { id } }
}";
    let result = validate(text);

    assert_eq!(
        codes(&result.errors),
        vec!["MUT002", "MUT003", "MUT004", "MUT005"]
    );
}

#[test]
fn test_redeclared_variable_keeps_later_type() {
    let text = r"mutation tagsAdd($id: ID!, $id: String) {
  tagsAdd(id: $id) { userErrors { field message } }
}";
    let result = validate(text);

    assert!(result.valid);
    assert_eq!(result.variables.len(), 1);
    assert_eq!(result.variables.get("id").map(String::as_str), Some("String"));
}

#[test]
fn test_anti_pattern_does_not_affect_validity() {
    let result = validate(HARDCODED_ID);

    assert!(result.valid);
    assert!(!result.warnings.is_empty());
    assert_eq!(codes(&result.warnings), vec!["MUT006"]);
    assert!(result.warnings[0].message.contains("hardcoded-global-id"));
}

#[test]
fn test_anti_pattern_on_registered_field() {
    let text = r"mutation orderCreate($order: OrderCreateOrderInput!) {
  orderCreate(order: $order, options: { sendReceipt: true }) { order { id } }
}";
    let result = validate(text);

    assert!(result.valid);
    assert!(result.warnings[0].message.contains("inline-input-object"));
}

#[test]
fn test_directive_arguments_count_as_usage() {
    let text = r"mutation orderClose($input: OrderCloseInput!, $withNote: Boolean!) {
  orderClose(input: $input) { order { id note @include(if: $withNote) } }
}";
    let result = validate(text);

    assert!(result.valid, "errors: {:?}", result.errors);
    assert_eq!(result.field_names(), vec!["orderClose"]);
}

#[test]
fn test_catalog_examples_validate_cleanly() {
    for (field, text) in examples() {
        let result = validate(text);
        assert_clean(&result);
        assert!(result.warnings.is_empty(), "{field}: {:?}", result.warnings);
        assert!(result.field_names().contains(field));
    }
}

#[test]
fn test_settings_disable_suggestions() {
    let settings = ValidatorSettings {
        suggestions: false,
        disabled_anti_patterns: Vec::new(),
    };
    let validator = MutationValidator::with_settings(&settings).unwrap();
    let result = validator.validate(BAD_ORDER_CREATE);

    assert_eq!(codes(&result.errors), vec!["MUT002", "MUT003"]);
    assert!(result.suggestions.is_empty());
}

#[test]
fn test_settings_disable_anti_pattern() {
    let settings = ValidatorSettings {
        suggestions: true,
        disabled_anti_patterns: vec!["hardcoded-global-id".to_string()],
    };
    let validator = MutationValidator::with_settings(&settings).unwrap();

    assert!(validator.validate(HARDCODED_ID).warnings.is_empty());
}

#[test]
fn test_settings_reject_unknown_anti_pattern() {
    let settings = ValidatorSettings {
        suggestions: true,
        disabled_anti_patterns: vec!["no-such-pattern".to_string()],
    };

    assert!(MutationValidator::with_settings(&settings).is_err());
}

#[test]
fn test_validator_is_shareable_across_threads() {
    let validator = std::sync::Arc::new(MutationValidator::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let validator = std::sync::Arc::clone(&validator);
            std::thread::spawn(move || validator.validate(BAD_ORDER_CREATE))
        })
        .collect();

    let expected = validate(BAD_ORDER_CREATE);
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_diagnostics_lists_errors_first() {
    let result = validate(BAD_ORDER_CREATE);
    let all: Vec<_> = result.diagnostics().collect();

    assert_eq!(
        all.len(),
        result.errors.len() + result.warnings.len() + result.suggestions.len()
    );
    assert_eq!(all[0].code, "MUT002");
    assert_eq!(all[2].code, "MUT006");
}

#[test]
fn test_validator_methods_match_free_functions() {
    let validator = MutationValidator::new();

    assert_eq!(validator.fix(BAD_ORDER_CREATE), fix(BAD_ORDER_CREATE));
    assert_eq!(validator.validate(UNKNOWN_FIELD), validate(UNKNOWN_FIELD));
    assert_eq!(validator.registry().field_names().len(), 6);
}

#[test]
fn test_reordered_arguments_validate_cleanly() {
    let order = r"mutation orderCreate($order: OrderCreateOrderInput!, $options: OrderCreateOptionsInput) {
  orderCreate(options: $options, order: $order) { order { id } userErrors { field message } }
}";
    let product = r"mutation productCreate($product: ProductCreateInput!, $media: [CreateMediaInput!]) {
  productCreate(media: $media, product: $product) { product { id } userErrors { field message } }
}";

    assert_clean(&validate(order));
    assert_clean(&validate(product));
}

#[test]
fn test_comments_do_not_declare_or_name_operations() {
    let commented_declaration = r"mutation tagsAdd(
  $id: ID!
  # $old: String
) {
  tagsAdd(id: $id) { node { id } }
}";
    let commented_header = r"# mutation old
mutation tagsAdd($id: ID!) {
  tagsAdd(id: $id) { node { id } }
}";

    assert_clean(&validate(commented_declaration));

    let result = validate(commented_header);
    assert_clean(&result);
    assert_eq!(result.operation_name.as_deref(), Some("tagsAdd"));
}
