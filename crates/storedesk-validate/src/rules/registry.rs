//! Declarative Mutation Registry
//!
//! Known mutation fields are defined as data: the argument and variable type
//! shapes they must match, the targeted hints offered when they don't, and
//! the narrow rewrites the auto-fixer may apply. The registry is a whitelist
//! of *checked* fields, not of *allowed* fields.

use once_cell::sync::Lazy;
use regex::Regex;

static STANDARD: Lazy<MutationRegistry> = Lazy::new(MutationRegistry::standard);

/// Process-wide registry, built on first use and never mutated
pub fn registry() -> &'static MutationRegistry {
    &STANDARD
}

/// Pattern for a known-bad substring and the remedy to propose when found
#[derive(Debug, Clone)]
pub struct Hint {
    pub detect: Regex,
    pub suggestion: &'static str,
}

/// One ordered text rewrite
///
/// `replacement` uses `regex` expansion syntax (`${1}`, `$$` for a literal `$`).
#[derive(Debug, Clone)]
pub struct FixRule {
    pub pattern: Regex,
    pub replacement: &'static str,
}

/// Expected shapes and remedies for one mutation field
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    pub field_name: &'static str,
    /// Matches the field's name as a whole word anywhere in the text
    pub name_pattern: Regex,
    /// Must match somewhere in the document for the call arguments to be right;
    /// the key argument may sit anywhere in the argument list
    pub arg_shape: Regex,
    /// Must match somewhere in the document for the variable type to be right
    pub type_shape: Regex,
    /// Human-readable form of `arg_shape`
    pub expected_args: &'static str,
    /// Human-readable form of `type_shape`
    pub expected_type: &'static str,
    pub arg_hints: Vec<Hint>,
    pub type_hints: Vec<Hint>,
    pub fix_rules: Vec<FixRule>,
}

fn pattern(src: &str) -> Regex {
    Regex::new(src).expect("Invalid regex")
}

impl RegistryEntry {
    pub fn new(field_name: &'static str, arg_shape: &str, type_shape: &str) -> Self {
        Self {
            field_name,
            name_pattern: pattern(&format!(r"\b{}\b", regex::escape(field_name))),
            arg_shape: pattern(arg_shape),
            type_shape: pattern(type_shape),
            expected_args: "",
            expected_type: "",
            arg_hints: Vec::new(),
            type_hints: Vec::new(),
            fix_rules: Vec::new(),
        }
    }

    /// Describe the expected shapes for error messages
    pub fn expecting(mut self, args: &'static str, type_decl: &'static str) -> Self {
        self.expected_args = args;
        self.expected_type = type_decl;
        self
    }

    pub fn with_arg_hint(mut self, detect: &str, suggestion: &'static str) -> Self {
        self.arg_hints.push(Hint {
            detect: pattern(detect),
            suggestion,
        });
        self
    }

    pub fn with_type_hint(mut self, detect: &str, suggestion: &'static str) -> Self {
        self.type_hints.push(Hint {
            detect: pattern(detect),
            suggestion,
        });
        self
    }

    pub fn with_fix_rule(mut self, matcher: &str, replacement: &'static str) -> Self {
        self.fix_rules.push(FixRule {
            pattern: pattern(matcher),
            replacement,
        });
        self
    }

    /// True if the call arguments match the expected shape somewhere in `text`
    pub fn args_match(&self, text: &str) -> bool {
        self.arg_shape.is_match(text)
    }

    /// True if a variable of the expected type is declared somewhere in `text`
    pub fn type_matches(&self, text: &str) -> bool {
        self.type_shape.is_match(text)
    }

    /// True if the auto-fixer has anything to do for this field
    pub fn is_fixable(&self) -> bool {
        !self.fix_rules.is_empty()
    }
}

/// Registry holding all checked mutation fields, in definition order
#[derive(Debug, Default)]
pub struct MutationRegistry {
    entries: Vec<RegistryEntry>,
}

impl MutationRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add an entry; `lookup` returns the first entry registered for a name
    pub fn register(&mut self, entry: RegistryEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Entry for a field name, `None` for unchecked fields
    pub fn lookup(&self, field_name: &str) -> Option<&RegistryEntry> {
        self.entries.iter().find(|e| e.field_name == field_name)
    }

    pub fn contains(&self, field_name: &str) -> bool {
        self.lookup(field_name).is_some()
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.field_name).collect()
    }

    /// Create registry with all standard mutation fields
    pub fn standard() -> Self {
        let mut registry = Self::new();

        for entry in order_entries() {
            registry.register(entry);
        }

        for entry in product_entries() {
            registry.register(entry);
        }

        for entry in fulfillment_entries() {
            registry.register(entry);
        }

        registry
    }
}

/// Order and draft order creation
pub fn order_entries() -> Vec<RegistryEntry> {
    vec![
        RegistryEntry::new(
            "orderCreate",
            r"\borderCreate\s*\([^)]*\border\s*:\s*\$order\b",
            r"\$order\s*:\s*OrderCreateOrderInput\s*!",
        )
        .expecting("order: $order", "$order: OrderCreateOrderInput!")
        .with_arg_hint(
            r"\borderCreate\s*\(\s*input\s*:",
            "Replace `input:` with `order:` in the orderCreate call",
        )
        .with_arg_hint(r"\$input\b", "Rename the variable `$input` to `$order`")
        .with_arg_hint(
            r"\borderCreate\s*\(\s*order\s*:\s*\{",
            "Pass the order through the `$order` variable instead of an inline object",
        )
        .with_type_hint(
            r"\bOrderInput\b",
            "Declare the variable as `OrderCreateOrderInput!` instead of `OrderInput`",
        )
        .with_type_hint(
            r"\$input\s*:",
            "Replace the declaration `$input: ...` with `$order: OrderCreateOrderInput!`",
        )
        .with_type_hint(
            r"\bOrderCreateOrderInput\b\s*[,)=]",
            "Mark the order variable as non-null: `OrderCreateOrderInput!`",
        )
        .with_fix_rule(
            r"(\borderCreate\s*\(\s*)input(\s*:\s*)\$input\b",
            "${1}order${2}$$order",
        )
        .with_fix_rule(
            r"\$input(\s*:\s*)OrderInput\b!?",
            "$$order${1}OrderCreateOrderInput!",
        ),
        RegistryEntry::new(
            "draftOrderCreate",
            r"\bdraftOrderCreate\s*\([^)]*\binput\s*:\s*\$\w+",
            r"\$\w+\s*:\s*DraftOrderInput\s*!",
        )
        .expecting("input: $input", "$input: DraftOrderInput!")
        .with_arg_hint(
            r"\bdraftOrderCreate\s*\(\s*order\s*:",
            "draftOrderCreate takes `input:`, not `order:`",
        )
        .with_type_hint(
            r"\bOrderCreateOrderInput\b",
            "Draft orders use `DraftOrderInput!`, not `OrderCreateOrderInput`",
        )
        .with_type_hint(
            r"\bDraftOrderInput\b\s*[,)=]",
            "Mark the draft order variable as non-null: `DraftOrderInput!`",
        ),
    ]
}

/// Product and variant maintenance, inventory levels
pub fn product_entries() -> Vec<RegistryEntry> {
    vec![
        RegistryEntry::new(
            "productCreate",
            r"\bproductCreate\s*\([^)]*\bproduct\s*:\s*\$\w+",
            r"\$\w+\s*:\s*ProductCreateInput\s*!",
        )
        .expecting("product: $product", "$product: ProductCreateInput!")
        .with_arg_hint(
            r"\bproductCreate\s*\(\s*input\s*:",
            "Replace the deprecated `input:` argument with `product:` in productCreate",
        )
        .with_type_hint(
            r"\bProductInput\b",
            "Declare the variable as `ProductCreateInput!` instead of `ProductInput`",
        )
        .with_fix_rule(r"(\bproductCreate\s*\(\s*)input(\s*:)", "${1}product${2}")
        .with_fix_rule(r"(\$\w+\s*:\s*)ProductInput\b!?", "${1}ProductCreateInput!"),
        RegistryEntry::new(
            "productVariantsBulkUpdate",
            r"\bproductVariantsBulkUpdate\s*\((?:[^)]*\bproductId\s*:\s*\$\w+[^)]*\bvariants\s*:\s*\$\w+|[^)]*\bvariants\s*:\s*\$\w+[^)]*\bproductId\s*:\s*\$\w+)",
            r"\$\w+\s*:\s*\[\s*ProductVariantsBulkInput\s*!\s*\]\s*!",
        )
        .expecting(
            "productId: $productId, variants: $variants",
            "$variants: [ProductVariantsBulkInput!]!",
        )
        .with_arg_hint(
            r"\bproductVariantsBulkUpdate\s*\(\s*input\s*:",
            "productVariantsBulkUpdate takes `productId:` and `variants:` arguments, not `input:`",
        )
        .with_arg_hint(
            r"\bproductVariantsBulkUpdate\s*\([^)]*\bid\s*:",
            "Use `productId:` rather than `id:` in productVariantsBulkUpdate",
        )
        .with_type_hint(
            r"\bProductVariantInput\b",
            "Use `[ProductVariantsBulkInput!]!` instead of `ProductVariantInput`",
        )
        .with_type_hint(
            r"\$\w+\s*:\s*ProductVariantsBulkInput\b",
            "Declare the variants variable as a list: `[ProductVariantsBulkInput!]!`",
        ),
        RegistryEntry::new(
            "inventorySetQuantities",
            r"\binventorySetQuantities\s*\([^)]*\binput\s*:\s*\$\w+",
            r"\$\w+\s*:\s*InventorySetQuantitiesInput\s*!",
        )
        .expecting("input: $input", "$input: InventorySetQuantitiesInput!")
        .with_arg_hint(
            r"\binventorySetQuantities\s*\(\s*quantities\s*:",
            "Wrap `quantities` in the `input: $input` argument (InventorySetQuantitiesInput)",
        )
        .with_type_hint(
            r"\bInventoryAdjustQuantitiesInput\b",
            "`InventoryAdjustQuantitiesInput` belongs to inventoryAdjustQuantities; use `InventorySetQuantitiesInput!`",
        )
        .with_type_hint(
            r"\bInventorySetOnHandQuantitiesInput\b",
            "`InventorySetOnHandQuantitiesInput` is deprecated; use `InventorySetQuantitiesInput!`",
        ),
    ]
}

/// Fulfillment creation
pub fn fulfillment_entries() -> Vec<RegistryEntry> {
    vec![
        RegistryEntry::new(
            "fulfillmentCreate",
            r"\bfulfillmentCreate\s*\([^)]*\bfulfillment\s*:\s*\$\w+",
            r"\$\w+\s*:\s*FulfillmentInput\s*!",
        )
        .expecting("fulfillment: $fulfillment", "$fulfillment: FulfillmentInput!")
        .with_arg_hint(
            r"\bfulfillmentCreate\s*\(\s*input\s*:",
            "fulfillmentCreate takes `fulfillment:`, not `input:`",
        )
        .with_type_hint(
            r"\bFulfillmentV2Input\b",
            "Replace `FulfillmentV2Input` with `FulfillmentInput!`",
        ),
    ]
}
