//! Lexical Extraction
//!
//! Pulls the structural tokens the validator needs out of raw mutation text:
//! - The operation name (`mutation <Name>`)
//! - Variable declarations from the operation signature (`$name: Type`)
//! - Field calls in the operation body (`identifier(...)`)
//! - Variable references inside field call arguments (`$name`)
//!
//! This is a minimal tokenizer, not a GraphQL parser. It balances
//! parentheses and skips string literals and comments, which is enough to
//! keep argument text attributed to the right call.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Range;
use tracing::debug;

static OPERATION_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bmutation\s+([_A-Za-z][_0-9A-Za-z]*)").expect("Invalid regex"));

static DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$([_A-Za-z][_0-9A-Za-z]*)\s*:\s*").expect("Invalid regex"));

/// A named invocation with a parenthesized argument list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCall {
    pub name: String,
    /// Argument text between the parentheses, trimmed
    pub raw_args: String,
}

/// A `$name: Type` pair from the operation signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub name: String,
    /// Type token with whitespace removed (e.g. `[ProductVariantsBulkInput!]!`)
    pub type_name: String,
}

/// Structural tokens of one mutation document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub operation_name: Option<String>,
    /// Field calls in order of appearance, duplicates preserved
    pub field_calls: Vec<FieldCall>,
    /// Declarations in source order, redeclarations preserved
    pub declarations: Vec<VariableDeclaration>,
    /// Variables referenced inside any call or directive argument list
    pub usages: BTreeSet<String>,
}

impl Extraction {
    /// Declared variables as name -> type; a later declaration of the same
    /// name replaces the earlier one.
    pub fn variables(&self) -> BTreeMap<String, String> {
        self.declarations
            .iter()
            .map(|d| (d.name.clone(), d.type_name.clone()))
            .collect()
    }

    pub fn declared_names(&self) -> BTreeSet<String> {
        self.declarations.iter().map(|d| d.name.clone()).collect()
    }
}

/// Extract the structural tokens of `text`
///
/// A missing operation name is not an error here; the caller decides what
/// to do with an `Extraction` whose `operation_name` is `None`.
pub fn extract(text: &str) -> Extraction {
    let mut extraction = Extraction::default();
    // Same byte offsets as `text`, with comments and strings blanked out
    let code = mask_ignored(text);

    let body_start = match OPERATION_NAME.captures(&code) {
        Some(caps) => {
            let name = caps.get(1).map_or("", |m| m.as_str());
            extraction.operation_name = Some(name.to_string());
            let header_end = caps.get(0).map_or(0, |m| m.end());
            let (signature, body_start) = split_signature(text, header_end);
            if let Some(signature) = signature {
                extraction.declarations = declarations(&code[signature]);
            }
            body_start
        }
        None => 0,
    };

    let scan = scan_body(&text[body_start..]);
    for call in &scan.calls {
        extraction.usages.extend(variable_refs(&call.raw_args));
    }
    for args in &scan.directive_args {
        extraction.usages.extend(variable_refs(args));
    }
    extraction.field_calls = scan.calls;

    debug!(
        operation = extraction.operation_name.as_deref().unwrap_or("<none>"),
        fields = extraction.field_calls.len(),
        declarations = extraction.declarations.len(),
        usages = extraction.usages.len(),
        "Extracted mutation structure"
    );

    extraction
}

/// Replace comments and string literals with spaces
///
/// Offsets into the result are valid offsets into `text`.
fn mask_ignored(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut masked = bytes.to_vec();
    let mut i = 0;

    while i < bytes.len() {
        let end = match bytes[i] {
            b'"' => skip_string(bytes, i),
            b'#' => skip_comment(bytes, i),
            _ => {
                i += 1;
                continue;
            }
        };
        masked[i..end].fill(b' ');
        i = end;
    }

    // Masked ranges start and end on ASCII bytes, so this cannot fail
    String::from_utf8(masked).unwrap_or_else(|_| text.to_string())
}

/// Locate the variable signature following the operation name
///
/// Returns the byte range of the signature (without parentheses) and the
/// offset where the operation body starts.
fn split_signature(text: &str, header_end: usize) -> (Option<Range<usize>>, usize) {
    let bytes = text.as_bytes();
    let mut i = header_end;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'(' {
        match matching_paren(bytes, i) {
            Some(close) => (Some(i + 1..close), close + 1),
            None => (Some(i + 1..text.len()), text.len()),
        }
    } else {
        (None, header_end)
    }
}

/// `$name: Type` pairs of an already masked signature
fn declarations(signature: &str) -> Vec<VariableDeclaration> {
    DECLARATION
        .captures_iter(signature)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str().to_string();
            let token = type_token(signature, caps.get(0)?.end());
            if token.is_empty() {
                return None;
            }
            let type_name: String = token.chars().filter(|c| !c.is_whitespace()).collect();
            Some(VariableDeclaration { name, type_name })
        })
        .collect()
}

/// Type reference starting at `start`: a name or a bracketed list, each
/// with an optional trailing `!`
fn type_token(signature: &str, start: usize) -> &str {
    let bytes = signature.as_bytes();
    let mut i = start;

    if i < bytes.len() && bytes[i] == b'[' {
        let mut depth = 0usize;
        while i < bytes.len() {
            match bytes[i] {
                b'[' => depth += 1,
                b']' => {
                    depth -= 1;
                    if depth == 0 {
                        i += 1;
                        break;
                    }
                }
                _ => {}
            }
            i += 1;
        }
    } else if i < bytes.len() && is_name_start(bytes[i]) {
        while i < bytes.len() && is_name_continue(bytes[i]) {
            i += 1;
        }
    } else {
        return "";
    }

    let mut j = i;
    while j < bytes.len() && bytes[j].is_ascii_whitespace() {
        j += 1;
    }
    if j < bytes.len() && bytes[j] == b'!' {
        i = j + 1;
    }

    &signature[start..i]
}

struct BodyScan {
    calls: Vec<FieldCall>,
    directive_args: Vec<String>,
}

fn scan_body(body: &str) -> BodyScan {
    let bytes = body.as_bytes();
    let mut scan = BodyScan {
        calls: Vec::new(),
        directive_args: Vec::new(),
    };
    let mut directive = false;
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        if c == b'"' {
            i = skip_string(bytes, i);
        } else if c == b'#' {
            i = skip_comment(bytes, i);
        } else if c == b'@' {
            directive = true;
            i += 1;
        } else if c.is_ascii_digit() {
            while i < bytes.len() && is_name_continue(bytes[i]) {
                i += 1;
            }
        } else if is_name_start(c) {
            let start = i;
            while i < bytes.len() && is_name_continue(bytes[i]) {
                i += 1;
            }
            let name = &body[start..i];

            let mut j = i;
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            if j < bytes.len() && bytes[j] == b'(' {
                let (args, next) = match matching_paren(bytes, j) {
                    Some(close) => (&body[j + 1..close], close + 1),
                    None => (&body[j + 1..], bytes.len()),
                };
                if directive {
                    scan.directive_args.push(args.to_string());
                } else {
                    scan.calls.push(FieldCall {
                        name: name.to_string(),
                        raw_args: args.trim().to_string(),
                    });
                }
                i = next;
            }
            directive = false;
        } else {
            i += 1;
        }
    }

    scan
}

/// `$name` references outside string literals and comments
fn variable_refs(args: &str) -> Vec<String> {
    let bytes = args.as_bytes();
    let mut refs = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => i = skip_string(bytes, i),
            b'#' => i = skip_comment(bytes, i),
            b'$' => {
                let start = i + 1;
                let mut end = start;
                if end < bytes.len() && is_name_start(bytes[end]) {
                    while end < bytes.len() && is_name_continue(bytes[end]) {
                        end += 1;
                    }
                    refs.push(args[start..end].to_string());
                }
                i = end.max(i + 1);
            }
            _ => i += 1,
        }
    }

    refs
}

/// Index of the `)` closing the `(` at `open`
fn matching_paren(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = open;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                i = skip_string(bytes, i);
                continue;
            }
            b'#' => {
                i = skip_comment(bytes, i);
                continue;
            }
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }

    None
}

/// Index just past the string literal starting at `start`
///
/// Handles both `"..."` with escapes and `"""..."""` block strings. An
/// unterminated string runs to the end of its line (block strings: to the
/// end of the text).
fn skip_string(bytes: &[u8], start: usize) -> usize {
    if bytes[start..].starts_with(b"\"\"\"") {
        let mut i = start + 3;
        while i < bytes.len() {
            if bytes[i] == b'\\' && bytes[i + 1..].starts_with(b"\"\"\"") {
                i += 4;
            } else if bytes[i..].starts_with(b"\"\"\"") {
                return i + 3;
            } else {
                i += 1;
            }
        }
        return bytes.len();
    }

    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return i + 1,
            b'\n' => return i,
            _ => i += 1,
        }
    }
    bytes.len()
}

fn skip_comment(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |offset| start + offset)
}

fn is_name_start(c: u8) -> bool {
    c == b'_' || c.is_ascii_alphabetic()
}

fn is_name_continue(c: u8) -> bool {
    c == b'_' || c.is_ascii_alphanumeric()
}
