//! Violation Definition Macro
//!
//! Provides a declarative macro for defining finding enums with
//! automatic trait implementations.
//!
//! # Example
//!
//! ```ignore
//! define_violations! {
//!     pub enum MutationViolation {
//!         #[violation(
//!             id = "MUT004",
//!             category = Variables,
//!             kind = Error,
//!             message = "Variables declared but never used: {names}"
//!         )]
//!         UnusedVariable {
//!             names: String,
//!         },
//!     }
//! }
//! ```

/// Macro to define finding enums with automatic trait implementations
///
/// This macro generates:
/// - The enum with all variants
/// - `Display` implementation with formatted messages
/// - `Violation` trait implementation
///
/// # Parameters
///
/// - `$vis`: Visibility modifier (pub, pub(crate), etc.)
/// - `$name`: Name of the enum
/// - For each variant:
///   - `id`: Unique violation identifier (e.g., "MUT002")
///   - `category`: A `ViolationCategory` variant
///   - `kind`: Error, Warning, or Suggestion
///   - `message`: Display message; every field must appear as a `{field_name}` placeholder
///   - `suggestion` (optional): Suggested fix, same placeholder rule as `message`
///   - A field named `field` (a `String`) attributes the finding to a mutation field
#[macro_export]
macro_rules! define_violations {
    (
        $vis:vis enum $name:ident {
            $(
                #[violation(
                    id = $id:literal,
                    category = $category:ident,
                    kind = $kind:ident
                    $(, message = $msg:literal)?
                    $(, suggestion = $suggestion:literal)?
                )]
                $variant:ident {
                    $( $field:ident : $field_ty:ty ),* $(,)?
                }
            ),* $(,)?
        }
    ) => {
        #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $( $variant { $( $field: $field_ty ),* } ),*
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        Self::$variant { $( $field ),* } => {
                            define_violations!(@format f, $($msg,)? $( $field ),*)
                        }
                    ),*
                }
            }
        }

        impl $crate::violation_trait::Violation for $name {
            fn id(&self) -> &str {
                match self {
                    $( Self::$variant { .. } => $id ),*
                }
            }

            fn category(&self) -> $crate::violation_trait::ViolationCategory {
                match self {
                    $( Self::$variant { .. } => $crate::violation_trait::ViolationCategory::$category ),*
                }
            }

            fn kind(&self) -> $crate::DiagnosticKind {
                match self {
                    $( Self::$variant { .. } => $crate::DiagnosticKind::$kind ),*
                }
            }

            #[allow(unused_variables, unreachable_code)]
            fn field(&self) -> Option<&str> {
                match self {
                    $(
                        Self::$variant { $( $field ),* } => {
                            define_violations!(@get_field $( $field ),*)
                        }
                    ),*
                }
            }

            #[allow(unused_variables)]
            fn suggestion(&self) -> Option<String> {
                match self {
                    $(
                        Self::$variant { $( $field ),* } => {
                            define_violations!(@suggestion $($suggestion,)? $( $field ),*)
                        }
                    ),*
                }
            }
        }
    };

    // Format helper - with message template
    (@format $f:ident, $msg:literal, $( $field:ident ),*) => {
        write!($f, $msg, $( $field = $field ),*)
    };

    // Format helper - no message template (use Debug)
    (@format $f:ident, $( $field:ident ),*) => {
        write!($f, "{:?}", ($( $field ),*))
    };

    // Get field attribution helper
    (@get_field $( $field:ident ),*) => {{
        $(
            define_violations!(@check_field $field $field);
        )*
        None
    }};

    (@check_field field $bound:ident) => { return Some($bound.as_str()) };
    (@check_field $other:ident $bound:ident) => {};

    // Suggestion helper - with suggestion template
    (@suggestion $suggestion:literal, $( $field:ident ),*) => {
        Some(format!($suggestion, $( $field = $field ),*))
    };

    // Suggestion helper - no suggestion
    (@suggestion $( $field:ident ),*) => {
        None
    };
}
