pub use self::menu::*;

pub(crate) mod menu;

/// Trait for types that provide a human-readable description
///
/// Used to display enum variants in menus with friendly text rather than the
/// variant names.
pub trait Description {
    /// Returns a static string description of the implementing type
    fn description(&self) -> &'static str;
}

/// Creates enums with a method to ask the user to choose a variant on the CLI
///
/// This macro generates:
/// 1. An enum with the specified variants
/// 2. Debug, Copy, Clone, Eq and PartialEq
/// 3. The `inquiry::Choice` derive, which provides `choice(prompt)`
/// 4. [`Description`] and Display implementations
///
/// # Syntax
/// `choice!(EnumName, Variant => "Description", ...)`
///
/// # Example
/// ```ignore
/// choice!(Answer,
///     Yes => "Yes - Go ahead",
///     No => "No - Stop here"
/// );
///
/// let answer = Answer::choice("Continue?")?;
/// ```
#[macro_export]
macro_rules! choice {
    ($enum_name:ident, $($variant:ident => $desc:expr),+) => {
        #[derive(Debug, Copy, Clone, inquiry::Choice, Eq, PartialEq)]
        pub enum $enum_name {
            $(#[doc = $desc] $variant,)+
        }

        impl Description for $enum_name {
            fn description(&self) -> &'static str {
                match self {
                    $($enum_name::$variant => $desc),+
                }
            }
        }
        // Display is provided by the `inquiry::Choice` derive, which renders
        // the variant's doc attribute (set to the description above).
    };
}
