//! Name greetings.

use tracing::debug;

use crate::error::ValidationError;

/// Builds a greeting for `name`.
///
/// The name is trimmed only to check that it isn't blank; the greeting
/// itself uses the input exactly as given, surrounding whitespace included.
///
/// ## Examples
///
/// ```rust
/// use string_utils::greet;
///
/// assert_eq!(greet("Alice").unwrap(), "Hello, Alice!");
/// assert_eq!(greet(" Bob ").unwrap(), "Hello,  Bob !");
/// ```
///
/// ## Errors
///
/// Returns [`ValidationError::EmptyName`] if `name` is empty or whitespace-only.
pub fn greet(name: &str) -> Result<String, ValidationError> {
    if name.trim().is_empty() {
        debug!(len = name.len(), "rejected blank name");
        return Err(ValidationError::EmptyName);
    }

    debug!(name, "greeting");
    Ok(format!("Hello, {name}!"))
}
