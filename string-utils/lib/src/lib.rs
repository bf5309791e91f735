//! Name greetings and character reversal for plain strings.
//!
//! - [`greet`] - validates a name and builds a greeting
//! - [`reverse_string`] - reverses the characters of a string
//!
//! Both functions are pure and synchronous; they hold no state and can be
//! called from any thread.
//!
//! ## Examples
//!
//! ```rust
//! use string_utils::{greet, reverse_string, ValidationError};
//!
//! assert_eq!(greet("Alice").unwrap(), "Hello, Alice!");
//! assert_eq!(greet("   "), Err(ValidationError::EmptyName));
//! assert_eq!(reverse_string("hello"), "olleh");
//! ```

pub mod error;
pub mod greet;
pub mod reverse;

pub use error::ValidationError;
pub use greet::greet;
pub use reverse::reverse_string;
