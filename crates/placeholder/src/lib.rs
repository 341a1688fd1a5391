//! The closed set of Firebase web-config placeholders and the pass that
//! swaps them for environment values.
//!
//! ```
//! use std::collections::HashMap;
//! use placeholder::{EnvSource, PlaceholderTable};
//!
//! let env: EnvSource = HashMap::from([
//!     ("FIREBASE_API_KEY".to_string(), "abc123".to_string()),
//! ]).into();
//! let table = PlaceholderTable::from_source(&env);
//! let out = table.substitute(r#"var k="$FIREBASE_API_KEY";"#);
//! assert_eq!(out.content, br#"var k="abc123";"#);
//! ```
mod key;
mod source;
mod table;

pub use key::*;
pub use source::*;
pub use table::*;
