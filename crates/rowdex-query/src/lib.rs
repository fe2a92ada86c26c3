//! Query classification for the rowdex shell.
//!
//! Every line a user types is classified into exactly one [`Operation`] before anything
//! touches the index:
//!
//! - **Control words**: `exit`, `desc` (show fields), `all_terms` (list every lexicon)
//! - **Term listing**: `terms <field>` - list one field's lexicon
//! - **Free-text search**: `<field> <value>` - the first word names the target field,
//!   everything after the first space is the query text and may contain spaces
//! - **Blank input**: a no-op
//!
//! Classification is total and case-insensitive for the keyword forms; the search form
//! preserves the original casing of both field and value.
//!
//! # Example
//!
//! ```
//! use rowdex_query::{Operation, analyze};
//!
//! let op = analyze("name john smith");
//! assert_eq!(
//!     op,
//!     Operation::Query {
//!         field: "name".to_string(),
//!         value: "john smith".to_string(),
//!     }
//! );
//! ```

#![warn(missing_docs)]

mod analyze;
mod op;

pub use analyze::analyze;
pub use op::Operation;
