//! The closed set of operations a query line can classify into.

/// The classified intent of one raw input line.
///
/// Exactly one variant is produced per line; dispatch sites match exhaustively so a new
/// variant cannot be silently ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// End the session.
    Exit,
    /// Show the schema's field names in header order.
    ShowFields,
    /// List the term lexicon of every field.
    AllTerms,
    /// List the term lexicon of one field.
    FieldTerms(
        /// The field whose lexicon to list.
        String,
    ),
    /// Run a field-scoped search.
    Query {
        /// Target field, taken verbatim from the input.
        field: String,
        /// Query text for the index store's own grammar; may contain spaces.
        value: String,
    },
    /// Blank input; nothing to do.
    NoOp,
    /// Input that matched a command form but not its shape.
    Malformed(
        /// Usage message to show the user.
        String,
    ),
}
