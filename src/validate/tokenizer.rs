//! Quote-aware splitting of a `VALUES (...)` clause body.

/// Split the body of a values clause into its individual values.
///
/// Commas separate values only outside single-quoted spans. Inside a span,
/// a doubled quote (`''`) stands for one literal `'`. Quote delimiters are
/// dropped and every value is trimmed of surrounding whitespace.
///
/// Quoted and bare text are not told apart: a quote toggles the span state
/// wherever it appears. An unterminated span simply runs to the end of the
/// input; the final value is still emitted.
///
/// # Example
///
/// ```ignore
/// let values = split_values("'a''b', 'c,d', 42");
/// assert_eq!(values, vec!["a'b", "c,d", "42"]);
/// ```
pub fn split_values(content: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = content.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\'' => {
                if chars.peek() == Some(&'\'') {
                    // Escaped quote
                    chars.next();
                    current.push('\'');
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                values.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    values.push(current.trim().to_string());
    values
}
