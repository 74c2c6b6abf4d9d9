//! Small string helpers shared by the node types.

use crate::node::Markup;

/// Escapes characters that carry meaning in LaTeX so `text` is typeset verbatim.
///
/// Newlines become forced line breaks (`\\`).
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(ch);
            }
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\^{}"),
            '\\' => out.push_str(r"\textbackslash{}"),
            '\n' => out.push_str(r"\\"),
            _ => out.push(ch),
        }
    }
    out
}

/// Serializes every item and joins the results with `separator`.
pub fn dumps_list<'a, M, I>(items: I, separator: &str) -> String
where
    M: Markup + 'a,
    I: IntoIterator<Item = &'a M>,
{
    items
        .into_iter()
        .map(|item| item.dumps())
        .collect::<Vec<_>>()
        .join(separator)
}
