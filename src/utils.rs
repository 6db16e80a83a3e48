//! Simple utilities functions
//!
//! The `termux-*` utilities take multi-valued options as a single
//! comma-separated argument (`-v a,b,c`, `-r 0,10,5`, `-f 20,50,20`).
use std::fmt::Display;

/// Join `values` with `,` the way multi-valued options expect them.
///
/// ```
/// use termux::utils::join_list;
/// assert_eq!(join_list(&["red", "green", "blue"]), "red,green,blue");
/// ```
pub fn join_list<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(AsRef::<str>::as_ref)
        .collect::<Vec<&str>>()
        .join(",")
}

/// Split a comma-separated option value back into its elements.
///
/// An empty string gives an empty list, so a list holding a single empty
/// element does not survive [`join_list`] / [`split_list`].
pub fn split_list(joined: &str) -> Vec<String> {
    if joined.is_empty() {
        return Vec::new();
    }
    joined.split(',').map(str::to_string).collect()
}

/// Join numbers with `,` (`[20, 50, 20]` gives `"20,50,20"`).
pub fn join_numbers<N: Display>(numbers: &[N]) -> String {
    numbers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(",")
}

/// Return the first element containing a `,`, which would not survive
/// [`join_list`] / [`split_list`].
pub fn first_with_comma<S: AsRef<str>>(values: &[S]) -> Option<&str> {
    values.iter().map(AsRef::<str>::as_ref).find(|v| v.contains(','))
}
