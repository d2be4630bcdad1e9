use convert_case::{Boundary, split};

/// Turn an identifier-style name into a "Start Case" label.
///
/// Words split on separators, case changes, acronyms and digit boundaries.
/// Only the first letter of each word is raised; the rest is kept as
/// written, so `blog_posts` becomes `Blog Posts` and `userID` becomes
/// `User ID`. Leading and trailing separators are dropped.
pub fn start_case(raw: &str) -> String {
    split(&raw, &Boundary::defaults())
        .into_iter()
        .filter(|word| !word.is_empty())
        .map(upper_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
