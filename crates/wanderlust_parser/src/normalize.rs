//! Cleanup applied to raw model text before parsing.

/// Characters models like to sprinkle around keys and values.
const MARKUP_CHARS: [char; 2] = ['"', '*'];

/// Removes double quotes and asterisks from model output.
///
/// Models asked for plain text still emit `**step1_title**: ...` or quote
/// their values. Stripping these characters lets such lines match the
/// grouped-key pattern.
///
/// # Examples
///
/// ```
/// use wanderlust_parser::strip_markup;
///
/// assert_eq!(strip_markup("**step1_title**: \"Gateway\""), "step1_title: Gateway");
/// ```
pub fn strip_markup(text: &str) -> String {
    text.chars().filter(|c| !MARKUP_CHARS.contains(c)).collect()
}
