/// Number of digits in a course reference number
pub const CRN_LENGTH: usize = 6;

/// Decides if a given string is a well-formed course reference number
///
/// A CRN is exactly six ASCII decimal digits. Nothing may precede or follow
/// them, so surrounding whitespace makes the value invalid.
///
/// # Parameters
/// s: A string slice holding the raw CRN input
///
/// # Returns
/// true: if the input is exactly six digits; false otherwise
pub fn is_valid_crn(s: &str) -> bool {
    // bytes, not chars: a non-ASCII char is never a digit anyway
    s.len() == CRN_LENGTH && s.bytes().all(|b| b.is_ascii_digit())
}
