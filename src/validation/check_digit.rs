//! NIT (company tax ID) check-digit arithmetic.

/// Total length of a NIT including the separator and check digit.
pub const TAX_ID_LENGTH: usize = 11;

/// Number of base digits that feed the weighted sum.
pub const TAX_ID_BASE_DIGITS: usize = 9;

/// Weights applied left to right to the nine base digits.
pub const TAX_ID_WEIGHTS: [u32; TAX_ID_BASE_DIGITS] = [3, 7, 13, 17, 19, 23, 29, 37, 41];

/// Compute the check digit for nine base digits.
///
/// Returns `None` unless `base` is exactly nine ASCII digits. A remainder of
/// 0 or 1 is used as-is; any other remainder `r` yields `11 - r`, so a
/// remainder of 10 produces 1.
///
/// # Example
///
/// ```
/// use dental_registry::validation::compute_tax_id_check_digit;
///
/// assert_eq!(compute_tax_id_check_digit("900123456"), Some(6));
/// assert_eq!(compute_tax_id_check_digit("900000002"), Some(1));
/// assert_eq!(compute_tax_id_check_digit("90012345"), None);
/// ```
pub fn compute_tax_id_check_digit(base: &str) -> Option<u8> {
    if base.len() != TAX_ID_BASE_DIGITS || !base.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let sum: u32 = base
        .bytes()
        .zip(TAX_ID_WEIGHTS.iter())
        .map(|(b, w)| u32::from(b - b'0') * w)
        .sum();

    let remainder = sum % 11;
    let digit = if remainder > 1 { 11 - remainder } else { remainder };

    // 11 - r for r in 2..=10 stays within 1..=9
    Some(digit as u8)
}

/// Split a candidate NIT into its stripped base digits and trailing character.
///
/// The ten characters before the check digit must contain exactly nine
/// digits, i.e. exactly one separator.
pub(crate) fn split_tax_id(nit: &str) -> Option<(String, char)> {
    if nit.chars().count() != TAX_ID_LENGTH {
        return None;
    }

    let mut chars = nit.chars();
    let check = chars.next_back()?;
    let base: String = chars.filter(|c| c.is_ascii_digit()).collect();

    if base.len() != TAX_ID_BASE_DIGITS {
        return None;
    }

    Some((base, check))
}
