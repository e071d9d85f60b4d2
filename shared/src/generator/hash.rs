//! Name → seed hashing

/// Folds a county name into a 32-bit seed with `acc * 31 + unit`.
///
/// Works over UTF-16 code units with wrapping two's-complement arithmetic,
/// so the empty string maps to 0 and every other string is defined.
pub fn hash(name: &str) -> u32 {
    name.encode_utf16()
        .fold(0i32, |acc, unit| acc.wrapping_mul(31).wrapping_add(i32::from(unit)))
        as u32
}
