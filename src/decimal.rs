//! Base-10 rendering for fixed-width integers.

use crate::uint::Uint;

/// Render `value` in base 10 with no sign, separators or leading zeros.
///
/// Digits come out least significant first from repeated division by ten
/// and are reversed at the end. Zero renders as `"0"`.
pub fn to_decimal_string<const LIMBS: usize>(value: &Uint<LIMBS>) -> String {
    if value.is_zero() {
        return "0".to_string();
    }

    // 20 digits per 64-bit limb is always enough
    let mut digits: Vec<u8> = Vec::with_capacity(LIMBS * 20);
    let mut rest = *value;
    while !rest.is_zero() {
        let (quotient, remainder) = rest.div_rem_small(10);
        digits.push(remainder as u8);
        rest = quotient;
    }

    digits.iter().rev().map(|&d| char::from(b'0' + d)).collect()
}
