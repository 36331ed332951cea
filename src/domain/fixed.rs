//! Shared formatting for 18-decimal fixed-point values.

use core::fmt;

/// Fractional digits carried by [`Price`](super::Price) and [`Percent`](super::Percent).
pub(crate) const WAD_DECIMALS: u32 = 18;

/// `10^18`.
pub(crate) const WAD: u128 = 1_000_000_000_000_000_000;

/// Writes `magnitude / 10^18` as a plain decimal with trailing zeros
/// trimmed, e.g. `1`, `0.996`, `-0.0996`.
pub(crate) fn write_wad(f: &mut fmt::Formatter<'_>, negative: bool, magnitude: u128) -> fmt::Result {
    let int_part = magnitude / WAD;
    let frac_part = magnitude % WAD;
    let sign = if negative && magnitude != 0 { "-" } else { "" };
    if frac_part == 0 {
        return write!(f, "{sign}{int_part}");
    }
    let digits = format!("{frac_part:018}");
    write!(f, "{sign}{int_part}.{}", digits.trim_end_matches('0'))
}
