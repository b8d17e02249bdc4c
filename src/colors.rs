//! Colors in ARGB8888 format.

pub const BACKGROUND: u32 = 0xFFFFFFFF;
pub const FOREGROUND: u32 = 0xFF000000;
pub const RED: u32 = 0xFFFF0000;

/// Packs 8-bit channels into an opaque ARGB8888 value.
#[inline]
pub const fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Splits an ARGB8888 value into its red, green and blue channels (alpha dropped).
#[inline]
pub const fn unpack_rgb(color: u32) -> (u8, u8, u8) {
    (
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    )
}

/// Parses a `RRGGBB` hex string (optionally prefixed with `#`) into an opaque color.
pub fn parse_hex(s: &str) -> Option<u32> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().map(|rgb| 0xFF00_0000 | rgb)
}
