//! Cosmetic per-item coloring: a stable hash of the item name picks an
//! entry from a fixed palette, so renames recolor and re-layouts don't.

// ── Item color palette ───────────────────────────────────────────────────────

pub const ITEM_COLORS: [[u8; 3]; 6] = [
    [66, 133, 244],  // Blue
    [52, 168, 83],   // Green
    [255, 193, 7],   // Amber
    [229, 57, 53],   // Red
    [171, 71, 188],  // Purple
    [63, 81, 181],   // Indigo
];

/// Hash a name to a palette index.
///
/// Uses the classic `h = c + (h << 5) - h` string hash over UTF-16 code
/// units with 32-bit wrapping arithmetic.
pub fn palette_index(name: &str) -> usize {
    let mut hash: i32 = 0;
    for unit in name.encode_utf16() {
        hash = (unit as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }
    hash.unsigned_abs() as usize % ITEM_COLORS.len()
}

/// RGB color for an item name.
pub fn item_color(name: &str) -> [u8; 3] {
    ITEM_COLORS[palette_index(name)]
}
