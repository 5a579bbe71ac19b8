//! Deterministic series colors.
//!
//! Entities take colors from [`PALETTE`] in output order. Once the palette is
//! exhausted, the color is derived from an FNV-1a hash of the entity name, so
//! the same data always renders with the same colors.

/// Fixed colors handed out to the first entities.
pub const PALETTE: [&str; 8] = [
    "#1976d2", "#388e3c", "#f57c00", "#7b1fa2", "#00838f", "#c2185b", "#5d4037", "#afb42b",
];

/// Reserved for the total series. Never produced for an entity.
pub const TOTAL_COLOR: &str = "#212121";

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn fnv1a(input: &str) -> u64 {
    input.bytes().fold(FNV_OFFSET, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Color for the entity at `index` in output order.
#[must_use]
pub fn entity_color(index: usize, name: &str) -> String {
    PALETTE.get(index).map_or_else(
        || format!("hsl({}, 65%, 45%)", fnv1a(name) % 360),
        |color| (*color).to_string(),
    )
}
