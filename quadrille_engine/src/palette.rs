// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed curve color palette.

use peniko::Color;

/// Colors assigned to successively registered functions, in cycling order.
pub const PALETTE: [Color; 8] = [
    Color::from_rgb8(0xe7, 0x4c, 0x3c),
    Color::from_rgb8(0x34, 0x98, 0xdb),
    Color::from_rgb8(0x2e, 0xcc, 0x71),
    Color::from_rgb8(0xf3, 0x9c, 0x12),
    Color::from_rgb8(0x9b, 0x59, 0xb6),
    Color::from_rgb8(0x1a, 0xbc, 0x9c),
    Color::from_rgb8(0xe6, 0x7e, 0x22),
    Color::from_rgb8(0x34, 0x49, 0x5e),
];

/// Returns the palette color for the `index`th successful registration.
pub(crate) fn color_for(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_after_eight_entries() {
        assert_eq!(color_for(0), PALETTE[0]);
        assert_eq!(color_for(7), PALETTE[7]);
        assert_eq!(color_for(8), PALETTE[0]);
        assert_eq!(color_for(9), PALETTE[1]);
    }
}
