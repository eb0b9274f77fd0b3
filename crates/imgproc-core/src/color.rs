//! Color channel helpers for 32-bit RGBA pixels.
//!
//! # Pixel format
//!
//! Pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB). Every
//! 32-bit value is a valid pixel, so extraction never fails; packing takes
//! `u8` components so it cannot overflow a channel.

/// Shift amounts for extracting color channels
pub const RED_SHIFT: u32 = 24;
pub const GREEN_SHIFT: u32 = 16;
pub const BLUE_SHIFT: u32 = 8;
pub const ALPHA_SHIFT: u32 = 0;

/// Mask for a single 8-bit channel after shifting
pub const CHANNEL_MASK: u32 = 0xff;

/// Channel selector for RGBA pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red channel (bits 24-31)
    Red,
    /// Green channel (bits 16-23)
    Green,
    /// Blue channel (bits 8-15)
    Blue,
    /// Alpha channel (bits 0-7)
    Alpha,
}

impl Channel {
    /// All four channels, in packing order.
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    /// Bit offset of this channel inside a packed pixel.
    #[inline]
    pub fn shift(self) -> u32 {
        match self {
            Channel::Red => RED_SHIFT,
            Channel::Green => GREEN_SHIFT,
            Channel::Blue => BLUE_SHIFT,
            Channel::Alpha => ALPHA_SHIFT,
        }
    }
}

/// Extract one channel from a 32-bit pixel.
#[inline]
pub fn channel(pixel: u32, which: Channel) -> u8 {
    ((pixel >> which.shift()) & CHANNEL_MASK) as u8
}

/// Extract red component from a 32-bit pixel.
#[inline]
pub fn red(pixel: u32) -> u8 {
    channel(pixel, Channel::Red)
}

/// Extract green component from a 32-bit pixel.
#[inline]
pub fn green(pixel: u32) -> u8 {
    channel(pixel, Channel::Green)
}

/// Extract blue component from a 32-bit pixel.
#[inline]
pub fn blue(pixel: u32) -> u8 {
    channel(pixel, Channel::Blue)
}

/// Extract alpha component from a 32-bit pixel.
#[inline]
pub fn alpha(pixel: u32) -> u8 {
    channel(pixel, Channel::Alpha)
}

/// Compose a 32-bit RGBA pixel.
#[inline]
pub fn pack(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((r as u32) << RED_SHIFT)
        | ((g as u32) << GREEN_SHIFT)
        | ((b as u32) << BLUE_SHIFT)
        | ((a as u32) << ALPHA_SHIFT)
}

/// Compose an opaque 32-bit pixel (alpha = 255).
#[inline]
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    pack(r, g, b, 255)
}

/// Extract RGBA values from a 32-bit pixel.
#[inline]
pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
    (red(pixel), green(pixel), blue(pixel), alpha(pixel))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_extraction() {
        let pixel = 0x8888CCCC;
        assert_eq!(red(pixel), 0x88);
        assert_eq!(green(pixel), 0x88);
        assert_eq!(blue(pixel), 0xCC);
        assert_eq!(alpha(pixel), 0xCC);
    }

    #[test]
    fn test_channel_selector_matches_named_getters() {
        let pixel = 0x12345678;
        assert_eq!(channel(pixel, Channel::Red), 0x12);
        assert_eq!(channel(pixel, Channel::Green), 0x34);
        assert_eq!(channel(pixel, Channel::Blue), 0x56);
        assert_eq!(channel(pixel, Channel::Alpha), 0x78);
    }

    #[test]
    fn test_pack() {
        assert_eq!(pack(0xFF, 0xCC, 0xAA, 0xFF), 0xFFCCAAFF);
        assert_eq!(pack(0xFF, 0x66, 0x99, 0x80), 0xFF669980);
        assert_eq!(pack_rgb(1, 2, 3), 0x010203FF);
    }

    #[test]
    fn test_pack_extract_every_byte() {
        // Each byte value in each position, the other channels held distinct
        for v in 0..=255u8 {
            let pixel = pack(v, 255 - v, v ^ 0x5A, v.wrapping_mul(3));
            assert_eq!(extract_rgba(pixel), (v, 255 - v, v ^ 0x5A, v.wrapping_mul(3)));
        }
    }
}
