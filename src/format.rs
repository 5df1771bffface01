//! Pixel format descriptors.
//!
//! [`PixelFormat`] is a compact descriptor (channel storage type × channel
//! layout) tagging decoded image buffers. A matrix whose mips hold raw
//! packed bytes carries no format at this layer — that state is spelled
//! `Option<PixelFormat>` with `None`.

/// Channel storage type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum ChannelType {
    /// 8-bit unsigned integer (1 byte per channel).
    U8 = 1,
    /// 16-bit unsigned integer (2 bytes per channel).
    U16 = 2,
    /// 16-bit half-precision float (2 bytes per channel).
    F16 = 3,
    /// 32-bit floating point (4 bytes per channel).
    F32 = 4,
}

impl ChannelType {
    /// Byte size of a single channel value.
    #[inline]
    pub const fn byte_size(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 | Self::F16 => 2,
            Self::F32 => 4,
        }
    }

    /// Whether values are floating point.
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F16 | Self::F32)
    }
}

/// Channel layout (number and meaning of channels).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum ChannelLayout {
    /// Single red/luminance channel.
    R = 1,
    /// Red, green.
    Rg = 2,
    /// Red, green, blue.
    Rgb = 3,
    /// Red, green, blue, alpha.
    Rgba = 4,
    /// Blue, green, red, alpha (Windows/DirectX byte order).
    Bgra = 5,
}

impl ChannelLayout {
    /// Number of channels in this layout.
    #[inline]
    pub const fn channels(self) -> usize {
        match self {
            Self::R => 1,
            Self::Rg => 2,
            Self::Rgb => 3,
            Self::Rgba | Self::Bgra => 4,
        }
    }

    /// Whether this layout includes an alpha channel.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba | Self::Bgra)
    }
}

/// Pixel format descriptor (2 bytes).
///
/// Describes how one pixel of a decoded image buffer is stored, without
/// carrying the data itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct PixelFormat {
    /// Channel storage type (u8, u16, f16, f32).
    pub channel_type: ChannelType,
    /// Channel layout (R, RG, RGB, RGBA, BGRA).
    pub layout: ChannelLayout,
}

impl PixelFormat {
    /// Create a pixel format descriptor.
    pub const fn new(channel_type: ChannelType, layout: ChannelLayout) -> Self {
        Self {
            channel_type,
            layout,
        }
    }

    // Named constants ---------------------------------------------------------

    /// 8-bit single channel.
    pub const R8: Self = Self::new(ChannelType::U8, ChannelLayout::R);
    /// 8-bit two channel.
    pub const RG8: Self = Self::new(ChannelType::U8, ChannelLayout::Rg);
    /// 8-bit RGB.
    pub const RGB8: Self = Self::new(ChannelType::U8, ChannelLayout::Rgb);
    /// 8-bit RGBA.
    pub const RGBA8: Self = Self::new(ChannelType::U8, ChannelLayout::Rgba);
    /// 8-bit BGRA (Windows/DirectX byte order).
    pub const BGRA8: Self = Self::new(ChannelType::U8, ChannelLayout::Bgra);
    /// 16-bit single channel.
    pub const R16: Self = Self::new(ChannelType::U16, ChannelLayout::R);
    /// 16-bit RGBA.
    pub const RGBA16: Self = Self::new(ChannelType::U16, ChannelLayout::Rgba);
    /// Half-float single channel.
    pub const R16F: Self = Self::new(ChannelType::F16, ChannelLayout::R);
    /// Half-float RGBA.
    pub const RGBA16F: Self = Self::new(ChannelType::F16, ChannelLayout::Rgba);
    /// f32 single channel.
    pub const R32F: Self = Self::new(ChannelType::F32, ChannelLayout::R);
    /// f32 RGB.
    pub const RGB32F: Self = Self::new(ChannelType::F32, ChannelLayout::Rgb);
    /// f32 RGBA.
    pub const RGBA32F: Self = Self::new(ChannelType::F32, ChannelLayout::Rgba);

    // Methods -----------------------------------------------------------------

    /// Check if this format matches the layout and type of another.
    ///
    /// Useful for format negotiation: two formats are layout-compatible if
    /// they have the same channel count, order, and storage type.
    #[inline]
    pub const fn layout_compatible(&self, other: &PixelFormat) -> bool {
        self.channel_type as u8 == other.channel_type as u8
            && self.layout as u8 == other.layout as u8
    }

    /// Minimum byte alignment required for the channel type (1, 2, or 4).
    #[inline]
    pub const fn min_alignment(self) -> usize {
        self.channel_type.byte_size()
    }

    /// Bytes per pixel.
    #[inline]
    pub const fn bytes_per_pixel(self) -> usize {
        self.channel_type.byte_size() * self.layout.channels()
    }

    /// Number of channels.
    #[inline]
    pub const fn channels(self) -> u8 {
        self.layout.channels() as u8
    }

    /// Whether this format has an alpha channel.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        self.layout.has_alpha()
    }

    /// Compute the byte stride for a given width, aligned to channel type.
    #[inline]
    pub const fn aligned_stride(self, width: u32) -> usize {
        let raw = width as usize * self.bytes_per_pixel();
        align_up(raw, self.min_alignment())
    }
}

#[inline]
const fn align_up(value: usize, align: usize) -> usize {
    (value + align - 1) & !(align - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_per_pixel() {
        assert_eq!(PixelFormat::R8.bytes_per_pixel(), 1);
        assert_eq!(PixelFormat::RG8.bytes_per_pixel(), 2);
        assert_eq!(PixelFormat::RGB8.bytes_per_pixel(), 3);
        assert_eq!(PixelFormat::RGBA8.bytes_per_pixel(), 4);
        assert_eq!(PixelFormat::BGRA8.bytes_per_pixel(), 4);
        assert_eq!(PixelFormat::R16.bytes_per_pixel(), 2);
        assert_eq!(PixelFormat::RGBA16.bytes_per_pixel(), 8);
        assert_eq!(PixelFormat::R16F.bytes_per_pixel(), 2);
        assert_eq!(PixelFormat::RGBA16F.bytes_per_pixel(), 8);
        assert_eq!(PixelFormat::R32F.bytes_per_pixel(), 4);
        assert_eq!(PixelFormat::RGB32F.bytes_per_pixel(), 12);
        assert_eq!(PixelFormat::RGBA32F.bytes_per_pixel(), 16);
    }

    #[test]
    fn alignment_follows_channel_type() {
        assert_eq!(PixelFormat::RGBA8.min_alignment(), 1);
        assert_eq!(PixelFormat::RGBA16.min_alignment(), 2);
        assert_eq!(PixelFormat::R16F.min_alignment(), 2);
        assert_eq!(PixelFormat::RGBA32F.min_alignment(), 4);
    }

    #[test]
    fn aligned_stride_is_tight_for_whole_pixel_rows() {
        // bytes_per_pixel is always a multiple of the channel alignment,
        // so a whole row needs no padding.
        assert_eq!(PixelFormat::RGB8.aligned_stride(5), 15);
        assert_eq!(PixelFormat::R16.aligned_stride(7), 14);
        assert_eq!(PixelFormat::RGBA32F.aligned_stride(3), 48);
    }

    #[test]
    fn alpha_and_channels() {
        assert!(!PixelFormat::R8.has_alpha());
        assert!(!PixelFormat::RGB32F.has_alpha());
        assert!(PixelFormat::RGBA8.has_alpha());
        assert!(PixelFormat::BGRA8.has_alpha());
        assert_eq!(PixelFormat::RG8.channels(), 2);
        assert_eq!(PixelFormat::BGRA8.channels(), 4);
    }

    #[test]
    fn layout_compatibility() {
        assert!(PixelFormat::RGBA8.layout_compatible(&PixelFormat::RGBA8));
        // BGRA and RGBA differ in channel order.
        assert!(!PixelFormat::RGBA8.layout_compatible(&PixelFormat::BGRA8));
        // Same layout, different storage.
        assert!(!PixelFormat::RGBA8.layout_compatible(&PixelFormat::RGBA16));
        // U16 and F16 share a byte size but not a type.
        assert!(!PixelFormat::R16.layout_compatible(&PixelFormat::R16F));
    }

    #[test]
    fn float_detection() {
        assert!(ChannelType::F16.is_float());
        assert!(ChannelType::F32.is_float());
        assert!(!ChannelType::U8.is_float());
        assert!(!ChannelType::U16.is_float());
    }
}
