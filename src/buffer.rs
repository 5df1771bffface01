//! Owned pixel storage.
//!
//! Two buffer shapes back a mip level, mutually exclusive:
//!
//! - [`ImageBuffer`] — a decoded per-pixel image (one per depth slice),
//!   tightly stride-aligned, tagged with its [`PixelFormat`] and
//!   [`ColorProfile`].
//! - [`RawBuffer`] — one packed byte buffer for the whole level, laid out
//!   with the row/depth pitches a hardware upload path dictates.

use alloc::vec;
use alloc::vec::Vec;

use half::f16;
use imgref::ImgVec;
use rgb::alt::{BGRA, GrayAlpha};
use rgb::{Gray, Rgb, Rgba};

use crate::color::ColorProfile;
use crate::format::PixelFormat;

// ---------------------------------------------------------------------------
// ImageBuffer (decoded per-pixel image)
// ---------------------------------------------------------------------------

/// A decoded image owned by one mip depth-slice slot.
///
/// Rows are stored top to bottom at a stride aligned to the channel type
/// (tight for whole-pixel rows). The buffer is zero-filled on allocation.
pub struct ImageBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
    stride: usize,
    format: PixelFormat,
    profile: ColorProfile,
}

impl ImageBuffer {
    /// Allocate a zero-filled image of `width × height` pixels.
    ///
    /// # Panics
    ///
    /// Panics if the byte size overflows `usize`. Matrix-driven allocation
    /// pre-checks level sizes and reports oversized levels as errors
    /// instead.
    pub fn new(width: u32, height: u32, format: PixelFormat, profile: ColorProfile) -> Self {
        let stride = format.aligned_stride(width);
        Self {
            data: vec![0; stride * height as usize],
            width,
            height,
            stride,
            format,
            profile,
        }
    }

    /// Replace the color profile tag, keeping the pixels.
    pub fn with_profile(mut self, profile: ColorProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Byte stride between row starts.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Pixel format.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Color profile.
    #[inline]
    pub fn profile(&self) -> &ColorProfile {
        &self.profile
    }

    /// All pixel bytes, rows contiguous at [`stride()`](Self::stride).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// All pixel bytes, mutable.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Pixel bytes for row `y` (no padding, exactly `width × bpp` bytes).
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(
            y < self.height,
            "row index {y} out of bounds (height: {})",
            self.height
        );
        let start = y as usize * self.stride;
        let len = self.width as usize * self.format.bytes_per_pixel();
        &self.data[start..start + len]
    }

    /// Mutable pixel bytes for row `y` (no padding).
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        assert!(
            y < self.height,
            "row index {y} out of bounds (height: {})",
            self.height
        );
        let start = y as usize * self.stride;
        let len = self.width as usize * self.format.bytes_per_pixel();
        &mut self.data[start..start + len]
    }

    /// Consume the buffer and return the backing `Vec<u8>` for pool reuse.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl core::fmt::Debug for ImageBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ImageBuffer({}x{}, {:?} {:?})",
            self.width, self.height, self.format.layout, self.format.channel_type
        )
    }
}

// ---------------------------------------------------------------------------
// ImgVec → ImageBuffer (typed constructors, always copy into tight rows)
// ---------------------------------------------------------------------------

macro_rules! impl_from_imgvec {
    ($pixel:ty, $format:expr, $profile:expr) => {
        impl From<ImgVec<$pixel>> for ImageBuffer {
            fn from(img: ImgVec<$pixel>) -> Self {
                use rgb::ComponentBytes;
                let (buf, w, h) = img.as_ref().to_contiguous_buf();
                let format: PixelFormat = $format;
                ImageBuffer {
                    data: buf.as_bytes().to_vec(),
                    width: w as u32,
                    height: h as u32,
                    stride: format.aligned_stride(w as u32),
                    format,
                    profile: $profile,
                }
            }
        }
    };
}

// Integer sources are tagged sRGB, float sources linear; retag with
// `with_profile` when the source says otherwise.
impl_from_imgvec!(Gray<u8>, PixelFormat::R8, ColorProfile::srgb());
impl_from_imgvec!(GrayAlpha<u8>, PixelFormat::RG8, ColorProfile::srgb());
impl_from_imgvec!(Rgb<u8>, PixelFormat::RGB8, ColorProfile::srgb());
impl_from_imgvec!(Rgba<u8>, PixelFormat::RGBA8, ColorProfile::srgb());
impl_from_imgvec!(BGRA<u8>, PixelFormat::BGRA8, ColorProfile::srgb());
impl_from_imgvec!(Gray<u16>, PixelFormat::R16, ColorProfile::srgb());
impl_from_imgvec!(Rgba<u16>, PixelFormat::RGBA16, ColorProfile::srgb());
impl_from_imgvec!(Gray<f16>, PixelFormat::R16F, ColorProfile::linear());
impl_from_imgvec!(Rgba<f16>, PixelFormat::RGBA16F, ColorProfile::linear());
impl_from_imgvec!(Gray<f32>, PixelFormat::R32F, ColorProfile::linear());
impl_from_imgvec!(Rgb<f32>, PixelFormat::RGB32F, ColorProfile::linear());
impl_from_imgvec!(Rgba<f32>, PixelFormat::RGBA32F, ColorProfile::linear());

// ---------------------------------------------------------------------------
// RawBuffer (packed hardware-pitch bytes)
// ---------------------------------------------------------------------------

/// One packed byte buffer covering every depth slice of a mip level.
///
/// The layout is dictated by the caller that sized it: `row_pitch` bytes
/// between consecutive rows, `slice_pitch` bytes between consecutive depth
/// slices, total length `depth × slice_pitch`. The pitches are trusted as
/// given; this type only stores them alongside the bytes.
pub struct RawBuffer {
    data: Vec<u8>,
    row_pitch: u32,
    slice_pitch: u32,
}

impl RawBuffer {
    pub(crate) fn zeroed(len: usize, row_pitch: u32, slice_pitch: u32) -> Self {
        Self {
            data: vec![0; len],
            row_pitch,
            slice_pitch,
        }
    }

    pub(crate) fn set_pitches(&mut self, row_pitch: u32, slice_pitch: u32) {
        self.row_pitch = row_pitch;
        self.slice_pitch = slice_pitch;
    }

    /// Byte stride between consecutive rows.
    #[inline]
    pub fn row_pitch(&self) -> u32 {
        self.row_pitch
    }

    /// Byte stride between consecutive depth slices.
    #[inline]
    pub fn slice_pitch(&self) -> u32 {
        self.slice_pitch
    }

    /// Total length in bytes (`depth × slice_pitch`).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All bytes, depth slices contiguous at [`slice_pitch()`](Self::slice_pitch).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// All bytes, mutable.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// The `slice_pitch` bytes of one depth slice.
    ///
    /// # Panics
    ///
    /// Panics if `depth_index` is past the end of the buffer.
    #[inline]
    pub fn depth_slice(&self, depth_index: u32) -> &[u8] {
        let pitch = self.slice_pitch as usize;
        let start = depth_index as usize * pitch;
        assert!(
            start + pitch <= self.data.len(),
            "depth index {depth_index} out of bounds (len: {})",
            self.data.len()
        );
        &self.data[start..start + pitch]
    }

    /// Consume the buffer and return the backing `Vec<u8>` for pool reuse.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl core::fmt::Debug for RawBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "RawBuffer({} bytes, row pitch {}, slice pitch {})",
            self.data.len(),
            self.row_pitch,
            self.slice_pitch
        )
    }
}
