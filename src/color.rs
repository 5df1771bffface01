//! Color profile value types.
//!
//! [`ColorProfile`] describes the color space and gamma of decoded pixels.
//! It travels with the matrix-level pixel format: set by the decoded-image
//! allocation call, consulted by whatever converts or uploads the pixels
//! later. Raw packed buffers carry no profile semantics at this layer.

/// Electro-optical transfer curve.
///
/// Covers the curves encountered in texture sources: the sRGB piecewise
/// curve, pure power-law gammas recovered from file metadata, linear HDR
/// data, and the two broadcast HDR curves.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum TransferCurve {
    /// Linear light (gamma 1.0).
    Linear,
    /// sRGB transfer curve (IEC 61966-2-1).
    Srgb,
    /// Pure power-law gamma with the given exponent.
    ///
    /// Files that specify an explicit gamma (PNG gAMA, TIFF) land here;
    /// 2.2 is the conventional default when a file says nothing.
    Gamma {
        /// The gamma exponent (e.g. 2.2).
        exponent: f32,
    },
    /// Perceptual Quantizer (SMPTE ST 2084, HDR10).
    Pq,
    /// Hybrid Log-Gamma (ARIB STD-B67, HLG).
    Hlg,
}

impl Default for TransferCurve {
    fn default() -> Self {
        Self::Srgb
    }
}

/// Well-known primary sets.
///
/// These cover the primaries encountered in practice for still images and
/// HDR content; a CMS backend maps each to the appropriate colorant matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Primaries {
    /// sRGB / BT.709. The web and desktop default.
    #[default]
    Srgb,
    /// Adobe RGB (1998). Used in print workflows.
    AdobeRgb,
    /// Display P3. Apple displays, wide-gamut web content.
    DisplayP3,
    /// BT.2020 (wide gamut, HDR).
    Bt2020,
    /// ProPhoto RGB. Photographic editing intermediates.
    ProPhoto,
}

/// Color space and gamma of decoded pixels.
///
/// A small value type, cloned freely. Paired with a
/// [`PixelFormat`](crate::PixelFormat) on the matrix and on every decoded
/// [`ImageBuffer`](crate::ImageBuffer).
#[derive(Clone, Debug, PartialEq, Default)]
#[non_exhaustive]
pub struct ColorProfile {
    /// Primary chromaticities.
    pub primaries: Primaries,
    /// Transfer curve.
    pub transfer: TransferCurve,
}

impl ColorProfile {
    /// Create a profile from primaries and a transfer curve.
    pub const fn new(primaries: Primaries, transfer: TransferCurve) -> Self {
        Self {
            primaries,
            transfer,
        }
    }

    /// Standard sRGB (sRGB primaries, sRGB curve).
    pub const fn srgb() -> Self {
        Self::new(Primaries::Srgb, TransferCurve::Srgb)
    }

    /// Linear light with sRGB primaries. The working space for
    /// compositing and physically-based rendering.
    pub const fn linear() -> Self {
        Self::new(Primaries::Srgb, TransferCurve::Linear)
    }

    /// Power-law gamma with sRGB primaries.
    pub const fn gamma(exponent: f32) -> Self {
        Self::new(Primaries::Srgb, TransferCurve::Gamma { exponent })
    }

    /// Whether the transfer curve is linear.
    #[inline]
    pub fn is_linear(&self) -> bool {
        matches!(self.transfer, TransferCurve::Linear)
    }

    /// The effective power-law exponent, if the curve has one.
    ///
    /// Returns `Some(1.0)` for linear, `Some(2.2)` for sRGB (the
    /// conventional approximation of its piecewise curve), the stored
    /// exponent for [`TransferCurve::Gamma`], and `None` for the HDR
    /// curves, which are not power laws.
    pub fn gamma_exponent(&self) -> Option<f32> {
        match self.transfer {
            TransferCurve::Linear => Some(1.0),
            TransferCurve::Srgb => Some(2.2),
            TransferCurve::Gamma { exponent } => Some(exponent),
            TransferCurve::Pq | TransferCurve::Hlg => None,
        }
    }
}
