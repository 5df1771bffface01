//! Resource limits for matrix allocation.
//!
//! [`ResourceLimits`] defines caps on texture geometry and memory.
//! [`LimitExceeded`] is returned when a check fails. Use the `check_*`
//! methods for header-time rejection — reject a hostile texture
//! description before building shells or touching pixel memory.

use crate::extent::Extent;
use crate::format::PixelFormat;
use crate::matrix::ImagesMatrix;

/// Resource limits for matrix initialization and allocation.
///
/// Used to prevent resource exhaustion when geometry comes from untrusted
/// input. All fields are optional; `None` means no limit for that axis.
///
/// # Example
///
/// ```
/// use zentex::ResourceLimits;
///
/// let limits = ResourceLimits::none()
///     .with_max_pixels(100_000_000)
///     .with_max_memory(512 * 1024 * 1024);
/// ```
///
/// Typical usage with a loader:
///
/// ```ignore
/// limits.check_extent(Extent::new(header.width, header.height, header.depth))?;
/// matrix.init_texture_2d_array(header.width, header.height, header.layers, 0)?;
/// limits.check_matrix(&matrix, format)?;
/// matrix.allocate_images(format, &profile)?;
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct ResourceLimits {
    /// Maximum base width in pixels.
    pub max_width: Option<u32>,
    /// Maximum base height in pixels.
    pub max_height: Option<u32>,
    /// Maximum base depth in slices.
    pub max_depth: Option<u32>,
    /// Maximum array layers (cube faces count individually).
    pub max_array_layers: Option<u32>,
    /// Maximum total pixels across every slice and level.
    pub max_pixels: Option<u64>,
    /// Maximum decoded memory in bytes.
    pub max_memory_bytes: Option<u64>,
}

impl ResourceLimits {
    /// No limits (all fields `None`).
    pub fn none() -> Self {
        Self::default()
    }

    /// Set maximum base width in pixels.
    pub fn with_max_width(mut self, width: u32) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Set maximum base height in pixels.
    pub fn with_max_height(mut self, height: u32) -> Self {
        self.max_height = Some(height);
        self
    }

    /// Set maximum base depth in slices.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set maximum array layers.
    pub fn with_max_array_layers(mut self, layers: u32) -> Self {
        self.max_array_layers = Some(layers);
        self
    }

    /// Set maximum total pixels.
    pub fn with_max_pixels(mut self, max: u64) -> Self {
        self.max_pixels = Some(max);
        self
    }

    /// Set maximum decoded memory in bytes.
    pub fn with_max_memory(mut self, bytes: u64) -> Self {
        self.max_memory_bytes = Some(bytes);
        self
    }

    /// Whether any limits are set.
    pub fn has_any(&self) -> bool {
        self.max_width.is_some()
            || self.max_height.is_some()
            || self.max_depth.is_some()
            || self.max_array_layers.is_some()
            || self.max_pixels.is_some()
            || self.max_memory_bytes.is_some()
    }

    // --- Validation methods ---

    /// Check a base extent against `max_width`, `max_height`, `max_depth`,
    /// and `max_pixels` (for the base level alone).
    pub fn check_extent(&self, extent: Extent) -> Result<(), LimitExceeded> {
        if let Some(max) = self.max_width
            && extent.width > max
        {
            return Err(LimitExceeded::Width {
                actual: extent.width,
                max,
            });
        }
        if let Some(max) = self.max_height
            && extent.height > max
        {
            return Err(LimitExceeded::Height {
                actual: extent.height,
                max,
            });
        }
        if let Some(max) = self.max_depth
            && extent.depth > max
        {
            return Err(LimitExceeded::Depth {
                actual: extent.depth,
                max,
            });
        }
        if let Some(max) = self.max_pixels {
            let pixels = extent.pixel_count();
            if pixels > max {
                return Err(LimitExceeded::Pixels {
                    actual: pixels,
                    max,
                });
            }
        }
        Ok(())
    }

    /// Check an array layer count against `max_array_layers`.
    pub fn check_array_layers(&self, layers: u32) -> Result<(), LimitExceeded> {
        if let Some(max) = self.max_array_layers
            && layers > max
        {
            return Err(LimitExceeded::ArrayLayers {
                actual: layers,
                max,
            });
        }
        Ok(())
    }

    /// Check a total pixel count against `max_pixels`.
    pub fn check_pixels(&self, pixels: u64) -> Result<(), LimitExceeded> {
        if let Some(max) = self.max_pixels
            && pixels > max
        {
            return Err(LimitExceeded::Pixels {
                actual: pixels,
                max,
            });
        }
        Ok(())
    }

    /// Check a memory estimate against `max_memory_bytes`.
    pub fn check_memory(&self, bytes: u64) -> Result<(), LimitExceeded> {
        if let Some(max) = self.max_memory_bytes
            && bytes > max
        {
            return Err(LimitExceeded::Memory { actual: bytes, max });
        }
        Ok(())
    }

    /// Check an initialized (but not yet allocated) matrix against every
    /// applicable limit, estimating decoded memory in `format`. This is
    /// the last rejection point before pixel allocation.
    ///
    /// Checks: `max_array_layers` against the slice count, `max_pixels`
    /// against the matrix total, `max_memory_bytes` against
    /// [`ImagesMatrix::image_bytes`].
    pub fn check_matrix(
        &self,
        matrix: &ImagesMatrix,
        format: PixelFormat,
    ) -> Result<(), LimitExceeded> {
        self.check_array_layers(matrix.slice_count())?;
        self.check_pixels(matrix.pixel_count())?;
        self.check_memory(matrix.image_bytes(format))
    }
}

/// A resource limit was exceeded.
///
/// Returned by [`ResourceLimits::check_extent()`] and related methods.
/// Each variant carries the actual value and the limit that was exceeded,
/// enabling useful error messages.
///
/// Implements [`core::error::Error`] so loaders can wrap it in their own
/// error types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LimitExceeded {
    /// Base width exceeded `max_width`.
    Width {
        /// Actual width.
        actual: u32,
        /// Maximum allowed.
        max: u32,
    },
    /// Base height exceeded `max_height`.
    Height {
        /// Actual height.
        actual: u32,
        /// Maximum allowed.
        max: u32,
    },
    /// Base depth exceeded `max_depth`.
    Depth {
        /// Actual depth.
        actual: u32,
        /// Maximum allowed.
        max: u32,
    },
    /// Array layer count exceeded `max_array_layers`.
    ArrayLayers {
        /// Actual layer count.
        actual: u32,
        /// Maximum allowed.
        max: u32,
    },
    /// Pixel count exceeded `max_pixels`.
    Pixels {
        /// Actual pixel count.
        actual: u64,
        /// Maximum allowed.
        max: u64,
    },
    /// Memory exceeded `max_memory_bytes`.
    Memory {
        /// Estimated memory in bytes.
        actual: u64,
        /// Maximum allowed.
        max: u64,
    },
}

impl core::fmt::Display for LimitExceeded {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Width { actual, max } => write!(f, "width {actual} exceeds limit {max}"),
            Self::Height { actual, max } => write!(f, "height {actual} exceeds limit {max}"),
            Self::Depth { actual, max } => write!(f, "depth {actual} exceeds limit {max}"),
            Self::ArrayLayers { actual, max } => {
                write!(f, "array layer count {actual} exceeds limit {max}")
            }
            Self::Pixels { actual, max } => {
                write!(f, "pixel count {actual} exceeds limit {max}")
            }
            Self::Memory { actual, max } => {
                write!(f, "memory {actual} bytes exceeds limit {max}")
            }
        }
    }
}

impl core::error::Error for LimitExceeded {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_limits() {
        let limits = ResourceLimits::none();
        assert!(!limits.has_any());
    }

    #[test]
    fn builder_sets_limits() {
        let limits = ResourceLimits::none()
            .with_max_pixels(1_000_000)
            .with_max_memory(512 * 1024 * 1024);
        assert!(limits.has_any());
        assert_eq!(limits.max_pixels, Some(1_000_000));
        assert_eq!(limits.max_memory_bytes, Some(512 * 1024 * 1024));
        assert!(limits.max_width.is_none());
    }

    #[test]
    fn check_extent_pass() {
        let limits = ResourceLimits::none()
            .with_max_width(4096)
            .with_max_height(4096)
            .with_max_depth(256)
            .with_max_pixels(1 << 32);
        assert!(limits.check_extent(Extent::new(4096, 4096, 256)).is_ok());
        assert!(limits.check_extent(Extent::flat(100, 100)).is_ok());
    }

    #[test]
    fn check_extent_width_exceeded() {
        let limits = ResourceLimits::none().with_max_width(4096);
        let err = limits.check_extent(Extent::flat(4097, 100)).unwrap_err();
        assert_eq!(
            err,
            LimitExceeded::Width {
                actual: 4097,
                max: 4096
            }
        );
    }

    #[test]
    fn check_extent_height_and_depth_exceeded() {
        let limits = ResourceLimits::none().with_max_height(1080).with_max_depth(64);
        let err = limits.check_extent(Extent::flat(100, 1081)).unwrap_err();
        assert!(matches!(err, LimitExceeded::Height { .. }));
        let err = limits.check_extent(Extent::new(1, 1, 65)).unwrap_err();
        assert_eq!(err, LimitExceeded::Depth { actual: 65, max: 64 });
    }

    #[test]
    fn check_extent_pixels_exceeded() {
        let limits = ResourceLimits::none().with_max_pixels(1_000_000);
        // 1001×1000 = 1,001,000 > 1,000,000
        let err = limits.check_extent(Extent::flat(1001, 1000)).unwrap_err();
        assert_eq!(
            err,
            LimitExceeded::Pixels {
                actual: 1_001_000,
                max: 1_000_000
            }
        );
    }

    #[test]
    fn check_extent_no_limits_always_passes() {
        let limits = ResourceLimits::none();
        assert!(
            limits
                .check_extent(Extent::new(100_000, 100_000, 100_000))
                .is_ok()
        );
    }

    #[test]
    fn check_array_layers_pass_and_fail() {
        let limits = ResourceLimits::none().with_max_array_layers(64);
        assert!(limits.check_array_layers(64).is_ok());
        let err = limits.check_array_layers(65).unwrap_err();
        assert_eq!(
            err,
            LimitExceeded::ArrayLayers {
                actual: 65,
                max: 64
            }
        );
    }

    #[test]
    fn check_memory_pass_and_fail() {
        let limits = ResourceLimits::none().with_max_memory(512 * 1024 * 1024);
        assert!(limits.check_memory(256 * 1024 * 1024).is_ok());
        let err = limits.check_memory(1024 * 1024 * 1024).unwrap_err();
        assert!(matches!(err, LimitExceeded::Memory { .. }));
    }

    #[test]
    fn check_matrix_folds_all_axes() {
        let mut m = ImagesMatrix::new();
        m.init_texture_2d_array(4, 4, 2, 2).unwrap();
        // 2 slices × (16 + 4) pixels = 40; RGBA8 → 160 bytes.

        let limits = ResourceLimits::none()
            .with_max_array_layers(2)
            .with_max_pixels(40)
            .with_max_memory(160);
        assert!(limits.check_matrix(&m, PixelFormat::RGBA8).is_ok());

        let tight = ResourceLimits::none().with_max_memory(159);
        let err = tight.check_matrix(&m, PixelFormat::RGBA8).unwrap_err();
        assert_eq!(
            err,
            LimitExceeded::Memory {
                actual: 160,
                max: 159
            }
        );

        let narrow = ResourceLimits::none().with_max_array_layers(1);
        let err = narrow.check_matrix(&m, PixelFormat::RGBA8).unwrap_err();
        assert!(matches!(err, LimitExceeded::ArrayLayers { .. }));

        // The check is geometry-only; nothing got allocated.
        assert!(m[0][0].is_empty());
    }

    #[test]
    fn limit_exceeded_display() {
        use alloc::format;
        let err = LimitExceeded::Width {
            actual: 5000,
            max: 4096,
        };
        assert_eq!(format!("{err}"), "width 5000 exceeds limit 4096");

        let err = LimitExceeded::Pixels {
            actual: 20_000_000,
            max: 16_000_000,
        };
        assert_eq!(
            format!("{err}"),
            "pixel count 20000000 exceeds limit 16000000"
        );
    }

    #[test]
    fn limit_exceeded_is_error() {
        fn assert_error<E: core::error::Error>(_: &E) {}
        let err = LimitExceeded::Depth {
            actual: 512,
            max: 256,
        };
        assert_error(&err);
    }
}
