//! The images matrix: slices × mip levels × depth-sliced buffers.
//!
//! [`ImagesMatrix`] models a texture as an ordered sequence of slices
//! (array layers, cube faces, or a single volume), each owning a chain of
//! [`Mip`] levels, each level holding either decoded [`ImageBuffer`]s (one
//! per depth slice) or one packed [`RawBuffer`] — never both.
//!
//! A caller picks a topology with one of the `init_*` calls (shells only,
//! no pixel memory), then exactly one allocation strategy:
//! [`allocate_images`](ImagesMatrix::allocate_images) for decoded pixels or
//! [`allocate_raw`](ImagesMatrix::allocate_raw) for hardware-pitch bytes
//! pulled through a caller-supplied source. Ownership stays a strict tree
//! until [`release`](ImagesMatrix::release) drops it or
//! [`detach`](ImagesMatrix::detach) moves it out.
//!
//! All mutation takes `&mut self`; there is no interior mutability and no
//! locking. Serialize writers the way you would for any owned value.

use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};

use crate::buffer::{ImageBuffer, RawBuffer};
use crate::color::ColorProfile;
use crate::extent::{Extent, mip_count_for};
use crate::format::PixelFormat;

/// The shape contract of a matrix.
///
/// Decides how many slices the matrix carries and whether per-level depth
/// participates in the mip recurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Topology {
    /// Free-form width × height × depth × array layout.
    #[default]
    Generic,
    /// 2D texture array: `array_size` slices, per-level depth 1.
    Texture2D,
    /// Cube map array: `6 × cube_maps` slices (face-major), square levels.
    TextureCube,
    /// 3D volume: exactly one slice, depth shrinks with the chain.
    Texture3D,
}

/// What a mip level currently owns.
///
/// The two storage modes are mutually exclusive by construction; an
/// allocation call that would mix them fails with
/// [`MipError::StorageModeConflict`] instead of stacking both.
#[derive(Debug, Default)]
#[non_exhaustive]
pub enum MipStorage {
    /// Nothing allocated. The state of a fresh shell and of a released or
    /// detached mip.
    #[default]
    Empty,
    /// One decoded image per depth slice. Slots are independently
    /// fillable; `None` marks a slot an external decoder has not
    /// populated yet.
    Images(Vec<Option<ImageBuffer>>),
    /// One packed buffer covering every depth slice.
    Raw(RawBuffer),
}

impl MipStorage {
    /// Whether nothing is allocated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// What a raw-buffer source yields for one (slice, level) address.
///
/// Returned by the callback passed to
/// [`ImagesMatrix::allocate_raw`]. The pitches size the level's buffer
/// (`depth × slice_pitch` bytes); `bytes`, when present, is copied into it
/// and must hold at least that many bytes.
#[derive(Clone, Copy, Debug)]
pub struct RawMipSource<'a> {
    /// Bytes to copy in, or `None` to only allocate.
    pub bytes: Option<&'a [u8]>,
    /// Byte stride between consecutive rows.
    pub row_pitch: u32,
    /// Byte stride between consecutive depth slices.
    pub slice_pitch: u32,
}

impl<'a> RawMipSource<'a> {
    /// A layout-only source: allocate (or keep) the buffer, copy nothing.
    pub const fn layout(row_pitch: u32, slice_pitch: u32) -> Self {
        Self {
            bytes: None,
            row_pitch,
            slice_pitch,
        }
    }

    /// Attach source bytes to copy into the level's buffer.
    pub fn with_bytes(mut self, bytes: &'a [u8]) -> Self {
        self.bytes = Some(bytes);
        self
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A per-mip allocation or population failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum MipError {
    /// The mip already holds the other storage mode; release it first.
    StorageModeConflict,
    /// A raw source held fewer bytes than `depth × slice_pitch`.
    SourceTooSmall {
        /// Bytes the copy needs.
        needed: usize,
        /// Bytes the source held.
        got: usize,
    },
    /// A raw re-allocation changed pitches such that `depth × slice_pitch`
    /// no longer matches the existing buffer.
    PitchMismatch {
        /// Bytes the new pitches require.
        needed: usize,
        /// Bytes the existing buffer holds.
        allocated: usize,
    },
    /// The level's byte size overflows the address space.
    OversizedLevel,
    /// A depth-slice index past the level's depth.
    DepthOutOfRange {
        /// The offending index.
        index: u32,
        /// The level's depth.
        depth: u32,
    },
    /// An image's dimensions do not match the level shell.
    ImageExtentMismatch {
        /// Level width.
        expected_width: u32,
        /// Level height.
        expected_height: u32,
        /// Image width.
        width: u32,
        /// Image height.
        height: u32,
    },
}

impl fmt::Display for MipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StorageModeConflict => {
                write!(f, "mip already holds the other storage mode; release first")
            }
            Self::SourceTooSmall { needed, got } => {
                write!(f, "raw source holds {got} bytes, copy needs {needed}")
            }
            Self::PitchMismatch { needed, allocated } => {
                write!(
                    f,
                    "new pitches need {needed} bytes, buffer holds {allocated}"
                )
            }
            Self::OversizedLevel => write!(f, "level byte size overflows the address space"),
            Self::DepthOutOfRange { index, depth } => {
                write!(f, "depth index {index} out of range (depth: {depth})")
            }
            Self::ImageExtentMismatch {
                expected_width,
                expected_height,
                width,
                height,
            } => {
                write!(
                    f,
                    "image is {width}x{height}, level is {expected_width}x{expected_height}"
                )
            }
        }
    }
}

impl core::error::Error for MipError {}

/// A matrix initialization or allocation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum MatrixError {
    /// A zero dimension passed to an initializer.
    InvalidSize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
        /// Requested depth.
        depth: u32,
    },
    /// A zero (or overflowing) slice count passed to an initializer.
    InvalidArraySize,
    /// A per-mip failure, with the address where the walk stopped.
    Mip {
        /// Slice index.
        slice: u32,
        /// Mip level index.
        level: u32,
        /// The underlying failure.
        source: MipError,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize {
                width,
                height,
                depth,
            } => {
                write!(f, "invalid texture size {width}x{height}x{depth}")
            }
            Self::InvalidArraySize => write!(f, "invalid texture array size"),
            Self::Mip {
                slice,
                level,
                source,
            } => {
                write!(f, "slice {slice} mip {level}: {source}")
            }
        }
    }
}

impl core::error::Error for MatrixError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Mip { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Mip
// ---------------------------------------------------------------------------

/// One mip level: its extent plus whatever storage backs it.
#[derive(Debug)]
pub struct Mip {
    extent: Extent,
    storage: MipStorage,
}

impl Mip {
    fn shell(extent: Extent) -> Self {
        Self {
            extent,
            storage: MipStorage::Empty,
        }
    }

    /// The level's extent.
    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Level width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.extent.width
    }

    /// Level height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.extent.height
    }

    /// Number of depth slices at this level.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.extent.depth
    }

    /// The storage backing this level.
    #[inline]
    pub fn storage(&self) -> &MipStorage {
        &self.storage
    }

    /// Whether nothing is allocated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// The decoded image at `depth_index`, if one is populated.
    pub fn image(&self, depth_index: u32) -> Option<&ImageBuffer> {
        match &self.storage {
            MipStorage::Images(images) => images.get(depth_index as usize)?.as_ref(),
            _ => None,
        }
    }

    /// Mutable access to the decoded image at `depth_index`.
    pub fn image_mut(&mut self, depth_index: u32) -> Option<&mut ImageBuffer> {
        match &mut self.storage {
            MipStorage::Images(images) => images.get_mut(depth_index as usize)?.as_mut(),
            _ => None,
        }
    }

    /// The packed raw buffer, if this level is in raw mode.
    pub fn raw(&self) -> Option<&RawBuffer> {
        match &self.storage {
            MipStorage::Raw(raw) => Some(raw),
            _ => None,
        }
    }

    /// Mutable access to the packed raw buffer.
    pub fn raw_mut(&mut self) -> Option<&mut RawBuffer> {
        match &mut self.storage {
            MipStorage::Raw(raw) => Some(raw),
            _ => None,
        }
    }

    /// Place a decoded image into one depth-slice slot, returning the
    /// displaced image if the slot was populated.
    ///
    /// This is the incremental-population path: a decoder can drop slices
    /// in one by one, then let
    /// [`allocate_images`](ImagesMatrix::allocate_images) fill whatever is
    /// still empty. The image's dimensions must match the level shell.
    pub fn set_image(
        &mut self,
        depth_index: u32,
        image: ImageBuffer,
    ) -> Result<Option<ImageBuffer>, MipError> {
        if depth_index >= self.extent.depth {
            return Err(MipError::DepthOutOfRange {
                index: depth_index,
                depth: self.extent.depth,
            });
        }
        if image.width() != self.extent.width || image.height() != self.extent.height {
            return Err(MipError::ImageExtentMismatch {
                expected_width: self.extent.width,
                expected_height: self.extent.height,
                width: image.width(),
                height: image.height(),
            });
        }
        match &self.storage {
            MipStorage::Raw(_) => return Err(MipError::StorageModeConflict),
            MipStorage::Empty => {
                self.storage =
                    MipStorage::Images((0..self.extent.depth).map(|_| None).collect());
            }
            MipStorage::Images(_) => {}
        }
        let MipStorage::Images(images) = &mut self.storage else {
            return Err(MipError::StorageModeConflict);
        };
        Ok(images[depth_index as usize].replace(image))
    }

    /// Allocate a decoded image for every unpopulated depth-slice slot.
    ///
    /// Idempotent per slot: already-populated slots keep their buffer.
    pub fn allocate_images(
        &mut self,
        format: PixelFormat,
        profile: &ColorProfile,
    ) -> Result<(), MipError> {
        let Extent {
            width,
            height,
            depth,
        } = self.extent;
        if format
            .aligned_stride(width)
            .checked_mul(height as usize)
            .is_none()
        {
            return Err(MipError::OversizedLevel);
        }
        match &mut self.storage {
            MipStorage::Raw(_) => Err(MipError::StorageModeConflict),
            MipStorage::Empty => {
                let images = (0..depth)
                    .map(|_| Some(ImageBuffer::new(width, height, format, profile.clone())))
                    .collect();
                self.storage = MipStorage::Images(images);
                Ok(())
            }
            MipStorage::Images(images) => {
                for slot in images.iter_mut() {
                    if slot.is_none() {
                        *slot = Some(ImageBuffer::new(width, height, format, profile.clone()));
                    }
                }
                Ok(())
            }
        }
    }

    /// Allocate (or reuse) the level's packed buffer and copy source bytes.
    ///
    /// The buffer is sized `depth × slice_pitch` and allocated zeroed
    /// exactly once; a later call with matching pitches reuses it and only
    /// re-copies. `bytes: None` leaves the contents untouched.
    pub fn allocate_raw(&mut self, source: RawMipSource<'_>) -> Result<(), MipError> {
        let needed = (self.extent.depth as usize)
            .checked_mul(source.slice_pitch as usize)
            .ok_or(MipError::OversizedLevel)?;
        match &mut self.storage {
            MipStorage::Images(_) => Err(MipError::StorageModeConflict),
            MipStorage::Empty => {
                if let Some(bytes) = source.bytes
                    && bytes.len() < needed
                {
                    return Err(MipError::SourceTooSmall {
                        needed,
                        got: bytes.len(),
                    });
                }
                let mut raw = RawBuffer::zeroed(needed, source.row_pitch, source.slice_pitch);
                if let Some(bytes) = source.bytes {
                    raw.as_bytes_mut().copy_from_slice(&bytes[..needed]);
                }
                self.storage = MipStorage::Raw(raw);
                Ok(())
            }
            MipStorage::Raw(raw) => {
                if needed != raw.len() {
                    return Err(MipError::PitchMismatch {
                        needed,
                        allocated: raw.len(),
                    });
                }
                if let Some(bytes) = source.bytes {
                    if bytes.len() < needed {
                        return Err(MipError::SourceTooSmall {
                            needed,
                            got: bytes.len(),
                        });
                    }
                    raw.as_bytes_mut().copy_from_slice(&bytes[..needed]);
                }
                raw.set_pitches(source.row_pitch, source.slice_pitch);
                Ok(())
            }
        }
    }

    /// Drop whatever the level owns. Idempotent.
    pub fn release(&mut self) {
        self.storage = MipStorage::Empty;
    }

    /// Move the level's storage out, leaving it empty.
    pub fn take(&mut self) -> MipStorage {
        core::mem::take(&mut self.storage)
    }
}

// ---------------------------------------------------------------------------
// Mips
// ---------------------------------------------------------------------------

/// The mip chain of one slice.
#[derive(Debug, Default)]
pub struct Mips {
    levels: Vec<Mip>,
}

impl Mips {
    fn from_chain(base: Extent, count: u32) -> Self {
        Self {
            levels: base.mip_chain(count).map(Mip::shell).collect(),
        }
    }

    /// Number of mip levels in this chain.
    #[inline]
    pub fn level_count(&self) -> u32 {
        self.levels.len() as u32
    }

    /// The levels, largest first.
    #[inline]
    pub fn levels(&self) -> &[Mip] {
        &self.levels
    }

    /// The levels, mutable.
    #[inline]
    pub fn levels_mut(&mut self) -> &mut [Mip] {
        &mut self.levels
    }

    /// The mip at `level`.
    ///
    /// # Panics
    ///
    /// Panics if `level` is out of range.
    #[inline]
    pub fn level(&self, level: u32) -> &Mip {
        &self.levels[level as usize]
    }

    /// The mip at `level`, mutable.
    ///
    /// # Panics
    ///
    /// Panics if `level` is out of range.
    #[inline]
    pub fn level_mut(&mut self, level: u32) -> &mut Mip {
        &mut self.levels[level as usize]
    }

    fn release(&mut self) {
        for mip in &mut self.levels {
            mip.release();
        }
    }

    fn take_storages(&mut self) -> Vec<MipStorage> {
        self.levels.iter_mut().map(Mip::take).collect()
    }
}

impl Index<usize> for Mips {
    type Output = Mip;

    fn index(&self, level: usize) -> &Mip {
        &self.levels[level]
    }
}

impl IndexMut<usize> for Mips {
    fn index_mut(&mut self, level: usize) -> &mut Mip {
        &mut self.levels[level]
    }
}

// ---------------------------------------------------------------------------
// ImagesMatrix
// ---------------------------------------------------------------------------

/// Multi-dimensional image storage: an array of mip chains.
///
/// See the [module docs](self) for the lifecycle. Dropping a matrix drops
/// everything it owns; there is no explicit destructor to call.
#[derive(Debug, Default)]
pub struct ImagesMatrix {
    topology: Topology,
    format: Option<PixelFormat>,
    profile: ColorProfile,
    slices: Vec<Mips>,
}

impl ImagesMatrix {
    /// An empty generic matrix with no slices and no format.
    pub fn new() -> Self {
        Self::default()
    }

    // Topology initializers ---------------------------------------------------

    /// Initialize as a 2D texture array: `array_size` slices, every level
    /// depth 1.
    ///
    /// `mip_levels == 0` derives the full chain from `max(width, height)`.
    /// Any previously owned buffers are released; on error the matrix is
    /// left untouched.
    pub fn init_texture_2d_array(
        &mut self,
        width: u32,
        height: u32,
        array_size: u32,
        mip_levels: u32,
    ) -> Result<(), MatrixError> {
        if width == 0 || height == 0 {
            return Err(MatrixError::InvalidSize {
                width,
                height,
                depth: 1,
            });
        }
        if array_size == 0 {
            return Err(MatrixError::InvalidArraySize);
        }
        let levels = if mip_levels == 0 {
            mip_count_for(width.max(height))
        } else {
            mip_levels
        };
        self.rebuild(
            Topology::Texture2D,
            Extent::flat(width, height),
            array_size,
            levels,
        );
        Ok(())
    }

    /// Initialize as a cube map array: `6 × cube_maps_count` slices in
    /// face-major order (slice index = `cube_index * 6 + face_index`),
    /// square levels, every level depth 1.
    ///
    /// `mip_levels == 0` derives the full chain from `cube_size`.
    pub fn init_cube_texture_array(
        &mut self,
        cube_size: u32,
        cube_maps_count: u32,
        mip_levels: u32,
    ) -> Result<(), MatrixError> {
        if cube_size == 0 {
            return Err(MatrixError::InvalidSize {
                width: cube_size,
                height: cube_size,
                depth: 1,
            });
        }
        let faces = match cube_maps_count.checked_mul(6) {
            Some(faces) if faces > 0 => faces,
            _ => return Err(MatrixError::InvalidArraySize),
        };
        let levels = if mip_levels == 0 {
            mip_count_for(cube_size)
        } else {
            mip_levels
        };
        self.rebuild(
            Topology::TextureCube,
            Extent::flat(cube_size, cube_size),
            faces,
            levels,
        );
        Ok(())
    }

    /// Initialize as a 3D volume: exactly one slice whose depth shrinks
    /// with the chain (round-up halving).
    ///
    /// `mip_levels == 0` derives the full chain from
    /// `max(width, height, depth)`.
    pub fn init_texture_3d(
        &mut self,
        width: u32,
        height: u32,
        depth: u32,
        mip_levels: u32,
    ) -> Result<(), MatrixError> {
        if width == 0 || height == 0 || depth == 0 {
            return Err(MatrixError::InvalidSize {
                width,
                height,
                depth,
            });
        }
        let levels = if mip_levels == 0 {
            mip_count_for(width.max(height).max(depth))
        } else {
            mip_levels
        };
        self.rebuild(
            Topology::Texture3D,
            Extent::new(width, height, depth),
            1,
            levels,
        );
        Ok(())
    }

    /// Initialize as a generic layout: `array_size` slices, each with the
    /// full width × height × depth mip progression of a volume.
    ///
    /// Unlike the other initializers, `mip_levels` is used as given — even
    /// 0, which builds empty chains. A generic layout has no single size
    /// to derive a chain length from, so nothing is derived.
    pub fn init_texture_generic(
        &mut self,
        width: u32,
        height: u32,
        depth: u32,
        array_size: u32,
        mip_levels: u32,
    ) -> Result<(), MatrixError> {
        if width == 0 || height == 0 || depth == 0 {
            return Err(MatrixError::InvalidSize {
                width,
                height,
                depth,
            });
        }
        if array_size == 0 {
            return Err(MatrixError::InvalidArraySize);
        }
        self.rebuild(
            Topology::Generic,
            Extent::new(width, height, depth),
            array_size,
            mip_levels,
        );
        Ok(())
    }

    fn rebuild(&mut self, topology: Topology, base: Extent, slice_count: u32, mip_levels: u32) {
        self.topology = topology;
        self.format = None;
        // Replacing the slices drops every previously owned buffer.
        self.slices = (0..slice_count)
            .map(|_| Mips::from_chain(base, mip_levels))
            .collect();
    }

    // Allocation strategies ---------------------------------------------------

    /// Allocate a decoded [`ImageBuffer`] for every unpopulated depth-slice
    /// slot of every level, and record `format`/`profile` on the matrix.
    ///
    /// Idempotent per slot: slots an external decoder already populated
    /// (via [`Mip::set_image`]) keep their buffer. A level in raw mode
    /// fails with [`MipError::StorageModeConflict`]; slots filled before
    /// the failing level stay filled (there is no rollback).
    pub fn allocate_images(
        &mut self,
        format: PixelFormat,
        profile: &ColorProfile,
    ) -> Result<(), MatrixError> {
        self.format = Some(format);
        self.profile = profile.clone();
        for (slice_index, mips) in self.slices.iter_mut().enumerate() {
            for (level_index, mip) in mips.levels.iter_mut().enumerate() {
                mip.allocate_images(format, profile)
                    .map_err(|source| MatrixError::Mip {
                        slice: slice_index as u32,
                        level: level_index as u32,
                        source,
                    })?;
            }
        }
        Ok(())
    }

    /// Allocate (or refill) a packed [`RawBuffer`] for every level, pulling
    /// layout and optional source bytes from `sources`.
    ///
    /// The matrix format resets to `None` — raw mode carries no format
    /// semantics at this layer. `sources` is invoked exactly once per
    /// (slice, level) pair, in slice-major order, and its pitches are
    /// trusted as given. Buffers are allocated once and reused across
    /// repeated calls; see [`Mip::allocate_raw`] for the reuse contract.
    /// A level in image mode fails with
    /// [`MipError::StorageModeConflict`]; earlier levels keep whatever the
    /// walk already did (there is no rollback).
    pub fn allocate_raw<'a, F>(&mut self, mut sources: F) -> Result<(), MatrixError>
    where
        F: FnMut(u32, u32) -> RawMipSource<'a>,
    {
        self.format = None;
        for (slice_index, mips) in self.slices.iter_mut().enumerate() {
            for (level_index, mip) in mips.levels.iter_mut().enumerate() {
                let source = sources(slice_index as u32, level_index as u32);
                mip.allocate_raw(source).map_err(|source| MatrixError::Mip {
                    slice: slice_index as u32,
                    level: level_index as u32,
                    source,
                })?;
            }
        }
        Ok(())
    }

    // Lifecycle ---------------------------------------------------------------

    /// Drop every owned buffer in every level of every slice and reset the
    /// format to `None`. The shells (topology, extents, slice and level
    /// counts) survive. Idempotent.
    pub fn release(&mut self) {
        for mips in &mut self.slices {
            mips.release();
        }
        self.format = None;
    }

    /// Move every level's storage out to the caller and reset the format
    /// to `None`.
    ///
    /// The returned nesting mirrors the matrix: outer index is the slice,
    /// inner the mip level. Use this when ownership of the buffers is
    /// handed to something else (an upload path, a pool) and the matrix
    /// should forget them without dropping them.
    pub fn detach(&mut self) -> Vec<Vec<MipStorage>> {
        self.format = None;
        self.slices.iter_mut().map(Mips::take_storages).collect()
    }

    // Accessors ---------------------------------------------------------------

    /// The topology set by the last `init_*` call.
    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// The pixel format of decoded storage, or `None` when unknown (fresh,
    /// released, detached, or raw-mode matrix).
    #[inline]
    pub fn format(&self) -> Option<PixelFormat> {
        self.format
    }

    /// The color profile recorded by the last decoded allocation.
    #[inline]
    pub fn color_profile(&self) -> &ColorProfile {
        &self.profile
    }

    /// Number of slices (array layers / cube faces / 1 for a volume).
    #[inline]
    pub fn slice_count(&self) -> u32 {
        self.slices.len() as u32
    }

    /// Number of mip levels per slice (every slice has the same count).
    #[inline]
    pub fn mip_level_count(&self) -> u32 {
        self.slices.first().map_or(0, Mips::level_count)
    }

    /// All slices.
    #[inline]
    pub fn slices(&self) -> &[Mips] {
        &self.slices
    }

    /// All slices, mutable.
    #[inline]
    pub fn slices_mut(&mut self) -> &mut [Mips] {
        &mut self.slices
    }

    /// The mip chain of one slice.
    ///
    /// # Panics
    ///
    /// Panics if `slice` is out of range.
    #[inline]
    pub fn slice(&self, slice: u32) -> &Mips {
        &self.slices[slice as usize]
    }

    /// The mip chain of one slice, mutable.
    ///
    /// # Panics
    ///
    /// Panics if `slice` is out of range.
    #[inline]
    pub fn slice_mut(&mut self, slice: u32) -> &mut Mips {
        &mut self.slices[slice as usize]
    }

    /// Total pixels across every level of every slice.
    pub fn pixel_count(&self) -> u64 {
        self.slices
            .iter()
            .flat_map(|mips| mips.levels.iter())
            .map(|mip| mip.extent.pixel_count())
            .sum()
    }

    /// Total bytes decoded storage would need in `format`, across every
    /// level of every slice. The estimate a resource budget checks before
    /// [`allocate_images`](Self::allocate_images).
    pub fn image_bytes(&self, format: PixelFormat) -> u64 {
        self.slices
            .iter()
            .flat_map(|mips| mips.levels.iter())
            .map(|mip| {
                format.aligned_stride(mip.extent.width) as u64
                    * mip.extent.height as u64
                    * mip.extent.depth as u64
            })
            .sum()
    }
}

impl Index<usize> for ImagesMatrix {
    type Output = Mips;

    fn index(&self, slice: usize) -> &Mips {
        &self.slices[slice]
    }
}

impl IndexMut<usize> for ImagesMatrix {
    fn index_mut(&mut self, slice: usize) -> &mut Mips {
        &mut self.slices[slice]
    }
}
