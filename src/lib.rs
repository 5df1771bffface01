//! Mip-chain image storage for texture upload pipelines.
//!
//! This crate models a texture as a uniform matrix of image buffers:
//!
//! - [`ImagesMatrix`] — slices × mip levels, one shape for 2D arrays,
//!   cube map arrays, 3D volumes, and generic layouts
//! - [`Mips`] / [`Mip`] / [`MipStorage`] — one slice's chain, one level,
//!   and the level's storage (decoded images or one packed raw buffer)
//! - [`ImageBuffer`] / [`RawBuffer`] — the two owned buffer shapes
//! - [`Extent`] / [`mip_count_for`] — mip-chain geometry
//! - [`PixelFormat`] / [`ColorProfile`] — value types tagging decoded pixels
//! - [`ResourceLimits`] — geometry/memory caps for untrusted input
//!
//! Codecs decode into [`ImageBuffer`]s and drop them in with
//! [`Mip::set_image`]; upload paths pull packed bytes through
//! [`ImagesMatrix::allocate_raw`] and take ownership with
//! [`ImagesMatrix::detach`]. Decoding, GPU resources, and file formats
//! live in those collaborators, not here.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod buffer;
mod color;
mod extent;
mod format;
mod limits;
mod matrix;

pub use buffer::{ImageBuffer, RawBuffer};
pub use color::{ColorProfile, Primaries, TransferCurve};
pub use extent::{Extent, mip_count_for};
pub use format::{ChannelLayout, ChannelType, PixelFormat};
pub use limits::{LimitExceeded, ResourceLimits};
pub use matrix::{
    ImagesMatrix, MatrixError, Mip, MipError, MipStorage, Mips, RawMipSource, Topology,
};

// Re-exports for decoder integration.
pub use half::f16;
pub use imgref::{Img, ImgRef, ImgVec};
pub use rgb;
pub use rgb::alt::BGRA as Bgra;
pub use rgb::alt::GrayAlpha;
pub use rgb::{Gray, Rgb, Rgba};
