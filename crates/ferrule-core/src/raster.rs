//! Fixed encoding parameters for raster output.

/// Error-correction tier of an encoded symbol.
///
/// Higher tiers survive more damage at the cost of capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum EcTier {
    /// Recovers roughly 7% of codewords.
    Low,
    /// Recovers roughly 15% of codewords.
    #[default]
    Medium,
    /// Recovers roughly 25% of codewords.
    Quartile,
    /// Recovers roughly 30% of codewords.
    High,
}

/// Raster encoding parameters.
///
/// Fixed for the lifetime of an encoder; the boundary never lets the host
/// choose them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterParams {
    /// Edge length of the square output image in pixels.
    pub size: u32,
    /// Error-correction tier.
    pub ec_tier: EcTier,
}

impl RasterParams {
    /// Default edge length: 256px.
    pub const DEFAULT_SIZE: u32 = 256;

    /// Parameters with the given edge length and the default tier.
    pub fn with_size(size: u32) -> Self {
        Self {
            size,
            ec_tier: EcTier::default(),
        }
    }
}

impl Default for RasterParams {
    fn default() -> Self {
        Self::with_size(Self::DEFAULT_SIZE)
    }
}
