use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// One sampled point of a pen stroke.
///
/// Carries the sample position, the desired half-width of the ribbon at that
/// sample (`size`, usually derived from pen pressure), and the extrusion
/// distance (`depth`, always applied as a negative z offset). A negative
/// `size` is permitted and flips the offset side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    x: f64,
    y: f64,
    size: f64,
    depth: f64,
}

impl Dot {
    /// Creates a new stroke sample.
    ///
    /// # Errors
    ///
    /// Returns an error if any component is not finite.
    pub fn new(x: f64, y: f64, size: f64, depth: f64) -> Result<Self> {
        for (component, value) in [("x", x), ("y", y), ("size", size), ("depth", depth)] {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite { component, value }.into());
            }
        }
        Ok(Self { x, y, size, depth })
    }

    /// The x coordinate of the sample.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// The y coordinate of the sample.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Half-width of the ribbon at this sample.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Extrusion distance at this sample.
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// The sample position projected onto the XY plane.
    #[must_use]
    pub fn position(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}
