//! Geometric primitives for layout analysis.
//!
//! This module provides the bounding-box type used throughout the
//! segmentation algorithms. Coordinates are in page units with the origin
//! at the top-left corner of the page, so `y` grows downward.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// An axis-aligned rectangle in page space, stored as two corner points.
///
/// Serializes to and from the four-element array form `[x0, y0, x1, y1]`
/// used by the converted-document interchange format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// X coordinate of the left edge
    pub x0: f32,
    /// Y coordinate of the top edge
    pub y0: f32,
    /// X coordinate of the right edge
    pub x1: f32,
    /// Y coordinate of the bottom edge
    pub y1: f32,
}

impl Rect {
    /// Create a rectangle from two corner points.
    ///
    /// # Examples
    ///
    /// ```
    /// use workorder_oxide::geometry::Rect;
    ///
    /// let rect = Rect::new(10.0, 20.0, 110.0, 70.0);
    /// assert_eq!(rect.width(), 100.0);
    /// assert_eq!(rect.height(), 50.0);
    /// ```
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Get the left edge x-coordinate.
    pub fn left(&self) -> f32 {
        self.x0
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.x1
    }

    /// Get the top edge y-coordinate.
    pub fn top(&self) -> f32 {
        self.y0
    }

    /// Get the bottom edge y-coordinate.
    pub fn bottom(&self) -> f32 {
        self.y1
    }

    /// Get the width of the rectangle.
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Get the height of the rectangle.
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }
}

impl Serialize for Rect {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.x0, self.y0, self.x1, self.y1).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Rect {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (x0, y0, x1, y1) = <(f32, f32, f32, f32)>::deserialize(deserializer)?;
        Ok(Rect { x0, y0, x1, y1 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_creation() {
        let r = Rect::new(5.0, 10.0, 105.0, 60.0);
        assert_eq!(r.x0, 5.0);
        assert_eq!(r.y0, 10.0);
        assert_eq!(r.x1, 105.0);
        assert_eq!(r.y1, 60.0);
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 110.0, 70.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 70.0);
        assert_eq!(r.width(), 100.0);
        assert_eq!(r.height(), 50.0);
    }

    #[test]
    fn test_rect_serializes_as_array() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, "[1.0,2.0,3.0,4.0]");
    }

    #[test]
    fn test_rect_deserializes_from_array() {
        let r: Rect = serde_json::from_str("[56.5, 103.0, 289.2, 131.8]").unwrap();
        assert_eq!(r.x0, 56.5);
        assert_eq!(r.y0, 103.0);
        assert_eq!(r.x1, 289.2);
        assert_eq!(r.y1, 131.8);
    }

    #[test]
    fn test_rect_rejects_short_array() {
        let r: Result<Rect, _> = serde_json::from_str("[1.0, 2.0, 3.0]");
        assert!(r.is_err());
    }
}
