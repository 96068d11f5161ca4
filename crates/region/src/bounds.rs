//! Integer pixel boxes and image frames.
use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};

/// An axis-aligned integer box, inclusive on both ends.
///
/// A box with `left > right` or `top > bottom` covers no pixels at all, see [`Bounds::is_empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    /// The canonical empty box.
    ///
    /// It is the identity for [`Bounds::union`], so an empty region never widens the union of two
    /// regions.
    pub const EMPTY: Self = Self {
        left: i32::MAX,
        top: i32::MAX,
        right: i32::MIN,
        bottom: i32::MIN,
    };

    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.left > self.right || self.top > self.bottom
    }

    /// Number of pixel columns covered by the box.
    #[must_use]
    pub fn width(&self) -> usize {
        if self.is_empty() {
            return 0;
        }

        (i64::from(self.right) - i64::from(self.left) + 1) as usize
    }

    /// Number of pixel rows covered by the box.
    #[must_use]
    pub fn height(&self) -> usize {
        if self.is_empty() {
            return 0;
        }

        (i64::from(self.bottom) - i64::from(self.top) + 1) as usize
    }

    /// Shape of a row-major grid covering this box, as `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    /// Componentwise union: the smallest box containing both boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Componentwise intersection, empty if the boxes are disjoint.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            left: self.left.max(other.left),
            top: self.top.max(other.top),
            right: self.right.min(other.right),
            bottom: self.bottom.min(other.bottom),
        }
    }

    /// Moves the box by `(dx, dy)`. Empty boxes stay [`Bounds::EMPTY`].
    #[must_use]
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }

        Self {
            left: self.left.saturating_add(dx),
            top: self.top.saturating_add(dy),
            right: self.right.saturating_add(dx),
            bottom: self.bottom.saturating_add(dy),
        }
    }

    /// Restricts the box to the pixels of `frame`.
    #[must_use]
    pub fn clip_to_frame(&self, frame: Frame) -> Self {
        self.intersect(&frame.bounds())
    }

    /// Whether pixel `(x, y)` lies inside the box.
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Size of the image that regions are placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Frame {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl Frame {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The pixels of the frame, `[0, width - 1] x [0, height - 1]`.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let width = i32::try_from(self.width).unwrap_or(i32::MAX);
        let height = i32::try_from(self.height).unwrap_or(i32::MAX);

        Bounds::new(0, 0, width - 1, height - 1)
    }
}

impl From<(u32, u32)> for Frame {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// Computes the minimal box containing every non-zero pixel of `mask`, in grid coordinates.
///
/// Returns [`Bounds::EMPTY`] if no pixel is set.
#[must_use]
pub fn mask_bounds(mask: ArrayView2<'_, u8>) -> Bounds {
    let mut bounds = Bounds::EMPTY;

    for (row, line) in mask.outer_iter().enumerate() {
        let Some(first) = line.iter().position(|&v| v != 0) else {
            continue;
        };
        let last = line.iter().rposition(|&v| v != 0).unwrap_or(first);

        let row = row as i32;
        bounds = bounds.union(&Bounds::new(first as i32, row, last as i32, row));
    }

    bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, array};

    #[test]
    fn test_empty() {
        assert!(Bounds::EMPTY.is_empty());
        assert_eq!(Bounds::EMPTY.shape(), (0, 0));
        assert!(Bounds::new(5, 0, 4, 10).is_empty());
        assert!(!Bounds::new(0, 0, 0, 0).is_empty());
        assert_eq!(Bounds::new(0, 0, 0, 0).shape(), (1, 1));
    }

    #[test]
    fn test_union_and_intersect() {
        let a = Bounds::new(0, 0, 9, 9);
        let b = Bounds::new(5, 5, 14, 14);

        assert_eq!(a.union(&b), Bounds::new(0, 0, 14, 14));
        assert_eq!(a.intersect(&b), Bounds::new(5, 5, 9, 9));
        assert_eq!(a.union(&Bounds::EMPTY), a);
        assert!(a.intersect(&Bounds::new(20, 20, 30, 30)).is_empty());
    }

    #[test]
    fn test_clip_to_frame() {
        let frame = Frame::new(10, 8);

        assert_eq!(
            Bounds::new(-5, -5, 20, 20).clip_to_frame(frame),
            Bounds::new(0, 0, 9, 7)
        );
        assert!(Bounds::new(10, 0, 20, 5).clip_to_frame(frame).is_empty());
        assert!(Bounds::new(0, 0, 5, 5).clip_to_frame(Frame::new(0, 0)).is_empty());
    }

    #[test]
    fn test_mask_bounds() {
        let mask = array![
            [0u8, 0, 0, 0],
            [0, 0, 1, 0],
            [0, 1, 0, 0],
            [0, 0, 0, 0],
        ];

        assert_eq!(mask_bounds(mask.view()), Bounds::new(1, 1, 2, 2));
    }

    #[test]
    fn test_mask_bounds_of_empty_mask() {
        let mask = Array2::<u8>::zeros((4, 6));
        assert_eq!(mask_bounds(mask.view()), Bounds::EMPTY);

        let mask = Array2::<u8>::zeros((0, 0));
        assert_eq!(mask_bounds(mask.view()), Bounds::EMPTY);
    }

    #[test]
    fn test_translate_keeps_empty() {
        assert_eq!(Bounds::EMPTY.translate(3, 4), Bounds::EMPTY);
        assert_eq!(
            Bounds::new(0, 0, 1, 1).translate(3, 4),
            Bounds::new(3, 4, 4, 5)
        );
    }
}
