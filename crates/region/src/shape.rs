//! Region shapes and their dispatch onto bounds computation and rasterization.
use ndarray::Array2;

use crate::{
    bounds::{Bounds, mask_bounds},
    error::{Error, Result},
    raster::{Raster, copy_mask, rasterize_polygon, rasterize_rectangle},
};

/// Rounds a coordinate to the nearest pixel, with ties going to the even pixel.
fn round(value: f32) -> i32 {
    value.round_ties_even() as i32
}

/// A region that can be placed onto a pixel grid.
pub trait Region {
    /// The minimal box containing every pixel of the region.
    ///
    /// Regions without any pixels return an empty box.
    fn bounds(&self) -> Bounds;

    /// Rasterizes the region onto `window`, see [`crate::raster`].
    fn rasterize(&self, window: Bounds) -> Raster;

    /// Pre-renders the region into a [`Mask`] covering its own bounds.
    fn to_mask(&self) -> Mask {
        let bounds = self.bounds();
        if bounds.is_empty() {
            return Mask::empty();
        }

        Mask::new(self.rasterize(bounds), (bounds.left, bounds.top))
    }
}

/// An axis-aligned rectangle with its top-left corner at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl Region for Rectangle {
    fn bounds(&self) -> Bounds {
        Bounds::new(
            round(self.x),
            round(self.y),
            round(self.x + self.width - 1.0),
            round(self.y + self.height - 1.0),
        )
    }

    fn rasterize(&self, window: Bounds) -> Raster {
        rasterize_rectangle(self.bounds(), window)
    }
}

/// A single-contour polygon, implicitly closed from the last point back to the first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub points: Vec<(f32, f32)>,
}

impl Polygon {
    #[must_use]
    pub fn new(points: Vec<(f32, f32)>) -> Self {
        Self { points }
    }

    /// Whether the polygon has too few points to enclose any area.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }

    fn vertices(&self) -> Vec<(i32, i32)> {
        self.points.iter().map(|&(x, y)| (round(x), round(y))).collect()
    }
}

impl Region for Polygon {
    fn bounds(&self) -> Bounds {
        if self.is_degenerate() {
            return Bounds::EMPTY;
        }

        self.vertices()
            .into_iter()
            .fold(Bounds::EMPTY, |bounds, (x, y)| {
                bounds.union(&Bounds::new(x, y, x, y))
            })
    }

    fn rasterize(&self, window: Bounds) -> Raster {
        if self.is_degenerate() {
            return Raster::zeros(window.shape());
        }

        rasterize_polygon(&self.vertices(), window)
    }
}

/// A binary mask placed with its top-left pixel at `offset`.
#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    data: Array2<u8>,
    offset: (i32, i32),
}

impl Mask {
    #[must_use]
    pub fn new(data: Array2<u8>, offset: (i32, i32)) -> Self {
        Self { data, offset }
    }

    /// Creates a mask from a flat row-major buffer of `width * height` pixels.
    pub fn from_vec(
        width: usize,
        height: usize,
        data: Vec<u8>,
        offset: (i32, i32),
    ) -> Result<Self> {
        let len = data.len();
        let data = Array2::from_shape_vec((height, width), data).map_err(|_| {
            Error::InvalidMask {
                width,
                height,
                len,
            }
        })?;

        Ok(Self::new(data, offset))
    }

    /// A mask without any pixels.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Array2::zeros((0, 0)), (0, 0))
    }

    #[must_use]
    pub fn data(&self) -> &Array2<u8> {
        &self.data
    }

    #[must_use]
    pub fn offset(&self) -> (i32, i32) {
        self.offset
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.data.nrows()
    }
}

impl Region for Mask {
    fn bounds(&self) -> Bounds {
        let (x, y) = self.offset;
        mask_bounds(self.data.view()).translate(x, y)
    }

    fn rasterize(&self, window: Bounds) -> Raster {
        copy_mask(self.data.view(), self.offset, window)
    }
}

/// Any region supported by the overlap computation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Shape {
    /// A region without any pixels.
    #[default]
    Empty,
    Rectangle(Rectangle),
    Polygon(Polygon),
    Mask(Mask),
}

impl Region for Shape {
    fn bounds(&self) -> Bounds {
        match self {
            Shape::Empty => Bounds::EMPTY,
            Shape::Rectangle(rectangle) => rectangle.bounds(),
            Shape::Polygon(polygon) => polygon.bounds(),
            Shape::Mask(mask) => mask.bounds(),
        }
    }

    fn rasterize(&self, window: Bounds) -> Raster {
        match self {
            Shape::Empty => Raster::zeros(window.shape()),
            Shape::Rectangle(rectangle) => rectangle.rasterize(window),
            Shape::Polygon(polygon) => polygon.rasterize(window),
            Shape::Mask(mask) => mask.rasterize(window),
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(rectangle: Rectangle) -> Self {
        Shape::Rectangle(rectangle)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

impl From<Mask> for Shape {
    fn from(mask: Mask) -> Self {
        Shape::Mask(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_rectangle_bounds() {
        assert_eq!(
            Rectangle::new(0.0, 0.0, 10.0, 10.0).bounds(),
            Bounds::new(0, 0, 9, 9)
        );
        assert_eq!(
            Rectangle::new(1.4, 2.6, 10.0, 10.0).bounds(),
            Bounds::new(1, 3, 10, 12)
        );
        // ties round to even
        assert_eq!(
            Rectangle::new(0.5, 1.5, 3.0, 3.0).bounds(),
            Bounds::new(0, 2, 2, 4)
        );
    }

    #[test]
    fn test_degenerate_rectangle() {
        let rectangle = Rectangle::new(4.0, 4.0, 0.0, 5.0);

        assert!(rectangle.bounds().is_empty());
        assert!(rectangle.rasterize(Bounds::new(0, 0, 9, 9)).iter().all(|&v| v == 0));
        assert!(Rectangle::new(4.0, 4.0, -3.0, -3.0).bounds().is_empty());
    }

    #[test]
    fn test_polygon_bounds() {
        let polygon = Polygon::new(vec![(1.2, 5.0), (7.6, 2.4), (3.0, 9.5)]);
        assert_eq!(polygon.bounds(), Bounds::new(1, 2, 8, 10));

        let line = Polygon::new(vec![(0.0, 0.0), (5.0, 5.0)]);
        assert!(line.is_degenerate());
        assert!(line.bounds().is_empty());
    }

    #[test]
    fn test_mask_bounds_with_offset() {
        let mask = Mask::new(array![[0u8, 0, 0], [0, 1, 1], [0, 0, 0]], (10, -4));
        assert_eq!(mask.bounds(), Bounds::new(11, -3, 12, -3));

        let empty = Mask::new(Array2::zeros((3, 3)), (10, 10));
        assert!(empty.bounds().is_empty());
    }

    #[test]
    fn test_mask_from_vec() -> Result<()> {
        let mask = Mask::from_vec(3, 2, vec![0, 1, 0, 1, 1, 1], (5, 5))?;
        assert_eq!(mask.width(), 3);
        assert_eq!(mask.height(), 2);
        assert_eq!(mask.bounds(), Bounds::new(5, 5, 7, 6));

        let result = Mask::from_vec(3, 3, vec![0; 4], (0, 0));
        assert!(matches!(
            result,
            Err(Error::InvalidMask {
                width: 3,
                height: 3,
                len: 4
            })
        ));

        Ok(())
    }

    #[test]
    fn test_rectangle_mask_round_trip() {
        let rectangle = Rectangle::new(3.0, 2.0, 6.0, 4.0);
        let mask = rectangle.to_mask();

        assert_eq!(mask.offset(), (3, 2));
        assert_eq!(mask.bounds(), rectangle.bounds());

        for window in [
            Bounds::new(0, 0, 15, 15),
            Bounds::new(5, 3, 7, 4),
            Bounds::new(-4, -4, 4, 4),
            Bounds::new(20, 20, 25, 25),
        ] {
            assert_eq!(mask.rasterize(window), rectangle.rasterize(window));
        }
    }

    #[test]
    fn test_empty_shape() {
        let shape = Shape::Empty;

        assert!(shape.bounds().is_empty());
        assert_eq!(shape.rasterize(Bounds::new(0, 0, 2, 3)), Raster::zeros((4, 3)));
        assert_eq!(shape.to_mask(), Mask::empty());
    }

    #[test]
    fn test_shape_dispatch() {
        let polygon: Shape = Polygon::new(vec![(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)]).into();
        let window = Bounds::new(0, 0, 4, 4);

        assert_eq!(polygon.bounds(), window);
        assert_eq!(polygon.rasterize(window).iter().filter(|&&v| v != 0).count(), 15);
    }
}
