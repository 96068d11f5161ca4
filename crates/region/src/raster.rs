//! Rasterization of regions onto an integer pixel window.
//!
//! Every function in this module returns a dense binary grid shaped like the requested window,
//! where cell `(row, col)` is `1` iff pixel `(window.left + col, window.top + row)` belongs to the
//! region. Windows are expected to be non-empty; an empty window yields an empty grid.
use ndarray::{Array2, ArrayView2, ArrayViewMut1, s};

use crate::bounds::Bounds;

/// Dense binary pixel grid in row-major `(row, col)` order.
pub type Raster = Array2<u8>;

/// Offset of `inner` relative to the top-left corner of `window`, as `(row, col)`.
///
/// `inner` must lie within `window`.
fn origin_in(window: &Bounds, inner: &Bounds) -> (usize, usize) {
    let row = i64::from(inner.top) - i64::from(window.top);
    let col = i64::from(inner.left) - i64::from(window.left);

    (row as usize, col as usize)
}

/// Rasterizes the pixel box of a rectangle onto `window`.
///
/// `rectangle` holds the already rounded, inclusive pixel extent of the rectangle. Rectangles
/// with a non-positive extent are empty boxes and rasterize to an all-zero grid.
#[must_use]
pub fn rasterize_rectangle(rectangle: Bounds, window: Bounds) -> Raster {
    let mut raster = Raster::zeros(window.shape());

    let clipped = rectangle.intersect(&window);
    if clipped.is_empty() {
        return raster;
    }

    let (row, col) = origin_in(&window, &clipped);
    raster
        .slice_mut(s![row..row + clipped.height(), col..col + clipped.width()])
        .fill(1);

    raster
}

/// Rasterizes a closed polygon onto `window` using an even-odd scanline fill.
///
/// `vertices` are the rounded polygon vertices in image coordinates. The polygon is implicitly
/// closed, and polygons with fewer than three vertices rasterize to an all-zero grid.
#[must_use]
pub fn rasterize_polygon(vertices: &[(i32, i32)], window: Bounds) -> Raster {
    let mut raster = Raster::zeros(window.shape());

    let count = vertices.len();
    if count < 3 || window.is_empty() {
        return raster;
    }

    let width = window.width() as i64;
    let vertices: Vec<(i64, i64)> = vertices
        .iter()
        .map(|&(x, y)| {
            (
                i64::from(x) - i64::from(window.left),
                i64::from(y) - i64::from(window.top),
            )
        })
        .collect();

    let mut nodes: Vec<i64> = Vec::with_capacity(count);

    for (row, mut line) in raster.outer_iter_mut().enumerate() {
        let y = row as i64;
        nodes.clear();

        // every vertex is paired with its predecessor, closing the polygon
        let previous = vertices.iter().cycle().skip(count - 1);
        for (&(xi, yi), &(xj, yj)) in vertices.iter().zip(previous) {
            // A vertex on the scanline is reported by both of its edges,
            // `fill_spans` skips the duplicate.
            if y < yi.min(yj) || y > yi.max(yj) {
                continue;
            }

            let dy = yj - yi;
            let node = if dy == 0 {
                xi
            } else {
                let dx = (xj - xi) as f64;
                (xi as f64 + (y - yi) as f64 / dy as f64 * dx).floor() as i64
            };

            nodes.push(node);
        }

        nodes.sort_unstable();
        fill_spans(&nodes, &mut line, width);
    }

    raster
}

/// Fills the spans between consecutive pairs of sorted scanline intercepts.
fn fill_spans(nodes: &[i64], line: &mut ArrayViewMut1<'_, u8>, width: i64) {
    let mut i = 0;

    while i + 1 < nodes.len() {
        let (start, end) = (nodes[i], nodes[i + 1]);

        if start >= width {
            break;
        }

        // zero-width span at a vertex, unless it is the final pair
        if start == end && i + 2 < nodes.len() {
            i += 1;
            continue;
        }

        if end >= 0 {
            let start = start.max(0) as usize;
            let end = end.min(width - 1) as usize;
            line.slice_mut(s![start..=end]).fill(1);
        }

        i += 2;
    }
}

/// Copies the part of `mask` that overlaps `window` into a grid shaped like `window`.
///
/// `offset` is the image position `(x, y)` of the mask's top-left pixel. Pixels outside the mask
/// are zero, non-zero mask values become `1`.
#[must_use]
pub fn copy_mask(mask: ArrayView2<'_, u8>, offset: (i32, i32), window: Bounds) -> Raster {
    let mut raster = Raster::zeros(window.shape());

    let (height, width) = mask.dim();
    if height == 0 || width == 0 {
        return raster;
    }

    let (x, y) = offset;
    let source = Bounds::new(
        x,
        y,
        x.saturating_add(width as i32) - 1,
        y.saturating_add(height as i32) - 1,
    );

    let visible = source.intersect(&window);
    if visible.is_empty() {
        return raster;
    }

    let (rows, cols) = visible.shape();
    let (target_row, target_col) = origin_in(&window, &visible);
    let (source_row, source_col) = origin_in(&source, &visible);

    raster
        .slice_mut(s![
            target_row..target_row + rows,
            target_col..target_col + cols
        ])
        .zip_mut_with(
            &mask.slice(s![
                source_row..source_row + rows,
                source_col..source_col + cols
            ]),
            |pixel, &value| *pixel = u8::from(value != 0),
        );

    raster
}
