//! Scores a handful of predicted regions against their ground truth.

use miette::Result;
use ndarray::Array2;
use region::{Mask, OverlapConfig, OverlapEngine, Polygon, Rectangle, Region, Shape};

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let engine = OverlapEngine::new(OverlapConfig::default().with_frame((64, 48)));

    let truth: Vec<Shape> = vec![
        Rectangle::new(10.0, 10.0, 20.0, 15.0).into(),
        Polygon::new(vec![(5.0, 5.0), (30.0, 8.0), (18.0, 30.0)]).into(),
        Rectangle::new(50.0, 30.0, 30.0, 30.0).into(),
        Shape::Empty,
    ];

    let prediction: Vec<Shape> = vec![
        Rectangle::new(12.0, 11.0, 20.0, 15.0).into(),
        Polygon::new(vec![(5.0, 5.0), (30.0, 8.0), (18.0, 30.0)])
            .to_mask()
            .into(),
        Mask::new(Array2::ones((10, 10)), (55, 40)).into(),
        Shape::Empty,
    ];

    // occluded area of the third pair
    let ignore: Vec<Shape> = vec![
        Shape::Empty,
        Shape::Empty,
        Rectangle::new(60.0, 30.0, 4.0, 18.0).into(),
        Shape::Empty,
    ];

    let overlaps = engine.overlaps(&truth, &prediction, Some(ignore.as_slice()))?;
    for (i, iou) in overlaps.iter().enumerate() {
        tracing::info!(pair = i, iou, "Scored region pair");
    }

    let mean = overlaps.iter().sum::<f32>() / overlaps.len() as f32;
    tracing::info!(mean, "Average overlap");

    Ok(())
}
