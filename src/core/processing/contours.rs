//! External contour extraction over a binary image.
//!
//! Border following is delegated to `imageproc::contours` (Suzuki-Abe). Only
//! outermost borders are kept, and each border is compressed so that runs of
//! horizontal, vertical or diagonal steps collapse to their endpoints.
//!
//! The binary image is traced inside a one-pixel background frame:
//! `find_contours` reports a component touching the left edge as a parentless
//! `Hole`, which would otherwise be lost.
use image::{GrayImage, imageops};
use imageproc::contours::{BorderType, find_contours};
use imageproc::point::Point;

use crate::types::Region;

/// Closed polygon tracing the outer border of one foreground component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContourPolygon {
    pub points: Vec<Point<i32>>,
}

impl ContourPolygon {
    pub fn new(points: Vec<Point<i32>>) -> Self {
        Self { points }
    }

    /// Smallest axis-aligned box containing every vertex (inclusive pixel extent).
    pub fn bounding_box(&self) -> Option<Region> {
        let first = self.points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &self.points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Region::new(
            min_x as u32,
            min_y as u32,
            (max_x - min_x + 1) as u32,
            (max_y - min_y + 1) as u32,
        ))
    }

    /// Area enclosed by the polygon (shoelace). Differs from the box area for
    /// anything that is not a perfect rectangle, and is `(w-1)*(h-1)` for a
    /// filled `w x h` block because vertices sit on pixel centres.
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut twice = 0i64;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            twice += a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64;
        }
        (twice as f64 / 2.0).abs()
    }
}

fn step(a: Point<i32>, b: Point<i32>) -> (i32, i32) {
    ((b.x - a.x).signum(), (b.y - a.y).signum())
}

/// Drop every vertex whose incoming and outgoing steps share a direction.
pub fn approximate_simple(points: &[Point<i32>]) -> Vec<Point<i32>> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }
    let mut kept = Vec::with_capacity(n);
    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let cur = points[i];
        let next = points[(i + 1) % n];
        if step(prev, cur) != step(cur, next) {
            kept.push(cur);
        }
    }
    // A closed straight run (degenerate line) still needs its two ends.
    if kept.is_empty() {
        kept.push(points[0]);
        kept.push(points[n - 1]);
    }
    kept
}

fn with_background_frame(binary: &GrayImage) -> GrayImage {
    let (width, height) = binary.dimensions();
    let mut framed = GrayImage::new(width + 2, height + 2);
    imageops::replace(&mut framed, binary, 1, 1);
    framed
}

/// Outer borders of top-level foreground components, in border-following order.
pub fn external_contours(binary: &GrayImage) -> Vec<ContourPolygon> {
    let framed = with_background_frame(binary);
    find_contours::<i32>(&framed)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
        .filter(|c| !c.points.is_empty())
        .map(|c| {
            let points: Vec<Point<i32>> = c
                .points
                .iter()
                .map(|p| Point::new(p.x - 1, p.y - 1))
                .collect();
            ContourPolygon::new(approximate_simple(&points))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn filled(width: u32, height: u32, blocks: &[(u32, u32, u32, u32)]) -> GrayImage {
        let mut img = GrayImage::new(width, height);
        for &(x0, y0, w, h) in blocks {
            for y in y0..y0 + h {
                for x in x0..x0 + w {
                    img.put_pixel(x, y, Luma([255]));
                }
            }
        }
        img
    }

    #[test]
    fn rectangle_collapses_to_four_corners() {
        let img = filled(40, 30, &[(5, 6, 20, 10)]);
        let contours = external_contours(&img);
        assert_eq!(contours.len(), 1);
        let c = &contours[0];
        assert_eq!(c.points.len(), 4);
        assert_eq!(c.bounding_box(), Some(Region::new(5, 6, 20, 10)));
        assert_eq!(c.area(), (19 * 9) as f64);
    }

    #[test]
    fn holes_and_nested_components_are_ignored() {
        let mut img = filled(60, 60, &[(5, 5, 50, 50)]);
        for y in 15..45 {
            for x in 15..45 {
                img.put_pixel(x, y, Luma([0]));
            }
        }
        for y in 25..35 {
            for x in 25..35 {
                img.put_pixel(x, y, Luma([255]));
            }
        }
        let contours = external_contours(&img);
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].bounding_box(), Some(Region::new(5, 5, 50, 50)));
    }

    #[test]
    fn separate_blobs_each_yield_a_contour() {
        let img = filled(100, 40, &[(2, 2, 10, 10), (50, 5, 30, 20)]);
        let mut boxes: Vec<Region> = external_contours(&img)
            .iter()
            .filter_map(|c| c.bounding_box())
            .collect();
        boxes.sort_by_key(|r| r.x);
        assert_eq!(
            boxes,
            vec![Region::new(2, 2, 10, 10), Region::new(50, 5, 30, 20)]
        );
    }

    #[test]
    fn blobs_touching_each_image_edge_are_external() {
        let cases = [
            (0, 0, 30, 12),
            (0, 20, 30, 12),
            (35, 0, 30, 12),
            (50, 20, 30, 12),
            (35, 48, 30, 12),
        ];
        for &(x, y, w, h) in &cases {
            let img = filled(80, 60, &[(x, y, w, h)]);
            let contours = external_contours(&img);
            assert_eq!(contours.len(), 1, "block at ({x}, {y})");
            assert_eq!(contours[0].bounding_box(), Some(Region::new(x, y, w, h)));
            assert_eq!(contours[0].area(), ((w - 1) * (h - 1)) as f64);
        }
    }

    #[test]
    fn full_frame_blob_keeps_image_coordinates() {
        let img = filled(24, 10, &[(0, 0, 24, 10)]);
        let contours = external_contours(&img);
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].bounding_box(), Some(Region::new(0, 0, 24, 10)));
    }

    #[test]
    fn shoelace_on_triangle_and_degenerate_input() {
        let tri = ContourPolygon::new(vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(0, 10),
        ]);
        assert_eq!(tri.area(), 50.0);
        let line = ContourPolygon::new(vec![Point::new(0, 0), Point::new(5, 0)]);
        assert_eq!(line.area(), 0.0);
        assert_eq!(ContourPolygon::new(vec![]).bounding_box(), None);
    }

    #[test]
    fn approximation_keeps_diagonal_endpoints() {
        let pts = vec![
            Point::new(0, 0),
            Point::new(1, 1),
            Point::new(2, 2),
            Point::new(3, 2),
            Point::new(4, 2),
            Point::new(2, 1),
        ];
        let kept = approximate_simple(&pts);
        assert!(kept.contains(&Point::new(0, 0)));
        assert!(kept.contains(&Point::new(2, 2)));
        assert!(!kept.contains(&Point::new(1, 1)));
        assert!(!kept.contains(&Point::new(3, 2)));
    }
}
