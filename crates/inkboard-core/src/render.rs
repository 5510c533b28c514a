//! Partitioning committed shapes into the layers a renderer draws.

use crate::shapes::{Ellipse, Polyline, Rectangle, Shape, Text};

/// Committed shapes grouped by how they are drawn.
///
/// Each layer keeps z-order. Texts being edited are split out because the
/// host draws them as an editable field rather than as vector text.
#[derive(Debug, Default)]
pub struct RenderLayers<'a> {
    pub lines: Vec<&'a Polyline>,
    pub arrow_lines: Vec<&'a Polyline>,
    pub rects: Vec<&'a Rectangle>,
    pub ellipses: Vec<&'a Ellipse>,
    /// Texts drawn as static labels.
    pub texts: Vec<&'a Text>,
    /// Texts currently open in the editor.
    pub editing_texts: Vec<&'a Text>,
}

impl<'a> RenderLayers<'a> {
    pub fn partition(shapes: &'a [Shape]) -> Self {
        let mut layers = Self::default();
        for shape in shapes {
            match shape {
                Shape::Line(line) => layers.lines.push(line),
                Shape::ArrowLine(line) => layers.arrow_lines.push(line),
                Shape::Rect(rect) => layers.rects.push(rect),
                Shape::Ellipse(ellipse) => layers.ellipses.push(ellipse),
                Shape::Text(text) if text.editing => layers.editing_texts.push(text),
                Shape::Text(text) => layers.texts.push(text),
            }
        }
        layers
    }

    /// Number of shapes across all layers.
    pub fn len(&self) -> usize {
        self.lines.len()
            + self.arrow_lines.len()
            + self.rects.len()
            + self.ellipses.len()
            + self.texts.len()
            + self.editing_texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeTrait;
    use kurbo::Point;

    #[test]
    fn test_partition_by_kind() {
        let mut done = Text::new(Point::ZERO, "done".to_string());
        done.commit("done".to_string());
        let shapes = vec![
            Shape::Line(Polyline::new(Point::ZERO)),
            Shape::ArrowLine(Polyline::new(Point::ZERO)),
            Rectangle::new(Point::ZERO, 5.0, 5.0).into(),
            Ellipse::new(Point::ZERO, 5.0, 5.0).into(),
            Text::new(Point::ZERO, "draft".to_string()).into(),
            done.into(),
        ];
        let layers = RenderLayers::partition(&shapes);
        assert_eq!(layers.lines.len(), 1);
        assert_eq!(layers.arrow_lines.len(), 1);
        assert_eq!(layers.rects.len(), 1);
        assert_eq!(layers.ellipses.len(), 1);
        assert_eq!(layers.editing_texts.len(), 1);
        assert_eq!(layers.texts.len(), 1);
        assert_eq!(layers.len(), shapes.len());
    }

    #[test]
    fn test_partition_keeps_z_order() {
        let first = Rectangle::new(Point::ZERO, 5.0, 5.0);
        let second = Rectangle::new(Point::ZERO, 6.0, 6.0);
        let ids = [first.id(), second.id()];
        let shapes: Vec<Shape> = vec![first.into(), second.into()];
        let layers = RenderLayers::partition(&shapes);
        let got: Vec<_> = layers.rects.iter().map(|r| r.id()).collect();
        assert_eq!(got, ids);
    }

    #[test]
    fn test_empty() {
        assert!(RenderLayers::partition(&[]).is_empty());
    }
}
