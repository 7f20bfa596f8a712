// SPDX-License-Identifier: MPL-2.0
//! Camera overlay: corner brackets, or the barcode box outline.

use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme};

/// Length of each bracket arm relative to the framed side.
const ARM_RATIO: f32 = 0.18;
const STROKE_WIDTH: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameShape {
    /// Four corner brackets around the subject.
    Brackets,
    /// Solid rectangle marking the barcode window.
    BarcodeBox,
}

pub struct ScanFrame {
    cache: Cache,
    shape: FrameShape,
    color: Color,
    size: Size,
}

impl ScanFrame {
    #[must_use]
    pub fn new(shape: FrameShape, color: Color, size: Size) -> Self {
        Self {
            cache: Cache::default(),
            shape,
            color,
            size,
        }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let Size { width, height } = self.size;
        Canvas::new(self)
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .into()
    }
}

/// Polylines of the four brackets, each running arm → corner → arm.
fn bracket_polylines(size: Size, inset: f32) -> [[Point; 3]; 4] {
    let arm = size.width.min(size.height) * ARM_RATIO;
    let (left, top) = (inset, inset);
    let (right, bottom) = (size.width - inset, size.height - inset);
    [
        [
            Point::new(left, top + arm),
            Point::new(left, top),
            Point::new(left + arm, top),
        ],
        [
            Point::new(right - arm, top),
            Point::new(right, top),
            Point::new(right, top + arm),
        ],
        [
            Point::new(left, bottom - arm),
            Point::new(left, bottom),
            Point::new(left + arm, bottom),
        ],
        [
            Point::new(right - arm, bottom),
            Point::new(right, bottom),
            Point::new(right, bottom - arm),
        ],
    ]
}

impl<Message> canvas::Program<Message> for ScanFrame {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let stroke = Stroke::default()
                    .with_width(STROKE_WIDTH)
                    .with_color(self.color)
                    .with_line_cap(canvas::LineCap::Round);
                let inset = STROKE_WIDTH / 2.0;

                match self.shape {
                    FrameShape::Brackets => {
                        for [a, corner, b] in bracket_polylines(frame.size(), inset) {
                            let path = Path::new(|builder| {
                                builder.move_to(a);
                                builder.line_to(corner);
                                builder.line_to(b);
                            });
                            frame.stroke(&path, stroke);
                        }
                    }
                    FrameShape::BarcodeBox => {
                        let size = frame.size();
                        let outline = Path::rounded_rectangle(
                            Point::new(inset, inset),
                            Size::new(size.width - STROKE_WIDTH, size.height - STROKE_WIDTH),
                            12.0_f32.into(),
                        );
                        frame.stroke(&outline, stroke);
                    }
                }
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn brackets_meet_at_the_corners() {
        let lines = bracket_polylines(Size::new(100.0, 100.0), 0.0);
        assert_eq!(lines[0][1], Point::new(0.0, 0.0));
        assert_eq!(lines[1][1], Point::new(100.0, 0.0));
        assert_eq!(lines[2][1], Point::new(0.0, 100.0));
        assert_eq!(lines[3][1], Point::new(100.0, 100.0));
    }

    #[test]
    fn bracket_arms_scale_with_the_short_side() {
        let lines = bracket_polylines(Size::new(200.0, 100.0), 0.0);
        assert_abs_diff_eq!(lines[0][0].y, 18.0, epsilon = 1e-4);
        assert_abs_diff_eq!(lines[0][2].x, 18.0, epsilon = 1e-4);
    }
}
