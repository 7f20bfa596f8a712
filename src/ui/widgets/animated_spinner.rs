// SPDX-License-Identifier: MPL-2.0
//! Loading spinner drawn on a canvas, rotated by the scan flow's spinner clock.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Number of line segments approximating the rotating arc.
const ARC_SEGMENTS: u16 = 30;

/// Spinner that shows a half-circle arc at a given rotation.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32, // Rotation angle in radians
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Points of the arc from `rotation` to `rotation + PI`, starting at the top.
fn arc_points(center: Point, radius: f32, rotation: f32) -> Vec<Point> {
    let start_angle = rotation - PI / 2.0;
    (0..=ARC_SEGMENTS)
        .map(|i| {
            let t = f32::from(i) / f32::from(ARC_SEGMENTS);
            let angle = start_angle + PI * t;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
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
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - 4.0;

                let track = Path::circle(center, radius);
                frame.stroke(
                    &track,
                    Stroke::default().with_width(3.0).with_color(Color {
                        a: 0.25,
                        ..self.color
                    }),
                );

                let points = arc_points(center, radius, self.rotation);
                let arc = Path::new(|builder| {
                    if let Some((first, rest)) = points.split_first() {
                        builder.move_to(*first);
                        for point in rest {
                            builder.line_to(*point);
                        }
                    }
                });
                frame.stroke(
                    &arc,
                    Stroke::default()
                        .with_width(3.0)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn arc_starts_at_top_without_rotation() {
        let points = arc_points(Point::new(10.0, 10.0), 5.0, 0.0);
        assert_eq!(points.len(), usize::from(ARC_SEGMENTS) + 1);
        assert_abs_diff_eq!(points[0].x, 10.0, epsilon = 1e-4);
        assert_abs_diff_eq!(points[0].y, 5.0, epsilon = 1e-4);
    }

    #[test]
    fn arc_spans_half_a_turn() {
        let points = arc_points(Point::ORIGIN, 1.0, 0.0);
        let last = points[points.len() - 1];
        assert_abs_diff_eq!(last.x, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(last.y, 1.0, epsilon = 1e-4);
    }
}
