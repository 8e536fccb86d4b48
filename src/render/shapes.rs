//! Box and arrow rendering
//!
//! Both renderers are stateless: they translate geometry into a sequence of
//! [`Platform`] primitive calls and return nothing.

use crate::platform::{Attachment, Corner, Direction, Orientation, PaletteId, Platform};

/// Draw a bordered box with its top-left corner at `(x, y)`.
///
/// The border occupies columns `x..=x+width` and rows `y..=y+height`. When
/// `bg` is given the box is filled in three passes (horizontal edges,
/// vertical edges plus interior, corners), each edge tile carrying the
/// attachment that keeps the fill on the inside of the border glyph.
pub fn draw_rect<P: Platform + ?Sized>(
    host: &mut P,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    bg: Option<PaletteId>,
) {
    let right = x.saturating_add(width);
    let bottom = y.saturating_add(height);

    for col in x.saturating_add(1)..right {
        host.draw_rule(col, y, Orientation::Horizontal);
        host.draw_rule(col, bottom, Orientation::Horizontal);
        if let Some(palette) = bg {
            host.set_background(col, y, palette, Attachment::Bottom);
            host.set_background(col, bottom, palette, Attachment::Top);
        }
    }

    for row in y.saturating_add(1)..bottom {
        host.draw_rule(x, row, Orientation::Vertical);
        host.draw_rule(right, row, Orientation::Vertical);
        if let Some(palette) = bg {
            host.set_background(x, row, palette, Attachment::Right);
            host.set_background(right, row, palette, Attachment::Left);
            for col in x.saturating_add(1)..right {
                host.set_background(col, row, palette, Attachment::Full);
            }
        }
    }

    let corners = [
        (x, y, Corner::TopLeft),
        (right, y, Corner::TopRight),
        (x, bottom, Corner::BottomLeft),
        (right, bottom, Corner::BottomRight),
    ];
    for (cx, cy, corner) in corners {
        host.draw_corner(cx, cy, corner);
        if let Some(palette) = bg {
            host.set_background(cx, cy, palette, Attachment::Corner(corner));
        }
    }
}

/// Draw an arrow of `length` tiles starting at `(x, y)`.
///
/// The first `length - 1` tiles are rule segments along `direction`; the
/// last tile holds the arrowhead. With `junction` set the very first tile
/// is a T-junction glyph instead, so the arrow visibly branches off the
/// line or box edge it starts on.
pub fn draw_arrow<P: Platform + ?Sized>(
    host: &mut P,
    x: i32,
    y: i32,
    direction: Direction,
    length: u32,
    junction: bool,
) {
    let (dx, dy) = direction.delta();
    let (mut cx, mut cy) = (x, y);

    for step in 0..length.saturating_sub(1) {
        if step == 0 && junction {
            host.draw_junction(cx, cy, direction);
        } else {
            host.draw_rule(cx, cy, direction.orientation());
        }
        cx = cx.saturating_add(dx);
        cy = cy.saturating_add(dy);
    }

    host.draw_arrowhead(cx, cy, direction);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{DrawCall, RecordingPlatform};

    #[test]
    fn test_rect_cell_counts() {
        let mut host = RecordingPlatform::new();
        draw_rect(&mut host, 0, 0, 4, 2, None);

        let corners = host.count(|c| matches!(c, DrawCall::Corner { .. }));
        let horizontal = host.count(|c| {
            matches!(c, DrawCall::Rule { orientation: Orientation::Horizontal, .. })
        });
        let left = host.count(|c| {
            matches!(c, DrawCall::Rule { x: 0, orientation: Orientation::Vertical, .. })
        });
        let right = host.count(|c| {
            matches!(c, DrawCall::Rule { x: 4, orientation: Orientation::Vertical, .. })
        });

        assert_eq!(corners, 4);
        assert_eq!(horizontal, 6);
        assert_eq!(left, 1);
        assert_eq!(right, 1);
        assert_eq!(host.count(|c| matches!(c, DrawCall::Background { .. })), 0);
    }

    #[test]
    fn test_rect_corner_positions() {
        let mut host = RecordingPlatform::new();
        draw_rect(&mut host, 2, 3, 5, 4, None);
        let corners: Vec<_> = host
            .calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Corner { x, y, corner } => Some((*x, *y, *corner)),
                _ => None,
            })
            .collect();
        assert_eq!(
            corners,
            vec![
                (2, 3, Corner::TopLeft),
                (7, 3, Corner::TopRight),
                (2, 7, Corner::BottomLeft),
                (7, 7, Corner::BottomRight),
            ]
        );
    }

    #[test]
    fn test_rect_background_attachments() {
        let mut host = RecordingPlatform::new();
        draw_rect(&mut host, 0, 0, 3, 3, Some(5));

        let attachment_at = |x: i32, y: i32| {
            host.calls.iter().find_map(|c| match c {
                DrawCall::Background {
                    x: bx,
                    y: by,
                    attachment,
                    palette: 5,
                } if *bx == x && *by == y => Some(*attachment),
                _ => None,
            })
        };

        assert_eq!(attachment_at(1, 0), Some(Attachment::Bottom));
        assert_eq!(attachment_at(1, 3), Some(Attachment::Top));
        assert_eq!(attachment_at(0, 1), Some(Attachment::Right));
        assert_eq!(attachment_at(3, 1), Some(Attachment::Left));
        assert_eq!(attachment_at(1, 1), Some(Attachment::Full));
        assert_eq!(attachment_at(2, 2), Some(Attachment::Full));
        assert_eq!(attachment_at(0, 0), Some(Attachment::Corner(Corner::TopLeft)));
        assert_eq!(attachment_at(3, 3), Some(Attachment::Corner(Corner::BottomRight)));

        // 4 top/bottom + 4 sides + 4 interior + 4 corners
        assert_eq!(host.count(|c| matches!(c, DrawCall::Background { .. })), 16);
    }

    #[test]
    fn test_arrow_right_plain() {
        let mut host = RecordingPlatform::new();
        draw_arrow(&mut host, 1, 1, Direction::Right, 3, false);
        assert_eq!(
            host.calls,
            vec![
                DrawCall::Rule {
                    x: 1,
                    y: 1,
                    orientation: Orientation::Horizontal,
                },
                DrawCall::Rule {
                    x: 2,
                    y: 1,
                    orientation: Orientation::Horizontal,
                },
                DrawCall::Arrowhead {
                    x: 3,
                    y: 1,
                    direction: Direction::Right,
                },
            ]
        );
    }

    #[test]
    fn test_arrow_up_from_junction() {
        let mut host = RecordingPlatform::new();
        draw_arrow(&mut host, 4, 10, Direction::Up, 3, true);
        assert_eq!(
            host.calls,
            vec![
                DrawCall::Junction {
                    x: 4,
                    y: 10,
                    direction: Direction::Up,
                },
                DrawCall::Rule {
                    x: 4,
                    y: 9,
                    orientation: Orientation::Vertical,
                },
                DrawCall::Arrowhead {
                    x: 4,
                    y: 8,
                    direction: Direction::Up,
                },
            ]
        );
    }

    #[test]
    fn test_arrow_length_one_is_just_a_head() {
        let mut host = RecordingPlatform::new();
        draw_arrow(&mut host, 5, 5, Direction::Left, 1, true);
        assert_eq!(
            host.calls,
            vec![DrawCall::Arrowhead {
                x: 5,
                y: 5,
                direction: Direction::Left,
            }]
        );
    }

    #[test]
    fn test_arrow_left_walks_decreasing_x() {
        let mut host = RecordingPlatform::new();
        draw_arrow(&mut host, 6, 2, Direction::Left, 4, false);
        assert_eq!(
            host.calls,
            vec![
                DrawCall::Rule {
                    x: 6,
                    y: 2,
                    orientation: Orientation::Horizontal,
                },
                DrawCall::Rule {
                    x: 5,
                    y: 2,
                    orientation: Orientation::Horizontal,
                },
                DrawCall::Rule {
                    x: 4,
                    y: 2,
                    orientation: Orientation::Horizontal,
                },
                DrawCall::Arrowhead {
                    x: 3,
                    y: 2,
                    direction: Direction::Left,
                },
            ]
        );
    }

    #[test]
    fn test_arrow_down_walks_increasing_y() {
        let mut host = RecordingPlatform::new();
        draw_arrow(&mut host, 0, 1, Direction::Down, 3, false);
        assert_eq!(
            host.calls,
            vec![
                DrawCall::Rule {
                    x: 0,
                    y: 1,
                    orientation: Orientation::Vertical,
                },
                DrawCall::Rule {
                    x: 0,
                    y: 2,
                    orientation: Orientation::Vertical,
                },
                DrawCall::Arrowhead {
                    x: 0,
                    y: 3,
                    direction: Direction::Down,
                },
            ]
        );
    }

    #[test]
    fn test_horizontal_arrow_from_junction() {
        let mut host = RecordingPlatform::new();
        draw_arrow(&mut host, 3, 7, Direction::Right, 3, true);
        assert_eq!(
            host.calls,
            vec![
                DrawCall::Junction {
                    x: 3,
                    y: 7,
                    direction: Direction::Right,
                },
                DrawCall::Rule {
                    x: 4,
                    y: 7,
                    orientation: Orientation::Horizontal,
                },
                DrawCall::Arrowhead {
                    x: 5,
                    y: 7,
                    direction: Direction::Right,
                },
            ]
        );
    }

    #[test]
    fn test_geometry_at_i32_limits_does_not_overflow() {
        let mut host = RecordingPlatform::new();
        draw_rect(&mut host, i32::MAX, i32::MAX - 1, 10, 10, Some(1));
        assert_eq!(host.count(|c| matches!(c, DrawCall::Corner { .. })), 4);

        host.take_calls();
        draw_arrow(&mut host, i32::MAX - 1, 0, Direction::Right, 4, false);
        assert_eq!(
            host.calls.last(),
            Some(&DrawCall::Arrowhead {
                x: i32::MAX,
                y: 0,
                direction: Direction::Right,
            })
        );
    }
}
