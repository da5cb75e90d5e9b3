//! Boundary policy
//!
//! Once per tick, after the position update, each sprite's bounding box is
//! tested against the viewport and one of five interchangeable edge
//! behaviors is applied. The behaviors mutate only the kinematics; callers
//! re-derive the bounding box afterwards.

use crate::foundation::math::{Extent, Rect};
use crate::sprite::kinematics::Kinematics;

/// Off-stage parking spot used by the `Hide` policy
const HIDE_POSITION: (f32, f32) = (-1000.0, -1000.0);

/// What happens when a sprite's bounds cross the viewport edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsPolicy {
    /// Reset the overflowing axis to the opposite edge
    #[default]
    Wrap,
    /// Invert the overflowing velocity component and re-aim the sprite
    Bounce,
    /// Zero the speed on any overflow; the position is not clamped
    Stop,
    /// Zero the speed and park the sprite off-stage
    Hide,
    /// No boundary effect; the sprite travels unbounded
    Continue,
}

impl BoundsPolicy {
    /// Decode a raw policy value, e.g. from a config file. Unrecognized
    /// values degrade to `Continue` rather than failing.
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => BoundsPolicy::Wrap,
            1 => BoundsPolicy::Bounce,
            2 => BoundsPolicy::Stop,
            3 => BoundsPolicy::Hide,
            4 => BoundsPolicy::Continue,
            other => {
                log::warn!("unrecognized bounds policy {}, treating as Continue", other);
                BoundsPolicy::Continue
            }
        }
    }
}

/// Per-axis overflow flags for a bounding box against a viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeOverflow {
    /// Right edge of the box is past the right edge of the viewport
    pub right: bool,
    /// Left edge of the box is past the left edge of the viewport
    pub left: bool,
    /// Top edge of the box is above the viewport
    pub top: bool,
    /// Bottom edge of the box is below the viewport
    pub bottom: bool,
}

impl EdgeOverflow {
    /// Compute overflow flags for `rect` against `viewport`
    pub fn of(rect: &Rect, viewport: Extent) -> Self {
        Self {
            right: rect.right() > viewport.width as f32,
            left: rect.left < 0.0,
            bottom: rect.bottom() > viewport.height as f32,
            top: rect.top < 0.0,
        }
    }

    /// Whether any edge overflowed
    pub fn any(&self) -> bool {
        self.right || self.left || self.top || self.bottom
    }
}

/// Apply `policy` to a sprite whose current bounding box is `rect`.
///
/// The box's anchor point is `kin.position`; position writes move the anchor
/// exactly as the overflow dictates, so a wrapped sprite lands with its
/// anchor on the opposite edge.
pub fn apply(policy: BoundsPolicy, kin: &mut Kinematics, rect: Rect, viewport: Extent) {
    let off = EdgeOverflow::of(&rect, viewport);
    if !off.any() {
        return;
    }

    match policy {
        BoundsPolicy::Wrap => {
            if off.right {
                kin.position.x = 0.0;
            }
            if off.left {
                kin.position.x = viewport.width as f32;
            }
            if off.bottom {
                kin.position.y = 0.0;
            }
            if off.top {
                kin.position.y = viewport.height as f32;
            }
        }
        BoundsPolicy::Bounce => {
            if off.left || off.right {
                kin.velocity.x = -kin.velocity.x;
            }
            if off.top || off.bottom {
                kin.velocity.y = -kin.velocity.y;
            }
            kin.update_vector();
            kin.rotation = kin.direction;
        }
        BoundsPolicy::Stop => {
            kin.speed = 0.0;
        }
        BoundsPolicy::Hide => {
            kin.speed = 0.0;
            kin.set_position(HIDE_POSITION.0, HIDE_POSITION.1);
        }
        BoundsPolicy::Continue => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec2;
    use approx::assert_relative_eq;

    const VIEWPORT: Extent = Extent {
        width: 640,
        height: 480,
    };

    fn sprite_at(x: f32, y: f32) -> (Kinematics, Extent) {
        (Kinematics::at(x, y), Extent::new(20, 10))
    }

    fn rect_of(kin: &Kinematics, size: Extent) -> Rect {
        Rect::from_bottom_left(kin.position.x, kin.position.y, size)
    }

    #[test]
    fn test_wrap_right_edge_same_tick() {
        let (mut kin, size) = sprite_at(650.0, 100.0);
        let rect = rect_of(&kin, size);
        apply(BoundsPolicy::Wrap, &mut kin, rect, VIEWPORT);
        assert_eq!(kin.position.x, 0.0);
    }

    #[test]
    fn test_wrap_left_and_vertical_edges() {
        let (mut kin, size) = sprite_at(-5.0, 500.0);
        let rect = rect_of(&kin, size);
        apply(BoundsPolicy::Wrap, &mut kin, rect, VIEWPORT);
        assert_eq!(kin.position.x, 640.0);
        assert_eq!(kin.position.y, 0.0);
    }

    #[test]
    fn test_bounce_right_edge_inverts_dx_preserving_speed() {
        let (mut kin, size) = sprite_at(635.0, 100.0);
        kin.set_components(Vec2::new(4.0, 3.0));
        let speed_before = kin.speed;

        let rect = rect_of(&kin, size);
        apply(BoundsPolicy::Bounce, &mut kin, rect, VIEWPORT);

        assert!(kin.velocity.x < 0.0);
        assert_relative_eq!(kin.velocity.x, -4.0, epsilon = 1e-5);
        assert_relative_eq!(kin.speed, speed_before, epsilon = 1e-5);
        // visual heading re-aims along the new direction
        assert_eq!(kin.rotation, kin.direction);
    }

    #[test]
    fn test_bounce_top_edge_inverts_dy() {
        let (mut kin, size) = sprite_at(100.0, 5.0);
        kin.set_components(Vec2::new(0.0, -2.0));

        let rect = rect_of(&kin, size);
        apply(BoundsPolicy::Bounce, &mut kin, rect, VIEWPORT);

        assert_relative_eq!(kin.velocity.y, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_stop_zeroes_speed_without_clamping_position() {
        let (mut kin, size) = sprite_at(700.0, 100.0);
        kin.set_speed(5.0);

        let rect = rect_of(&kin, size);
        apply(BoundsPolicy::Stop, &mut kin, rect, VIEWPORT);

        assert_eq!(kin.speed, 0.0);
        // the sprite stays where it overflowed
        assert_eq!(kin.position.x, 700.0);
    }

    #[test]
    fn test_hide_parks_off_stage() {
        let (mut kin, size) = sprite_at(700.0, 100.0);
        kin.set_speed(5.0);

        let rect = rect_of(&kin, size);
        apply(BoundsPolicy::Hide, &mut kin, rect, VIEWPORT);

        assert_eq!(kin.speed, 0.0);
        assert_eq!(kin.position, Vec2::new(-1000.0, -1000.0));
    }

    #[test]
    fn test_continue_is_a_no_op() {
        let (mut kin, size) = sprite_at(700.0, -50.0);
        kin.set_components(Vec2::new(8.0, 0.0));
        let before = kin.clone();

        let rect = rect_of(&kin, size);
        apply(BoundsPolicy::Continue, &mut kin, rect, VIEWPORT);

        assert_eq!(kin, before);
    }

    #[test]
    fn test_on_screen_sprite_is_untouched() {
        let (mut kin, size) = sprite_at(300.0, 200.0);
        kin.set_components(Vec2::new(1.0, 1.0));
        let before = kin.clone();

        let rect = rect_of(&kin, size);
        apply(BoundsPolicy::Bounce, &mut kin, rect, VIEWPORT);

        assert_eq!(kin, before);
    }

    #[test]
    fn test_from_raw_degrades_to_continue() {
        assert_eq!(BoundsPolicy::from_raw(0), BoundsPolicy::Wrap);
        assert_eq!(BoundsPolicy::from_raw(1), BoundsPolicy::Bounce);
        assert_eq!(BoundsPolicy::from_raw(2), BoundsPolicy::Stop);
        assert_eq!(BoundsPolicy::from_raw(3), BoundsPolicy::Hide);
        assert_eq!(BoundsPolicy::from_raw(4), BoundsPolicy::Continue);
        assert_eq!(BoundsPolicy::from_raw(250), BoundsPolicy::Continue);
    }
}
