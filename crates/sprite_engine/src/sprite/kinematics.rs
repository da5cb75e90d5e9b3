//! Sprite kinematics
//!
//! A sprite's motion is stored twice: as a velocity vector (`dx`, `dy`) and
//! as a polar pair (`speed`, `direction`). Both representations are live.
//! Every mutator that writes one side immediately recomputes the other, so
//! `speed == sqrt(dx^2 + dy^2)` and `direction == atan2(-dy, dx)` hold after
//! any mutation.
//!
//! Angles are degrees throughout the public API, measured counter-clockwise
//! with 0 pointing right. Screen space is y-down, so a positive heading
//! produces a negative dy.

use crate::foundation::math::Vec2;

/// Speed/direction ⇄ velocity kinematics shared by every moving sprite
#[derive(Debug, Clone, PartialEq)]
pub struct Kinematics {
    /// Position of the sprite's anchor point
    pub position: Vec2,
    /// Velocity in pixels per tick (y-down)
    pub velocity: Vec2,
    /// Motion heading in degrees
    pub direction: f32,
    /// Visual heading in degrees; may diverge from `direction`
    pub rotation: f32,
    /// Scalar speed in pixels per tick
    pub speed: f32,
    /// Lower clamp for [`Kinematics::speed_up`]
    pub min_speed: f32,
    /// Upper clamp for [`Kinematics::speed_up`]
    pub max_speed: f32,
}

impl Default for Kinematics {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            velocity: Vec2::zeros(),
            direction: 0.0,
            rotation: 0.0,
            speed: 0.0,
            min_speed: -3.0,
            max_speed: 10.0,
        }
    }
}

impl Kinematics {
    /// Create kinematics at the given position, at rest
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            ..Default::default()
        }
    }

    /// Set the scalar speed directly, bypassing the clamp
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Change speed by `amount`, clamped to `[min_speed, max_speed]`
    pub fn speed_up(&mut self, amount: f32) {
        self.speed += amount;
        if self.speed < self.min_speed {
            self.speed = self.min_speed;
        }
        if self.speed > self.max_speed {
            self.speed = self.max_speed;
        }
    }

    /// Set both the motion direction and the visual rotation, in degrees
    pub fn set_angle(&mut self, degrees: f32) {
        self.direction = degrees;
        self.rotation = degrees;
    }

    /// Turn motion and visual heading by `amount` degrees.
    ///
    /// On overflow past 360 the angle snaps to exactly `amount`, and on
    /// underflow below 0 to `360 - amount`, not to the modulo remainder.
    pub fn turn_by(&mut self, amount: f32) {
        self.direction += amount;
        if self.direction > 360.0 {
            self.direction = amount;
        }
        if self.direction < 0.0 {
            self.direction = 360.0 - amount;
        }
        self.rotation = self.direction;
    }

    /// Turn the visual heading only, with the same wrap behavior as
    /// [`Kinematics::turn_by`]; the motion direction is untouched.
    pub fn rotate_by(&mut self, amount: f32) {
        self.rotation += amount;
        if self.rotation > 360.0 {
            self.rotation = amount;
        }
        if self.rotation < 0.0 {
            self.rotation = 360.0 - amount;
        }
    }

    /// Set the horizontal velocity component
    pub fn set_dx(&mut self, dx: f32) {
        self.velocity.x = dx;
        self.update_vector();
    }

    /// Add to the horizontal velocity component
    pub fn add_dx(&mut self, amount: f32) {
        self.velocity.x += amount;
        self.update_vector();
    }

    /// Set the vertical velocity component
    pub fn set_dy(&mut self, dy: f32) {
        self.velocity.y = dy;
        self.update_vector();
    }

    /// Add to the vertical velocity component
    pub fn add_dy(&mut self, amount: f32) {
        self.velocity.y += amount;
        self.update_vector();
    }

    /// Set both velocity components at once
    pub fn set_components(&mut self, velocity: Vec2) {
        self.velocity = velocity;
        self.update_vector();
    }

    /// Place the anchor point directly at the given position
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    /// Displace by the given vector without touching speed or direction
    pub fn move_by(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Move `amount` pixels along the current direction of travel without
    /// touching the stored velocity
    pub fn forward(&mut self, amount: f32) {
        let radians = self.direction.to_radians();
        self.position.x += amount * radians.cos();
        self.position.y -= amount * radians.sin();
    }

    /// Apply an instantaneous velocity increment of magnitude `amount` along
    /// `angle_deg`, then recompute speed and direction
    pub fn add_force(&mut self, amount: f32, angle_deg: f32) {
        let radians = angle_deg.to_radians();
        self.velocity.x += amount * radians.cos();
        self.velocity.y -= amount * radians.sin();
        self.update_vector();
    }

    /// Recompute `speed` and `direction` from the velocity components.
    /// Called by every mutator that writes `dx`/`dy` directly.
    pub fn update_vector(&mut self) {
        self.speed = (self.velocity.x * self.velocity.x + self.velocity.y * self.velocity.y).sqrt();
        self.direction = (-self.velocity.y).atan2(self.velocity.x).to_degrees();
    }

    /// Recompute the velocity components from `speed` and `direction`.
    /// Called once per tick before the position update.
    pub fn calc_vector(&mut self) {
        let theta = self.direction.to_radians();
        self.velocity.x = theta.cos() * self.speed;
        self.velocity.y = -theta.sin() * self.speed;
    }

    /// Advance the position by the current velocity
    pub fn calc_position(&mut self) {
        self.position += self.velocity;
    }

    /// Distance in pixels from the anchor point to `point`
    pub fn distance_to(&self, point: Vec2) -> f32 {
        (self.position - point).magnitude()
    }

    /// Heading in degrees from the anchor point toward `point`
    pub fn direction_to(&self, point: Vec2) -> f32 {
        let dx = self.position.x - point.x;
        let dy = -(self.position.y - point.y);
        dy.atan2(dx).to_degrees() + 180.0
    }

    /// Set the clamp range used by [`Kinematics::speed_up`]
    pub fn set_speed_limits(&mut self, max_speed: f32, min_speed: f32) {
        self.max_speed = max_speed;
        self.min_speed = min_speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-4;

    fn speed_matches_velocity(kin: &Kinematics) -> bool {
        let magnitude = (kin.velocity.x.powi(2) + kin.velocity.y.powi(2)).sqrt();
        (magnitude - kin.speed).abs() < EPSILON
    }

    #[test]
    fn test_set_dx_keeps_polar_consistent() {
        let mut kin = Kinematics::default();
        kin.set_dx(3.0);
        kin.set_dy(-4.0);

        assert!(speed_matches_velocity(&kin));
        assert_relative_eq!(kin.speed, 5.0, epsilon = EPSILON);
        // dy < 0 is screen-up, so the heading is above the x axis
        assert_relative_eq!(kin.direction, 4.0f32.atan2(3.0).to_degrees(), epsilon = EPSILON);
    }

    #[test]
    fn test_set_components_keeps_polar_consistent() {
        let mut kin = Kinematics::default();
        kin.set_components(Vec2::new(-2.0, 7.0));
        assert!(speed_matches_velocity(&kin));
    }

    #[test]
    fn test_add_force_composes_velocity() {
        let mut kin = Kinematics::default();
        kin.add_force(5.0, 0.0);
        assert_relative_eq!(kin.velocity.x, 5.0, epsilon = EPSILON);
        assert_relative_eq!(kin.velocity.y, 0.0, epsilon = EPSILON);

        kin.add_force(5.0, 90.0);
        assert_relative_eq!(kin.velocity.x, 5.0, epsilon = EPSILON);
        assert_relative_eq!(kin.velocity.y, -5.0, epsilon = EPSILON);
        assert!(speed_matches_velocity(&kin));
        assert_relative_eq!(kin.direction, 45.0, epsilon = EPSILON);
    }

    #[test]
    fn test_polar_to_velocity_round_trip() {
        let mut kin = Kinematics::default();
        kin.set_speed(6.0);
        kin.set_angle(30.0);
        kin.calc_vector();

        assert_relative_eq!(kin.velocity.x, 6.0 * 30f32.to_radians().cos(), epsilon = EPSILON);
        assert_relative_eq!(kin.velocity.y, -6.0 * 30f32.to_radians().sin(), epsilon = EPSILON);

        kin.update_vector();
        assert_relative_eq!(kin.speed, 6.0, epsilon = EPSILON);
        assert_relative_eq!(kin.direction, 30.0, epsilon = EPSILON);
    }

    #[test]
    fn test_set_angle_syncs_rotation() {
        let mut kin = Kinematics::default();
        kin.set_angle(135.0);
        assert_eq!(kin.direction, 135.0);
        assert_eq!(kin.rotation, 135.0);
    }

    #[test]
    fn test_rotate_by_leaves_direction_untouched() {
        let mut kin = Kinematics::default();
        kin.set_angle(10.0);
        kin.rotate_by(25.0);
        assert_eq!(kin.direction, 10.0);
        assert_eq!(kin.rotation, 35.0);
    }

    #[test]
    fn test_turn_by_overflow_snaps_to_increment() {
        let mut kin = Kinematics::default();
        kin.set_angle(350.0);
        kin.turn_by(20.0);
        // overflow past 360 snaps to the raw increment, not 10
        assert_eq!(kin.direction, 20.0);
        assert_eq!(kin.rotation, 20.0);
    }

    #[test]
    fn test_turn_by_underflow_snaps_to_complement() {
        let mut kin = Kinematics::default();
        kin.set_angle(5.0);
        kin.turn_by(-20.0);
        // underflow snaps to 360 - amount, even for a negative amount
        assert_eq!(kin.direction, 380.0);
    }

    #[test]
    fn test_speed_up_clamps() {
        let mut kin = Kinematics::default();
        kin.speed_up(25.0);
        assert_eq!(kin.speed, kin.max_speed);

        kin.speed_up(-100.0);
        assert_eq!(kin.speed, kin.min_speed);
    }

    #[test]
    fn test_forward_displaces_without_velocity() {
        let mut kin = Kinematics::at(100.0, 100.0);
        kin.set_angle(90.0);
        kin.forward(10.0);

        // straight up on a y-down screen
        assert_relative_eq!(kin.position.x, 100.0, epsilon = EPSILON);
        assert_relative_eq!(kin.position.y, 90.0, epsilon = EPSILON);
        assert_eq!(kin.velocity, Vec2::zeros());
        assert_eq!(kin.speed, 0.0);
    }

    #[test]
    fn test_direction_to() {
        let kin = Kinematics::at(0.0, 0.0);

        // target straight left
        let heading = kin.direction_to(Vec2::new(-10.0, 0.0));
        assert_relative_eq!(heading, 180.0, epsilon = EPSILON);

        // target straight up on a y-down screen
        let heading = kin.direction_to(Vec2::new(0.0, -10.0));
        assert_relative_eq!(heading, 90.0, epsilon = EPSILON);
    }
}
