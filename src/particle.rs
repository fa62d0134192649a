//! Spring-driven rope particles and read-only views derived from them.

use crate::config::DampingPolicy;
use crate::float::Float;
use crate::vec::{Vec, Vec2, Vec3};

/// One point mass of the rope.
///
/// The parent is implicit: particle `i` follows particle `i - 1` in its
/// owning [`ParticleChain`](crate::chain::ParticleChain).
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float> {
    /// Current simulated location.
    pub position: Vec2<F>,
    /// Current velocity. Snapped to zero once it drops below the rest threshold.
    pub velocity: Vec2<F>,
    /// Equilibrium point given the parent's position, refreshed every step.
    pub rest_position: Vec2<F>,
    /// Target distance from the parent.
    pub rest_length: F,
    /// Spring response toward `rest_position`.
    pub stiffness: F,
    /// Velocity damping per unit time.
    pub damping: F,
    /// Velocity magnitude clamp.
    pub max_speed: F,
    /// Excluded from integration when set.
    pub pinned: bool,
}

impl<F: Float> Particle<F> {
    /// A free particle sitting at `rest_position` with zero velocity.
    pub fn new(rest_position: Vec2<F>, rest_length: F, stiffness: F, damping: F, max_speed: F) -> Self {
        Particle {
            position: rest_position,
            velocity: Vec2::zero(),
            rest_position,
            rest_length,
            stiffness,
            damping,
            max_speed,
            pinned: false,
        }
    }

    /// A pinned anchor. Its rest length is zero since nothing precedes it.
    pub fn anchor(position: Vec2<F>, stiffness: F, damping: F, max_speed: F) -> Self {
        Particle {
            pinned: true,
            ..Particle::new(position, F::zero(), stiffness, damping, max_speed)
        }
    }

    /// Advance one step toward the rest point implied by `parent`.
    ///
    /// `parent` must already hold this frame's position. Pinned particles
    /// are left untouched, velocity included.
    pub fn integrate(
        &mut self,
        parent: Vec2<F>,
        dt: F,
        gravity: Vec2<F>,
        policy: DampingPolicy,
        rest_speed_sq: F,
    ) {
        if self.pinned {
            return;
        }

        let direction = (self.position - parent).normalize_or(Vec2::down());
        self.rest_position = parent + direction.scale(self.rest_length);

        let mut velocity = self.velocity;
        velocity = velocity + (self.rest_position - self.position).scale(dt * self.stiffness);
        velocity = velocity + gravity.scale(dt);
        velocity = velocity.scale(policy.factor(self.damping, dt));
        velocity = velocity.clamp_length(self.max_speed);

        self.position = self.position + velocity.scale(dt);

        // Below the threshold the motion is float noise.
        if velocity.length_sq() < rest_speed_sq {
            velocity = Vec2::zero();
        }
        self.velocity = velocity;
    }

    /// Add to velocity. Applies to pinned particles too; integration ignores it.
    pub fn add_velocity(&mut self, delta: Vec2<F>) {
        self.velocity = self.velocity + delta;
    }
}

/// Offset of a particle from its rest point.
pub fn displacement<F: Float>(particle: &Particle<F>) -> Vec2<F> {
    particle.position - particle.rest_position
}

/// Unit vector across the rope at this particle.
///
/// The displacement from rest rotated a quarter turn counter-clockwise.
/// Pinned particles, and particles sitting exactly at rest, use `(1, 0)`.
pub fn normal<F: Float>(particle: &Particle<F>) -> Vec2<F> {
    if particle.pinned {
        return Vec2::unit_x();
    }
    displacement(particle).perp().normalize_or(Vec2::unit_x())
}

/// Position lifted into the renderer's 3D space (z = 0).
pub fn position_3d<F: Float>(particle: &Particle<F>) -> Vec3<F> {
    particle.position.extend(F::zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn free(at: Vec2<f32>) -> Particle<f32> {
        Particle::new(at, 1.0, 0.0, 0.0, 100.0)
    }

    #[test]
    fn pinned_particle_stays_fixed() {
        let mut p = Particle::anchor(Vec2::new(5.0f32, 5.0), 1000.0, 1000.0, 1000.0);
        p.add_velocity(Vec2::new(1000.0, 1000.0));
        p.integrate(Vec2::zero(), 1.0 / 60.0, Vec2::new(0.0, -9.81), DampingPolicy::Clamped, 1e-3);
        assert_eq!(p.position, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn coincident_parent_hangs_down() {
        let mut p = free(Vec2::new(2.0, 3.0));
        p.integrate(Vec2::new(2.0, 3.0), 0.1, Vec2::zero(), DampingPolicy::Clamped, 1e-3);
        assert_eq!(p.rest_position, Vec2::new(2.0, 2.0));
        assert!(p.position.x.is_finite() && p.position.y.is_finite());
    }

    #[test]
    fn slow_velocity_snaps_to_zero() {
        let mut p = free(Vec2::new(0.0, -1.0));
        p.add_velocity(Vec2::new(0.01, 0.0));
        p.integrate(Vec2::zero(), 0.1, Vec2::zero(), DampingPolicy::Clamped, 1e-3);
        assert_eq!(p.velocity, Vec2::zero());
        // Position still moved by the pre-snap velocity.
        assert!(p.position.x > 0.0);
    }

    #[test]
    fn normal_of_pinned_is_unit_x() {
        let p = Particle::anchor(Vec2::new(1.0f64, 1.0), 1.0, 1.0, 1.0);
        assert_eq!(normal(&p), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn normal_at_rest_falls_back() {
        let p = free(Vec2::new(0.0, -1.0));
        assert_eq!(normal(&p), Vec2::unit_x());
    }

    #[test]
    fn normal_is_perpendicular_to_displacement() {
        let mut p = free(Vec2::new(0.0, -1.0));
        p.position = Vec2::new(0.5, -1.0);
        let n = normal(&p);
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!(n.dot(displacement(&p)).abs() < 1e-6);
        assert_eq!(n, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn position_3d_has_zero_depth() {
        let p = free(Vec2::new(4.0, -2.0));
        assert_eq!(position_3d(&p), Vec3::new(4.0, -2.0, 0.0));
    }
}
