//! Configuration types for the rope and the simulation context.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::{Vec, Vec2};

/// How the per-step damping multiplier `1 - damping * dt` is applied.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DampingPolicy {
    /// Clamp the multiplier to `[0, 1]`. Large time steps stop the particle
    /// instead of reversing it.
    #[default]
    Clamped,
    /// Use the multiplier as computed. When `damping * dt > 1` it goes
    /// negative and velocity flips direction, matching the legacy visuals.
    Raw,
}

impl DampingPolicy {
    /// Velocity multiplier for one step.
    pub fn factor<F: Float>(self, damping: F, dt: F) -> F {
        let raw = F::one() - damping * dt;
        match self {
            DampingPolicy::Clamped => raw.clamp(F::zero(), F::one()),
            DampingPolicy::Raw => raw,
        }
    }
}

/// Parameters for building a [`ParticleChain`](crate::chain::ParticleChain).
///
/// # Builder Pattern
/// ```
/// use whipcord::config::ChainConfig;
/// use whipcord::vec::Vec2;
///
/// let config: ChainConfig<f32> = ChainConfig::new(12)
///     .with_rest_length(0.5)
///     .with_stiffness(80.0)
///     .with_damping(3.0)
///     .with_root_offset(Vec2::new(0.0, 4.0));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ChainConfig<F: Float> {
    /// Number of particles, root included. Default: 10.
    pub count: usize,
    /// Distance each particle keeps from its parent at rest. Default: 1.0.
    pub rest_length: F,
    /// Spring response toward the rest position. Default: 50.0.
    pub stiffness: F,
    /// Velocity damping per unit time. Default: 2.0.
    pub damping: F,
    /// Velocity magnitude clamp. Default: 100.0.
    pub max_speed: F,
    /// Where the pinned root sits. Default: origin.
    pub root_offset: Vec2<F>,
    /// Root anchor stiffness. The root is pinned, so this only shows up in
    /// snapshots. Default: 1000.0.
    pub root_stiffness: F,
    /// Root anchor damping. Default: 1000.0.
    pub root_damping: F,
    /// Root anchor speed clamp. Default: 1000.0.
    pub root_max_speed: F,
    /// Damping multiplier policy. Default: [`DampingPolicy::Clamped`].
    pub damping_policy: DampingPolicy,
    /// Squared speed below which velocity snaps to zero. Default: 1e-3.
    pub rest_speed_sq: F,
}

impl<F: Float> ChainConfig<F> {
    /// Create a config for `count` particles with default parameters.
    pub fn new(count: usize) -> Self {
        ChainConfig {
            count,
            rest_length: F::one(),
            stiffness: F::from_f32(50.0),
            damping: F::from_f32(2.0),
            max_speed: F::from_f32(100.0),
            root_offset: Vec2::zero(),
            root_stiffness: F::from_f32(1000.0),
            root_damping: F::from_f32(1000.0),
            root_max_speed: F::from_f32(1000.0),
            damping_policy: DampingPolicy::Clamped,
            rest_speed_sq: F::from_f32(1e-3),
        }
    }

    /// Set the rest length between neighbours.
    pub fn with_rest_length(mut self, rest_length: F) -> Self {
        self.rest_length = rest_length;
        self
    }

    /// Set the spring stiffness.
    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Set the damping coefficient.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the speed clamp.
    pub fn with_max_speed(mut self, max_speed: F) -> Self {
        self.max_speed = max_speed;
        self
    }

    /// Set the root anchor position.
    pub fn with_root_offset(mut self, root_offset: Vec2<F>) -> Self {
        self.root_offset = root_offset;
        self
    }

    /// Set the root anchor's stiffness, damping and speed clamp.
    pub fn with_root_parameters(mut self, stiffness: F, damping: F, max_speed: F) -> Self {
        self.root_stiffness = stiffness;
        self.root_damping = damping;
        self.root_max_speed = max_speed;
        self
    }

    /// Set the damping policy.
    pub fn with_damping_policy(mut self, policy: DampingPolicy) -> Self {
        self.damping_policy = policy;
        self
    }

    /// Set the rest-snap threshold (squared speed).
    pub fn with_rest_speed_sq(mut self, rest_speed_sq: F) -> Self {
        self.rest_speed_sq = rest_speed_sq;
        self
    }

    /// Check every parameter before any particle is built.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        // Ribbon vertices are indexed with u32 and there are two per particle.
        let max_count = (u32::MAX / 2) as usize;
        if self.count < 1 || self.count > max_count {
            return Err(PhysicsError::InvalidParticleCount { count: self.count });
        }
        if !self.rest_length.is_non_negative() {
            return Err(PhysicsError::InvalidRestLength);
        }
        if !self.stiffness.is_non_negative() || !self.root_stiffness.is_non_negative() {
            return Err(PhysicsError::InvalidStiffness);
        }
        if !self.damping.is_non_negative() || !self.root_damping.is_non_negative() {
            return Err(PhysicsError::InvalidDamping);
        }
        if !self.max_speed.is_non_negative() || !self.root_max_speed.is_non_negative() {
            return Err(PhysicsError::InvalidMaxSpeed);
        }
        Ok(())
    }
}

impl<F: Float> Default for ChainConfig<F> {
    fn default() -> Self {
        Self::new(10)
    }
}

/// Per-frame settings for a [`Simulation`](crate::simulation::Simulation).
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig<F: Float> {
    /// Gravity acceleration. Default: `(0, -9.81)`.
    pub gravity: Vec2<F>,
    /// Half-width of the ribbon. Default: 0.1.
    pub thickness: F,
    /// Floor applied to frame time before stepping. Default: 0.01.
    pub min_dt: F,
}

impl<F: Float> SimulationConfig<F> {
    /// Create a config with default values.
    pub fn new() -> Self {
        SimulationConfig {
            gravity: Vec2::new(F::zero(), F::from_f32(-9.81)),
            thickness: F::from_f32(0.1),
            min_dt: F::from_f32(0.01),
        }
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the ribbon half-width.
    pub fn with_thickness(mut self, thickness: F) -> Self {
        self.thickness = thickness;
        self
    }

    /// Set the frame-time floor.
    pub fn with_min_dt(mut self, min_dt: F) -> Self {
        self.min_dt = min_dt;
        self
    }
}

impl<F: Float> Default for SimulationConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_policy_never_negative() {
        let f: f32 = DampingPolicy::Clamped.factor(5.0, 1.0);
        assert_eq!(f, 0.0);
        let f: f32 = DampingPolicy::Clamped.factor(1.0, 0.25);
        assert!((f - 0.75).abs() < 1e-6);
    }

    #[test]
    fn raw_policy_keeps_inversion() {
        let f: f32 = DampingPolicy::Raw.factor(5.0, 1.0);
        assert!((f + 4.0).abs() < 1e-6);
    }

    #[test]
    fn zero_count_rejected() {
        let config: ChainConfig<f32> = ChainConfig::new(0);
        assert_eq!(config.validate(), Err(PhysicsError::InvalidParticleCount { count: 0 }));
    }

    #[test]
    fn negative_parameters_rejected() {
        let base: ChainConfig<f64> = ChainConfig::new(4);
        assert_eq!(base.clone().with_rest_length(-1.0).validate(), Err(PhysicsError::InvalidRestLength));
        assert_eq!(base.clone().with_stiffness(-0.1).validate(), Err(PhysicsError::InvalidStiffness));
        assert_eq!(base.clone().with_damping(f64::NAN).validate(), Err(PhysicsError::InvalidDamping));
        assert_eq!(base.with_max_speed(-2.0).validate(), Err(PhysicsError::InvalidMaxSpeed));
    }

    #[test]
    fn single_particle_is_valid() {
        let config: ChainConfig<f32> = ChainConfig::new(1);
        assert!(config.validate().is_ok());
    }
}
