//! Error types for chain construction and mesh rebuilding.

use core::fmt;

/// Errors that can occur when building or reading a rope.
///
/// Everything except the two index/size errors is an invalid constructor
/// argument; no partial chain is ever produced.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Particle count must be at least 1 and fit the mesh index type.
    InvalidParticleCount { count: usize },
    /// Rest length must be finite and non-negative.
    InvalidRestLength,
    /// Stiffness must be finite and non-negative.
    InvalidStiffness,
    /// Damping must be finite and non-negative.
    InvalidDamping,
    /// Max speed must be finite and non-negative.
    InvalidMaxSpeed,
    /// Particle index is out of bounds.
    ParticleOutOfBounds { index: usize, count: usize },
    /// A mesh was rebuilt from a chain it was not sized for.
    ParticleCountMismatch { expected: usize, actual: usize },
}

impl PhysicsError {
    /// True for the errors raised by argument validation at construction.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(
            self,
            PhysicsError::ParticleOutOfBounds { .. } | PhysicsError::ParticleCountMismatch { .. }
        )
    }
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidParticleCount { count } => {
                write!(f, "invalid particle count {} (need at least 1)", count)
            }
            PhysicsError::InvalidRestLength => write!(f, "rest length must be finite and non-negative"),
            PhysicsError::InvalidStiffness => write!(f, "stiffness must be finite and non-negative"),
            PhysicsError::InvalidDamping => write!(f, "damping must be finite and non-negative"),
            PhysicsError::InvalidMaxSpeed => write!(f, "max speed must be finite and non-negative"),
            PhysicsError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::ParticleCountMismatch { expected, actual } => {
                write!(f, "mesh built for {} particles, chain has {}", expected, actual)
            }
        }
    }
}
