//! Spring-chain rope simulation with ribbon mesh generation.
//!
//! `whipcord` simulates a rope as a chain of point masses, each sprung to
//! the one before it and hanging from a pinned root, and turns the chain
//! into a triangle strip with visible thickness. It is meant to be driven
//! once per rendered frame.
//!
//! # Features
//!
//! - **Parent-first integration**: Each particle springs toward a rest point
//!   derived from its parent's already-updated position
//! - **Impulse ramp**: Pushes grow from root to tail so the rope whips
//! - **Ribbon mesh**: Fixed triangulation, vertex buffer rewritten in place
//! - **Explicit degenerate cases**: Zero-length directions fall back to fixed
//!   unit vectors instead of producing NaN
//! - **Observable**: Monitor steps via the `StepObserver` trait, or the `log`
//!   facade with the `log` feature
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use whipcord::{ChainConfig, ParticleChain, RibbonMesh, Vec2};
//!
//! let mut chain: ParticleChain<f32> = ParticleChain::new(&ChainConfig::new(6)).unwrap();
//! let mut mesh = RibbonMesh::new(chain.len());
//!
//! chain.apply_impulse(Vec2::new(3.0, 0.0));
//! chain.advance(1.0 / 60.0, Vec2::new(0.0, -9.81));
//! mesh.rebuild(&chain, 0.1).unwrap();
//!
//! assert_eq!(mesh.indices().len(), 6 * 5);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod chain;
pub mod ribbon;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec2, Vec3};
pub use particle::{Particle, displacement, normal, position_3d};
pub use chain::ParticleChain;
pub use ribbon::{RibbonMesh, build_topology};
pub use simulation::Simulation;
pub use config::{ChainConfig, DampingPolicy, SimulationConfig};
pub use observer::{StepObserver, NoOpStepObserver};
#[cfg(feature = "log")]
pub use observer::LogStepObserver;
pub use error::PhysicsError;
