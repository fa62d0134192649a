//! Simulation context tying a chain to its ribbon for a frame-driven caller.

use crate::chain::ParticleChain;
use crate::config::{ChainConfig, SimulationConfig};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::ribbon::RibbonMesh;
use crate::vec::{Vec, Vec2};

/// Owns one rope and its mesh for the lifetime of an application session.
///
/// ```
/// use whipcord::{ChainConfig, Simulation, SimulationConfig, Vec2};
///
/// let mut sim: Simulation<f32> =
///     Simulation::new(&ChainConfig::new(8), SimulationConfig::new()).unwrap();
/// sim.impulse(Vec2::new(4.0, 0.0));
/// sim.frame(1.0 / 60.0);
/// assert_eq!(sim.mesh().vertices().len(), 16);
/// ```
#[derive(Clone, Debug)]
pub struct Simulation<F: Float> {
    chain: ParticleChain<F>,
    mesh: RibbonMesh<F>,
    config: SimulationConfig<F>,
}

impl<F: Float> Simulation<F> {
    pub fn new(chain_config: &ChainConfig<F>, config: SimulationConfig<F>) -> Result<Self, PhysicsError> {
        let chain = ParticleChain::new(chain_config)?;
        let mesh = RibbonMesh::from_chain(&chain, config.thickness);
        Ok(Simulation { chain, mesh, config })
    }

    /// Advance by `dt` (floored at `min_dt`) and rebuild the ribbon.
    ///
    /// Returns the time step actually used.
    pub fn frame(&mut self, dt: F) -> F {
        self.frame_observed(dt, &mut NoOpStepObserver)
    }

    /// [`frame`](Self::frame) with an observer.
    pub fn frame_observed<O: StepObserver>(&mut self, dt: F, observer: &mut O) -> F {
        // NaN compares false, so it also falls back to the floor.
        let dt = if dt > self.config.min_dt { dt } else { self.config.min_dt };
        self.chain.advance_observed(dt, self.config.gravity, observer);
        // The mesh was sized from this chain in `new`.
        self.mesh.fill(&self.chain, self.config.thickness);
        observer.on_mesh_rebuilt();
        dt
    }

    /// Push the rope; the effect ramps from nothing at the root to full at the tail.
    pub fn impulse(&mut self, impulse: Vec2<F>) {
        self.chain.apply_impulse(impulse);
    }

    /// Turn a pointer drag from `from` to `to` into an impulse scaled by `strength`.
    pub fn drag(&mut self, from: Vec2<F>, to: Vec2<F>, strength: F) {
        self.impulse((to - from).scale(strength));
    }

    pub fn chain(&self) -> &ParticleChain<F> {
        &self.chain
    }

    pub fn mesh(&self) -> &RibbonMesh<F> {
        &self.mesh
    }

    pub fn config(&self) -> &SimulationConfig<F> {
        &self.config
    }

    pub fn set_gravity(&mut self, gravity: Vec2<F>) {
        self.config.gravity = gravity;
    }

    /// Takes effect on the next frame.
    pub fn set_thickness(&mut self, thickness: F) {
        self.config.thickness = thickness;
    }
}
