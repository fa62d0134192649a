//! Spring chain (rope) hanging from a pinned root particle.

use crate::config::{ChainConfig, DampingPolicy};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::Particle;
use crate::vec::{Vec, Vec2};
use alloc::vec::Vec as AllocVec;

/// A rope of particles, each sprung to the one before it.
///
/// Particle 0 is the root: pinned at the configured offset for the chain's
/// whole lifetime. The chain owns its particles contiguously and the parent
/// of particle `i` is always particle `i - 1`.
#[derive(Clone, Debug)]
pub struct ParticleChain<F: Float> {
    particles: AllocVec<Particle<F>>,
    root_offset: Vec2<F>,
    damping_policy: DampingPolicy,
    rest_speed_sq: F,
}

impl<F: Float> ParticleChain<F> {
    /// Build a chain seeded below its pinned root.
    ///
    /// Each child's first rest point is the root offset plus its parent's
    /// position, less one rest length in Y. With the root at the origin this
    /// is a vertical line spaced by `rest_length`.
    pub fn new(config: &ChainConfig<F>) -> Result<Self, PhysicsError> {
        if let Err(err) = config.validate() {
            #[cfg(feature = "log")]
            log::warn!("rejected chain config: {}", err);
            return Err(err);
        }

        let root_offset = config.root_offset;
        let mut particles = AllocVec::with_capacity(config.count);
        particles.push(Particle::anchor(
            root_offset,
            config.root_stiffness,
            config.root_damping,
            config.root_max_speed,
        ));

        let hang = Vec2::new(F::zero(), config.rest_length);
        for i in 1..config.count {
            let parent = particles[i - 1].position;
            let rest = root_offset + parent - hang;
            particles.push(Particle::new(
                rest,
                config.rest_length,
                config.stiffness,
                config.damping,
                config.max_speed,
            ));
        }

        #[cfg(feature = "log")]
        log::debug!(
            "built chain of {} particles, rest length {}, root at ({}, {})",
            config.count,
            config.rest_length,
            root_offset.x,
            root_offset.y,
        );

        Ok(ParticleChain {
            particles,
            root_offset,
            damping_policy: config.damping_policy,
            rest_speed_sq: config.rest_speed_sq,
        })
    }

    /// Step every particle by `dt`, root first.
    pub fn advance(&mut self, dt: F, gravity: Vec2<F>) {
        self.advance_observed(dt, gravity, &mut NoOpStepObserver);
    }

    /// [`advance`](Self::advance) with an observer.
    ///
    /// A child reads its parent's position after the parent has already
    /// moved this frame, so disturbances travel down the rope in one pass.
    pub fn advance_observed<O: StepObserver>(&mut self, dt: F, gravity: Vec2<F>, observer: &mut O) {
        // The root has no parent and is always pinned.
        for i in 1..self.particles.len() {
            if self.particles[i].pinned {
                continue;
            }
            let parent = self.particles[i - 1].position;
            self.particles[i].integrate(parent, dt, gravity, self.damping_policy, self.rest_speed_sq);
            observer.on_particle_integrated(i);
        }
        observer.on_advance_complete();
    }

    /// Add `impulse * (i / count)` to every particle's velocity.
    ///
    /// The ramp runs from zero at the root to just under the full impulse at
    /// the tail, so the rope whips instead of shifting as a block.
    pub fn apply_impulse(&mut self, impulse: Vec2<F>) {
        self.apply_impulse_observed(impulse, &mut NoOpStepObserver);
    }

    /// [`apply_impulse`](Self::apply_impulse) with an observer.
    pub fn apply_impulse_observed<O: StepObserver>(&mut self, impulse: Vec2<F>, observer: &mut O) {
        let count = F::from_usize(self.particles.len());
        for (i, p) in self.particles.iter_mut().enumerate() {
            p.add_velocity(impulse.scale(F::from_usize(i) / count));
        }
        observer.on_impulse();
    }

    /// Current particle positions, root first. Suited to line or point drawing.
    pub fn positions(&self) -> impl ExactSizeIterator<Item = Vec2<F>> + '_ {
        self.particles.iter().map(|p| p.position)
    }

    /// All particles, root first.
    pub fn particles(&self) -> &[Particle<F>] {
        &self.particles
    }

    /// Particle at `index`. Panics when out of bounds.
    pub fn particle(&self, index: usize) -> &Particle<F> {
        &self.particles[index]
    }

    /// Bounds-checked variant of [`particle`](Self::particle).
    pub fn try_particle(&self, index: usize) -> Result<&Particle<F>, PhysicsError> {
        self.particles.get(index).ok_or(PhysicsError::ParticleOutOfBounds {
            index,
            count: self.particles.len(),
        })
    }

    /// The root particle.
    pub fn root(&self) -> &Particle<F> {
        &self.particles[0]
    }

    /// Where the root was placed; it never moves.
    pub fn root_offset(&self) -> Vec2<F> {
        self.root_offset
    }

    /// Damping policy chosen at construction.
    pub fn damping_policy(&self) -> DampingPolicy {
        self.damping_policy
    }

    /// True when every particle's velocity has snapped to zero.
    pub fn is_at_rest(&self) -> bool {
        self.particles.iter().all(|p| p.pinned || p.velocity == Vec2::zero())
    }

    /// Number of particles, root included.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Always false: a chain holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
