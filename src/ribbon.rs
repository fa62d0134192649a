//! Ribbon mesh giving the rope visible thickness.

use crate::chain::ParticleChain;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::{normal, position_3d};
use crate::vec::{Vec, Vec3};
use alloc::vec;
use alloc::vec::Vec as AllocVec;

/// Triangle list joining consecutive cross-sections of a ribbon.
///
/// Vertex `i` is the upper edge at particle `i`, vertex `i + count` the
/// lower edge. Each segment becomes the two triangles
/// `(i, i + n, i + 1)` and `(i + 1, i + n, i + n + 1)`, giving
/// `6 * (count - 1)` indices. A single particle has no segments.
pub fn build_topology(count: usize) -> AllocVec<u32> {
    let segments = count.saturating_sub(1);
    let mut indices = AllocVec::with_capacity(segments * 6);
    let n = count as u32;
    for i in 0..segments as u32 {
        indices.extend_from_slice(&[i, i + n, i + 1, i + 1, i + n, i + n + 1]);
    }
    indices
}

/// Two-sided strip around a [`ParticleChain`].
///
/// Sized once for a particle count. The index buffer never changes; the
/// vertex buffer is overwritten in place by [`rebuild`](Self::rebuild).
#[derive(Clone, Debug)]
pub struct RibbonMesh<F: Float> {
    count: usize,
    vertices: AllocVec<Vec3<F>>,
    indices: AllocVec<u32>,
}

impl<F: Float> RibbonMesh<F> {
    /// Allocate buffers for a chain of `count` particles.
    pub fn new(count: usize) -> Self {
        RibbonMesh {
            count,
            vertices: vec![Vec3::zero(); count * 2],
            indices: build_topology(count),
        }
    }

    /// Allocate buffers sized for `chain` and fill them from its current state.
    pub fn from_chain(chain: &ParticleChain<F>, thickness: F) -> Self {
        let mut mesh = Self::new(chain.len());
        mesh.fill(chain, thickness);
        mesh
    }

    /// Rewrite every vertex from the chain's current positions.
    pub fn rebuild(&mut self, chain: &ParticleChain<F>, thickness: F) -> Result<(), PhysicsError> {
        self.rebuild_observed(chain, thickness, &mut NoOpStepObserver)
    }

    /// [`rebuild`](Self::rebuild) with an observer.
    pub fn rebuild_observed<O: StepObserver>(
        &mut self,
        chain: &ParticleChain<F>,
        thickness: F,
        observer: &mut O,
    ) -> Result<(), PhysicsError> {
        if chain.len() != self.count {
            return Err(PhysicsError::ParticleCountMismatch {
                expected: self.count,
                actual: chain.len(),
            });
        }
        self.fill(chain, thickness);
        observer.on_mesh_rebuilt();
        Ok(())
    }

    /// Caller guarantees `chain.len() == self.count`.
    pub(crate) fn fill(&mut self, chain: &ParticleChain<F>, thickness: F) {
        let (upper, lower) = self.vertices.split_at_mut(self.count);
        for ((p, top), bottom) in chain.particles().iter().zip(upper).zip(lower) {
            let offset = normal(p).scale(thickness).extend(F::zero());
            let center = position_3d(p);
            *top = center + offset;
            *bottom = center - offset;
        }
    }

    /// `2 * count` vertices: upper edge first, then lower edge.
    pub fn vertices(&self) -> &[Vec3<F>] {
        &self.vertices
    }

    /// Triangle list, three indices per triangle.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn particle_count(&self) -> usize {
        self.count
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
