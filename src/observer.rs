//! Step observer trait for monitoring rope updates.

/// Hooks into the per-frame update.
///
/// Implement this trait for debugging, visualization or profiling. All
/// methods have default no-op implementations.
pub trait StepObserver {
    /// Called after a non-pinned particle has been integrated.
    fn on_particle_integrated(&mut self, _index: usize) {}

    /// Called once every particle has been visited by `advance`.
    fn on_advance_complete(&mut self) {}

    /// Called after an impulse has been spread over the chain.
    fn on_impulse(&mut self) {}

    /// Called after the ribbon vertex buffer has been rewritten.
    fn on_mesh_rebuilt(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Forwards step events to the `log` facade at trace level.
#[cfg(feature = "log")]
#[derive(Debug, Default)]
pub struct LogStepObserver {
    frames: u64,
}

#[cfg(feature = "log")]
impl LogStepObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed `advance` calls seen so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(feature = "log")]
impl StepObserver for LogStepObserver {
    fn on_particle_integrated(&mut self, index: usize) {
        log::trace!("frame {}: integrated particle {}", self.frames, index);
    }

    fn on_advance_complete(&mut self) {
        log::trace!("frame {}: advance complete", self.frames);
        self.frames += 1;
    }

    fn on_impulse(&mut self) {
        log::trace!("frame {}: impulse applied", self.frames);
    }

    fn on_mesh_rebuilt(&mut self) {
        log::trace!("frame {}: ribbon rebuilt", self.frames);
    }
}

#[cfg(all(test, feature = "log"))]
mod tests {
    use super::*;
    use crate::chain::ParticleChain;
    use crate::config::ChainConfig;
    use crate::vec::Vec2;

    #[test]
    fn log_observer_counts_frames() {
        let mut chain: ParticleChain<f32> = ParticleChain::new(&ChainConfig::new(3)).unwrap();
        let mut observer = LogStepObserver::new();
        assert_eq!(observer.frames(), 0);

        chain.advance_observed(1.0 / 60.0, Vec2::new(0.0, -9.81), &mut observer);
        chain.apply_impulse_observed(Vec2::new(1.0, 0.0), &mut observer);
        chain.advance_observed(1.0 / 60.0, Vec2::new(0.0, -9.81), &mut observer);

        assert_eq!(observer.frames(), 2);
    }
}
