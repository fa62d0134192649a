use whipcord::{ChainConfig, Simulation, SimulationConfig, Vec2};
use wasm_bindgen::prelude::*;

// ---- Rope Demo ----

#[wasm_bindgen]
pub struct RopeDemo {
    sim: Simulation<f32>,
    drag_start: Option<Vec2<f32>>,
    drag_strength: f32,
}

#[wasm_bindgen]
impl RopeDemo {
    /// The rope hangs from the origin in y-up world space; the page
    /// translates and flips y when drawing.
    #[wasm_bindgen(constructor)]
    pub fn new(particles: usize) -> Result<RopeDemo, JsError> {
        let chain = ChainConfig::new(particles.max(1))
            .with_rest_length(18.0)
            .with_stiffness(60.0)
            .with_damping(2.5)
            .with_max_speed(2000.0);
        let config = SimulationConfig::new()
            .with_gravity(Vec2::new(0.0, -400.0))
            .with_thickness(6.0);
        let sim = Simulation::new(&chain, config).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(RopeDemo {
            sim,
            drag_start: None,
            drag_strength: 4.0,
        })
    }

    /// Step one frame. Returns the time step actually used.
    pub fn update(&mut self, dt: f32) -> f32 {
        self.sim.frame(dt)
    }

    /// Pointer coordinates are in world space.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.drag_start = Some(Vec2::new(x, y));
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) {
        if let Some(start) = self.drag_start.take() {
            self.sim.drag(start, Vec2::new(x, y), self.drag_strength);
        }
    }

    pub fn set_drag_strength(&mut self, strength: f32) {
        self.drag_strength = strength;
    }

    /// Returns flat [x0, y0, z0, x1, y1, z1, ...] ribbon vertices
    pub fn vertices(&self) -> Vec<f32> {
        let vertices = self.sim.mesh().vertices();
        let mut out = Vec::with_capacity(vertices.len() * 3);
        for v in vertices {
            out.push(v.x);
            out.push(v.y);
            out.push(v.z);
        }
        out
    }

    pub fn indices(&self) -> Vec<u32> {
        self.sim.mesh().indices().to_vec()
    }

    /// Returns flat [x0, y0, x1, y1, ...] positions
    pub fn positions(&self) -> Vec<f32> {
        let chain = self.sim.chain();
        let mut out = Vec::with_capacity(chain.len() * 2);
        for p in chain.positions() {
            out.push(p.x);
            out.push(p.y);
        }
        out
    }

    pub fn particle_count(&self) -> usize {
        self.sim.chain().len()
    }
}
