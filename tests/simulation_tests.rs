use whipcord::{ChainConfig, Simulation, SimulationConfig, StepObserver, Vec2};

#[derive(Default)]
struct FrameLog {
    advances: usize,
    rebuilds: usize,
    integrated: Vec<usize>,
}

impl StepObserver for FrameLog {
    fn on_particle_integrated(&mut self, index: usize) {
        self.integrated.push(index);
    }
    fn on_advance_complete(&mut self) {
        self.advances += 1;
    }
    fn on_mesh_rebuilt(&mut self) {
        self.rebuilds += 1;
    }
}

fn sim(count: usize) -> Simulation<f32> {
    Simulation::new(&ChainConfig::new(count), SimulationConfig::new()).unwrap()
}

#[test]
fn frame_integrates_parents_before_children() {
    let mut sim = sim(5);
    let mut log = FrameLog::default();
    sim.frame_observed(1.0 / 60.0, &mut log);
    assert_eq!(log.integrated, vec![1, 2, 3, 4]);
    assert_eq!(log.advances, 1);
    assert_eq!(log.rebuilds, 1);
}

#[test]
fn frame_keeps_mesh_in_step_with_chain() {
    let mut sim = sim(6);
    sim.impulse(Vec2::new(10.0, 0.0));
    for _ in 0..20 {
        sim.frame(1.0 / 60.0);
    }
    let n = sim.chain().len();
    for (i, pos) in sim.chain().positions().enumerate() {
        let mid_x = (sim.mesh().vertices()[i].x + sim.mesh().vertices()[i + n].x) * 0.5;
        let mid_y = (sim.mesh().vertices()[i].y + sim.mesh().vertices()[i + n].y) * 0.5;
        assert!((mid_x - pos.x).abs() < 1e-5);
        assert!((mid_y - pos.y).abs() < 1e-5);
    }
}

#[test]
fn drag_scales_pointer_motion() {
    let mut sim = sim(3);
    sim.drag(Vec2::new(1.0, 1.0), Vec2::new(4.0, 1.0), 2.0);
    // Tail weight is 2/3 of the (6, 0) impulse.
    let v = sim.chain().particle(2).velocity;
    assert!((v.x - 4.0).abs() < 1e-5);
    assert_eq!(v.y, 0.0);
}

#[test]
fn thickness_change_applies_next_frame() {
    let mut sim = sim(2);
    sim.set_thickness(1.0);
    sim.frame(1.0 / 60.0);
    let root_top = sim.mesh().vertices()[0];
    assert!((root_top.x - 1.0).abs() < 1e-6);
}

#[test]
fn zero_gravity_leaves_fresh_chain_still() {
    let mut sim = sim(4);
    sim.set_gravity(Vec2::new(0.0, 0.0));
    let before: Vec<_> = sim.chain().positions().collect();
    for _ in 0..10 {
        sim.frame(1.0 / 60.0);
    }
    let after: Vec<_> = sim.chain().positions().collect();
    assert_eq!(before, after);
    assert!(sim.chain().is_at_rest());
}
