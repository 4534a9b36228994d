use approx::assert_abs_diff_eq;
use springcore::{
    ClampingParameters, ColorSpring, FloatSpring, IntegrationParameters, NoOpStepObserver,
    PhysicsError, PhysicsParameters, SpringSolver, StepObserver, Vector2Spring, Vector3Spring,
    MAX_FIXED_SUBSTEPS,
};

#[derive(Default)]
struct Recorder {
    selected: Vec<(usize, &'static str)>,
    fallbacks: Vec<usize>,
    clamped: Vec<usize>,
    steps: usize,
}

impl StepObserver for Recorder {
    fn on_model_selected(&mut self, axis: usize, model: &'static str) {
        self.selected.push((axis, model));
    }

    fn on_equilibrium_fallback(&mut self, axis: usize) {
        self.fallbacks.push(axis);
    }

    fn on_clamped(&mut self, axis: usize) {
        self.clamped.push(axis);
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}

#[test]
fn vector3_converges() {
    let solver = SpringSolver::<f32>::new();
    let mut spring = Vector3Spring::new([0.0, 0.0, 0.0], PhysicsParameters::new()).unwrap();
    spring.set_target([5.0, -2.0, 8.0]);

    for _ in 0..1000 {
        spring.update(1.0 / 60.0, &solver, &mut NoOpStepObserver);
    }

    let v = spring.value();
    assert_abs_diff_eq!(v[0], 5.0, epsilon = 1e-3);
    assert_abs_diff_eq!(v[1], -2.0, epsilon = 1e-3);
    assert_abs_diff_eq!(v[2], 8.0, epsilon = 1e-3);
    assert!(spring.is_close_to_stopping());
}

#[test]
fn invalid_parameters_are_refused() {
    let result = FloatSpring::<f32>::new([0.0], PhysicsParameters::new().with_drag(-1.0));
    match result {
        Err(PhysicsError::InvalidParameters(diagnostics)) => assert_eq!(diagnostics.len(), 1),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("negative drag accepted"),
    }
}

#[test]
fn observer_sees_every_axis_each_step() {
    let solver = SpringSolver::<f32>::new();
    let mut spring = ColorSpring::new([0.0; 4], PhysicsParameters::new()).unwrap();
    spring.set_target([1.0, 0.5, 0.25, 1.0]);
    let mut recorder = Recorder::default();

    spring.update(1.0 / 60.0, &solver, &mut recorder);
    spring.update(1.0 / 60.0, &solver, &mut recorder);

    assert_eq!(recorder.steps, 2);
    let axes: Vec<_> = recorder.selected.iter().map(|(axis, _)| *axis).collect();
    assert_eq!(axes, [0, 1, 2, 3, 0, 1, 2, 3]);
    assert!(recorder.selected.iter().all(|(_, model)| *model == "semi-implicit"));
    assert!(recorder.fallbacks.is_empty());
}

#[test]
fn fixed_update_rate_slices_the_delta() {
    let solver = SpringSolver::<f64>::new();
    let params = PhysicsParameters::new().with_integration(
        IntegrationParameters::new()
            .with_fixed_update_rate(true)
            .with_fixed_time_step(0.02),
    );
    let mut spring = FloatSpring::new([0.0], params).unwrap();
    spring.set_target([1.0]);
    let mut recorder = Recorder::default();

    spring.update(0.05, &solver, &mut recorder);
    assert_eq!(recorder.steps, 2);

    // Less than one slice banked: nothing runs.
    spring.update(0.005, &solver, &mut recorder);
    assert_eq!(recorder.steps, 2);
}

#[test]
fn fixed_update_rate_caps_substeps() {
    let solver = SpringSolver::<f64>::new();
    let params = PhysicsParameters::new().with_integration(
        IntegrationParameters::new()
            .with_fixed_update_rate(true)
            .with_fixed_time_step(0.01),
    );
    let mut spring = FloatSpring::new([0.0], params).unwrap();
    spring.set_target([1.0]);
    let mut recorder = Recorder::default();

    spring.update(5.0, &solver, &mut recorder);
    assert_eq!(recorder.steps, MAX_FIXED_SUBSTEPS);

    // The excess was dropped rather than carried over.
    spring.update(0.001, &solver, &mut recorder);
    assert_eq!(recorder.steps, MAX_FIXED_SUBSTEPS);
}

#[test]
fn frozen_axes_do_not_move() {
    let solver = SpringSolver::<f32>::new();
    let mut spring = Vector2Spring::new([1.0, 2.0], PhysicsParameters::new()).unwrap();
    spring.set_target([10.0, 20.0]);
    spring.set_update_enabled(false);

    for _ in 0..10 {
        spring.update(1.0 / 60.0, &solver, &mut NoOpStepObserver);
    }
    assert_eq!(spring.value(), [1.0, 2.0]);

    spring.set_update_enabled(true);
    spring.update(1.0 / 60.0, &solver, &mut NoOpStepObserver);
    assert!(spring.value()[0] > 1.0);
}

#[test]
fn nudge_is_applied_once() {
    let solver = SpringSolver::<f64>::new();
    let mut spring = FloatSpring::new([0.0], PhysicsParameters::new()).unwrap();
    spring.nudge([5.0]);
    assert_eq!(spring.axis(0).operation_value, 5.0);

    spring.update(0.02, &solver, &mut NoOpStepObserver);

    assert_eq!(spring.axis(0).operation_value, 0.0);
    // (5 + 0) / (1 + 10 * 0.02)
    assert_abs_diff_eq!(spring.velocity()[0], 5.0 / 1.2, epsilon = 1e-12);
    assert_abs_diff_eq!(spring.value()[0], 5.0 / 1.2 * 0.02, epsilon = 1e-12);
}

#[test]
fn clamped_axes_are_reported() {
    let solver = SpringSolver::<f32>::new();
    let params = PhysicsParameters::new().with_clamping(
        ClampingParameters::new()
            .with_bounds(0.0, 1.0)
            .with_clamp_current_value(true)
            .with_stop_on_clamp(true),
    );
    let mut spring = Vector2Spring::new([0.5, 0.5], params).unwrap();
    spring.set_velocity([100.0, 0.0]);
    let mut recorder = Recorder::default();

    spring.update(0.02, &solver, &mut recorder);

    assert_eq!(recorder.clamped, [0]);
    assert_eq!(spring.value()[0], 1.0);
    assert_eq!(spring.velocity()[0], 0.0);
}

#[test]
fn stiffness_change_switches_model() {
    let solver = SpringSolver::<f64>::new();
    let mut spring = FloatSpring::new([0.0], PhysicsParameters::new()).unwrap();
    spring.set_target([1.0]);
    let mut recorder = Recorder::default();

    spring.update(0.02, &solver, &mut recorder);
    spring.set_force(1e5);
    spring.set_drag(2.0 * 1e5f64.sqrt());
    spring.update(0.02, &solver, &mut recorder);

    assert_eq!(recorder.selected, [(0, "semi-implicit"), (0, "analytical")]);
    assert_eq!(spring.parameters().force, 1e5);
}

#[test]
fn equilibrium_and_reset() {
    let solver = SpringSolver::<f32>::new();
    let mut spring = Vector2Spring::new([1.0, 1.0], PhysicsParameters::new()).unwrap();
    spring.set_target([4.0, -4.0]);
    spring.nudge([3.0, 3.0]);
    spring.update(0.1, &solver, &mut NoOpStepObserver);

    spring.reach_equilibrium();
    assert_eq!(spring.value(), [4.0, -4.0]);
    assert_eq!(spring.velocity(), [0.0, 0.0]);
    assert!(spring.is_on_target());

    spring.reset();
    assert_eq!(spring.value(), [1.0, 1.0]);
    assert_eq!(spring.target(), [4.0, -4.0]);
    assert!(!spring.is_on_target());
}

#[test]
fn set_value_teleports() {
    let mut spring = Vector2Spring::new([0.0, 0.0], PhysicsParameters::<f32>::new()).unwrap();
    spring.set_value([3.0, 4.0]);
    assert_eq!(spring.value(), [3.0, 4.0]);
    assert_eq!(spring.axis(1).candidate_value, 4.0);
    spring.axis_mut(1).target = 4.0;
    assert!(spring.axes()[1].is_on_target());
}
