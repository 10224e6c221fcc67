use approx::assert_abs_diff_eq;
use track_core::{DriveMode, InterpolationPolicy};
use track_math::{rgb, DVec2, DVec3};
use track_motion::{AgentId, Circuit};
use track_spline::Spline;

/// Closed track whose fifth point closes the loop, with one linear and one
/// Bezier agent, both at speed 1 from time 0.
fn fixture() -> (Circuit, AgentId, AgentId) {
    let mut circuit = Circuit::new();
    let track = circuit.add_curve(Spline::from_points(
        &[
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 1.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, -1.0),
        ],
        rgb(0.4, 0.4, 0.4),
        InterpolationPolicy::CubicBezier,
    ));
    let linear = circuit
        .create_agent(track, 0.0, DriveMode::Linear, 1.0)
        .unwrap();
    let bezier = circuit
        .create_agent(track, 0.0, DriveMode::CubicBezier, 1.0)
        .unwrap();
    (circuit, linear, bezier)
}

fn reference_point(circuit: &Circuit, agent: AgentId, t: f64) -> DVec3 {
    circuit
        .pose_of(agent, t)
        .unwrap()
        .apply(DVec3::new(1.0, 0.0, 1.0))
}

fn assert_close(got: DVec3, expected: [f64; 3], epsilon: f64) {
    assert_abs_diff_eq!(got.x, expected[0], epsilon = epsilon);
    assert_abs_diff_eq!(got.y, expected[1], epsilon = epsilon);
    assert_abs_diff_eq!(got.z, expected[2], epsilon = epsilon);
}

#[test]
fn test_linear_vehicle_at_time_0() {
    let (circuit, linear, _) = fixture();
    assert_close(reference_point(&circuit, linear, 0.0), [0.7, 0.0, 1.0], 1e-9);
}

#[test]
fn test_linear_vehicle_at_time_0_2() {
    let (circuit, linear, _) = fixture();
    assert_close(reference_point(&circuit, linear, 0.2), [0.7, 0.6, 1.0], 1e-9);
}

#[test]
fn test_linear_vehicle_at_time_1() {
    let (circuit, linear, _) = fixture();
    assert_close(reference_point(&circuit, linear, 1.0), [0.7, 0.0, 1.0], 1e-9);
}

#[test]
fn test_bezier_vehicle_at_time_0() {
    let (circuit, _, bezier) = fixture();
    assert_close(reference_point(&circuit, bezier, 0.0), [0.7, 0.0, 1.0], 1e-9);
}

#[test]
fn test_bezier_vehicle_at_time_0_2() {
    let (circuit, _, bezier) = fixture();
    assert_close(
        reference_point(&circuit, bezier, 0.2),
        [0.7216470588235293, 0.15058823529411774, 1.0],
        0.01,
    );
}

#[test]
fn test_bezier_vehicle_at_time_1() {
    let (circuit, _, bezier) = fixture();
    assert_close(reference_point(&circuit, bezier, 1.0), [0.7, 0.0, 1.0], 1e-9);
}

#[test]
fn test_repeated_queries_are_bit_identical() {
    let (circuit, linear, bezier) = fixture();
    for &t in &[0.0, 0.13, 0.5, 0.99, 7.25] {
        for agent in [linear, bezier] {
            let a = circuit.pose_of(agent, t).unwrap();
            let b = circuit.pose_of(agent, t).unwrap();
            assert_eq!(a.position.x.to_bits(), b.position.x.to_bits());
            assert_eq!(a.position.y.to_bits(), b.position.y.to_bits());
            assert_eq!(a.heading.to_bits(), b.heading.to_bits());
            assert_eq!(a.matrix(), b.matrix());
        }
    }
}

#[test]
fn test_laps_repeat() {
    let (circuit, linear, bezier) = fixture();
    for agent in [linear, bezier] {
        let first = circuit.pose_of(agent, 0.25).unwrap();
        let third = circuit.pose_of(agent, 2.25).unwrap();
        assert!((first.position - third.position).length() < 1e-12);
        assert!((first.heading - third.heading).abs() < 1e-12);
    }
}
