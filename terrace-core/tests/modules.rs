//! Module regression tests.
//!
//! Reference values were captured from this crate's kernels and its
//! hash-derived gradient table. They are compared bit-for-bit, so any change
//! to hashing, table generation or octave summation shows up here.

#![allow(clippy::float_cmp)]

use terrace_core::module::{
    Add, Blend, Const, Curve, Invert, Max, Perlin, RotatePoint, ScaleBias, ScalePoint, Select,
    Simplex, Voronoi,
};
use terrace_core::{LatticeOrientation, NodeId, NoiseError, NoiseGraph, SimplexQuality};

const POINT: (f64, f64, f64) = (1.25, -0.75, 3.5);

fn eval(graph: &NoiseGraph, id: NodeId, (x, y, z): (f64, f64, f64)) -> f64 {
    graph.evaluate(id, x, y, z).expect("graph should be fully wired")
}

fn constant(graph: &mut NoiseGraph, value: f64) -> NodeId {
    graph.add(Const { value })
}

#[test]
fn perlin_reference_value() {
    let mut graph = NoiseGraph::new();
    let perlin = graph.add(Perlin::default());
    assert_eq!(eval(&graph, perlin, POINT), 1.264_689_274_247_392_5);
}

#[test]
fn simplex_reference_value() {
    let mut graph = NoiseGraph::new();
    let simplex = graph.add(Simplex::default());
    let settings = graph.settings::<Simplex>(simplex).expect("simplex settings");
    assert_eq!(settings.orientation, LatticeOrientation::XzBeforeY);
    assert_eq!(settings.quality, SimplexQuality::Standard);
    assert_eq!(eval(&graph, simplex, POINT), 1.211_672_065_880_833_8);
}

#[test]
fn voronoi_reference_values() {
    let mut graph = NoiseGraph::new();
    let voronoi = graph.add(Voronoi::default());
    assert_eq!(eval(&graph, voronoi, POINT), 0.881_017_447_393_861_3);

    graph
        .settings_mut::<Voronoi>(voronoi)
        .expect("voronoi settings")
        .enable_distance = true;
    assert_eq!(eval(&graph, voronoi, POINT), 0.985_050_225_825_749_5);
}

#[test]
fn voronoi_finds_a_nearby_point_far_from_origin() {
    let mut graph = NoiseGraph::new();
    let mut voronoi = Voronoi::default();
    voronoi.enable_distance = true;
    let voronoi = graph.add(voronoi);

    // The nearest seed point is never more than a cell diagonal away, so the
    // distance term stays below `sqrt(3) * sqrt(3) - 1`.
    for x in [2.2e9, -2.2e9, 1.0e12, f64::from(i32::MAX) - 0.5] {
        let v = eval(&graph, voronoi, (x, 0.3, -0.7));
        assert!((-1.0..=3.0).contains(&v), "voronoi {v} at x = {x}");
    }
}

#[test]
fn generators_are_deterministic() {
    let mut graph = NoiseGraph::new();
    let ids = [
        graph.add(Perlin::default()),
        graph.add(Simplex::default()),
        graph.add(Voronoi::default()),
    ];
    let copy = graph.clone();
    for id in ids {
        for i in 0..32 {
            let p = (f64::from(i) * 0.731 - 9.0, f64::from(i) * -0.17, f64::from(i) * 1.3);
            assert_eq!(eval(&graph, id, p).to_bits(), eval(&copy, id, p).to_bits());
        }
    }
}

#[test]
fn seed_changes_output() {
    let mut graph = NoiseGraph::new();
    let a = graph.add(Perlin::default());
    let mut reseeded = Perlin::default();
    reseeded.seed = 99;
    let b = graph.add(reseeded);
    assert_ne!(eval(&graph, a, POINT), eval(&graph, b, POINT));
}

#[test]
fn generators_are_continuous_across_cell_edges() {
    let mut graph = NoiseGraph::new();
    let perlin = graph.add(Perlin::default());
    let simplex = graph.add(Simplex::default());
    for id in [perlin, simplex] {
        for edge in [-3.0, -1.0, 0.0, 1.0, 4.0] {
            let below = eval(&graph, id, (edge - 1e-9, 0.37, -0.61));
            let above = eval(&graph, id, (edge + 1e-9, 0.37, -0.61));
            assert!((below - above).abs() < 1e-6, "jump at x = {edge}");
        }
    }
}

#[test]
fn generator_outputs_stay_in_range() {
    let mut graph = NoiseGraph::new();
    let perlin = graph.add(Perlin::default());
    let simplex = graph.add(Simplex::default());
    let voronoi = graph.add(Voronoi::default());
    let ceiling = graph
        .settings::<Simplex>(simplex)
        .expect("simplex settings")
        .max_value();

    for i in -40..40 {
        for j in -40..40 {
            let p = (f64::from(i) * 0.173, f64::from(i + j) * 0.05, f64::from(j) * 0.219);
            let v = eval(&graph, perlin, p);
            assert!((0.0..=ceiling).contains(&v), "perlin {v} at {p:?}");
            let v = eval(&graph, simplex, p);
            assert!((0.0..=ceiling).contains(&v), "simplex {v} at {p:?}");
            let v = eval(&graph, voronoi, p);
            assert!((0.0..=1.0).contains(&v), "voronoi {v} at {p:?}");
        }
    }
}

#[test]
fn octave_count_is_validated_at_set_time() {
    let mut graph = NoiseGraph::new();
    let perlin = graph.add(Perlin::default());
    let settings = graph.settings_mut::<Perlin>(perlin).expect("perlin settings");
    let err = settings.set_octave_count(0).expect_err("zero octaves");
    assert!(matches!(
        err,
        NoiseError::InvalidConfiguration {
            parameter: "octave_count",
            ..
        }
    ));
    assert!(settings.set_octave_count(31).is_err());
    assert_eq!(settings.octave_count(), 6);
}

#[test]
fn scale_bias_identity_and_affine() {
    let mut graph = NoiseGraph::new();
    let perlin = graph.add(Perlin::default());
    let identity = graph
        .add_with_sources(ScaleBias::default(), &[perlin])
        .expect("wire identity");
    assert_eq!(eval(&graph, identity, POINT), eval(&graph, perlin, POINT));

    let c = constant(&mut graph, 0.5);
    let affine = graph
        .add_with_sources(ScaleBias { scale: 4.0, bias: -1.0 }, &[c])
        .expect("wire affine");
    assert_eq!(eval(&graph, affine, POINT), 1.0);
}

#[test]
fn invert_add_and_max() {
    let mut graph = NoiseGraph::new();
    let a = constant(&mut graph, 2.5);
    let b = constant(&mut graph, -4.0);
    let inverted = graph.add_with_sources(Invert, &[a]).expect("wire invert");
    let sum = graph.add_with_sources(Add, &[a, b]).expect("wire add");
    let max = graph.add_with_sources(Max, &[inverted, b]).expect("wire max");

    assert_eq!(eval(&graph, inverted, POINT), -2.5);
    assert_eq!(eval(&graph, sum, POINT), -1.5);
    assert_eq!(eval(&graph, max, POINT), -2.5);
}

#[test]
fn blend_follows_control() {
    let mut graph = NoiseGraph::new();
    let low = constant(&mut graph, 10.0);
    let high = constant(&mut graph, 20.0);
    let control = constant(&mut graph, -1.0);
    let blend = graph
        .add_with_sources(Blend, &[low, high, control])
        .expect("wire blend");

    assert_eq!(eval(&graph, blend, POINT), 10.0);

    graph.settings_mut::<Const>(control).expect("control").value = 1.0;
    assert_eq!(eval(&graph, blend, POINT), 20.0);

    graph.settings_mut::<Const>(control).expect("control").value = 0.0;
    assert_eq!(eval(&graph, blend, POINT), 15.0);

    // Beyond the control range the weight clamps.
    graph.settings_mut::<Const>(control).expect("control").value = 7.0;
    assert_eq!(eval(&graph, blend, POINT), 20.0);
}

#[test]
fn select_without_falloff_switches_at_bounds() {
    let mut graph = NoiseGraph::new();
    let outside = constant(&mut graph, 1.0);
    let inside = constant(&mut graph, 2.0);
    let control = constant(&mut graph, 0.0);
    let select = graph
        .add_with_sources(Select::default(), &[outside, inside, control])
        .expect("wire select");

    for (c, expected) in [(-1.5, 1.0), (-1.0, 2.0), (0.0, 2.0), (1.0, 2.0), (1.01, 1.0)] {
        graph.settings_mut::<Const>(control).expect("control").value = c;
        assert_eq!(eval(&graph, select, POINT), expected, "control {c}");
    }
}

#[test]
fn select_falloff_blends_near_bounds() {
    let mut graph = NoiseGraph::new();
    let outside = constant(&mut graph, 0.0);
    let inside = constant(&mut graph, 1.0);
    let control = constant(&mut graph, 0.0);
    let select = graph
        .add_with_sources(Select::default(), &[outside, inside, control])
        .expect("wire select");
    graph
        .settings_mut::<Select>(select)
        .expect("select settings")
        .set_edge_falloff(0.5)
        .expect("falloff");

    let at = |graph: &mut NoiseGraph, c: f64| {
        graph.settings_mut::<Const>(control).expect("control").value = c;
        eval(graph, select, POINT)
    };

    assert_eq!(at(&mut graph, -2.0), 0.0);
    assert_eq!(at(&mut graph, 0.0), 1.0);
    assert_eq!(at(&mut graph, 2.0), 0.0);
    // Exactly on a bound the S-curve is at its midpoint.
    assert!((at(&mut graph, -1.0) - 0.5).abs() < 1e-12);
    assert!((at(&mut graph, 1.0) - 0.5).abs() < 1e-12);
    let rising = at(&mut graph, -0.75);
    assert!(rising > 0.5 && rising < 1.0);
}

#[test]
fn curve_interpolates_and_clamps() {
    let mut graph = NoiseGraph::new();
    let control = constant(&mut graph, 0.5);
    let mut curve = Curve::default();
    for (input, output) in [(-1.0, -1.0), (0.0, 0.0), (1.0, 1.0), (2.0, 2.0)] {
        curve.add_control_point(input, output).expect("distinct inputs");
    }
    let curve = graph
        .add_with_sources(curve, &[control])
        .expect("wire curve");

    // Collinear points reproduce the line between them.
    assert!((eval(&graph, curve, POINT) - 0.5).abs() < 1e-12);

    graph.settings_mut::<Const>(control).expect("control").value = 5.0;
    assert_eq!(eval(&graph, curve, POINT), 2.0);

    graph.settings_mut::<Const>(control).expect("control").value = -3.0;
    assert_eq!(eval(&graph, curve, POINT), -1.0);
}

#[test]
fn curve_needs_four_points() {
    let mut graph = NoiseGraph::new();
    let control = constant(&mut graph, 0.0);
    let mut curve = Curve::default();
    for input in [0.0, 1.0, 2.0] {
        curve.add_control_point(input, input).expect("distinct inputs");
    }
    let curve = graph
        .add_with_sources(curve, &[control])
        .expect("wire curve");

    let err = graph.evaluate(curve, 0.0, 0.0, 0.0).expect_err("too few points");
    assert!(matches!(err, NoiseError::InvalidConfiguration { .. }));
}

#[test]
fn scale_point_scales_input() {
    let mut graph = NoiseGraph::new();
    let perlin = graph.add(Perlin::default());
    let scaled = graph
        .add_with_sources(
            ScalePoint {
                x_scale: 2.0,
                y_scale: 0.5,
                z_scale: -1.0,
            },
            &[perlin],
        )
        .expect("wire scale point");

    let (x, y, z) = POINT;
    assert_eq!(
        eval(&graph, scaled, POINT),
        eval(&graph, perlin, (x * 2.0, y * 0.5, -z))
    );
}

#[test]
fn rotate_point_quarter_turn() {
    let mut graph = NoiseGraph::new();
    let perlin = graph.add(Perlin::default());
    let rotated = graph
        .add_with_sources(RotatePoint::new(0.0, 0.0, 90.0), &[perlin])
        .expect("wire rotate point");

    // A quarter turn around z maps (x, y, z) to (y, -x, z).
    let (x, y, z) = POINT;
    let expected = eval(&graph, perlin, (y, -x, z));
    assert!((eval(&graph, rotated, POINT) - expected).abs() < 1e-9);

    let identity = graph
        .add_with_sources(RotatePoint::default(), &[perlin])
        .expect("wire identity rotation");
    assert_eq!(eval(&graph, identity, POINT), eval(&graph, perlin, POINT));
}

#[test]
fn missing_source_surfaces_through_consumers() {
    let mut graph = NoiseGraph::new();
    let inner = graph.add(Invert);
    let outer = graph.add_with_sources(ScaleBias::default(), &[inner]).expect("wire");
    assert_eq!(
        graph.evaluate(outer, 0.0, 0.0, 0.0),
        Err(NoiseError::MissingSource { node: inner, index: 0 })
    );
}

#[test]
fn select_with_identical_sources_is_transparent() {
    let mut graph = NoiseGraph::new();
    let perlin = graph.add(Perlin::default());
    let control = graph.add(Voronoi::default());
    let select = graph
        .add_with_sources(Select::default(), &[perlin, perlin, control])
        .expect("wire select");
    graph
        .settings_mut::<Select>(select)
        .expect("select settings")
        .set_edge_falloff(0.4)
        .expect("falloff");

    for i in 0..64 {
        let p = (f64::from(i) * 0.31, 0.2, f64::from(i) * -0.47);
        let expected = eval(&graph, perlin, p);
        assert!((eval(&graph, select, p) - expected).abs() < 1e-12);
    }
}
