//! Dense sweeps over the coherent kernels.
//!
//! Walks straight lines through many lattice cells in small steps and checks
//! that every sample stays in `[0, 1]` and that neighbouring samples never
//! differ by more than the kernel's slope allows. A skipped lattice point or a
//! bad octant shows up as a jump far above that bound.

use terrace_utils::noise::{gradient_coherent_noise_3d, simplex_style_gradient_coherent_noise_3d};
use terrace_utils::{LatticeOrientation, NoiseQuality, SimplexQuality};

const STEP: f64 = 1e-3;

/// Largest change allowed between samples `STEP` apart.
const MAX_JUMP: f64 = 5.0 * STEP;

/// Largest value seen, smallest value seen and largest jump between neighbours.
struct Sweep {
    min: f64,
    max: f64,
    max_jump: f64,
}

/// Sample `kernel` along six lines parallel to x, each with its own seed.
fn sweep(kernel: impl Fn(f64, f64, f64, i32) -> f64) -> Sweep {
    let mut result = Sweep {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
        max_jump: 0.0,
    };
    for line in 0..6 {
        let y = 0.37 + f64::from(line) * 0.61;
        let z = -0.53 + f64::from(line) * 0.29;
        let seed = 2 * line + 1;

        let mut previous: Option<f64> = None;
        for i in -3000..=3000 {
            let v = kernel(f64::from(i) * STEP, y, z, seed);
            result.min = result.min.min(v);
            result.max = result.max.max(v);
            if let Some(p) = previous {
                result.max_jump = result.max_jump.max((v - p).abs());
            }
            previous = Some(v);
        }
    }
    result
}

fn assert_coherent(label: &str, sweep: &Sweep) {
    assert!(
        sweep.min >= 0.0 && sweep.max <= 1.0,
        "{label}: range [{}, {}] leaves [0, 1]",
        sweep.min,
        sweep.max
    );
    assert!(
        sweep.max_jump < MAX_JUMP,
        "{label}: neighbouring samples differ by {}",
        sweep.max_jump
    );
}

#[test]
fn gradient_noise_is_bounded_and_continuous() {
    for quality in [NoiseQuality::Fast, NoiseQuality::Standard, NoiseQuality::Best] {
        let result = sweep(|x, y, z, seed| gradient_coherent_noise_3d(x, y, z, seed, quality));
        assert_coherent(&format!("gradient {quality:?}"), &result);
    }
}

#[test]
fn simplex_style_noise_is_bounded_and_continuous() {
    for quality in [SimplexQuality::Standard, SimplexQuality::Smooth] {
        for orientation in [
            LatticeOrientation::Classic,
            LatticeOrientation::XyBeforeZ,
            LatticeOrientation::XzBeforeY,
        ] {
            let result = sweep(|x, y, z, seed| {
                simplex_style_gradient_coherent_noise_3d(x, y, z, seed, orientation, quality)
            });
            assert_coherent(&format!("simplex {quality:?} {orientation:?}"), &result);
        }
    }
}

#[test]
fn simplex_style_noise_uses_its_range() {
    // The normalizers should not squash the output into a narrow band.
    for quality in [SimplexQuality::Standard, SimplexQuality::Smooth] {
        let result = sweep(|x, y, z, seed| {
            simplex_style_gradient_coherent_noise_3d(
                x,
                y,
                z,
                seed,
                LatticeOrientation::XzBeforeY,
                quality,
            )
        });
        let span = result.max - result.min;
        assert!(span > 0.6, "{quality:?} spans only {span}");
    }
}

#[test]
fn gradient_noise_is_continuous_at_cell_edges() {
    for quality in [NoiseQuality::Standard, NoiseQuality::Best] {
        for edge in [-3.0, -1.0, 0.0, 1.0, 4.0] {
            let below = gradient_coherent_noise_3d(edge - 1e-9, 0.37, -0.61, 0, quality);
            let above = gradient_coherent_noise_3d(edge + 1e-9, 0.37, -0.61, 0, quality);
            assert!((below - above).abs() < 1e-6, "{quality:?} jumps at x = {edge}");
        }
    }
}
