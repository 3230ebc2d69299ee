use std::f64::consts::PI;

use rand::Rng;

use super::error::{ensure_finite, Result, SignalError};
use super::model::{HarmonicParams, NoiseParams, SignalTrace, TimeAxis, SAMPLE_COUNT};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Build the time axis and the (optionally noisy) harmonic trace.
///
/// The harmonic parameters are not clamped to the slider ranges; any finite
/// value is accepted. Noise is drawn fresh from `rng` on every call when
/// enabled, and nothing is drawn when it is disabled.
pub fn synthesize<R: Rng + ?Sized>(
    harmonic_params: &HarmonicParams,
    noise: &NoiseParams,
    rng: &mut R,
) -> Result<(TimeAxis, SignalTrace)> {
    validate_harmonic(harmonic_params)?;
    validate_noise(noise)?;

    let t = time_axis(SAMPLE_COUNT);
    let mut trace = harmonic(harmonic_params, &t);
    // finite inputs can still overflow, e.g. 2π·frequency
    ensure_finite_trace("harmonic", &trace)?;

    if noise.enabled {
        let n = gaussian_noise(noise, trace.len(), rng);
        for (y, e) in trace.iter_mut().zip(n) {
            *y += e;
        }
        ensure_finite_trace("noise", &trace)?;
    }

    Ok((t, trace))
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

/// `n` evenly spaced samples over [0, 1], endpoints included.
pub fn time_axis(n: usize) -> TimeAxis {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (n - 1) as f64;
            (0..n).map(|i| i as f64 / last).collect()
        }
    }
}

/// `amplitude * sin(2π·frequency·t + phase)` at each time sample.
pub fn harmonic(params: &HarmonicParams, t: &[f64]) -> SignalTrace {
    t.iter()
        .map(|&ti| params.amplitude * (2.0 * PI * params.frequency * ti + params.phase).sin())
        .collect()
}

/// `n` independent normal samples with the noise mean and `spread` as the
/// standard deviation.
pub fn gaussian_noise<R: Rng + ?Sized>(noise: &NoiseParams, n: usize, rng: &mut R) -> Vec<f64> {
    (0..n).map(|_| gauss(rng, noise.mean, noise.spread)).collect()
}

/// Box-Muller transform over two uniform draws.
fn gauss<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    let u1 = rng.gen::<f64>().max(1e-15);
    let u2 = rng.gen::<f64>();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    mean + std_dev * z
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_harmonic(params: &HarmonicParams) -> Result<()> {
    ensure_finite("amplitude", params.amplitude)?;
    ensure_finite("frequency", params.frequency)?;
    ensure_finite("phase", params.phase)
}

fn ensure_finite_trace(name: &str, trace: &[f64]) -> Result<()> {
    if trace.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(SignalError::non_finite(name))
    }
}

fn validate_noise(noise: &NoiseParams) -> Result<()> {
    ensure_finite("noise mean", noise.mean)?;
    ensure_finite("noise spread", noise.spread)?;
    if noise.spread < 0.0 {
        return Err(SignalError::invalid_parameter(format!(
            "noise spread must be non-negative, got {}",
            noise.spread
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn quiet() -> NoiseParams {
        NoiseParams {
            enabled: false,
            ..NoiseParams::default()
        }
    }

    #[test]
    fn test_time_axis_spans_unit_interval() {
        let t = time_axis(SAMPLE_COUNT);
        assert_eq!(t.len(), 1000);
        assert_eq!(t[0], 0.0);
        assert_eq!(t[999], 1.0);
        let step = 1.0 / 999.0;
        for w in t.windows(2) {
            assert!((w[1] - w[0] - step).abs() < 1e-12);
        }
    }

    #[test]
    fn test_time_axis_small_sizes() {
        assert!(time_axis(0).is_empty());
        assert_eq!(time_axis(1), vec![0.0]);
        assert_eq!(time_axis(3), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_noise_disabled_is_exact_harmonic() {
        let params = HarmonicParams {
            amplitude: 2.5,
            frequency: 3.7,
            phase: -1.2,
        };
        let mut rng = StdRng::seed_from_u64(7);
        let (t, y) = synthesize(&params, &quiet(), &mut rng).unwrap();

        assert_eq!(t.len(), SAMPLE_COUNT);
        assert_eq!(y.len(), SAMPLE_COUNT);
        for i in 0..SAMPLE_COUNT {
            let expected = 2.5 * (2.0 * PI * 3.7 * t[i] - 1.2).sin();
            assert_eq!(y[i], expected);
        }
    }

    #[test]
    fn test_noise_disabled_is_bit_identical_across_calls() {
        let params = HarmonicParams::default();
        let mut rng = StdRng::seed_from_u64(1);
        let first = synthesize(&params, &quiet(), &mut rng).unwrap();
        let second = synthesize(&params, &quiet(), &mut rng).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_noise_disabled_draws_nothing() {
        let mut a = StdRng::seed_from_u64(3);
        let mut b = StdRng::seed_from_u64(3);
        synthesize(&HarmonicParams::default(), &quiet(), &mut a).unwrap();
        assert_eq!(a.gen::<u64>(), b.gen::<u64>());
    }

    #[test]
    fn test_noise_is_redrawn_each_call() {
        let params = HarmonicParams::default();
        let noise = NoiseParams::default();
        let mut rng = StdRng::seed_from_u64(11);
        let (t1, y1) = synthesize(&params, &noise, &mut rng).unwrap();
        let (t2, y2) = synthesize(&params, &noise, &mut rng).unwrap();

        assert_eq!(t1, t2);
        assert_ne!(y1, y2);
    }

    #[test]
    fn test_same_seed_reproduces_noise() {
        let params = HarmonicParams::default();
        let noise = NoiseParams::default();
        let a = synthesize(&params, &noise, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = synthesize(&params, &noise, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_noise_statistics_follow_mean_and_spread() {
        let noise = NoiseParams {
            mean: 0.5,
            spread: 0.1,
            enabled: true,
        };
        let samples = gaussian_noise(&noise, 10_000, &mut StdRng::seed_from_u64(5));
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

        assert!((mean - 0.5).abs() < 0.01, "mean = {mean}");
        // spread is the standard deviation, not the variance
        assert!((var.sqrt() - 0.1).abs() < 0.01, "std = {}", var.sqrt());
    }

    #[test]
    fn test_zero_spread_adds_only_the_mean() {
        let params = HarmonicParams::default();
        let noise = NoiseParams {
            mean: 0.3,
            spread: 0.0,
            enabled: true,
        };
        let (t, y) = synthesize(&params, &noise, &mut StdRng::seed_from_u64(2)).unwrap();
        let clean = harmonic(&params, &t);
        for (yi, ci) in y.iter().zip(&clean) {
            assert!((yi - (ci + 0.3)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_out_of_range_harmonic_is_accepted() {
        let params = HarmonicParams {
            amplitude: 100.0,
            frequency: -3.0,
            phase: 42.0,
        };
        let result = synthesize(&params, &quiet(), &mut StdRng::seed_from_u64(0));
        assert!(result.is_ok());
    }

    #[test]
    fn test_negative_spread_rejected() {
        let noise = NoiseParams {
            spread: -0.1,
            ..NoiseParams::default()
        };
        let err = synthesize(&HarmonicParams::default(), &noise, &mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(err, SignalError::InvalidParameter { .. }));
    }

    #[test]
    fn test_overflowing_harmonic_rejected() {
        let params = HarmonicParams {
            amplitude: 1.0,
            frequency: 1e308,
            phase: 0.0,
        };
        let err = synthesize(&params, &quiet(), &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert_eq!(err, SignalError::non_finite("harmonic"));
    }

    #[test]
    fn test_overflowing_noise_rejected() {
        let noise = NoiseParams {
            mean: 0.0,
            spread: f64::MAX,
            enabled: true,
        };
        let err = synthesize(&HarmonicParams::default(), &noise, &mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert_eq!(err, SignalError::non_finite("noise"));
    }

    #[test]
    fn test_non_finite_parameters_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let bad = HarmonicParams {
            frequency: f64::NAN,
            ..HarmonicParams::default()
        };
        assert_eq!(
            synthesize(&bad, &quiet(), &mut rng).unwrap_err(),
            SignalError::non_finite("frequency")
        );

        let bad_noise = NoiseParams {
            mean: f64::INFINITY,
            ..NoiseParams::default()
        };
        assert_eq!(
            synthesize(&HarmonicParams::default(), &bad_noise, &mut rng).unwrap_err(),
            SignalError::non_finite("noise mean")
        );
    }
}
