use rand::Rng;

use super::error::Result;
use super::filter::moving_average;
use super::model::{PipelineOutput, SignalParams};
use super::synth::synthesize;

/// Synthesize the raw trace and smooth it. This is the only call the
/// dashboard makes into the signal core.
pub fn run<R: Rng + ?Sized>(params: &SignalParams, rng: &mut R) -> Result<PipelineOutput> {
    let (time, raw) = synthesize(&params.harmonic, &params.noise, rng)?;
    let filtered = moving_average(&raw, params.filter.window_size)?;

    log::debug!(
        "computed {} samples (noise {}, window {})",
        time.len(),
        if params.noise.enabled { "on" } else { "off" },
        params.filter.window_size
    );

    Ok(PipelineOutput {
        time,
        raw,
        filtered,
    })
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::signal::error::SignalError;
    use crate::signal::model::{FilterParams, HarmonicParams, NoiseParams, SAMPLE_COUNT};

    fn unit_sine(window_size: usize) -> SignalParams {
        SignalParams {
            harmonic: HarmonicParams {
                amplitude: 1.0,
                frequency: 1.0,
                phase: 0.0,
            },
            noise: NoiseParams {
                enabled: false,
                ..NoiseParams::default()
            },
            filter: FilterParams { window_size },
        }
    }

    #[test]
    fn test_unit_sine_end_to_end() {
        let out = run(&unit_sine(1), &mut StdRng::seed_from_u64(0)).unwrap();

        assert_eq!(out.len(), SAMPLE_COUNT);
        assert_eq!(out.raw.len(), SAMPLE_COUNT);
        assert_eq!(out.filtered.len(), SAMPLE_COUNT);
        for i in 0..SAMPLE_COUNT {
            assert_eq!(out.filtered[i], (2.0 * PI * out.time[i]).sin());
        }

        // reference points
        assert_eq!(out.filtered[0], 0.0);
        assert!((out.filtered[250] - 1.0).abs() < 1e-4); // t ≈ 0.25
        assert!((out.filtered[749] + 1.0).abs() < 1e-4); // t ≈ 0.75
        assert!(out.filtered[999].abs() < 1e-12); // t = 1
    }

    #[test]
    fn test_default_params_shapes() {
        let out = run(&SignalParams::default(), &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(out.time.len(), out.raw.len());
        assert_eq!(out.raw.len(), out.filtered.len());
        assert_ne!(out.raw, out.filtered);
    }

    #[test]
    fn test_filter_smooths_noise() {
        let params = SignalParams {
            harmonic: HarmonicParams {
                amplitude: 0.0,
                ..HarmonicParams::default()
            },
            noise: NoiseParams {
                mean: 0.0,
                spread: 1.0,
                enabled: true,
            },
            filter: FilterParams { window_size: 20 },
        };
        let out = run(&params, &mut StdRng::seed_from_u64(8)).unwrap();
        let energy = |xs: &[f64]| xs.iter().map(|x| x * x).sum::<f64>();
        assert!(energy(&out.filtered) < energy(&out.raw) / 4.0);
    }

    #[test]
    fn test_errors_propagate() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            run(&unit_sine(0), &mut rng),
            Err(SignalError::InvalidParameter { .. })
        ));
        assert!(run(&unit_sine(SAMPLE_COUNT + 1), &mut rng).is_err());
        assert!(run(&unit_sine(SAMPLE_COUNT), &mut rng).is_ok());
    }
}
