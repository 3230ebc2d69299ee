use super::error::{Result, SignalError};
use super::model::SignalTrace;

/// Centered moving average with "same"-length output.
///
/// Equivalent to convolving with a uniform kernel of height `1/window_size`
/// and keeping the centre `signal.len()` samples. For output index `i` the
/// window starts at `i - window_size / 2`; samples outside the signal count
/// as zero, so edge values are pulled towards zero.
///
/// # Errors
/// `InvalidParameter` when `window_size` is 0 or exceeds the signal length,
/// `NonFinite` when the signal contains NaN or infinities.
pub fn moving_average(signal: &[f64], window_size: usize) -> Result<SignalTrace> {
    let n = signal.len();
    if window_size == 0 {
        return Err(SignalError::invalid_parameter(
            "window size must be at least 1",
        ));
    }
    if window_size > n {
        return Err(SignalError::invalid_parameter(format!(
            "window size {window_size} exceeds signal length {n}"
        )));
    }
    if let Some(i) = signal.iter().position(|v| !v.is_finite()) {
        return Err(SignalError::non_finite(format!("signal[{i}]")));
    }

    let half = window_size / 2;
    let scale = window_size as f64;

    let out = (0..n)
        .map(|i| {
            // window is [i - half, i - half + window_size), clipped to the signal
            let lo = i.saturating_sub(half);
            let hi = (i + window_size - half).min(n);
            signal[lo..hi].iter().sum::<f64>() / scale
        })
        .collect();

    Ok(out)
}
