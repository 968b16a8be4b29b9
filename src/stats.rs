//! Warmup suppression and IQR outlier filtering of timing samples.
//!
//! Quartiles are computed over every sample, warmups included, using the
//! exclusive method: sorted data `x` of length `n` is treated as the
//! `1/(n+1) ..= n/(n+1)` quantiles and each quartile is linearly interpolated
//! between neighbouring order statistics. For `1..=10` this gives
//! `(2.75, 5.5, 8.25)`.
//!
//! With fewer than four samples the quartiles are an approximation: the
//! interpolation index is clamped to the data, so two or three samples
//! extrapolate from the end points, one sample yields that sample for every
//! quartile, and no samples yields no bounds at all.

use core::fmt::{self, Display, Formatter};
use serde::{Deserialize, Serialize};

/// Multiplier applied to the interquartile range to place the fences.
pub const IQR_FENCE: f64 = 1.5;

/// Classification of a single timing sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleState {
    /// One of the leading samples discarded to let caches settle.
    Warmup,

    /// Outside the IQR fences.
    Outlier,

    /// Counted towards the filtered mean.
    Valid,
}

impl Display for SampleState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warmup => write!(f, "warmup"),
            Self::Outlier => write!(f, "outlier"),
            Self::Valid => write!(f, "valid"),
        }
    }
}

/// First, second and third quartiles of a sample set.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
}

impl Quartiles {
    /// Computes quartiles with the exclusive method, or `None` for no samples.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_bench::stats::Quartiles;
    ///
    /// let data: Vec<f64> = (1..=10).map(f64::from).collect();
    /// let q = Quartiles::exclusive(&data).unwrap();
    /// assert_eq!((q.q1, q.median, q.q3), (2.75, 5.5, 8.25));
    /// ```
    pub fn exclusive(samples: &[f64]) -> Option<Self> {
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        match sorted.as_slice() {
            [] => None,
            [only] => Some(Self {
                q1: *only,
                median: *only,
                q3: *only,
            }),
            data => Some(Self {
                q1: Self::cut(data, 1),
                median: Self::cut(data, 2),
                q3: Self::cut(data, 3),
            }),
        }
    }

    /// The `i`-th of the three cut points dividing `sorted` into quarters.
    fn cut(sorted: &[f64], i: usize) -> f64 {
        let len = sorted.len();
        let m = len + 1;
        let j = (i * m / 4).clamp(1, len - 1);
        // Signed: clamping `j` upwards can push the offset below zero.
        let delta = (i * m) as f64 - (j * 4) as f64;
        let (low, high) = (sorted[j - 1], sorted[j]);

        low + (high - low) * delta / 4.0
    }

    /// Interquartile range.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Lower and upper outlier fences.
    pub fn fences(&self) -> (f64, f64) {
        let reach = IQR_FENCE * self.iqr();
        (self.q1 - reach, self.q3 + reach)
    }
}

/// Per-sample states plus the mean of the valid samples.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// One state per sample, in sample order.
    pub states: Vec<SampleState>,

    /// Mean of valid samples, `None` when no sample is valid.
    pub mean: Option<f64>,

    /// Quartiles of the full sample set, `None` when it is empty.
    pub quartiles: Option<Quartiles>,
}

impl Classification {
    /// Number of samples in `state`.
    pub fn count(&self, state: SampleState) -> usize {
        self.states.iter().filter(|&&s| s == state).count()
    }
}

/// Flags samples strictly outside the IQR fences of the whole set.
pub fn outlier_flags(times: &[f64]) -> Vec<bool> {
    flags_within(times, Quartiles::exclusive(times).as_ref())
}

fn flags_within(times: &[f64], quartiles: Option<&Quartiles>) -> Vec<bool> {
    quartiles.map_or_else(
        || vec![false; times.len()],
        |quartiles| {
            let (lower, upper) = quartiles.fences();
            times.iter().map(|&t| t < lower || t > upper).collect()
        },
    )
}

/// Classifies `times` as warmup, outlier or valid and averages the valid ones.
///
/// The first `warmups` samples are always warmups, even when they would also be
/// outliers. They still take part in the quartile computation.
///
/// # Examples
///
/// ```
/// use word_bench::stats::{SampleState, classify};
///
/// let mut times = vec![1.0; 9];
/// times.push(100.0);
///
/// let classification = classify(&times, 0);
/// assert_eq!(classification.states[9], SampleState::Outlier);
/// assert_eq!(classification.mean, Some(1.0));
/// ```
pub fn classify(times: &[f64], warmups: usize) -> Classification {
    let quartiles = Quartiles::exclusive(times);
    let states: Vec<SampleState> = flags_within(times, quartiles.as_ref())
        .into_iter()
        .enumerate()
        .map(|(i, is_outlier)| {
            if i < warmups {
                SampleState::Warmup
            } else if is_outlier {
                SampleState::Outlier
            } else {
                SampleState::Valid
            }
        })
        .collect();

    let valid: Vec<f64> = times
        .iter()
        .zip(&states)
        .filter(|&(_, &state)| state == SampleState::Valid)
        .map(|(&t, _)| t)
        .collect();

    let mean = (!valid.is_empty()).then(|| valid.iter().sum::<f64>() / valid.len() as f64);

    Classification {
        states,
        mean,
        quartiles,
    }
}
