//! Tagged series result carrying its provenance.

use serde::{Deserialize, Serialize};

use crate::{AnemoError, WeatherSample};

/// Where a series came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provenance {
    /// Values were returned by the remote provider.
    Live,
    /// Values were generated locally as a placeholder.
    Synthetic,
}

/// Why the synthetic path was taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FallbackReason {
    /// Remote fetching is switched off in configuration.
    Disabled,
    /// The remote fetch failed with this error.
    Failed(AnemoError),
}

/// Ordered, bounded wind series tagged with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WindSeries {
    /// Normalized provider data.
    Live(Vec<WeatherSample>),
    /// Generated placeholder data.
    Synthetic {
        /// Generated samples, same length and cadence as a full live series.
        samples: Vec<WeatherSample>,
        /// Reason the live path was not used.
        reason: FallbackReason,
    },
}

impl WindSeries {
    /// Provenance of this series.
    #[must_use]
    pub const fn provenance(&self) -> Provenance {
        match self {
            Self::Live(_) => Provenance::Live,
            Self::Synthetic { .. } => Provenance::Synthetic,
        }
    }

    /// True for provider data.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }

    /// Borrow the samples regardless of provenance.
    #[must_use]
    pub fn samples(&self) -> &[WeatherSample] {
        match self {
            Self::Live(samples) | Self::Synthetic { samples, .. } => samples,
        }
    }

    /// Consume the series and return its samples.
    #[must_use]
    pub fn into_samples(self) -> Vec<WeatherSample> {
        match self {
            Self::Live(samples) | Self::Synthetic { samples, .. } => samples,
        }
    }

    /// The fallback reason, if this series is synthetic.
    #[must_use]
    pub const fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            Self::Live(_) => None,
            Self::Synthetic { reason, .. } => Some(reason),
        }
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples().len()
    }

    /// True when the series holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples().is_empty()
    }
}
