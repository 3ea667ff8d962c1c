//! Histogram bucket boundaries for colour and size scales.
//!
//! Linear buckets round the width up to a whole number, so a range can be
//! covered in fewer than the requested number of buckets. Exponential buckets
//! rescale `e^0 .. e^(steps-1)` onto the range by shifting first and scaling
//! second; `min` is only reproduced exactly when it is zero.

use fedispace_core::error::{ErrorCode, FedispaceError};
use serde::{Deserialize, Serialize};
use std::f64::consts::E;
use thiserror::Error;

/// `e^709` is the largest integral power of e that is finite as an `f64`.
pub const MAX_EXPONENTIAL_STEPS: usize = 710;

#[derive(Debug, Error, PartialEq)]
pub enum BucketError {
    #[error("bucket steps must be at least 1")]
    ZeroSteps,
    #[error("invalid bucket range: min {min} must be finite and less than max {max}")]
    InvalidRange { min: f64, max: f64 },
    #[error("exponential buckets support at most {max} steps, got {steps}")]
    TooManySteps { steps: usize, max: usize },
}

impl FedispaceError for BucketError {
    fn error_code(&self) -> ErrorCode {
        ErrorCode::InvalidArgument
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketSpec {
    pub min: f64,
    pub max: f64,
    pub steps: usize,
    pub exponential: bool,
}

impl BucketSpec {
    pub fn new(min: f64, max: f64, steps: usize, exponential: bool) -> Result<Self, BucketError> {
        let spec = Self {
            min,
            max,
            steps,
            exponential,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> Result<(), BucketError> {
        if self.steps == 0 {
            return Err(BucketError::ZeroSteps);
        }
        let range = self.max - self.min;
        if !range.is_finite() || range <= 0.0 {
            return Err(BucketError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.exponential && self.steps > MAX_EXPONENTIAL_STEPS {
            return Err(BucketError::TooManySteps {
                steps: self.steps,
                max: MAX_EXPONENTIAL_STEPS,
            });
        }
        Ok(())
    }

    /// Bucket boundaries in ascending order, at most `steps` of them.
    pub fn buckets(&self) -> Result<Vec<f64>, BucketError> {
        let generated = self.validate().and_then(|()| {
            if self.exponential {
                exponential_buckets(self.min, self.max, self.steps)
            } else {
                Ok(linear_buckets(self.min, self.max, self.steps))
            }
        });
        let buckets = match generated {
            Ok(buckets) => buckets,
            Err(err) => {
                tracing::warn!(spec = ?self, %err, "rejected bucket spec");
                return Err(err);
            }
        };
        tracing::debug!(
            requested = self.steps,
            produced = buckets.len(),
            exponential = self.exponential,
            "generated buckets"
        );
        Ok(buckets)
    }
}

pub fn generate_buckets(
    min: f64,
    max: f64,
    steps: usize,
    exponential: bool,
) -> Result<Vec<f64>, BucketError> {
    BucketSpec {
        min,
        max,
        steps,
        exponential,
    }
    .buckets()
}

/// Index of the bucket `value` falls into: the last boundary `<= value`.
/// `None` when the value lies below the first boundary.
pub fn bucket_index(buckets: &[f64], value: f64) -> Option<usize> {
    let after = buckets.partition_point(|edge| *edge <= value);
    after.checked_sub(1)
}

fn linear_buckets(min: f64, max: f64, steps: usize) -> Vec<f64> {
    let range = max - min;
    let width = (range / steps as f64).ceil();
    let count = ((range / width).ceil() as usize).min(steps);

    let mut buckets = Vec::with_capacity(count);
    let mut edge = min;
    while buckets.len() < count && edge < max {
        buckets.push(edge);
        edge += width;
    }
    buckets
}

fn exponential_buckets(min: f64, max: f64, steps: usize) -> Result<Vec<f64>, BucketError> {
    // A single point has no log range to rescale.
    if steps == 1 {
        return Ok(vec![min]);
    }

    let points: Vec<f64> = (0..steps).map(|i| E.powf(i as f64)).collect();
    let first = points[0];
    let last = points[steps - 1];

    let scale = (max - min) / (last - first);
    let shift = min - first;
    let buckets: Vec<f64> = points.into_iter().map(|p| (p + shift) * scale).collect();

    // Ranges too narrow (or offsets too large) for f64 collapse adjacent boundaries.
    if !scale.is_normal() || buckets.windows(2).any(|w| !(w[0] < w[1])) {
        return Err(BucketError::InvalidRange { min, max });
    }
    Ok(buckets)
}
