//! Scroll traces
//!
//! A trace is a list of timestamped scroll offsets. Between samples the
//! offset is interpolated linearly; before the first and after the last it
//! holds.
//!
//! ```toml
//! [[sample]]
//! at = 0.0
//! scroll_y = 0.0
//!
//! [[sample]]
//! at = 2.5
//! scroll_y = 3100.0
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use vantage_core::lerp;

/// One recorded scroll position
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct TraceSample {
    /// Seconds since the start of the trace
    pub at: f32,
    pub scroll_y: f32,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ScrollTrace {
    #[serde(rename = "sample", default)]
    samples: Vec<TraceSample>,
}

impl ScrollTrace {
    pub fn new(samples: Vec<TraceSample>) -> Result<Self> {
        if samples.is_empty() {
            anyhow::bail!("Scroll trace has no samples");
        }
        for (index, sample) in samples.iter().enumerate() {
            if !sample.at.is_finite() || !sample.scroll_y.is_finite() {
                anyhow::bail!("Sample {} is not finite", index);
            }
            if index > 0 && sample.at < samples[index - 1].at {
                anyhow::bail!(
                    "Sample {} at {}s comes before the previous sample",
                    index,
                    sample.at
                );
            }
        }
        Ok(Self { samples })
    }

    /// Scroll from the top to `max_scroll` at constant speed over `duration`
    pub fn sweep(max_scroll: f32, duration: f32) -> Self {
        Self {
            samples: vec![
                TraceSample {
                    at: 0.0,
                    scroll_y: 0.0,
                },
                TraceSample {
                    at: duration.max(0.0),
                    scroll_y: max_scroll,
                },
            ],
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let trace: ScrollTrace = toml::from_str(content)?;
        Self::new(trace.samples)
    }

    pub fn samples(&self) -> &[TraceSample] {
        &self.samples
    }

    /// Time of the last sample
    pub fn duration(&self) -> f32 {
        self.samples.last().map(|s| s.at).unwrap_or(0.0)
    }

    /// Scroll offset at `time` seconds
    pub fn scroll_at(&self, time: f32) -> f32 {
        let (Some(first), Some(last)) = (self.samples.first(), self.samples.last()) else {
            return 0.0;
        };
        if time <= first.at {
            return first.scroll_y;
        }
        if time >= last.at {
            return last.scroll_y;
        }

        for pair in self.samples.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            if time < to.at {
                let span = to.at - from.at;
                if span <= 0.0 {
                    return to.scroll_y;
                }
                return lerp(from.scroll_y, to.scroll_y, (time - from.at) / span);
            }
        }
        last.scroll_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_interpolate() {
        let trace = ScrollTrace::parse(
            r#"
            [[sample]]
            at = 0.0
            scroll_y = 0.0

            [[sample]]
            at = 1.0
            scroll_y = 1000.0

            [[sample]]
            at = 3.0
            scroll_y = 0.0
            "#,
        )
        .unwrap();

        assert_eq!(trace.samples().len(), 3);
        assert_eq!(trace.duration(), 3.0);
        assert_eq!(trace.scroll_at(-1.0), 0.0);
        assert!((trace.scroll_at(0.5) - 500.0).abs() < 1e-3);
        assert!((trace.scroll_at(2.0) - 500.0).abs() < 1e-3);
        assert_eq!(trace.scroll_at(10.0), 0.0);
    }

    #[test]
    fn test_rejects_bad_traces() {
        assert!(ScrollTrace::parse("").is_err());
        assert!(ScrollTrace::parse(
            r#"
            [[sample]]
            at = 2.0
            scroll_y = 0.0

            [[sample]]
            at = 1.0
            scroll_y = 10.0
            "#,
        )
        .is_err());
    }

    #[test]
    fn test_jump_between_equal_timestamps() {
        let trace = ScrollTrace::new(vec![
            TraceSample {
                at: 0.0,
                scroll_y: 0.0,
            },
            TraceSample {
                at: 1.0,
                scroll_y: 100.0,
            },
            TraceSample {
                at: 1.0,
                scroll_y: 900.0,
            },
            TraceSample {
                at: 2.0,
                scroll_y: 900.0,
            },
        ])
        .unwrap();

        assert!((trace.scroll_at(0.5) - 50.0).abs() < 1e-3);
        assert_eq!(trace.scroll_at(1.5), 900.0);
    }

    #[test]
    fn test_sweep() {
        let trace = ScrollTrace::sweep(5200.0, 4.0);
        assert_eq!(trace.scroll_at(0.0), 0.0);
        assert!((trace.scroll_at(2.0) - 2600.0).abs() < 1e-3);
        assert_eq!(trace.scroll_at(4.0), 5200.0);
    }
}
