//! Noise Filtering for Probe Channels
//!
//! Cheap pH and turbidity probes spike; a short sliding median knocks the
//! spikes out without smearing genuine trends.

use crate::frame::WaterReading;
use std::collections::VecDeque;

/// Sliding-window median filter for one channel
pub struct MedianFilter {
    window: VecDeque<f64>,
    capacity: usize,
}

impl MedianFilter {
    /// Create a filter with the given window size (odd, nonzero)
    pub fn new(capacity: usize) -> Self {
        assert!(
            capacity > 0 && capacity % 2 == 1,
            "median window must be odd and nonzero"
        );
        Self {
            window: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a sample and return the filtered value.
    ///
    /// Returns the raw sample until the window fills.
    pub fn filter(&mut self, value: f64) -> f64 {
        if self.window.len() == self.capacity {
            self.window.pop_front();
        }
        self.window.push_back(value);

        if self.window.len() < self.capacity {
            return value;
        }

        let mut sorted: Vec<f64> = self.window.iter().copied().collect();
        sorted.sort_by(|a, b| a.total_cmp(b));
        sorted[self.capacity / 2]
    }

    /// Drop all buffered samples
    pub fn reset(&mut self) {
        self.window.clear();
    }
}

/// Per-channel median filtering for a whole reading
pub struct ProbeFilter {
    ph: MedianFilter,
    tds: MedianFilter,
    turbidity: MedianFilter,
}

impl ProbeFilter {
    /// Create filters with one shared window size
    pub fn new(window: usize) -> Self {
        Self {
            ph: MedianFilter::new(window),
            tds: MedianFilter::new(window),
            turbidity: MedianFilter::new(window),
        }
    }

    /// Filter all three channels of a reading
    pub fn smooth(&mut self, reading: &WaterReading) -> WaterReading {
        WaterReading {
            ph: self.ph.filter(reading.ph),
            tds: self.tds.filter(reading.tds),
            turbidity: self.turbidity.filter(reading.turbidity),
        }
    }

    /// Reset every channel filter
    pub fn reset(&mut self) {
        self.ph.reset();
        self.tds.reset();
        self.turbidity.reset();
    }
}

impl Default for ProbeFilter {
    fn default() -> Self {
        Self::new(5)
    }
}
