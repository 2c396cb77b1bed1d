use std::collections::VecDeque;

use crate::error::MonitorError;
use crate::system::collector::MetricsSource;
use crate::system::memory::MemoryInfo;

/// Main application state: the rolling CPU/RAM histories plus the latest
/// absolute memory figures.
pub struct App {
    pub should_quit: bool,
    pub paused: bool, // z key: freeze sampling, keep redrawing

    pub cpu_history: VecDeque<f64>,
    pub ram_history: VecDeque<f64>,
    pub memory: MemoryInfo,

    history_size: usize,
    bar_width: usize,

    /// Completed updates since start
    pub tick: u64,
}

impl App {
    pub fn new(history_size: usize, bar_width: usize) -> Self {
        Self {
            should_quit: false,
            paused: false,
            cpu_history: VecDeque::with_capacity(history_size),
            ram_history: VecDeque::with_capacity(history_size),
            memory: MemoryInfo::default(),
            history_size,
            bar_width,
            tick: 0,
        }
    }

    pub fn history_size(&self) -> usize {
        self.history_size
    }

    pub fn bar_width(&self) -> usize {
        self.bar_width
    }

    /// Pull one sample and fold it into the state.
    ///
    /// Both histories are appended in the same pass so their lengths stay
    /// equal and every index pair belongs to the same tick. A failing
    /// source leaves the state exactly as it was.
    pub fn update(&mut self, source: &mut dyn MetricsSource) -> Result<(f64, f64), MonitorError> {
        let sample = source.sample()?;

        push_bounded(&mut self.cpu_history, sample.cpu_percent, self.history_size);
        push_bounded(&mut self.ram_history, sample.ram_percent, self.history_size);
        self.memory = MemoryInfo {
            used_mem: sample.ram_used_bytes,
            total_mem: sample.ram_total_bytes,
        };
        self.tick += 1;

        Ok((sample.cpu_percent, sample.ram_percent))
    }
}

/// Append to a bounded buffer, evicting the oldest entry when full.
fn push_bounded(buf: &mut VecDeque<f64>, value: f64, capacity: usize) {
    if buf.len() >= capacity {
        buf.pop_front();
    }
    buf.push_back(value);
}
