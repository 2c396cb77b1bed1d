/// Memory figures from the most recent sample
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryInfo {
    pub used_mem: u64,  // bytes
    pub total_mem: u64, // bytes
}

impl MemoryInfo {
    /// Memory usage as percentage
    pub fn mem_percent(&self) -> f64 {
        if self.total_mem == 0 {
            0.0
        } else {
            (self.used_mem as f64 / self.total_mem as f64) * 100.0
        }
    }

    /// Absolute usage line shown under the RAM bar, e.g. "1.5 / 16.0 GiB"
    pub fn absolute_label(&self) -> String {
        format!(
            "{:.1} / {:.1} GiB",
            to_gib(self.used_mem),
            to_gib(self.total_mem)
        )
    }
}

/// Convert a byte count to GiB
pub fn to_gib(bytes: u64) -> f64 {
    const GIB: u64 = 1024 * 1024 * 1024;
    bytes as f64 / GIB as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_label_rounds_to_one_decimal() {
        let mem = MemoryInfo {
            used_mem: 1_610_612_736,
            total_mem: 17_179_869_184,
        };
        assert_eq!(mem.absolute_label(), "1.5 / 16.0 GiB");
    }

    #[test]
    fn percent_guards_zero_total() {
        let mem = MemoryInfo::default();
        assert_eq!(mem.mem_percent(), 0.0);
    }

    #[test]
    fn percent_is_used_over_total() {
        let mem = MemoryInfo {
            used_mem: 4,
            total_mem: 16,
        };
        assert_eq!(mem.mem_percent(), 25.0);
    }

    #[test]
    fn to_gib_is_binary_gigabytes() {
        assert_eq!(to_gib(1024 * 1024 * 1024), 1.0);
        assert_eq!(to_gib(0), 0.0);
    }
}
