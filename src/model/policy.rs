#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPolicy {
    /// Labels longer than `elide_at + 1` characters are cut to `elide_at`.
    pub elide_at: usize,
    pub range_pad_low: f64,
    pub range_pad_high: f64,
    pub bar_height_px: usize,
}

impl DisplayPolicy {
    pub fn default_v1() -> Self {
        Self {
            elide_at: 15,
            range_pad_low: 0.4,
            range_pad_high: 0.5,
            bar_height_px: 15,
        }
    }

    pub fn with_elide_at(mut self, elide_at: usize) -> Self {
        self.elide_at = elide_at;
        self
    }
}

impl Default for DisplayPolicy {
    fn default() -> Self {
        Self::default_v1()
    }
}
