use std::fmt;

/// Tag carried by a page request so late responses can be recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(pub u64);

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues monotonically increasing generations; only the latest one is current.
#[derive(Debug, Clone, Default)]
pub struct GenerationFence {
    latest: Option<Generation>,
}

impl GenerationFence {
    pub fn issue(&mut self) -> Generation {
        let next = self
            .latest
            .map_or(Generation(1), |Generation(n)| Generation(n + 1));
        self.latest = Some(next);
        next
    }

    pub fn latest(&self) -> Option<Generation> {
        self.latest
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.latest == Some(generation)
    }
}
