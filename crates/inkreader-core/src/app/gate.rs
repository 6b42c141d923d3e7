/// Minimum-interval gate between accepted touch events.
///
/// Touch controllers report one physical tap several times; only the first
/// report inside each interval gets through.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EventGate {
    min_interval_ms: u64,
    last_accepted_ms: Option<u64>,
}

impl EventGate {
    pub const fn new(min_interval_ms: u64) -> Self {
        Self {
            min_interval_ms,
            last_accepted_ms: None,
        }
    }

    pub fn accept(&mut self, now_ms: u64) -> bool {
        if self
            .last_accepted_ms
            .is_some_and(|last| now_ms.saturating_sub(last) < self.min_interval_ms)
        {
            return false;
        }

        self.last_accepted_ms = Some(now_ms);
        true
    }
}
