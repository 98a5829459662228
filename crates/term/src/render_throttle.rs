/// Skips redraws when nothing visible changed.
///
/// A frame is rendered whenever its fingerprint changes, and otherwise at
/// most once per `idle_interval_ms` (so a resized or scribbled terminal
/// recovers without input).
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    idle_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RenderThrottle {
    pub fn new(idle_interval_ms: u64) -> Self {
        Self {
            idle_interval_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let changed = self.last_fingerprint != Some(fingerprint);
        if changed || now_ms.saturating_sub(self.last_render_ms) >= self.idle_interval_ms {
            self.last_render_ms = now_ms;
            self.last_fingerprint = Some(fingerprint);
            return true;
        }
        false
    }

    /// Force the next call to render.
    pub fn invalidate(&mut self) {
        self.last_fingerprint = None;
    }
}
