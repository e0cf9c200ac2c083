//! Search-box debouncing.
//!
//! [`SearchDebouncer`] is clock-free: callers pass the current time in
//! milliseconds, which keeps it testable without timers. In the browser
//! [`schedule_settle`] sleeps with `gloo-timers` and then hands the value
//! over only if no newer keystroke arrived meanwhile.

#[derive(Debug, Clone)]
pub struct SearchDebouncer<T> {
    window_ms: u64,
    generation: u64,
    pending: Option<T>,
    last_push_ms: u64,
}

impl<T> SearchDebouncer<T> {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            generation: 0,
            pending: None,
            last_push_ms: 0,
        }
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Record an edit; returns its generation
    pub fn push(&mut self, value: T, now_ms: u64) -> u64 {
        self.generation += 1;
        self.pending = Some(value);
        self.last_push_ms = now_ms;
        self.generation
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Takes the pending value once the window has passed since the last edit
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        if self.pending.is_some() && now_ms.saturating_sub(self.last_push_ms) >= self.window_ms {
            self.pending.take()
        } else {
            None
        }
    }

    /// Takes the pending value if `generation` is still the latest edit.
    /// Used by timer-driven callers that wake up once per edit.
    pub fn take_if_latest(&mut self, generation: u64) -> Option<T> {
        if generation == self.generation {
            self.pending.take()
        } else {
            None
        }
    }

    /// Drop any pending edit, e.g. when filters are cleared explicitly
    pub fn cancel(&mut self) {
        self.pending = None;
        self.generation += 1;
    }
}

/// Sleep for the debounce window, then run `settle` with the edit's
/// generation. The callback decides (via [`SearchDebouncer::take_if_latest`])
/// whether the edit is still current.
#[cfg(target_arch = "wasm32")]
pub fn schedule_settle<F>(window_ms: u64, generation: u64, settle: F)
where
    F: FnOnce(u64) + 'static,
{
    let millis = u32::try_from(window_ms).unwrap_or(u32::MAX);
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(millis).await;
        settle(generation);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rapid_typing_fires_once_with_last_value() {
        let mut debouncer = SearchDebouncer::new(500);
        debouncer.push("a", 0);
        debouncer.push("ab", 120);
        debouncer.push("abc", 250);

        assert_eq!(debouncer.poll(600), None);
        assert_eq!(debouncer.poll(750), Some("abc"));
        assert_eq!(debouncer.poll(2000), None);
    }

    #[test]
    fn test_only_latest_generation_settles() {
        let mut debouncer = SearchDebouncer::new(500);
        let first = debouncer.push("bin", 0);
        let second = debouncer.push("bin-0", 100);

        assert_eq!(debouncer.take_if_latest(first), None);
        assert_eq!(debouncer.take_if_latest(second), Some("bin-0"));
        assert_eq!(debouncer.take_if_latest(second), None);
    }

    #[test]
    fn test_cancel_drops_pending_edit() {
        let mut debouncer = SearchDebouncer::new(300);
        let generation = debouncer.push("x", 0);
        debouncer.cancel();
        assert!(!debouncer.has_pending());
        assert_eq!(debouncer.take_if_latest(generation), None);
        assert_eq!(debouncer.poll(1000), None);
    }
}
