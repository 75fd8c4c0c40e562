//! 입력 중 실시간 번역을 위한 지연 처리. 마지막 입력 후 일정 시간이 지나면 한 번 발화한다.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    last_touch: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_touch: None,
        }
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// 입력이 바뀌었음을 기록한다.
    pub fn touch(&mut self, now: Instant) {
        self.last_touch = Some(now);
    }

    pub fn cancel(&mut self) {
        self.last_touch = None;
    }

    pub fn is_pending(&self) -> bool {
        self.last_touch.is_some()
    }

    /// 발화까지 남은 시간. 대기 중이 아니면 None.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.last_touch
            .map(|t| self.delay.saturating_sub(now.saturating_duration_since(t)))
    }

    /// 지연이 지났으면 true를 돌려주고 대기 상태를 비운다.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.last_touch {
            Some(t) if now.saturating_duration_since(t) >= self.delay => {
                self.last_touch = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_quiet_period() {
        let start = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(500));
        d.touch(start);
        assert!(!d.fire(start + Duration::from_millis(100)));
        d.touch(start + Duration::from_millis(300));
        assert!(!d.fire(start + Duration::from_millis(700)));
        assert!(d.fire(start + Duration::from_millis(800)));
        assert!(!d.fire(start + Duration::from_millis(2000)));
        assert!(!d.is_pending());
    }

    #[test]
    fn zero_delay_fires_immediately() {
        let now = Instant::now();
        let mut d = Debouncer::new(Duration::ZERO);
        d.touch(now);
        assert!(d.fire(now));
    }

    #[test]
    fn remaining_counts_down() {
        let start = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(500));
        assert_eq!(d.remaining(start), None);
        d.touch(start);
        assert_eq!(
            d.remaining(start + Duration::from_millis(200)),
            Some(Duration::from_millis(300))
        );
    }
}
