use crate::*;
use std::time::Duration;

/// Timing of press-and-hold stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CadenceConfig {
    /// Wait before the first repeated step.
    pub hold: Duration,
    /// Delay the decay starts from.
    pub delay: Duration,
    /// Each tick removes `delay / decay`.
    pub decay: u32,
    /// Delays never shrink below this.
    pub floor: Duration,
}

impl Default for CadenceConfig {
    fn default() -> Self {
        Self {
            hold: REPEAT_HOLD,
            delay: REPEAT_DELAY,
            decay: REPEAT_DECAY,
            floor: REPEAT_FLOOR,
        }
    }
}

/// Endless sequence of waits between repeated steps.
///
/// Yields `hold` first. Every later wait is the previous delay reduced
/// by `1/decay`, clamped from below at `floor`, so holding a button
/// accelerates geometrically until it settles at the floor.
#[derive(Debug, Clone)]
pub struct Cadence {
    config: CadenceConfig,
    delay: Option<Duration>,
}

impl From<CadenceConfig> for Cadence {
    fn from(config: CadenceConfig) -> Self {
        Self {
            config,
            delay: None,
        }
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Self::from(CadenceConfig::default())
    }
}

impl Cadence {
    fn shrink(&self, delay: Duration) -> Duration {
        let step = delay.checked_div(self.config.decay).unwrap_or_default();
        std::cmp::max(self.config.floor, delay.saturating_sub(step))
    }
}

impl Iterator for Cadence {
    type Item = Duration;
    fn next(&mut self) -> Option<Self::Item> {
        match self.delay {
            None => {
                self.delay = Some(self.config.delay);
                Some(self.config.hold)
            }
            Some(delay) => {
                let delay = self.shrink(delay);
                self.delay = Some(delay);
                Some(delay)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hold_comes_first() {
        let mut cadence = Cadence::default();
        assert_eq!(cadence.next(), Some(REPEAT_HOLD));
    }

    #[test]
    fn decays_from_delay() {
        let waits = Cadence::default().take(3).collect::<Vec<_>>();
        let second = REPEAT_DELAY - REPEAT_DELAY / REPEAT_DECAY;
        let third = second - second / REPEAT_DECAY;
        assert_eq!(waits, vec![REPEAT_HOLD, second, third]);
    }

    #[test]
    fn decay_is_monotone_and_floored() {
        let waits = Cadence::default().skip(1).take(200).collect::<Vec<_>>();
        assert!(waits.windows(2).all(|w| w[1] <= w[0]));
        assert!(waits.iter().all(|w| *w >= REPEAT_FLOOR));
        assert_eq!(waits.last(), Some(&REPEAT_FLOOR));
    }

    #[test]
    fn zero_decay_holds_steady() {
        let config = CadenceConfig {
            decay: 0,
            ..CadenceConfig::default()
        };
        let waits = Cadence::from(config).skip(1).take(3).collect::<Vec<_>>();
        assert_eq!(waits, vec![REPEAT_DELAY; 3]);
    }

    #[test]
    fn floor_above_delay_wins() {
        let config = CadenceConfig {
            floor: Duration::from_millis(400),
            ..CadenceConfig::default()
        };
        let waits = Cadence::from(config).skip(1).take(2).collect::<Vec<_>>();
        assert_eq!(waits, vec![Duration::from_millis(400); 2]);
    }
}
