use serde::{Deserialize, Serialize};

/// Where steal notifications go. Persisted as a single integer: `0` is off,
/// `1` is the bot owners, anything else is a channel id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotifyMode {
    Off,
    Owners,
    Channel(u64),
}

impl NotifyMode {
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            0 => Self::Off,
            1 => Self::Owners,
            other => u64::try_from(other).map_or(Self::Off, Self::Channel),
        }
    }

    pub fn to_raw(self) -> i64 {
        match self {
            Self::Off => 0,
            Self::Owners => 1,
            Self::Channel(id) => i64::try_from(id).unwrap_or(0),
        }
    }

    /// The mode `notify` switches to, with `channel_id` being where it was invoked.
    pub fn next(self, channel_id: u64) -> Self {
        match self {
            Self::Off => Self::Owners,
            Self::Owners => Self::Channel(channel_id),
            Self::Channel(_) => Self::Off,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StealSettings {
    pub collect_on: bool,
    pub autobank: bool,
    pub notify: NotifyMode,
}

impl Default for StealSettings {
    fn default() -> Self {
        Self {
            collect_on: false,
            autobank: false,
            notify: NotifyMode::Off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NotifyMode;

    #[test]
    fn raw_values_round_trip_through_modes() {
        assert_eq!(NotifyMode::from_raw(0), NotifyMode::Off);
        assert_eq!(NotifyMode::from_raw(1), NotifyMode::Owners);
        assert_eq!(
            NotifyMode::from_raw(918_273_645_546_372_819),
            NotifyMode::Channel(918_273_645_546_372_819)
        );
        assert_eq!(NotifyMode::Channel(42).to_raw(), 42);
        assert_eq!(NotifyMode::from_raw(-5), NotifyMode::Off);
    }

    #[test]
    fn notify_cycles_back_after_three_steps() {
        let channel = 555_u64;
        for start in [
            NotifyMode::Off,
            NotifyMode::Owners,
            NotifyMode::Channel(channel),
        ] {
            let cycled = start.next(channel).next(channel).next(channel);
            assert_eq!(cycled, start);
        }
    }

    #[test]
    fn notify_order_is_off_owners_channel() {
        assert_eq!(NotifyMode::Off.next(9), NotifyMode::Owners);
        assert_eq!(NotifyMode::Owners.next(9), NotifyMode::Channel(9));
        assert_eq!(NotifyMode::Channel(9).next(3), NotifyMode::Off);
    }
}
