// 🔔 Notification - Single-slot, last-write-wins transient banner
//
//   Idle ──show──▶ Showing{notice, deadline} ──tick(now ≥ deadline)──▶ Idle
//                      │ show again: previous notice is cancelled and returned
//
// Time is passed in explicitly so the machine stays deterministic.

use crate::config::ViewConfig;
use crate::logging::{self, obj, v_str};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default banner lifetime
pub const DEFAULT_NOTICE_SECS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub id: Uuid,
    pub message: String,
    pub kind: NotificationKind,
    pub shown_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum NotificationState {
    Idle,
    Showing {
        notice: Notice,
        deadline: DateTime<Utc>,
    },
}

#[derive(Debug, Clone)]
pub struct Notifier {
    state: NotificationState,
    lifetime: Duration,
}

impl Notifier {
    pub fn new() -> Self {
        Notifier::with_lifetime(Duration::seconds(DEFAULT_NOTICE_SECS))
    }

    pub fn with_lifetime(lifetime: Duration) -> Self {
        Notifier {
            state: NotificationState::Idle,
            lifetime,
        }
    }

    /// Notifier using the configured lifetime
    pub fn from_config(config: &ViewConfig) -> anyhow::Result<Self> {
        Ok(Notifier::with_lifetime(config.notification_lifetime()?))
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    pub fn state(&self) -> &NotificationState {
        &self.state
    }

    /// Show a notice, replacing whatever is showing
    ///
    /// Returns the superseded notice, if one was still showing.
    pub fn show(&mut self, message: &str, kind: NotificationKind, now: DateTime<Utc>) -> Option<Notice> {
        let notice = Notice {
            id: Uuid::new_v4(),
            message: message.to_string(),
            kind,
            shown_at: now,
        };
        let deadline = now + self.lifetime;

        let previous = std::mem::replace(
            &mut self.state,
            NotificationState::Showing { notice, deadline },
        );

        match previous {
            NotificationState::Showing { notice, deadline } if now < deadline => {
                logging::debug(
                    "notification",
                    "superseded",
                    obj(&[
                        ("superseded_id", v_str(&notice.id.to_string())),
                        ("message", v_str(&notice.message)),
                    ]),
                );
                Some(notice)
            }
            _ => None,
        }
    }

    /// Advance time; expires the notice once its deadline is reached
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<Notice> {
        let expired = matches!(
            &self.state,
            NotificationState::Showing { deadline, .. } if now >= *deadline
        );
        if !expired {
            return None;
        }

        match std::mem::replace(&mut self.state, NotificationState::Idle) {
            NotificationState::Showing { notice, .. } => Some(notice),
            NotificationState::Idle => None,
        }
    }

    pub fn dismiss(&mut self) -> Option<Notice> {
        match std::mem::replace(&mut self.state, NotificationState::Idle) {
            NotificationState::Showing { notice, .. } => Some(notice),
            NotificationState::Idle => None,
        }
    }

    /// The notice visible at `now`, if any
    pub fn current(&self, now: DateTime<Utc>) -> Option<&Notice> {
        match &self.state {
            NotificationState::Showing { notice, deadline } if now < *deadline => Some(notice),
            _ => None,
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_show_then_expire_after_three_seconds() {
        let mut n = Notifier::new();
        n.show("Statement sent", NotificationKind::Success, t0());

        assert!(n.current(t0() + Duration::milliseconds(2_999)).is_some());
        assert!(n.tick(t0() + Duration::milliseconds(2_999)).is_none());

        let expired = n.tick(t0() + Duration::seconds(3)).unwrap();
        assert_eq!(expired.message, "Statement sent");
        assert_eq!(n.state(), &NotificationState::Idle);
        assert!(n.current(t0() + Duration::seconds(3)).is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let mut n = Notifier::new();
        assert!(n.show("first", NotificationKind::Info, t0()).is_none());

        let superseded = n
            .show("second", NotificationKind::Error, t0() + Duration::seconds(2))
            .unwrap();
        assert_eq!(superseded.message, "first");

        // The second notice gets a fresh deadline
        let visible = n.current(t0() + Duration::seconds(4)).unwrap();
        assert_eq!(visible.message, "second");
        assert_eq!(visible.kind, NotificationKind::Error);
        assert_ne!(visible.id, superseded.id);
    }

    #[test]
    fn test_show_after_expiry_supersedes_nothing() {
        let mut n = Notifier::new();
        n.show("old", NotificationKind::Info, t0());

        assert!(n.show("new", NotificationKind::Info, t0() + Duration::seconds(10)).is_none());
    }

    #[test]
    fn test_dismiss_and_custom_lifetime() {
        let mut n = Notifier::with_lifetime(Duration::seconds(10));
        n.show("saved", NotificationKind::Success, t0());

        assert!(n.current(t0() + Duration::seconds(9)).is_some());
        assert_eq!(n.dismiss().unwrap().message, "saved");
        assert!(n.dismiss().is_none());
        assert!(n.tick(t0() + Duration::seconds(60)).is_none());
    }

    #[test]
    fn test_from_config_uses_configured_lifetime() {
        let config = ViewConfig {
            notification_secs: 5,
            ..Default::default()
        };
        let mut n = Notifier::from_config(&config).unwrap();
        assert_eq!(n.lifetime(), Duration::seconds(5));

        n.show("Export ready", NotificationKind::Info, t0());
        assert!(n.current(t0() + Duration::seconds(4)).is_some());
        assert!(n.current(t0() + Duration::seconds(5)).is_none());

        let default = Notifier::from_config(&ViewConfig::default()).unwrap();
        assert_eq!(default.lifetime(), Duration::seconds(DEFAULT_NOTICE_SECS));
    }

    #[test]
    fn test_from_config_rejects_unusable_lifetime() {
        for secs in [0, -1, i64::MAX] {
            let config = ViewConfig {
                notification_secs: secs,
                ..Default::default()
            };
            assert!(Notifier::from_config(&config).is_err(), "accepted {}", secs);
        }
    }
}
