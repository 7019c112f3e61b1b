//! Blocking notifications shown after a request.

use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Error,
    Success,
}

/// A single message rendered as a modal dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self.level {
            NoticeLevel::Error => "Error",
            NoticeLevel::Success => "Success",
        }
    }

    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self.level {
            NoticeLevel::Error => "notice-error",
            NoticeLevel::Success => "notice-success",
        }
    }
}

/// Notices collected while handling one request.
///
/// Every notice is logged at `INFO` when it is raised. The failure behind
/// an error notice is logged at its source, so it reaches Sentry once.
#[derive(Debug, Default)]
pub struct Notices(Vec<Notice>);

impl Notices {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!(notice = %message, "Showing error notice");
        self.0.push(Notice {
            level: NoticeLevel::Error,
            message,
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!(notice = %message, "Showing success notice");
        self.0.push(Notice {
            level: NoticeLevel::Success,
            message,
        });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Notice> {
        self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    use super::*;

    /// Records the level of every event.
    struct Levels(Arc<Mutex<Vec<Level>>>);

    impl<S: Subscriber> Layer<S> for Levels {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            self.0.lock().unwrap().push(*event.metadata().level());
        }
    }

    #[test]
    fn test_notices_keep_order() {
        let mut notices = Notices::new();
        assert!(notices.is_empty());
        notices.error("Failed to load orders: boom");
        notices.success("Product added successfully!");

        let notices = notices.into_vec();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].title(), "Error");
        assert_eq!(notices[0].css_class(), "notice-error");
        assert_eq!(notices[1].level, NoticeLevel::Success);
    }

    #[test]
    fn test_error_notice_is_not_logged_as_error() {
        let levels = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(Levels(Arc::clone(&levels)));

        tracing::subscriber::with_default(subscriber, || {
            Notices::new().error("Failed to load orders: HTTP error! status: 500");
        });

        let levels = levels.lock().unwrap();
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0], Level::INFO);
    }
}
