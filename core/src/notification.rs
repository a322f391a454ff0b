//! Transient notification banner.
//!
//! `Hidden -> Visible` on every [`NotificationBanner::show`], back to
//! `Hidden` on [`dismiss`](NotificationBanner::dismiss) or when the auto-hide
//! timer armed for the current generation fires. Hiding never clears the
//! message.

use crate::error::SubmitError;

/// Auto-hide delay of a banner.
pub const AUTO_HIDE_MS: u32 = 6000;

/// Banner severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Success,
}

impl Severity {
    /// CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Error => "alert-error",
            Severity::Success => "alert-success",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Severity::Error => "❌",
            Severity::Success => "✅",
        }
    }
}

/// A message with its severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::Error }
    }

    /// Map a submission outcome to what the user sees.
    pub fn from_outcome(outcome: &Result<String, SubmitError>) -> Self {
        match outcome {
            Ok(body) => Self::success(body.clone()),
            Err(e) => Self::error(e.to_string()),
        }
    }
}

/// Identifies the `show` an auto-hide timer belongs to.
pub type Generation = u64;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationBanner {
    current: Option<Notification>,
    visible: bool,
    generation: Generation,
}

impl NotificationBanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notification, replacing the previous one.
    ///
    /// Returns the generation to hand to [`expire`](Self::expire) once
    /// [`AUTO_HIDE_MS`] has elapsed.
    pub fn show(&mut self, notification: Notification) -> Generation {
        self.generation += 1;
        self.current = Some(notification);
        self.visible = true;
        self.generation
    }

    /// Manual dismiss.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// Auto-hide for `generation`. Ignored if a newer notification was shown.
    /// Returns whether the banner was hidden.
    pub fn expire(&mut self, generation: Generation) -> bool {
        if generation == self.generation && self.visible {
            self.visible = false;
            true
        } else {
            false
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Last message shown, even when hidden.
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Whether anything should be rendered at all.
    pub fn has_content(&self) -> bool {
        self.current.as_ref().is_some_and(|n| !n.message.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_hide_is_six_seconds() {
        assert_eq!(AUTO_HIDE_MS, 6000);
    }

    #[test]
    fn test_severity_styles() {
        assert_eq!(Severity::Error.css_class(), "alert-error");
        assert_eq!(Severity::Success.css_class(), "alert-success");
    }

    #[test]
    fn test_show_then_dismiss_keeps_message() {
        let mut banner = NotificationBanner::new();
        assert!(!banner.is_visible());
        assert!(!banner.has_content());

        banner.show(Notification::error("AccessToken is missing"));
        assert!(banner.is_visible());

        banner.dismiss();
        assert!(!banner.is_visible());
        assert_eq!(banner.current().unwrap().message, "AccessToken is missing");
    }

    #[test]
    fn test_expire_hides_current_generation() {
        let mut banner = NotificationBanner::new();
        let generation = banner.show(Notification::success("job started"));
        assert!(banner.expire(generation));
        assert!(!banner.is_visible());
    }

    #[test]
    fn test_stale_timer_does_not_hide_newer_notification() {
        let mut banner = NotificationBanner::new();
        let first = banner.show(Notification::error("AccessToken is missing"));
        let second = banner.show(Notification::success("job started"));

        assert!(!banner.expire(first));
        assert!(banner.is_visible());
        assert!(banner.expire(second));
    }

    #[test]
    fn test_retrigger_reshows_same_message() {
        let mut banner = NotificationBanner::new();
        let message = "FASTA file is missing. Please Upload a FASTA file.";
        banner.show(Notification::error(message));
        banner.dismiss();

        banner.show(Notification::error(message));
        assert!(banner.is_visible());
        assert_eq!(banner.current().unwrap().message, message);
        assert_eq!(banner.current().unwrap().severity, Severity::Error);
    }

    #[test]
    fn test_from_outcome() {
        let ok = Notification::from_outcome(&Ok("job started".to_string()));
        assert_eq!(ok, Notification::success("job started"));

        let err = Notification::from_outcome(&Err(SubmitError::MissingCredential));
        assert_eq!(err, Notification::error("AccessToken is missing"));
    }
}
