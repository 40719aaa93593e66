// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Contact form submission lifecycle.
//!
//! The form is `Idle` until the visitor presses Send. A submission makes
//! exactly one delivery attempt on a background thread; its outcome shows
//! as `Success` or `Error` for a few seconds before the form returns to
//! `Idle` on its own.

use super::scheduler::{Scheduled, Timer};
use crate::io::email::{DeliveryError, EmailConfig, Mailer};
use crate::models::contact::{ContactFields, MessageParams};
use crate::util::time;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

/// How long a success or error banner stays up.
pub const RESET_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success,
    Error,
}

/// What a call to [`ContactForm::submit`] decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Already submitting, or a required field is blank
    Ignored,
    /// Delivery is not configured; the form went straight to `Error`
    Rejected,
    /// Deliver these parameters
    Send(MessageParams),
}

/// Owns the form fields and the submission state machine.
pub struct ContactForm {
    pub fields: ContactFields,
    state: SubmissionState,
    reset: Timer,
    in_flight: Option<Receiver<Result<(), String>>>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: ContactFields::default(),
            state: SubmissionState::Idle,
            reset: Timer::idle(),
            in_flight: None,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Whether the Send button should be enabled.
    pub fn can_submit(&self) -> bool {
        self.state != SubmissionState::Submitting && self.fields.is_complete()
    }

    /// Start a submission stamped with `time`.
    ///
    /// Missing configuration is checked before anything else is attempted.
    pub fn submit(&mut self, now: Duration, config: Option<&EmailConfig>, time: String) -> Submission {
        if !self.can_submit() {
            return Submission::Ignored;
        }
        if config.is_none() {
            log::error!(
                "{}; set EMAILJS_SERVICE_ID, EMAILJS_TEMPLATE_ID and EMAILJS_PUBLIC_KEY",
                DeliveryError::NotConfigured
            );
            self.fail(now);
            return Submission::Rejected;
        }

        self.reset.cancel();
        self.state = SubmissionState::Submitting;
        Submission::Send(MessageParams::from_fields(&self.fields, time))
    }

    /// Submit and deliver through `mailer` on a background thread.
    pub fn send(&mut self, now: Duration, config: Option<&EmailConfig>, mailer: Arc<dyn Mailer>) -> Submission {
        let submission = self.submit(now, config, time::now_stamp());
        if let (Submission::Send(params), Some(config)) = (&submission, config) {
            let (sender, receiver) = channel();
            self.in_flight = Some(receiver);

            let config = config.clone();
            let params = params.clone();
            std::thread::spawn(move || {
                let result = mailer.send(&config, &params).map_err(|e| e.to_string());
                let _ = sender.send(result);
            });
        }
        submission
    }

    /// Pick up the outcome of an in-flight delivery.
    ///
    /// A delivery thread that exits without answering counts as a failure.
    pub fn poll(&mut self, now: Duration) {
        let Some(receiver) = self.in_flight.as_ref() else {
            return;
        };
        let result = match receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err("delivery thread exited".to_string()),
        };
        self.in_flight = None;
        self.complete(now, result);
    }

    /// Apply a delivery outcome. Ignored unless a submission is in progress.
    pub fn complete(&mut self, now: Duration, result: Result<(), String>) {
        if self.state != SubmissionState::Submitting {
            return;
        }
        match result {
            Ok(()) => {
                self.state = SubmissionState::Success;
                self.fields.clear();
                self.reset.schedule(now, RESET_DELAY);
            }
            Err(e) => {
                log::error!("Failed to send message: {}", e);
                self.fail(now);
            }
        }
    }

    /// Cancel the pending auto-reset.
    pub fn cancel_timers(&mut self) {
        self.reset.cancel();
    }

    fn fail(&mut self, now: Duration) {
        self.state = SubmissionState::Error;
        self.reset.schedule(now, RESET_DELAY);
    }
}

impl Scheduled for ContactForm {
    fn advance(&mut self, now: Duration) {
        if self.reset.fire(now).is_some() {
            self.state = SubmissionState::Idle;
        }
    }

    fn next_wake(&self) -> Option<Duration> {
        self.reset.deadline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Instant;

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    fn config() -> EmailConfig {
        EmailConfig::new(
            Some("svc".to_string()),
            Some("tpl".to_string()),
            Some("key".to_string()),
            None,
        )
        .unwrap()
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.fields = ContactFields {
            name: "Aina".to_string(),
            email: "aina@example.com".to_string(),
            phone: String::new(),
            message: "Need a dashboard".to_string(),
        };
        form
    }

    /// Records calls and answers with a fixed outcome.
    struct RecordingMailer {
        calls: AtomicUsize,
        fail: bool,
    }

    impl RecordingMailer {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail,
            })
        }
    }

    impl Mailer for RecordingMailer {
        fn send(&self, _config: &EmailConfig, _params: &MessageParams) -> Result<(), DeliveryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(DeliveryError::Rejected {
                    status: 400,
                    body: "The template ID is invalid".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    /// Dies mid-delivery.
    struct PanickingMailer;

    impl Mailer for PanickingMailer {
        fn send(&self, _config: &EmailConfig, _params: &MessageParams) -> Result<(), DeliveryError> {
            panic!("connection pool poisoned");
        }
    }

    fn wait_for_outcome(form: &mut ContactForm, now: Duration) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while form.state() == SubmissionState::Submitting && Instant::now() < deadline {
            form.poll(now);
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_success_clears_fields_and_resets() {
        let mut form = filled_form();
        let config = config();

        let submission = form.submit(secs(1.0), Some(&config), "stamp".to_string());
        let Submission::Send(params) = submission else {
            panic!("expected the form to send");
        };
        assert_eq!(params.phone, "Not provided");
        assert_eq!(params.time, "stamp");
        assert_eq!(form.state(), SubmissionState::Submitting);
        assert!(!form.can_submit());

        form.complete(secs(2.0), Ok(()));
        assert_eq!(form.state(), SubmissionState::Success);
        assert_eq!(form.fields, ContactFields::default());

        form.advance(secs(6.9));
        assert_eq!(form.state(), SubmissionState::Success);
        form.advance(secs(7.0));
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(form.next_wake(), None);
    }

    #[test]
    fn test_missing_config_errors_without_attempt() {
        let mut form = filled_form();
        let mailer = RecordingMailer::new(false);

        let submission = form.send(secs(0.0), None, mailer.clone());

        assert_eq!(submission, Submission::Rejected);
        assert_eq!(form.state(), SubmissionState::Error);
        assert_eq!(mailer.calls.load(Ordering::SeqCst), 0);
        assert_eq!(form.next_wake(), Some(RESET_DELAY));
        assert_eq!(form.fields.name, "Aina");
    }

    #[test]
    fn test_failed_delivery_keeps_fields() {
        let mut form = filled_form();
        form.submit(secs(0.0), Some(&config()), "stamp".to_string());

        form.complete(secs(1.0), Err("HTTP 500".to_string()));
        assert_eq!(form.state(), SubmissionState::Error);
        assert_eq!(form.fields.message, "Need a dashboard");

        form.advance(secs(6.0));
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(form.fields.message, "Need a dashboard");
    }

    #[test]
    fn test_blank_required_field_is_ignored() {
        let mut form = filled_form();
        form.fields.email = " ".to_string();

        let submission = form.submit(secs(0.0), Some(&config()), "stamp".to_string());
        assert_eq!(submission, Submission::Ignored);
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_no_concurrent_submissions() {
        let mut form = filled_form();
        let config = config();
        form.submit(secs(0.0), Some(&config), "a".to_string());

        let second = form.submit(secs(0.1), Some(&config), "b".to_string());
        assert_eq!(second, Submission::Ignored);
        assert_eq!(form.state(), SubmissionState::Submitting);
    }

    #[test]
    fn test_resubmit_during_banner_cancels_reset() {
        let mut form = filled_form();
        let config = config();
        form.submit(secs(0.0), Some(&config), "a".to_string());
        form.complete(secs(1.0), Err("timeout".to_string()));

        form.submit(secs(2.0), Some(&config), "b".to_string());
        form.advance(secs(6.5));
        assert_eq!(form.state(), SubmissionState::Submitting);
    }

    #[test]
    fn test_send_delivers_once_through_mailer() {
        let mut form = filled_form();
        let mailer = RecordingMailer::new(false);

        form.send(secs(0.0), Some(&config()), mailer.clone());
        wait_for_outcome(&mut form, secs(0.5));

        assert_eq!(form.state(), SubmissionState::Success);
        assert_eq!(mailer.calls.load(Ordering::SeqCst), 1);
        assert_eq!(form.next_wake(), Some(secs(5.5)));
    }

    #[test]
    fn test_send_surfaces_rejection() {
        let mut form = filled_form();
        let mailer = RecordingMailer::new(true);

        form.send(secs(0.0), Some(&config()), mailer.clone());
        wait_for_outcome(&mut form, secs(0.5));

        assert_eq!(form.state(), SubmissionState::Error);
        assert_eq!(form.fields.name, "Aina");
        assert_eq!(mailer.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_crashed_delivery_thread_fails_and_resets() {
        let mut form = filled_form();

        form.send(secs(0.0), Some(&config()), Arc::new(PanickingMailer));
        wait_for_outcome(&mut form, secs(0.5));

        assert_eq!(form.state(), SubmissionState::Error);
        assert_eq!(form.fields.name, "Aina");
        assert_eq!(form.next_wake(), Some(secs(5.5)));

        form.advance(secs(5.5));
        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(form.can_submit());
    }

    #[test]
    fn test_cancel_timers() {
        let mut form = filled_form();
        form.submit(secs(0.0), None, "stamp".to_string());
        form.cancel_timers();

        form.advance(secs(60.0));
        assert_eq!(form.state(), SubmissionState::Error);
    }
}
