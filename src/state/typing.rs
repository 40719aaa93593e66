// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Typing animation for the rotating hero titles.
//!
//! The engine types a title one character at a time, holds it, deletes it
//! one character at a time and moves on to the next title, forever. It is
//! a plain state machine on the simulated clock: [`Scheduled::advance`]
//! applies due transitions and [`Scheduled::next_wake`] tells the app when
//! to repaint next.

use super::scheduler::{Scheduled, Timer};
use std::time::Duration;

/// Delays between animation steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingSpeeds {
    /// Delay before each typed character.
    pub type_delay: Duration,
    /// Delay before each deleted character.
    pub delete_delay: Duration,
    /// How long a fully typed title stays on screen.
    pub hold: Duration,
}

impl Default for TypingSpeeds {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(150),
            delete_delay: Duration::from_millis(100),
            hold: Duration::from_millis(2000),
        }
    }
}

/// Current phase of the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    PausingAtFull,
    Deleting,
}

/// Cycles through a fixed list of titles, typing and deleting each one.
#[derive(Debug, Clone)]
pub struct TypingAnimation {
    titles: Vec<String>,
    index: usize,
    /// Number of characters (not bytes) of the current title on screen
    shown: usize,
    phase: Phase,
    speeds: TypingSpeeds,
    timer: Timer,
    running: bool,
}

impl TypingAnimation {
    /// Create an engine for the given title cycle. It stays idle until started.
    pub fn new(titles: Vec<String>) -> Self {
        Self {
            titles,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
            speeds: TypingSpeeds::default(),
            timer: Timer::idle(),
            running: false,
        }
    }

    /// Replace the step delays. Zero delays are bumped to one millisecond.
    pub fn with_speeds(mut self, speeds: TypingSpeeds) -> Self {
        let floor = Duration::from_millis(1);
        self.speeds = TypingSpeeds {
            type_delay: speeds.type_delay.max(floor),
            delete_delay: speeds.delete_delay.max(floor),
            hold: speeds.hold.max(floor),
        };
        self
    }

    /// Begin animating from the first title with empty text.
    ///
    /// Has no effect while already running or when there are no titles.
    pub fn start(&mut self, now: Duration) {
        if self.running || self.titles.is_empty() {
            return;
        }
        self.index = 0;
        self.shown = 0;
        self.phase = Phase::Typing;
        self.running = true;
        self.schedule_from(now);
        log::debug!("Typing animation started with {} titles", self.titles.len());
    }

    /// Stop animating and cancel the pending step.
    pub fn stop(&mut self) {
        self.timer.cancel();
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[cfg(test)]
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// The title currently being typed or deleted.
    pub fn current_title(&self) -> &str {
        self.titles.get(self.index).map(String::as_str).unwrap_or("")
    }

    /// The visible text, always a prefix of [`Self::current_title`].
    pub fn displayed_text(&self) -> &str {
        let title = self.current_title();
        let end = title
            .char_indices()
            .nth(self.shown)
            .map(|(i, _)| i)
            .unwrap_or(title.len());
        &title[..end]
    }

    fn title_len(&self) -> usize {
        self.current_title().chars().count()
    }

    /// Schedule the next step for the current state, timed from `at`.
    ///
    /// Reaching the end of a title or the empty string changes phase
    /// immediately; only character edits and the hold wait on the timer.
    fn schedule_from(&mut self, at: Duration) {
        match self.phase {
            Phase::Typing => {
                if self.shown < self.title_len() {
                    self.timer.schedule(at, self.speeds.type_delay);
                } else {
                    self.phase = Phase::PausingAtFull;
                    self.timer.schedule(at, self.speeds.hold);
                }
            }
            Phase::PausingAtFull => self.timer.schedule(at, self.speeds.hold),
            Phase::Deleting => {
                if self.shown > 0 {
                    self.timer.schedule(at, self.speeds.delete_delay);
                } else {
                    self.index = (self.index + 1) % self.titles.len();
                    self.phase = Phase::Typing;
                    log::debug!("Typing title {}: {}", self.index, self.current_title());
                    self.schedule_from(at);
                }
            }
        }
    }

    /// Apply the transition that was due at `at`.
    fn step(&mut self, at: Duration) {
        match self.phase {
            Phase::Typing => self.shown += 1,
            Phase::PausingAtFull => self.phase = Phase::Deleting,
            Phase::Deleting => self.shown -= 1,
        }
        self.schedule_from(at);
    }
}

impl Scheduled for TypingAnimation {
    fn advance(&mut self, now: Duration) {
        if !self.running {
            return;
        }
        while let Some(at) = self.timer.fire(now) {
            self.step(at);
        }
    }

    fn next_wake(&self) -> Option<Duration> {
        self.timer.deadline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn titles(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    /// Advance one scheduled step at a time, calling `check` after each.
    fn run_steps(engine: &mut TypingAnimation, steps: usize, mut check: impl FnMut(&TypingAnimation)) {
        for _ in 0..steps {
            let wake = engine.next_wake().expect("running engine always has a wake time");
            engine.advance(wake);
            check(engine);
        }
    }

    #[test]
    fn test_idle_until_started() {
        let mut engine = TypingAnimation::new(titles(&["Rust"]));
        engine.advance(ms(10_000));

        assert!(!engine.is_running());
        assert_eq!(engine.displayed_text(), "");
        assert_eq!(engine.next_wake(), None);
    }

    #[test]
    fn test_types_one_character_per_delay() {
        let mut engine = TypingAnimation::new(titles(&["Rust"]));
        engine.start(ms(0));

        engine.advance(ms(149));
        assert_eq!(engine.displayed_text(), "");
        engine.advance(ms(150));
        assert_eq!(engine.displayed_text(), "R");
        engine.advance(ms(450));
        assert_eq!(engine.displayed_text(), "Rus");
        engine.advance(ms(600));
        assert_eq!(engine.displayed_text(), "Rust");
        assert_eq!(engine.phase(), Phase::PausingAtFull);
    }

    #[test]
    fn test_holds_then_deletes() {
        let mut engine = TypingAnimation::new(titles(&["ab", "cd"]));
        engine.start(ms(0));

        // typed by 300ms, hold until 2300ms
        engine.advance(ms(2299));
        assert_eq!(engine.phase(), Phase::PausingAtFull);
        assert_eq!(engine.displayed_text(), "ab");

        engine.advance(ms(2300));
        assert_eq!(engine.phase(), Phase::Deleting);
        assert_eq!(engine.displayed_text(), "ab");

        engine.advance(ms(2400));
        assert_eq!(engine.displayed_text(), "a");

        // empty at 2500ms moves straight on to the next title
        engine.advance(ms(2500));
        assert_eq!(engine.current_index(), 1);
        assert_eq!(engine.phase(), Phase::Typing);
        assert_eq!(engine.displayed_text(), "");
        assert_eq!(engine.next_wake(), Some(ms(2650)));
    }

    #[test]
    fn test_displayed_text_is_always_a_prefix() {
        let mut engine = TypingAnimation::new(titles(&[
            "Fullstack Developer",
            "React.js Specialist",
            "API & Integration Builder",
        ]));
        engine.start(ms(0));

        let mut index_at_delete_start = None;
        run_steps(&mut engine, 500, |engine| {
            let title = engine.current_title();
            assert!(title.starts_with(engine.displayed_text()));
            match engine.phase() {
                Phase::Deleting => {
                    let index = *index_at_delete_start.get_or_insert(engine.current_index());
                    assert_eq!(index, engine.current_index());
                }
                _ => index_at_delete_start = None,
            }
        });
    }

    #[test]
    fn test_visits_titles_in_order_and_loops() {
        let mut engine = TypingAnimation::new(titles(&["a", "bb", "c"]));
        engine.start(ms(0));

        let mut visited = vec![engine.current_index()];
        run_steps(&mut engine, 60, |engine| {
            if visited.last() != Some(&engine.current_index()) {
                visited.push(engine.current_index());
            }
        });

        assert!(visited.len() >= 7);
        for (i, index) in visited.iter().enumerate() {
            assert_eq!(*index, i % 3);
        }
    }

    #[test]
    fn test_catch_up_matches_stepwise() {
        let list = titles(&["Frontend Developer", "Node.js Backend Developer"]);
        let mut stepwise = TypingAnimation::new(list.clone());
        let mut jumped = TypingAnimation::new(list);
        stepwise.start(ms(0));
        jumped.start(ms(0));

        let target = ms(12_345);
        while stepwise.next_wake().is_some_and(|wake| wake <= target) {
            let wake = stepwise.next_wake().unwrap_or(target);
            stepwise.advance(wake);
        }
        jumped.advance(target);

        assert_eq!(stepwise.current_index(), jumped.current_index());
        assert_eq!(stepwise.displayed_text(), jumped.displayed_text());
        assert_eq!(stepwise.phase(), jumped.phase());
        assert_eq!(stepwise.next_wake(), jumped.next_wake());
    }

    #[test]
    fn test_multibyte_titles() {
        let mut engine = TypingAnimation::new(titles(&["Café ☕"]));
        engine.start(ms(0));
        engine.advance(ms(150 * 4));
        assert_eq!(engine.displayed_text(), "Café");
        engine.advance(ms(150 * 6));
        assert_eq!(engine.displayed_text(), "Café ☕");
    }

    #[test]
    fn test_stop_cancels_pending_step() {
        let mut engine = TypingAnimation::new(titles(&["Rust"]));
        engine.start(ms(0));
        engine.advance(ms(150));
        engine.stop();

        assert_eq!(engine.next_wake(), None);
        engine.advance(ms(5_000));
        assert_eq!(engine.displayed_text(), "R");
    }

    #[test]
    fn test_empty_cycle_never_starts() {
        let mut engine = TypingAnimation::new(Vec::new());
        engine.start(ms(0));

        assert!(!engine.is_running());
        assert_eq!(engine.displayed_text(), "");
        assert_eq!(engine.next_wake(), None);
    }

    #[test]
    fn test_custom_speeds() {
        let speeds = TypingSpeeds {
            type_delay: ms(10),
            delete_delay: ms(5),
            hold: ms(0),
        };
        let mut engine = TypingAnimation::new(titles(&["ab"])).with_speeds(speeds);
        engine.start(ms(0));
        engine.advance(ms(20));
        assert_eq!(engine.displayed_text(), "ab");
        // zero hold is floored to 1ms
        engine.advance(ms(21));
        assert_eq!(engine.phase(), Phase::Deleting);
    }
}
