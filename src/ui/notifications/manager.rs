// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the container of displayed notifications and the
//! timers that move each one from visible to exiting to removed. Timers are
//! fire-and-forget: closing a notification by hand leaves its timers queued,
//! and they find nothing to act on when they come due.

use super::notification::{Flash, Notification, NotificationId, Severity};
use crate::config::{DEFAULT_DISMISS_DELAY_MS, DEFAULT_EXIT_DURATION_MS};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The close control of a notification was pressed.
    Close(NotificationId),
    /// Periodic clock tick; fires due timers.
    Tick(Instant),
}

/// Delays applied to every notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Time from creation until the exit transition starts.
    pub dismiss_delay: Duration,
    /// Length of the exit transition before removal.
    pub exit_duration: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            dismiss_delay: Duration::from_millis(DEFAULT_DISMISS_DELAY_MS),
            exit_duration: Duration::from_millis(DEFAULT_EXIT_DURATION_MS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum TimerKind {
    BeginExit,
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Timer {
    deadline: Instant,
    // Insertion order breaks deadline ties.
    seq: u64,
    kind: TimerKind,
    target: NotificationId,
}

/// Owns the displayed notifications (in append order) and their timers.
#[derive(Debug, Default)]
pub struct Manager {
    container: Vec<Notification>,
    timers: BinaryHeap<Reverse<Timer>>,
    next_seq: u64,
    timing: Timing,
}

impl Manager {
    /// Creates a new empty notification manager with default timing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager with custom delays.
    #[must_use]
    pub fn with_timing(timing: Timing) -> Self {
        Self {
            timing,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Appends a notification and schedules its dismissal from now.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.show_at(message, severity, Instant::now())
    }

    /// Appends a notification created at `now` and schedules its dismissal.
    pub fn show_at(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        now: Instant,
    ) -> NotificationId {
        self.push_at(Notification::new(severity, message), now)
    }

    /// Appends an already built notification created at `now`.
    pub fn push_at(&mut self, notification: Notification, now: Instant) -> NotificationId {
        let id = notification.id();
        log::debug!(
            "notification {id:?} shown ({:?}): {}",
            notification.severity(),
            notification.message()
        );
        self.container.push(notification);
        self.schedule(now + self.timing.dismiss_delay, TimerKind::BeginExit, id);
        id
    }

    /// Load-time sweep: adopts messages that existed before the UI started
    /// and puts them on the same dismiss schedule as shown ones.
    pub fn adopt_flashes<I>(&mut self, flashes: I, now: Instant) -> Vec<NotificationId>
    where
        I: IntoIterator<Item = Flash>,
    {
        flashes
            .into_iter()
            .map(|flash| self.push_at(Notification::from_flash(flash), now))
            .collect()
    }

    /// Removes a notification immediately, skipping the exit transition.
    ///
    /// Returns `true` if the notification was still in the container.
    pub fn close(&mut self, id: NotificationId) -> bool {
        if self.remove(id) {
            log::debug!("notification {id:?} closed manually");
            true
        } else {
            false
        }
    }

    /// Fires every timer whose deadline is at or before `now`, in deadline
    /// order. Returns the number of timers fired, stale ones included.
    pub fn advance(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while let Some(Reverse(timer)) = self.timers.peek().copied() {
            if timer.deadline > now {
                break;
            }
            self.timers.pop();
            fired += 1;
            self.fire(timer);
        }
        fired
    }

    fn fire(&mut self, timer: Timer) {
        match timer.kind {
            TimerKind::BeginExit => {
                let Some(notification) =
                    self.container.iter_mut().find(|n| n.id() == timer.target)
                else {
                    log::debug!("exit timer for {:?} found nothing", timer.target);
                    return;
                };
                notification.begin_exit();
                log::debug!("notification {:?} exiting", timer.target);
                self.schedule(
                    timer.deadline + self.timing.exit_duration,
                    TimerKind::Remove,
                    timer.target,
                );
            }
            TimerKind::Remove => {
                if self.remove(timer.target) {
                    log::debug!("notification {:?} removed", timer.target);
                } else {
                    log::debug!("remove timer for {:?} found nothing", timer.target);
                }
            }
        }
    }

    fn schedule(&mut self, deadline: Instant, kind: TimerKind, target: NotificationId) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.push(Reverse(Timer {
            deadline,
            seq,
            kind,
            target,
        }));
    }

    fn remove(&mut self, id: NotificationId) -> bool {
        match self.container.iter().position(|n| n.id() == id) {
            Some(pos) => {
                self.container.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Close(id) => {
                self.close(*id);
            }
            Message::Tick(now) => {
                self.advance(*now);
            }
        }
    }

    /// Returns the displayed notifications in container order.
    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.container.iter()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.container.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.container.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    /// Whether any timer is still queued, stale ones included.
    ///
    /// The tick subscription stays alive while this is true.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }
}
