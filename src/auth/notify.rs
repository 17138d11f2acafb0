//! Transient, non-blocking messages shown to the user.
//!
//! Screens only call [`Notifier::notify`]; how messages are displayed is up to
//! the host. [`ToastQueue`] is the shared bookkeeping for hosts that render
//! toasts: it assigns ids, applies the [`DisplayPolicy`] and handles dismissal.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Info,
    Success,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Info => "info",
            Severity::Success => "success",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Fire-and-forget message sink. Must not block the caller.
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

/// How many toasts may be on screen at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayPolicy {
    /// A new toast replaces the visible one.
    #[default]
    Single,
    /// Up to `n` toasts; the oldest is dropped when a new one arrives.
    Stack(usize),
}

impl DisplayPolicy {
    #[must_use]
    pub const fn capacity(self) -> usize {
        match self {
            DisplayPolicy::Single | DisplayPolicy::Stack(0) => 1,
            DisplayPolicy::Stack(limit) => limit,
        }
    }

    /// Parses `single` or `stack:<n>`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("single") {
            return Some(DisplayPolicy::Single);
        }
        let (kind, limit) = value.split_once(':')?;
        if !kind.trim().eq_ignore_ascii_case("stack") {
            return None;
        }
        limit.trim().parse().ok().map(DisplayPolicy::Stack)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    policy: DisplayPolicy,
    next_id: u64,
    visible: VecDeque<Toast>,
}

impl ToastQueue {
    #[must_use]
    pub fn new(policy: DisplayPolicy) -> Self {
        Self {
            policy,
            next_id: 0,
            visible: VecDeque::new(),
        }
    }

    #[must_use]
    pub fn policy(&self) -> DisplayPolicy {
        self.policy
    }

    /// Shows a toast and returns its id for later dismissal.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.next_id = self.next_id.wrapping_add(1);
        let id = self.next_id;

        while self.visible.len() >= self.policy.capacity() {
            self.visible.pop_front();
        }
        self.visible.push_back(Toast {
            id,
            message: message.into(),
            severity,
        });
        id
    }

    /// Removes a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.visible.len();
        self.visible.retain(|toast| toast.id != id);
        self.visible.len() != before
    }

    pub fn clear(&mut self) {
        self.visible.clear();
    }

    /// Oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> + '_ {
        self.visible.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

impl Notifier for RefCell<ToastQueue> {
    fn notify(&self, message: &str, severity: Severity) {
        self.borrow_mut().push(message, severity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(queue: &ToastQueue) -> Vec<&str> {
        queue.visible().map(|toast| toast.message.as_str()).collect()
    }

    #[test]
    fn single_policy_replaces_the_visible_toast() {
        let mut queue = ToastQueue::new(DisplayPolicy::Single);
        queue.push("Invalid credentials", Severity::Error);
        queue.push("Network error", Severity::Error);

        assert_eq!(messages(&queue), vec!["Network error"]);
    }

    #[test]
    fn stack_policy_drops_the_oldest() {
        let mut queue = ToastQueue::new(DisplayPolicy::Stack(2));
        queue.push("one", Severity::Info);
        queue.push("two", Severity::Error);
        queue.push("three", Severity::Success);

        assert_eq!(messages(&queue), vec!["two", "three"]);
    }

    #[test]
    fn dismiss_removes_only_the_given_toast() {
        let mut queue = ToastQueue::new(DisplayPolicy::Stack(3));
        let first = queue.push("one", Severity::Info);
        let second = queue.push("two", Severity::Info);

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.visible().map(|toast| toast.id).collect::<Vec<_>>(), vec![second]);
    }

    #[test]
    fn zero_sized_stack_still_shows_one() {
        let mut queue = ToastQueue::new(DisplayPolicy::Stack(0));
        queue.push("one", Severity::Info);
        queue.push("two", Severity::Info);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn refcell_queue_is_a_notifier() {
        let queue = RefCell::new(ToastQueue::default());
        queue.notify("User exists already!", Severity::Error);

        let queue = queue.into_inner();
        let toast = queue.visible().next().expect("toast shown");
        assert_eq!(toast.message, "User exists already!");
        assert_eq!(toast.severity, Severity::Error);
    }

    #[test]
    fn display_policy_parse() {
        assert_eq!(DisplayPolicy::parse("single"), Some(DisplayPolicy::Single));
        assert_eq!(DisplayPolicy::parse(" Stack:3 "), Some(DisplayPolicy::Stack(3)));
        assert_eq!(DisplayPolicy::parse("stack"), None);
        assert_eq!(DisplayPolicy::parse("queue:2"), None);
    }
}
