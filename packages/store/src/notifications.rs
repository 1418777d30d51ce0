//! # Transient UI state: notifications, busy flag, modals
//!
//! [`Notifications`] is plain data; the UI keeps it in a signal and renders
//! the toast stack from it. Removal after `duration` is scheduled by the UI,
//! this module only tracks what is currently shown.

use std::collections::HashMap;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    /// Auto-dismiss delay. `None` keeps the notification until removed.
    pub duration: Option<Duration>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notifications {
    pub entries: Vec<Notification>,
    pub loading: bool,
    modals: HashMap<String, bool>,
    next_id: u64,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a notification and return its id.
    pub fn add(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        duration: Option<Duration>,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(Notification {
            id,
            kind,
            message: message.into(),
            duration,
        });
        id
    }

    pub fn remove(&mut self, id: u64) {
        self.entries.retain(|n| n.id != id);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Open or close a named modal; `None` flips its current state.
    pub fn toggle_modal(&mut self, name: &str, open: Option<bool>) {
        let current = self.is_modal_open(name);
        self.modals
            .insert(name.to_string(), open.unwrap_or(!current));
    }

    pub fn is_modal_open(&self, name: &str) -> bool {
        self.modals.get(name).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_after_removal() {
        let mut n = Notifications::new();
        let a = n.add(NotificationKind::Success, "Login successful!", None);
        n.remove(a);
        let b = n.add(NotificationKind::Error, "Login failed", None);
        assert_ne!(a, b);
        assert_eq!(n.entries.len(), 1);
        assert_eq!(n.entries[0].message, "Login failed");
    }

    #[test]
    fn test_remove_only_matching() {
        let mut n = Notifications::new();
        let a = n.add(NotificationKind::Info, "one", Some(Duration::from_secs(3)));
        n.add(NotificationKind::Warning, "two", None);
        n.remove(a);
        assert_eq!(n.entries.len(), 1);
        assert_eq!(n.entries[0].kind, NotificationKind::Warning);

        n.clear();
        assert!(n.entries.is_empty());
    }

    #[test]
    fn test_toggle_modal() {
        let mut n = Notifications::new();
        assert!(!n.is_modal_open("verify"));
        n.toggle_modal("verify", None);
        assert!(n.is_modal_open("verify"));
        n.toggle_modal("verify", None);
        assert!(!n.is_modal_open("verify"));
        n.toggle_modal("verify", Some(true));
        n.toggle_modal("verify", Some(true));
        assert!(n.is_modal_open("verify"));
    }

    #[test]
    fn test_loading_flag() {
        let mut n = Notifications::new();
        n.set_loading(true);
        assert!(n.loading);
    }
}
