//! Toast notification queue.
//!
//! DESIGN
//! ======
//! Messages are kept in insertion order and addressed by a v4 UUID so the
//! container can remove one (timeout or close click) without disturbing the
//! others.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// Visual flavour of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// CSS modifier class for the container.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "toast toast--info",
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

/// A toast to be shown; the queue assigns its id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewToast {
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

impl NewToast {
    pub fn success(title: impl Into<String>) -> Self {
        Self { kind: ToastKind::Success, title: title.into(), description: None }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self { kind: ToastKind::Error, title: title.into(), description: None }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

/// Ordered list of visible toasts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    pub messages: Vec<ToastMessage>,
}

impl ToastQueue {
    /// Append a toast and return its id.
    pub fn add(&mut self, toast: NewToast) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.messages.push(ToastMessage {
            id: id.clone(),
            kind: toast.kind,
            title: toast.title,
            description: toast.description,
        });
        id
    }

    /// Drop the toast with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) {
        self.messages.retain(|m| m.id != id);
    }
}

/// Context handle pages use to push toasts.
#[derive(Clone, Debug)]
pub struct Toasts {
    queue: ArcRwSignal<ToastQueue>,
}

impl Toasts {
    #[must_use]
    pub fn new() -> Self {
        Self { queue: ArcRwSignal::new(ToastQueue::default()) }
    }

    pub fn add(&self, toast: NewToast) -> String {
        let mut id = String::new();
        self.queue.update(|q| id = q.add(toast));
        id
    }

    pub fn remove(&self, id: &str) {
        self.queue.update(|q| q.remove(id));
    }

    /// Visible toasts, oldest first. Tracks inside reactive scopes.
    #[must_use]
    pub fn messages(&self) -> Vec<ToastMessage> {
        self.queue.with(|q| q.messages.clone())
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}
