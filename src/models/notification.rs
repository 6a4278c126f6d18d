use std::rc::Rc;
use yew::Reducible;

use super::reservation::{ReservationError, ReservationSummary};

/// A toast message shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: Option<String>,
    pub is_error: bool,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
            is_error: false,
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            is_error: true,
        }
    }

    /// Acknowledgement of a reservation request. Nothing is sent anywhere.
    pub fn reservation_requested(summary: &ReservationSummary) -> Self {
        Self::info("Pre-reservation created", Some(summary.to_string()))
    }
}

impl From<ReservationError> for Notification {
    fn from(error: ReservationError) -> Self {
        Self::error(error.to_string())
    }
}

/// Notifications currently on screen, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toasts {
    items: Vec<(u32, Notification)>,
}

pub enum ToastAction {
    Push(u32, Notification),
    Dismiss(u32),
}

impl Toasts {
    pub fn items(&self) -> &[(u32, Notification)] {
        &self.items
    }
}

impl Reducible for Toasts {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = (*self).clone();
        match action {
            ToastAction::Push(id, notification) => toasts.items.push((id, notification)),
            ToastAction::Dismiss(id) => toasts.items.retain(|(item_id, _)| *item_id != id),
        }
        Rc::new(toasts)
    }
}
