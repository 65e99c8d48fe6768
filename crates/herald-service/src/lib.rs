//! # herald-service
//!
//! The notification view-model. A [`notification::NotificationView`] wraps
//! a stored record together with the injected collaborators and derives
//! headers, icon, importance, origin and agent references, and the flat
//! exported record.

pub mod notification;
