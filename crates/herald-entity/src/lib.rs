//! # herald-entity
//!
//! Domain entity models for Herald. [`notification::NotificationRecord`]
//! mirrors a stored notification row; [`notification::MessageParameters`]
//! is the decoded form of its positional message parameters.

pub mod notification;
