//! Service layer: outbound notification delivery.

pub mod notifications;

pub use notifications::Notifier;
