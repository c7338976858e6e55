//! Notification Adapters
//!
//! Implementations of the Notifier port.
//!
//! - **TracingNotifier** - Renders localized title/body pairs into the log
//! - **InMemoryNotifier** - Records notifications (testing)
//! - **NoOpNotifier** - Drops everything (notifications disabled)

mod in_memory_notifier;
mod messages;
mod tracing_notifier;

pub use in_memory_notifier::{InMemoryNotifier, SentNotification};
pub use messages::NotificationMessage;
pub use tracing_notifier::{NoOpNotifier, TracingNotifier};
