use std::sync::Arc;

use super::provider::{NotificationMessage, NotificationProvider};

/// Delivery boundary used by the poll loop.
///
/// Never returns an error: every provider failure is logged here and
/// reported as `false`, so the caller only decides whether to remember the
/// text as delivered.
#[derive(Clone)]
pub struct Notifier {
    provider: Arc<dyn NotificationProvider>,
}

impl Notifier {
    pub fn new(provider: Arc<dyn NotificationProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Send `text` to the recipient. Returns `true` once the channel
    /// confirmed the delivery.
    pub async fn deliver(&self, text: &str) -> bool {
        let provider = self.provider.name();
        tracing::debug!(provider, message = text, "Sending notification");

        match self.provider.send(&NotificationMessage::new(text)).await {
            Ok(result) if result.success => {
                tracing::info!(
                    provider,
                    duration_ms = result.duration_ms,
                    message = text,
                    "Notification delivered"
                );
                true
            }
            Ok(result) => {
                tracing::error!(
                    provider,
                    status_code = ?result.status_code,
                    response = ?result.response,
                    duration_ms = result.duration_ms,
                    "Notification was not delivered"
                );
                false
            }
            Err(e) => {
                tracing::error!(provider, error = %e, "Notification provider failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, AppResult};
    use crate::services::notifications::NotificationResult;
    use async_trait::async_trait;
    use std::sync::Mutex;

    enum Behavior {
        Accept,
        Reject,
        Fail,
    }

    struct ScriptedProvider {
        behavior: Behavior,
        sent: Mutex<Vec<String>>,
    }

    impl ScriptedProvider {
        fn new(behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                behavior,
                sent: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl NotificationProvider for ScriptedProvider {
        async fn send(&self, message: &NotificationMessage) -> AppResult<NotificationResult> {
            self.sent.lock().unwrap().push(message.text.clone());
            match self.behavior {
                Behavior::Accept => Ok(NotificationResult {
                    success: true,
                    status_code: Some(200),
                    response: None,
                    duration_ms: 1,
                }),
                Behavior::Reject => Ok(NotificationResult {
                    success: false,
                    status_code: Some(400),
                    response: Some("Bad Request: chat not found".to_string()),
                    duration_ms: 1,
                }),
                Behavior::Fail => Err(AppError::Internal {
                    source: anyhow::anyhow!("provider exploded"),
                }),
            }
        }

        fn name(&self) -> &'static str {
            "scripted"
        }
    }

    #[tokio::test]
    async fn test_deliver_success() {
        let provider = ScriptedProvider::new(Behavior::Accept);
        let notifier = Notifier::new(provider.clone());

        assert!(notifier.deliver("hello").await);
        assert_eq!(*provider.sent.lock().unwrap(), vec!["hello".to_string()]);
        assert_eq!(notifier.provider_name(), "scripted");
    }

    #[tokio::test]
    async fn test_deliver_rejected_is_false() {
        let notifier = Notifier::new(ScriptedProvider::new(Behavior::Reject));
        assert!(!notifier.deliver("hello").await);
    }

    #[tokio::test]
    async fn test_deliver_provider_error_is_false() {
        let notifier = Notifier::new(ScriptedProvider::new(Behavior::Fail));
        assert!(!notifier.deliver("hello").await);
    }
}
