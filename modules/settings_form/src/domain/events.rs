/// Admin notices for the settings form service
///
/// A successful section-scoped save reports a non-fatal "settings updated"
/// notice for display. Publishing is fire-and-forget: failures are logged
/// by the caller, never surfaced to the admin.
use crate::contract::AdminNotice;
use async_trait::async_trait;
use parking_lot::Mutex;

/// Notice collaborator the host uses to surface admin feedback.
#[async_trait]
pub trait NoticeSink: Send + Sync {
    /// Report a notice for display.
    async fn publish(&self, notice: AdminNotice) -> anyhow::Result<()>;
}

/// No-op sink for testing or when notices are disabled.
pub struct NoOpNoticeSink;

#[async_trait]
impl NoticeSink for NoOpNoticeSink {
    async fn publish(&self, _notice: AdminNotice) -> anyhow::Result<()> {
        // No-op: notices are not displayed
        Ok(())
    }
}

/// Collecting sink that keeps notices in memory for later inspection.
#[derive(Default)]
pub struct MemoryNoticeSink {
    notices: Mutex<Vec<AdminNotice>>,
}

impl MemoryNoticeSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all collected notices, clearing the buffer.
    pub fn drain(&self) -> Vec<AdminNotice> {
        std::mem::take(&mut *self.notices.lock())
    }

    /// Messages of all collected notices, in publish order.
    pub fn messages(&self) -> Vec<String> {
        self.notices
            .lock()
            .iter()
            .map(|notice| notice.message.clone())
            .collect()
    }
}

#[async_trait]
impl NoticeSink for MemoryNoticeSink {
    async fn publish(&self, notice: AdminNotice) -> anyhow::Result<()> {
        self.notices.lock().push(notice);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::NoticeKind;

    #[tokio::test]
    async fn noop_sink_accepts_notices() {
        let sink = NoOpNoticeSink;
        let result = sink.publish(AdminNotice::updated("Settings updated.")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn memory_sink_collects_in_order() {
        let sink = MemoryNoticeSink::new();
        sink.publish(AdminNotice::updated("first"))
            .await
            .ok();
        sink.publish(AdminNotice::updated("second"))
            .await
            .ok();

        assert_eq!(sink.messages(), vec!["first", "second"]);

        let drained = sink.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].kind, NoticeKind::Updated);
        assert!(sink.messages().is_empty());
    }
}
