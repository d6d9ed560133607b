//! In-memory collaborators for tests across the workspace.

use anyhow::{bail, Result};
use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::traits::ReplySink;
use crate::types::MessageRef;

/// A reply captured by `RecordingSink`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentReply {
    pub channel_id: String,
    pub text: String,
    pub reference: MessageRef,
}

/// `ReplySink` that records every reply instead of sending it.
#[derive(Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<SentReply>>,
    fail: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every send fails (still records the attempt).
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub async fn sent(&self) -> Vec<SentReply> {
        self.sent.lock().await.clone()
    }

    pub async fn texts(&self) -> Vec<String> {
        self.sent.lock().await.iter().map(|r| r.text.clone()).collect()
    }
}

#[async_trait]
impl ReplySink for RecordingSink {
    async fn send_reply(&self, channel_id: &str, text: &str, reference: &MessageRef) -> Result<()> {
        self.sent.lock().await.push(SentReply {
            channel_id: channel_id.to_string(),
            text: text.to_string(),
            reference: reference.clone(),
        });
        if self.fail {
            bail!("send to {} rejected", channel_id);
        }
        Ok(())
    }
}
