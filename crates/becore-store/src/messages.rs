//! The contact inbox.
//!
//! Unlike the site document, every mutation here is written through to
//! storage straight away. A failed write is returned to the caller but the
//! in-memory list keeps the change, so the next successful write carries it.

use std::sync::Arc;

use becore_shared::constants::MESSAGES_KEY;
use becore_shared::{Message, MessageStatus, NewMessage};
use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use tracing::{debug, info};

use crate::backend::{read_json, write_json, KeyValueStore};
use crate::error::Result;

/// Inbox totals shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxStats {
    pub total: usize,
    pub unread: usize,
    pub read: usize,
    pub replied: usize,
    /// Messages dated in the same calendar month as the reference day.
    pub this_month: usize,
}

pub struct MessageStore {
    storage: Arc<dyn KeyValueStore>,
    messages: Vec<Message>,
}

impl MessageStore {
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let messages = Self::load_messages(storage.as_ref());
        debug!(count = messages.len(), "loaded inbox");
        Self { storage, messages }
    }

    /// Read the persisted inbox. Missing or malformed data yields an empty
    /// list.
    pub fn load_messages(storage: &dyn KeyValueStore) -> Vec<Message> {
        read_json(storage, MESSAGES_KEY).unwrap_or_default()
    }

    /// Newest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn get(&self, id: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.id.as_str() == id)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Record a submission dated today (local time).
    pub fn add_message(&mut self, input: NewMessage) -> Result<Message> {
        self.add_message_on(input, Local::now().date_naive())
    }

    /// Record a submission with an explicit date.
    pub fn add_message_on(&mut self, input: NewMessage, date: NaiveDate) -> Result<Message> {
        let message = Message::from_submission(input, date);
        self.messages.insert(0, message.clone());
        self.persist()?;
        info!(id = %message.id, "message received");
        Ok(message)
    }

    /// Returns `false` if no message has this id.
    pub fn mark_as_read(&mut self, id: &str) -> Result<bool> {
        self.set_status(id, MessageStatus::Read)
    }

    /// Returns `false` if no message has this id.
    pub fn mark_as_replied(&mut self, id: &str) -> Result<bool> {
        self.set_status(id, MessageStatus::Replied)
    }

    /// Returns `false` if no message has this id.
    pub fn delete_message(&mut self, id: &str) -> Result<bool> {
        let Some(pos) = self.messages.iter().position(|m| m.id.as_str() == id) else {
            debug!(id, "delete of unknown message ignored");
            return Ok(false);
        };
        self.messages.remove(pos);
        self.persist()?;
        info!(id, "message deleted");
        Ok(true)
    }

    pub fn unread_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_unread()).count()
    }

    /// Case-insensitive substring search over name, subject and email.
    pub fn search(&self, term: &str) -> Vec<&Message> {
        let needle = term.to_lowercase();
        self.messages.iter().filter(|m| m.matches(&needle)).collect()
    }

    pub fn stats(&self, today: NaiveDate) -> InboxStats {
        let mut stats = InboxStats {
            total: self.messages.len(),
            ..InboxStats::default()
        };

        for message in &self.messages {
            match message.status {
                MessageStatus::Unread => stats.unread += 1,
                MessageStatus::Read => stats.read += 1,
                MessageStatus::Replied => stats.replied += 1,
            }
            if message.date.year() == today.year() && message.date.month() == today.month() {
                stats.this_month += 1;
            }
        }
        stats
    }

    fn set_status(&mut self, id: &str, status: MessageStatus) -> Result<bool> {
        let Some(message) = self.messages.iter_mut().find(|m| m.id.as_str() == id) else {
            debug!(id, %status, "status change for unknown message ignored");
            return Ok(false);
        };
        // Statuses only move forward; reading a replied message keeps it replied.
        if status == MessageStatus::Read && message.status == MessageStatus::Replied {
            debug!(id, "message already replied, status kept");
            return Ok(true);
        }
        message.status = status;
        self.persist()?;
        debug!(id, %status, "message status changed");
        Ok(true)
    }

    fn persist(&self) -> Result<()> {
        write_json(self.storage.as_ref(), MESSAGES_KEY, &self.messages)
    }
}
