use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use lapin::options::{BasicPublishOptions, ConfirmSelectOptions, QueueDeclareOptions};
use lapin::publisher_confirm::Confirmation;
use lapin::types::FieldTable;
use lapin::{BasicProperties, Channel, Connection, ConnectionProperties};
use log::debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProducerError {
    #[error(transparent)]
    Amqp(#[from] lapin::Error),
    #[error("broker rejected message for {0}")]
    Rejected(String),
    #[error("broker did not confirm message for {0}")]
    Unconfirmed(String),
}

/// Publisher confirms are enabled on the channel, so anything but an ack
/// means the message may be lost.
fn ensure_acked(queue: &str, confirmation: Confirmation) -> Result<(), ProducerError> {
    match confirmation {
        Confirmation::Ack(_) => Ok(()),
        Confirmation::Nack(_) => Err(ProducerError::Rejected(queue.to_string())),
        Confirmation::NotRequested => Err(ProducerError::Unconfirmed(queue.to_string())),
    }
}

#[async_trait]
pub trait MessageProducer: Send + Sync {
    /// Publishes `message` to the durable queue named `queue`.
    async fn send_message(&self, queue: &str, message: &str) -> Result<(), ProducerError>;
}

pub struct AmqpProducer {
    // Held so the connection stays open for the channel's lifetime.
    _connection: Connection,
    channel: Channel,
}

impl AmqpProducer {
    pub async fn connect(uri: &str) -> Result<Self, ProducerError> {
        let connection = Connection::connect(uri, ConnectionProperties::default()).await?;
        let channel = connection.create_channel().await?;
        channel
            .confirm_select(ConfirmSelectOptions::default())
            .await?;
        Ok(Self {
            _connection: connection,
            channel,
        })
    }
}

#[async_trait]
impl MessageProducer for AmqpProducer {
    async fn send_message(&self, queue: &str, message: &str) -> Result<(), ProducerError> {
        self.channel
            .queue_declare(
                queue,
                QueueDeclareOptions {
                    durable: true,
                    ..QueueDeclareOptions::default()
                },
                FieldTable::default(),
            )
            .await?;
        let confirmation = self
            .channel
            .basic_publish(
                "",
                queue,
                BasicPublishOptions::default(),
                message.as_bytes(),
                BasicProperties::default(),
            )
            .await?
            .await?;
        ensure_acked(queue, confirmation)?;
        debug!("Published {} bytes to {}", message.len(), queue);
        Ok(())
    }
}

/// Keeps every published message in memory instead of sending it anywhere.
#[derive(Default)]
pub struct MemoryProducer {
    messages: Mutex<Vec<(String, String)>>,
}

impl MemoryProducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Published `(queue, message)` pairs in publish order.
    pub fn messages(&self) -> Vec<(String, String)> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl MessageProducer for MemoryProducer {
    async fn send_message(&self, queue: &str, message: &str) -> Result<(), ProducerError> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((queue.to_string(), message.to_string()));
        Ok(())
    }
}
