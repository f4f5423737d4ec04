//! Auto-expiring notification queue.
//!
//! Toasts live in an actor-owned queue. Each push schedules a timer task
//! that sends the actor an expiry message for that toast, so expiry flows
//! through the same sequential message loop as every other mutation; there
//! is no shared mutable queue for timers to reach into. The timer tasks
//! hold only a weak sender, so an in-flight timer never keeps the service
//! alive past shutdown.

pub mod error;

pub use error::*;

use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument};

/// How long a toast stays up when the caller does not say.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

/// One live notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

enum NotifyRequest {
    Push {
        kind: ToastKind,
        message: String,
        duration: Duration,
        respond_to: oneshot::Sender<Result<u64, NotifyError>>,
    },
    Dismiss {
        id: u64,
        respond_to: oneshot::Sender<Result<(), NotifyError>>,
    },
    Active {
        respond_to: oneshot::Sender<Result<Vec<Toast>, NotifyError>>,
    },
    // Timer-driven; fires once per push and is a no-op for a toast that was
    // already dismissed.
    Expire {
        id: u64,
    },
}

/// Actor owning the live toast queue.
pub struct NotifyActor {
    receiver: mpsc::Receiver<NotifyRequest>,
    timer_sender: mpsc::WeakSender<NotifyRequest>,
    toasts: Vec<Toast>,
    next_id: u64,
}

impl NotifyActor {
    /// Creates the notification actor and its client.
    pub fn new() -> (Self, NotifyClient) {
        let (sender, receiver) = mpsc::channel(32);
        let actor = Self {
            receiver,
            timer_sender: sender.downgrade(),
            toasts: Vec::new(),
            next_id: 1,
        };
        (actor, NotifyClient { sender })
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        info!("Notification service started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                NotifyRequest::Push {
                    kind,
                    message,
                    duration,
                    respond_to,
                } => {
                    let id = self.next_id;
                    self.next_id += 1;
                    self.toasts.push(Toast { id, kind, message });
                    info!(id, ?kind, active = self.toasts.len(), "Toast pushed");

                    let timer = self.timer_sender.clone();
                    tokio::spawn(async move {
                        tokio::time::sleep(duration).await;
                        if let Some(sender) = timer.upgrade() {
                            let _ = sender.send(NotifyRequest::Expire { id }).await;
                        }
                    });

                    let _ = respond_to.send(Ok(id));
                }
                NotifyRequest::Dismiss { id, respond_to } => {
                    self.toasts.retain(|t| t.id != id);
                    debug!(id, active = self.toasts.len(), "Toast dismissed");
                    let _ = respond_to.send(Ok(()));
                }
                NotifyRequest::Active { respond_to } => {
                    let _ = respond_to.send(Ok(self.toasts.clone()));
                }
                NotifyRequest::Expire { id } => {
                    let before = self.toasts.len();
                    self.toasts.retain(|t| t.id != id);
                    if self.toasts.len() < before {
                        debug!(id, active = self.toasts.len(), "Toast expired");
                    }
                }
            }
        }

        info!("Notification service shutdown");
    }
}

/// Client for interacting with the notification actor.
#[derive(Clone)]
pub struct NotifyClient {
    sender: mpsc::Sender<NotifyRequest>,
}

impl NotifyClient {
    /// Pushes a toast with the default duration. Returns its id.
    #[instrument(skip(self, message))]
    pub async fn push(&self, kind: ToastKind, message: &str) -> Result<u64, NotifyError> {
        self.push_with_duration(kind, message, DEFAULT_TOAST_DURATION)
            .await
    }

    /// Pushes a toast that expires after `duration`.
    #[instrument(skip(self, message))]
    pub async fn push_with_duration(
        &self,
        kind: ToastKind,
        message: &str,
        duration: Duration,
    ) -> Result<u64, NotifyError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(NotifyRequest::Push {
                kind,
                message: message.to_string(),
                duration,
                respond_to,
            })
            .await
            .map_err(|_| NotifyError::ServiceClosed)?;
        response.await.map_err(|_| NotifyError::ServiceClosed)?
    }

    /// Removes a toast ahead of its expiry. Unknown ids are a no-op.
    #[instrument(skip(self))]
    pub async fn dismiss(&self, id: u64) -> Result<(), NotifyError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(NotifyRequest::Dismiss { id, respond_to })
            .await
            .map_err(|_| NotifyError::ServiceClosed)?;
        response.await.map_err(|_| NotifyError::ServiceClosed)?
    }

    /// The live toast queue, oldest first.
    #[instrument(skip(self))]
    pub async fn active(&self) -> Result<Vec<Toast>, NotifyError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(NotifyRequest::Active { respond_to })
            .await
            .map_err(|_| NotifyError::ServiceClosed)?;
        response.await.map_err(|_| NotifyError::ServiceClosed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn toast_expires_after_its_duration() {
        let (actor, client) = NotifyActor::new();
        tokio::spawn(actor.run());

        let id = client
            .push_with_duration(ToastKind::Success, "Saved", Duration::from_millis(10))
            .await
            .unwrap();

        let active = client.active().await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, id);
        assert_eq!(active[0].message, "Saved");

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(client.active().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn dismiss_beats_the_timer() {
        let (actor, client) = NotifyActor::new();
        tokio::spawn(actor.run());

        let id = client
            .push_with_duration(ToastKind::Info, "Heads up", Duration::from_millis(20))
            .await
            .unwrap();
        client.dismiss(id).await.unwrap();
        assert!(client.active().await.unwrap().is_empty());

        // The late expiry for the dismissed id must not disturb newer toasts.
        let keep = client
            .push_with_duration(ToastKind::Warning, "Still here", Duration::from_secs(60))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        let active = client.active().await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, keep);
    }

    #[tokio::test]
    async fn queue_keeps_push_order() {
        let (actor, client) = NotifyActor::new();
        tokio::spawn(actor.run());

        client.push(ToastKind::Info, "first").await.unwrap();
        client.push(ToastKind::Error, "second").await.unwrap();

        let active = client.active().await.unwrap();
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].message, "first");
        assert_eq!(active[1].message, "second");
    }
}
