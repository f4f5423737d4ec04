//! Mock session service: login, logout, current user.
//!
//! The credential check is a fixture-backed stand-in, not an auth mechanism:
//! any username present in the user directory signs in with the fixed demo
//! password. A short artificial latency stands in for the upstream round
//! trip the real system would make.

pub mod error;

pub use error::*;

use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

use crate::model::User;

/// The only password the demo directory accepts.
pub const DEMO_PASSWORD: &str = "demo";

/// Artificial latency applied to every login attempt.
pub const LOGIN_LATENCY: Duration = Duration::from_millis(500);

enum SessionRequest {
    Login {
        username: String,
        password: String,
        respond_to: oneshot::Sender<Result<User, SessionError>>,
    },
    Logout {
        respond_to: oneshot::Sender<Result<(), SessionError>>,
    },
    Current {
        respond_to: oneshot::Sender<Result<Option<User>, SessionError>>,
    },
}

/// Actor owning the user directory and the current session state.
///
/// Like the catalogs, it processes messages sequentially, so the current
/// session needs no lock. Unlike the catalogs it holds the one piece of
/// mutable state in the system: who is signed in.
pub struct SessionActor {
    receiver: mpsc::Receiver<SessionRequest>,
    directory: Vec<User>,
    current: Option<User>,
    latency: Duration,
}

impl SessionActor {
    /// Creates a session actor over the given user directory.
    pub fn new(directory: Vec<User>) -> (Self, SessionClient) {
        Self::with_latency(directory, LOGIN_LATENCY)
    }

    /// Same as [`SessionActor::new`] with an explicit login latency. Tests
    /// pass `Duration::ZERO`.
    pub fn with_latency(directory: Vec<User>, latency: Duration) -> (Self, SessionClient) {
        let (sender, receiver) = mpsc::channel(32);
        let actor = Self {
            receiver,
            directory,
            current: None,
            latency,
        };
        (actor, SessionClient { sender })
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        info!(users = self.directory.len(), "Session service started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SessionRequest::Login {
                    username,
                    password,
                    respond_to,
                } => {
                    debug!(%username, "Login");
                    tokio::time::sleep(self.latency).await;

                    let user = self.directory.iter().find(|u| u.username == username);
                    let result = match user {
                        Some(user) if password == DEMO_PASSWORD => {
                            self.current = Some(user.clone());
                            info!(%username, "Signed in");
                            Ok(user.clone())
                        }
                        // Same answer for a bad password and an unknown user.
                        _ => {
                            warn!(%username, "Rejected credentials");
                            Err(SessionError::InvalidCredentials)
                        }
                    };
                    let _ = respond_to.send(result);
                }
                SessionRequest::Logout { respond_to } => {
                    self.current = None;
                    info!("Signed out");
                    let _ = respond_to.send(Ok(()));
                }
                SessionRequest::Current { respond_to } => {
                    debug!(signed_in = self.current.is_some(), "Current");
                    let _ = respond_to.send(Ok(self.current.clone()));
                }
            }
        }

        info!("Session service shutdown");
    }
}

/// Client for interacting with the session actor.
#[derive(Clone)]
pub struct SessionClient {
    sender: mpsc::Sender<SessionRequest>,
}

impl SessionClient {
    /// Attempts to sign in. Fails with [`SessionError::InvalidCredentials`]
    /// for an unknown username or a wrong password, without saying which.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<User, SessionError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Login {
                username: username.to_string(),
                password: password.to_string(),
                respond_to,
            })
            .await
            .map_err(|_| SessionError::ServiceClosed)?;
        response.await.map_err(|_| SessionError::ServiceClosed)?
    }

    /// Clears the current session. Signing out while signed out is a no-op.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), SessionError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Logout { respond_to })
            .await
            .map_err(|_| SessionError::ServiceClosed)?;
        response.await.map_err(|_| SessionError::ServiceClosed)?
    }

    /// The currently signed-in user, if any.
    #[instrument(skip(self))]
    pub async fn current(&self) -> Result<Option<User>, SessionError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Current { respond_to })
            .await
            .map_err(|_| SessionError::ServiceClosed)?;
        response.await.map_err(|_| SessionError::ServiceClosed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    fn directory() -> Vec<User> {
        vec![User {
            id: "u-1".to_string(),
            username: "asmith".to_string(),
            first_name: "Alex".to_string(),
            last_name: "Smith".to_string(),
            email: "asmith@stockroom.example".to_string(),
            role: Role::Manager,
            store_number: "101".to_string(),
        }]
    }

    #[tokio::test]
    async fn login_logout_round_trip() {
        let (actor, client) = SessionActor::with_latency(directory(), Duration::ZERO);
        let handle = tokio::spawn(actor.run());

        assert!(client.current().await.unwrap().is_none());

        let user = client.login("asmith", DEMO_PASSWORD).await.unwrap();
        assert_eq!(user.username, "asmith");
        assert_eq!(
            client.current().await.unwrap().unwrap().username,
            "asmith"
        );

        client.logout().await.unwrap();
        assert!(client.current().await.unwrap().is_none());

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn bad_credentials_are_indistinguishable() {
        let (actor, client) = SessionActor::with_latency(directory(), Duration::ZERO);
        tokio::spawn(actor.run());

        let wrong_password = client.login("asmith", "hunter2").await;
        let unknown_user = client.login("nobody", DEMO_PASSWORD).await;

        assert_eq!(wrong_password, Err(SessionError::InvalidCredentials));
        assert_eq!(unknown_user, Err(SessionError::InvalidCredentials));
        assert!(client.current().await.unwrap().is_none());
    }
}
