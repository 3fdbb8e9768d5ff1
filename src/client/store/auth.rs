//! Session state: the token issued at sign-in and the signed-in profile.

use tokio::sync::watch;

use crate::{
    client::api::{ApiClient, ClientError},
    model::user::UserDto,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthEvent {
    #[default]
    SignedOut,
    SignedIn(UserDto),
}

pub struct AuthStore {
    api: ApiClient,
    user: Option<UserDto>,
    events: watch::Sender<AuthEvent>,
}

impl AuthStore {
    /// Creates a signed-out store. The token is stored on `api`, so clones of the client
    /// used elsewhere become authenticated on sign-in.
    pub fn new(api: ApiClient) -> Self {
        let (events, _) = watch::channel(AuthEvent::SignedOut);

        Self {
            api,
            user: None,
            events,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthEvent> {
        self.events.subscribe()
    }

    pub fn user(&self) -> Option<&UserDto> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<String> {
        self.api.token()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(UserDto::is_admin)
    }

    /// Exchanges a Google credential for a session.
    pub async fn sign_in_with_google(&mut self, credential: &str) -> Result<&UserDto, ClientError> {
        let session = self.api.google_login(credential).await?;

        self.api.set_token(Some(session.token));

        Ok(self.signed_in(session.user))
    }

    /// Restores a session from a previously issued token.
    ///
    /// A token the API rejects with 401 is discarded and the store signs out. Any other
    /// failure keeps the token so `restore` can be retried once the API is reachable.
    pub async fn restore(&mut self, token: &str) -> Result<&UserDto, ClientError> {
        self.api.set_token(Some(token.to_string()));

        match self.api.current_user().await {
            Ok(user) => Ok(self.signed_in(user)),
            Err(e) if e.status() == Some(401) => {
                tracing::warn!("Discarding stored session token: {}", e);
                self.sign_out();

                Err(e)
            }
            Err(e) => {
                tracing::warn!("Could not restore session, keeping token: {}", e);

                Err(e)
            }
        }
    }

    pub fn sign_out(&mut self) {
        self.api.set_token(None);
        self.user = None;
        self.events.send_replace(AuthEvent::SignedOut);
    }

    fn signed_in(&mut self, user: UserDto) -> &UserDto {
        self.events.send_replace(AuthEvent::SignedIn(user.clone()));

        self.user.insert(user)
    }
}
