use crate::recovery_code::{CodeSource, RecoveryCodeGenerator, mask_code};
use crate::validation::{is_valid_email, require_trimmed};
use crate::{KeyValueStorage, Registration, SessionError, SessionResult};

use sc_config::Config;
use sc_core::{Identity, LoginMethod, Session};

use log::{debug, info, warn};

/// Key of the ordered identities record.
pub const USERS_KEY: &str = "sharecar_users";
/// Key of the active session record.
pub const SESSION_KEY: &str = "sharecar_session";

const MAX_CODE_ATTEMPTS: usize = 5;

/// Registered identities and the single active session of one profile.
///
/// Records are loaded on every access and written back before a mutating
/// call returns, so two stores over the same storage always agree.
///
/// Name and wallet logins only check that the identity exists; they are a
/// convenience for local demos and authenticate nothing.
pub struct SessionStore<S, C = RecoveryCodeGenerator> {
    storage: S,
    codes: C,
    require_email: bool,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_code_source(storage, RecoveryCodeGenerator::default())
    }

    /// Store configured from the `[recovery]` and `[registration]` sections.
    pub fn from_config(storage: S, config: &Config) -> Self {
        Self::with_code_source(storage, RecoveryCodeGenerator::from(&config.recovery))
            .require_email(config.registration.require_email)
    }
}

impl<S: KeyValueStorage, C: CodeSource> SessionStore<S, C> {
    pub fn with_code_source(storage: S, codes: C) -> Self {
        Self {
            storage,
            codes,
            require_email: false,
        }
    }

    pub fn require_email(mut self, require: bool) -> Self {
        self.require_email = require;
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Registers a new identity and returns its freshly drawn recovery code.
    pub fn register(&self, name: &str, email: Option<&str>) -> SessionResult<Registration> {
        let name = require_trimmed("name", name, "Name is required")?;
        let email = self.normalize_email(email)?;

        let mut identities = self.load_identities()?;

        if identities.iter().any(|identity| identity.has_name(name)) {
            return Err(SessionError::duplicate("name", name));
        }

        if let Some(email) = email
            && identities.iter().any(|identity| identity.has_email(email))
        {
            return Err(SessionError::duplicate("email", email));
        }

        let recovery_code = self.draw_unused_code(&identities)?;

        identities.push(Identity::new(
            name.to_string(),
            email.map(str::to_string),
            recovery_code.clone(),
        ));
        self.save_identities(&identities)?;

        info!(
            "Registered identity '{name}' (recovery code {})",
            mask_code(&recovery_code)
        );

        Ok(Registration {
            name: name.to_string(),
            recovery_code,
        })
    }

    // =========================================================================
    // Login
    // =========================================================================

    /// Opens a session for an existing identity, by name alone.
    pub fn login_with_name(&self, name: &str) -> SessionResult<Session> {
        let identity = self.find_by_name(name)?;
        self.open_session(identity, LoginMethod::Name)
    }

    /// Opens a session after the caller completed a wallet handshake.
    ///
    /// The handshake itself is not re-validated here.
    pub fn login_with_wallet(&self, name: &str) -> SessionResult<Session> {
        let identity = self.find_by_name(name)?;
        self.open_session(identity, LoginMethod::Wallet)
    }

    /// Opens a session for the identity holding exactly `code`.
    ///
    /// Surrounding whitespace is ignored; the match is case-sensitive.
    pub fn login_with_recovery_code(&self, code: &str) -> SessionResult<Session> {
        let code = require_trimmed("recovery_code", code, "Recovery code is required")?;

        let identity = self
            .load_identities()?
            .into_iter()
            .find(|identity| identity.recovery_code == code)
            .ok_or_else(SessionError::invalid_credential)?;

        self.open_session(identity, LoginMethod::Recovery)
    }

    /// Opens a session when `name` and `code` belong to the same identity.
    ///
    /// Any mismatch is reported as the same generic credential failure.
    pub fn login_with_credentials(&self, name: &str, code: &str) -> SessionResult<Session> {
        let name = require_trimmed("name", name, "Name is required")?;
        let code = require_trimmed("recovery_code", code, "Recovery code is required")?;

        let identity = self
            .load_identities()?
            .into_iter()
            .find(|identity| identity.has_name(name) && identity.recovery_code == code)
            .ok_or_else(SessionError::invalid_credential)?;

        self.open_session(identity, LoginMethod::Recovery)
    }

    /// Ends the active session. A no-op when nobody is logged in.
    pub fn logout(&self) -> SessionResult<()> {
        self.storage.delete(SESSION_KEY)?;
        info!("Session cleared");
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The active session, if any.
    pub fn current_session(&self) -> SessionResult<Option<Session>> {
        let Some(contents) = self.storage.get(SESSION_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str::<Session>(&contents) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                warn!("Ignoring unreadable session record: {e}");
                Ok(None)
            }
        }
    }

    /// Name bound to the active session, `None` when logged out.
    pub fn current_user(&self) -> SessionResult<Option<String>> {
        Ok(self.current_session()?.map(|session| session.name))
    }

    pub fn is_authenticated(&self) -> SessionResult<bool> {
        Ok(self.current_user()?.is_some())
    }

    /// Registered names, in registration order.
    pub fn registered_names(&self) -> SessionResult<Vec<String>> {
        Ok(self
            .load_identities()?
            .into_iter()
            .map(|identity| identity.name)
            .collect())
    }

    pub fn user_exists(&self, name: &str) -> SessionResult<bool> {
        let name = name.trim();
        Ok(self
            .load_identities()?
            .iter()
            .any(|identity| identity.has_name(name)))
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn normalize_email<'a>(&self, email: Option<&'a str>) -> SessionResult<Option<&'a str>> {
        let email = email.map(str::trim).filter(|email| !email.is_empty());

        match email {
            None if self.require_email => {
                Err(SessionError::validation("email", "Email is required"))
            }
            Some(email) if !is_valid_email(email) => {
                Err(SessionError::validation("email", "Invalid email address"))
            }
            email => Ok(email),
        }
    }

    fn find_by_name(&self, name: &str) -> SessionResult<Identity> {
        let name = require_trimmed("name", name, "Name is required")?;

        self.load_identities()?
            .into_iter()
            .find(|identity| identity.has_name(name))
            .ok_or_else(|| SessionError::not_found(name))
    }

    fn open_session(&self, identity: Identity, method: LoginMethod) -> SessionResult<Session> {
        let session = Session::new(identity.name, method);
        let json = serde_json::to_string(&session)?;
        self.storage.set(SESSION_KEY, &json)?;

        info!("Session opened for '{}' via {}", session.name, method);
        Ok(session)
    }

    fn draw_unused_code(&self, identities: &[Identity]) -> SessionResult<String> {
        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = self.codes.next_code();
            if !identities.iter().any(|identity| identity.recovery_code == code) {
                return Ok(code);
            }
            debug!("Recovery code collision on attempt {attempt}, redrawing");
        }

        Err(SessionError::recovery_code_exhausted(MAX_CODE_ATTEMPTS))
    }

    fn load_identities(&self) -> SessionResult<Vec<Identity>> {
        let Some(contents) = self.storage.get(USERS_KEY)? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&contents)
            .map_err(|e| SessionError::corrupted(USERS_KEY, e.to_string()))
    }

    fn save_identities(&self, identities: &[Identity]) -> SessionResult<()> {
        let json = serde_json::to_string(identities)?;
        self.storage.set(USERS_KEY, &json)
    }
}
