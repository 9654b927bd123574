//! Local session and identity store.
//!
//! Owns the list of identities registered in this profile and the single
//! active session. All state lives behind a [`KeyValueStorage`]; every
//! mutating call is written through before it returns.

pub mod error;
pub mod recovery_code;
pub mod registration;
pub mod session_store;
pub mod storage;
mod validation;

pub use error::{Result as SessionResult, SessionError};
pub use recovery_code::{CodeSource, RecoveryCodeGenerator, mask_code};
pub use registration::Registration;
pub use session_store::{SESSION_KEY, SessionStore, USERS_KEY};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
