//! Client services.
//!
//! This module contains the API client and its typed route wrappers, the
//! session layer with its storage backends, and the settings that wire them
//! together.
//!
//! Services are independent of the page layer and usable on their own.

pub mod api;
pub mod api_client;
pub mod credentials;
pub mod session;
pub mod settings;

pub use api_client::{ApiClient, ClientConfig, RequestOptions, UploadForm};
pub use credentials::KeyringSessionStore;
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionManager, SessionStore};
pub use settings::{SessionBackend, Settings};
