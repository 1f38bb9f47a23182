//! # Client configuration (`notes.toml`)
//!
//! Defines where the notes backend lives and which path serves each
//! operation. Every field has a production default, so a missing or empty
//! file is equivalent to [`ClientConfig::default`].
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:4000/api/v1"
//!
//! [api.endpoints]
//! create = "/notes/createNote"
//! my_notes = "/notes/getMyNotes"
//! ```
//!
//! On native targets [`ClientConfig::load`] layers the defaults, an optional
//! `notes.toml` in the working directory and `NOTES_*` environment variables
//! (`NOTES_API__BASE_URL=...`).

use serde::{Deserialize, Serialize};

use crate::client::Operation;

pub const DEFAULT_BASE_URL: &str = "http://localhost:4000/api/v1";

/// Top-level configuration stored in `notes.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Backend location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub endpoints: Endpoints,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoints: Endpoints::default(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            endpoints: Endpoints::default(),
        }
    }

    /// Full URL for an operation, with the note id appended as the last
    /// path segment when the operation targets a single note.
    pub fn url(&self, operation: Operation, id: Option<&str>) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.endpoints.path(operation);
        let path = path.trim_end_matches('/');
        let separator = if path.starts_with('/') { "" } else { "/" };
        match id {
            Some(id) => format!("{base}{separator}{path}/{id}"),
            None => format!("{base}{separator}{path}"),
        }
    }
}

/// Path of every backend operation, relative to the base URL.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub create: String,
    pub my_notes: String,
    pub public_notes: String,
    pub get: String,
    pub update: String,
    pub delete: String,
    pub share: String,
    pub request_access: String,
    pub approve_access: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            create: "/notes/createNote".into(),
            my_notes: "/notes/getMyNotes".into(),
            public_notes: "/notes/getAllNotes".into(),
            get: "/notes/getNote".into(),
            update: "/notes/updateNote".into(),
            delete: "/notes/deleteNote".into(),
            share: "/notes/shareNote".into(),
            request_access: "/notes/requestAccess".into(),
            approve_access: "/notes/approveAccess".into(),
        }
    }
}

impl Endpoints {
    pub fn path(&self, operation: Operation) -> &str {
        match operation {
            Operation::Create => &self.create,
            Operation::ListMine => &self.my_notes,
            Operation::ListPublic => &self.public_notes,
            Operation::Get => &self.get,
            Operation::Update => &self.update,
            Operation::Delete => &self.delete,
            Operation::Share => &self.share,
            Operation::RequestAccess => &self.request_access,
            Operation::ApproveAccess => &self.approve_access,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig::new(base_url),
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "notes.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Defaults, then `notes.toml` if present, then `NOTES_*` variables.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, config::ConfigError> {
        use config::{File, FileFormat};

        Self::layered(
            File::with_name(Self::filename())
                .format(FileFormat::Toml)
                .required(false),
            Self::environment(),
        )
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn environment() -> config::Environment {
        config::Environment::with_prefix("NOTES")
            .prefix_separator("_")
            .separator("__")
    }

    /// Defaults overlaid with `file`, then `env`.
    #[cfg(not(target_arch = "wasm32"))]
    fn layered<S>(file: S, env: config::Environment) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .set_default("api.base_url", DEFAULT_BASE_URL)?
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}
