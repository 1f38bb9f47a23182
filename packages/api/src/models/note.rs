//! # Note and access-grant models
//!
//! Wire types exchanged with the notes backend. Everything serialises as
//! camelCase JSON.
//!
//! ## [`Note`]
//!
//! A note as returned by the backend. The identifier is read from `id`, or
//! from `_id` when `id` is absent; a payload may carry both. `isPublic`
//! defaults to `false` (private) when the backend omits it. The owner is
//! either a bare user id or a populated user object ([`OwnerRef`]).
//!
//! ## [`NoteInput`]
//!
//! The body of create and update requests: `{title, content, isPublic}`, plus
//! an optional `courseId` that attaches a new note to a course.
//!
//! ## [`ShareRequest`] / [`Role`]
//!
//! The body of share and approve-access requests: `{userId, role}` where the
//! role is `"read"` or `"edit"`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque note identifier assigned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Drafts built locally may not have been assigned an id yet.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Owner of a note: a user id, or the user document when the backend
/// populates it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OwnerRef {
    Id(String),
    User(OwnerUser),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub mongo_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl OwnerRef {
    pub fn id(&self) -> Option<&str> {
        match self {
            OwnerRef::Id(id) => Some(id),
            OwnerRef::User(user) => user.id.as_deref().or(user.mongo_id.as_deref()),
        }
    }

    /// Full name, else email. A bare id has no display name.
    pub fn display_name(&self) -> Option<String> {
        let OwnerRef::User(user) = self else {
            return None;
        };
        let name = [user.first_name.as_deref(), user.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() {
            user.email.clone()
        } else {
            Some(name)
        }
    }
}

/// A note as stored by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawNote")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Private unless the backend says otherwise.
    pub is_public: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
}

/// Wire shape of [`Note`] before the identifier is settled.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNote {
    #[serde(default)]
    id: Option<NoteId>,
    #[serde(default, rename = "_id")]
    mongo_id: Option<NoteId>,
    title: String,
    content: String,
    #[serde(default)]
    is_public: bool,
    #[serde(default)]
    owner: Option<OwnerRef>,
    #[serde(default)]
    course_id: Option<String>,
}

impl TryFrom<RawNote> for Note {
    type Error = String;

    fn try_from(raw: RawNote) -> Result<Self, Self::Error> {
        let id = raw
            .id
            .filter(|id| !id.is_empty())
            .or(raw.mongo_id)
            .ok_or_else(|| "note has neither `id` nor `_id`".to_string())?;
        Ok(Note {
            id,
            title: raw.title,
            content: raw.content,
            is_public: raw.is_public,
            owner: raw.owner,
            course_id: raw.course_id,
        })
    }
}

impl Note {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: NoteId::new(id),
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    /// The editable fields of this note as an update payload.
    pub fn to_input(&self) -> NoteInput {
        NoteInput {
            title: self.title.clone(),
            content: self.content.clone(),
            is_public: self.is_public,
            course_id: None,
        }
    }
}

/// Payload for create and update requests.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteInput {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
}

impl NoteInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    pub fn with_course(mut self, course_id: impl Into<String>) -> Self {
        self.course_id = Some(course_id.into());
        self
    }

    /// JSON request body.
    pub fn to_body(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Role granted to another user on a note.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Read,
    Edit,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Read => "read",
            Role::Edit => "edit",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role {0:?}, expected \"read\" or \"edit\"")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "read" => Ok(Role::Read),
            "edit" => Ok(Role::Edit),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

/// Body of share and approve-access requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareRequest {
    pub user_id: String,
    pub role: Role,
}

impl ShareRequest {
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }

    /// JSON request body.
    pub fn to_body(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// List endpoints answer with either a bare array or `{"notes": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum NoteList {
    Bare(Vec<Note>),
    Wrapped { notes: Vec<Note> },
}

impl From<NoteList> for Vec<Note> {
    fn from(list: NoteList) -> Self {
        match list {
            NoteList::Bare(notes) | NoteList::Wrapped { notes } => notes,
        }
    }
}

/// Single-note endpoints answer with either a bare note or `{"note": {...}}`.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum NoteEnvelope {
    Bare(Note),
    Wrapped { note: Note },
}

impl From<NoteEnvelope> for Note {
    fn from(envelope: NoteEnvelope) -> Self {
        match envelope {
            NoteEnvelope::Bare(note) | NoteEnvelope::Wrapped { note } => note,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_note_defaults_to_private() {
        let note: Note =
            serde_json::from_value(json!({"id": "1", "title": "A", "content": "x"})).unwrap();
        assert_eq!(note.id, NoteId::new("1"));
        assert!(!note.is_public);
        assert!(note.owner.is_none());
    }

    #[test]
    fn test_note_accepts_mongo_id() {
        let note: Note = serde_json::from_value(json!({
            "_id": "64f0",
            "title": "A",
            "content": "x",
            "isPublic": true,
            "owner": "u1"
        }))
        .unwrap();
        assert_eq!(note.id.as_str(), "64f0");
        assert!(note.is_public);
        assert_eq!(note.owner.as_deref(), Some("u1"));
    }

    #[test]
    fn test_note_with_both_id_keys() {
        let note: Note = serde_json::from_value(json!({
            "_id": "64f0",
            "id": "64f0",
            "title": "A",
            "content": "x"
        }))
        .unwrap();
        assert_eq!(note.id.as_str(), "64f0");
    }

    #[test]
    fn test_note_without_any_id_is_rejected() {
        let err = serde_json::from_value::<Note>(json!({"title": "A", "content": "x"}));
        assert!(err.is_err());
    }

    #[test]
    fn test_populated_owner() {
        let notes: NoteList = serde_json::from_value(json!([
            {"id": "1", "title": "A", "content": "x", "owner": {"_id": "u1", "firstName": "Ann"}},
            {"id": "2", "title": "B", "content": "y", "owner": "u2"}
        ]))
        .unwrap();
        let notes = Vec::<Note>::from(notes);

        let populated = notes[0].owner.as_ref().unwrap();
        assert_eq!(populated.id(), Some("u1"));
        assert_eq!(populated.display_name().as_deref(), Some("Ann"));

        let bare = notes[1].owner.as_ref().unwrap();
        assert_eq!(bare, &OwnerRef::Id("u2".into()));
        assert_eq!(bare.display_name(), None);
    }

    #[test]
    fn test_owner_display_name_falls_back_to_email() {
        let owner = OwnerRef::User(OwnerUser {
            email: Some("ann@example.org".into()),
            last_name: Some(" ".into()),
            ..OwnerUser::default()
        });
        assert_eq!(owner.display_name().as_deref(), Some("ann@example.org"));
    }

    #[test]
    fn test_note_requires_title_and_content() {
        let missing = serde_json::from_value::<Note>(json!({"id": "1", "title": "A"}));
        assert!(missing.is_err());
    }

    #[test]
    fn test_note_input_body() {
        let body = NoteInput::new("New", "C").public(true).to_body();
        assert_eq!(body, json!({"title": "New", "content": "C", "isPublic": true}));

        let body = NoteInput::new("T", "").with_course("c9").to_body();
        assert_eq!(body["courseId"], "c9");
        assert_eq!(body["isPublic"], false);
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!(" Read ".parse::<Role>(), Ok(Role::Read));
        assert_eq!("EDIT".parse::<Role>(), Ok(Role::Edit));
        assert!("".parse::<Role>().is_err());
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_share_request_body() {
        let body = ShareRequest::new("u2", Role::Edit).to_body();
        assert_eq!(body, json!({"userId": "u2", "role": "edit"}));
    }

    #[test]
    fn test_note_list_shapes() {
        let bare: NoteList =
            serde_json::from_value(json!([{"id": "1", "title": "A", "content": ""}])).unwrap();
        assert_eq!(Vec::<Note>::from(bare).len(), 1);

        let wrapped: NoteList = serde_json::from_value(json!({
            "success": true,
            "notes": [{"id": "1", "title": "A", "content": ""}, {"id": "2", "title": "B", "content": ""}]
        }))
        .unwrap();
        assert_eq!(Vec::<Note>::from(wrapped).len(), 2);
    }

    #[test]
    fn test_note_envelope_shapes() {
        let wrapped: NoteEnvelope = serde_json::from_value(json!({
            "success": true,
            "note": {"id": "7", "title": "T", "content": "C"}
        }))
        .unwrap();
        assert_eq!(Note::from(wrapped).id.as_str(), "7");
    }
}
