//! # NotesClient: one method per backend operation
//!
//! Every operation issues exactly one request through the [`Transport`],
//! then reports the outcome through the [`Notifier`]:
//!
//! - mutations (create, update, delete, share, request/approve access)
//!   announce success; reads are silent on success;
//! - every failure produces exactly one error notification, using the
//!   server's `message`/`error` field when present and a fixed
//!   per-operation fallback otherwise.
//!
//! The failure is then returned as a [`NotesError`]. There is no retry and no
//! timeout layer.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::NotesError;
use crate::models::{Note, NoteEnvelope, NoteId, NoteInput, NoteList, ShareRequest};
use crate::notify::Notifier;
use crate::transport::{Method, Transport};

/// Backend operations, each bound to one endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    ListMine,
    ListPublic,
    Get,
    Update,
    Delete,
    Share,
    RequestAccess,
    ApproveAccess,
}

impl Operation {
    pub fn method(self) -> Method {
        match self {
            Operation::ListMine | Operation::ListPublic | Operation::Get => Method::Get,
            Operation::Update => Method::Put,
            Operation::Delete => Method::Delete,
            Operation::Create
            | Operation::Share
            | Operation::RequestAccess
            | Operation::ApproveAccess => Method::Post,
        }
    }

    /// Shown after a successful mutation. Reads have none.
    pub fn success_message(self) -> Option<&'static str> {
        match self {
            Operation::Create => Some("Note created successfully"),
            Operation::Update => Some("Note updated"),
            Operation::Delete => Some("Note deleted"),
            Operation::Share => Some("Note shared"),
            Operation::RequestAccess => Some("Access requested"),
            Operation::ApproveAccess => Some("Access approved"),
            Operation::ListMine | Operation::ListPublic | Operation::Get => None,
        }
    }

    /// Shown on failure when the server did not supply a message.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Create => "Failed to create note",
            Operation::ListMine => "Failed to fetch your notes",
            Operation::ListPublic => "Failed to fetch public notes",
            Operation::Get => "Failed to fetch note",
            Operation::Update => "Failed to update note",
            Operation::Delete => "Failed to delete note",
            Operation::Share => "Failed to share note",
            Operation::RequestAccess => "Failed to request access",
            Operation::ApproveAccess => "Failed to approve access",
        }
    }

    pub fn is_mutation(self) -> bool {
        self.success_message().is_some()
    }
}

/// Typed wrapper around the notes REST API.
#[derive(Clone, Debug)]
pub struct NotesClient<T, N> {
    transport: T,
    notifier: N,
    config: ApiConfig,
}

impl<T: Transport, N: Notifier> NotesClient<T, N> {
    pub fn new(transport: T, notifier: N, config: ApiConfig) -> Self {
        Self {
            transport,
            notifier,
            config,
        }
    }

    /// Full URL the client uses for `operation`.
    pub fn url(&self, operation: Operation, id: Option<&NoteId>) -> String {
        self.config.url(operation, id.map(NoteId::as_str))
    }

    /// Create a note.
    pub async fn create_note(&self, input: &NoteInput) -> Result<Note, NotesError> {
        self.fetch::<NoteEnvelope>(Operation::Create, None, Some(input.to_body()))
            .await
            .map(Note::from)
    }

    /// Notes owned by the current user.
    pub async fn my_notes(&self) -> Result<Vec<Note>, NotesError> {
        self.fetch::<NoteList>(Operation::ListMine, None, None)
            .await
            .map(Vec::from)
    }

    /// Every public note.
    pub async fn public_notes(&self) -> Result<Vec<Note>, NotesError> {
        self.fetch::<NoteList>(Operation::ListPublic, None, None)
            .await
            .map(Vec::from)
    }

    /// A single note by id.
    pub async fn note(&self, id: &NoteId) -> Result<Note, NotesError> {
        self.fetch::<NoteEnvelope>(Operation::Get, Some(id), None)
            .await
            .map(Note::from)
    }

    /// Replace the title, content and visibility of a note.
    pub async fn update_note(&self, id: &NoteId, input: &NoteInput) -> Result<Note, NotesError> {
        let body = NoteInput {
            course_id: None,
            ..input.clone()
        };
        self.fetch::<NoteEnvelope>(Operation::Update, Some(id), Some(body.to_body()))
            .await
            .map(Note::from)
    }

    pub async fn delete_note(&self, id: &NoteId) -> Result<Value, NotesError> {
        self.dispatch(Operation::Delete, Some(id), None).await
    }

    /// Grant another user a role on a note.
    pub async fn share_note(&self, id: &NoteId, request: &ShareRequest) -> Result<Value, NotesError> {
        self.dispatch(Operation::Share, Some(id), Some(request.to_body()))
            .await
    }

    /// Ask the owner of a note for access.
    pub async fn request_access(&self, id: &NoteId) -> Result<Value, NotesError> {
        self.dispatch(Operation::RequestAccess, Some(id), None).await
    }

    /// Approve a pending access request.
    pub async fn approve_access(
        &self,
        id: &NoteId,
        request: &ShareRequest,
    ) -> Result<Value, NotesError> {
        self.dispatch(Operation::ApproveAccess, Some(id), Some(request.to_body()))
            .await
    }

    /// Issue the request and notify. Returns the raw response body.
    async fn dispatch(
        &self,
        operation: Operation,
        id: Option<&NoteId>,
        body: Option<Value>,
    ) -> Result<Value, NotesError> {
        let url = self.url(operation, id);
        let method = operation.method();
        tracing::debug!("{:?}: {} {}", operation, method, url);

        match self.transport.call(method, &url, body).await {
            Ok(value) => {
                if let Some(message) = operation.success_message() {
                    self.notifier.success(message);
                }
                Ok(value)
            }
            Err(err) => {
                let err = NotesError::from(err);
                tracing::warn!("{:?} failed: {}", operation, err);
                self.notifier
                    .error(err.server_message().unwrap_or(operation.failure_message()));
                Err(err)
            }
        }
    }

    /// [`dispatch`](Self::dispatch), then decode the body.
    async fn fetch<D: DeserializeOwned>(
        &self,
        operation: Operation,
        id: Option<&NoteId>,
        body: Option<Value>,
    ) -> Result<D, NotesError> {
        let value = self.dispatch(operation, id, body).await?;
        serde_json::from_value(value).map_err(|e| {
            tracing::warn!("{:?} returned an unexpected body: {}", operation, e);
            // A mutation has already been announced as successful.
            if !operation.is_mutation() {
                self.notifier.error(operation.failure_message());
            }
            NotesError::Decode(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::notify::RecordingNotifier;
    use crate::transport::MockTransport;
    use serde_json::json;

    const BASE: &str = "http://api.test/v1";

    fn client() -> (
        NotesClient<MockTransport, RecordingNotifier>,
        MockTransport,
        RecordingNotifier,
    ) {
        let transport = MockTransport::new();
        let notifier = RecordingNotifier::new();
        let client = NotesClient::new(transport.clone(), notifier.clone(), ApiConfig::new(BASE));
        (client, transport, notifier)
    }

    fn note_json(id: &str, title: &str) -> Value {
        json!({"id": id, "title": title, "content": "", "isPublic": false})
    }

    #[tokio::test]
    async fn test_my_notes_is_silent_on_success() {
        let (client, transport, notifier) = client();
        transport.reply_ok(
            Method::Get,
            format!("{BASE}/notes/getMyNotes"),
            json!([note_json("1", "A"), note_json("2", "B")]),
        );

        let notes = client.my_notes().await.unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[1].title, "B");
        assert_eq!(transport.request_count(), 1);
        assert!(notifier.all().is_empty());
    }

    #[tokio::test]
    async fn test_public_notes_accepts_wrapped_list() {
        let (client, transport, _) = client();
        transport.reply_ok(
            Method::Get,
            format!("{BASE}/notes/getAllNotes"),
            json!({"success": true, "notes": [note_json("9", "Shared")]}),
        );

        let notes = client.public_notes().await.unwrap();
        assert_eq!(notes, vec![Note::new("9", "Shared", "")]);
    }

    #[tokio::test]
    async fn test_list_failure_notifies_once() {
        let (client, transport, notifier) = client();
        transport.reply_status(Method::Get, format!("{BASE}/notes/getMyNotes"), 500, None);

        let err = client.my_notes().await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(notifier.errors(), vec!["Failed to fetch your notes"]);
        assert!(notifier.successes().is_empty());
    }

    #[tokio::test]
    async fn test_network_failure_uses_fallback() {
        let (client, _, notifier) = client();

        // Nothing scripted: the mock fails like an unreachable host.
        let err = client.public_notes().await.unwrap_err();
        assert!(matches!(err, NotesError::Network(_)));
        assert_eq!(notifier.errors(), vec!["Failed to fetch public notes"]);
    }

    #[tokio::test]
    async fn test_read_decode_failure_notifies() {
        let (client, transport, notifier) = client();
        transport.reply_ok(Method::Get, format!("{BASE}/notes/getMyNotes"), json!("oops"));

        let err = client.my_notes().await.unwrap_err();
        assert!(matches!(err, NotesError::Decode(_)));
        assert_eq!(notifier.errors(), vec!["Failed to fetch your notes"]);
    }

    #[tokio::test]
    async fn test_create_note() {
        let (client, transport, notifier) = client();
        let url = format!("{BASE}/notes/createNote");
        transport.reply_ok(Method::Post, url.clone(), note_json("5", "Lecture 1"));

        let input = NoteInput::new("Lecture 1", "").with_course("course-7");
        let note = client.create_note(&input).await.unwrap();
        assert_eq!(note.id.as_str(), "5");

        let sent = transport.requests_to(Method::Post, &url);
        assert_eq!(
            sent[0].body,
            Some(json!({"title": "Lecture 1", "content": "", "isPublic": false, "courseId": "course-7"}))
        );
        assert_eq!(notifier.successes(), vec!["Note created successfully"]);
    }

    #[tokio::test]
    async fn test_create_note_surfaces_server_message() {
        let (client, transport, notifier) = client();
        transport.reply_status(
            Method::Post,
            format!("{BASE}/notes/createNote"),
            400,
            Some(json!({"success": false, "error": "Title is required"})),
        );

        let err = client.create_note(&NoteInput::new("", "")).await.unwrap_err();
        assert_eq!(err.server_message(), Some("Title is required"));
        assert_eq!(notifier.errors(), vec!["Title is required"]);
    }

    #[tokio::test]
    async fn test_get_single_note() {
        let (client, transport, notifier) = client();
        transport.reply_ok(
            Method::Get,
            format!("{BASE}/notes/getNote/3"),
            json!({"note": note_json("3", "C")}),
        );

        let note = client.note(&NoteId::new("3")).await.unwrap();
        assert_eq!(note.title, "C");
        assert!(notifier.all().is_empty());
    }

    #[tokio::test]
    async fn test_update_note_sends_one_put() {
        let (client, transport, notifier) = client();
        let url = format!("{BASE}/notes/updateNote/1");
        transport.reply_ok(
            Method::Put,
            url.clone(),
            json!({"id": "1", "title": "New", "content": "C", "isPublic": true}),
        );

        let input = NoteInput::new("New", "C").public(true);
        let note = client.update_note(&NoteId::new("1"), &input).await.unwrap();
        assert!(note.is_public);

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Put);
        assert_eq!(sent[0].url, url);
        assert_eq!(
            sent[0].body,
            Some(json!({"title": "New", "content": "C", "isPublic": true}))
        );
        assert_eq!(notifier.successes(), vec!["Note updated"]);
    }

    #[tokio::test]
    async fn test_mutation_with_odd_body_is_not_reported_as_failure() {
        let (client, transport, notifier) = client();
        transport.reply_ok(
            Method::Put,
            format!("{BASE}/notes/updateNote/1"),
            json!({"success": true}),
        );

        let result = client
            .update_note(&NoteId::new("1"), &NoteInput::new("T", "C"))
            .await;
        assert!(matches!(result, Err(NotesError::Decode(_))));
        assert_eq!(notifier.successes(), vec!["Note updated"]);
        assert!(notifier.errors().is_empty());
    }

    #[tokio::test]
    async fn test_delete_note() {
        let (client, transport, notifier) = client();
        transport.reply_ok(Method::Delete, format!("{BASE}/notes/deleteNote/1"), Value::Null);

        client.delete_note(&NoteId::new("1")).await.unwrap();
        assert_eq!(transport.requests()[0].body, None);
        assert_eq!(notifier.successes(), vec!["Note deleted"]);
    }

    #[tokio::test]
    async fn test_delete_failure() {
        let (client, transport, notifier) = client();
        transport.reply_status(Method::Delete, format!("{BASE}/notes/deleteNote/1"), 404, None);

        assert!(client.delete_note(&NoteId::new("1")).await.is_err());
        assert_eq!(notifier.errors(), vec!["Failed to delete note"]);
    }

    #[tokio::test]
    async fn test_share_note() {
        let (client, transport, notifier) = client();
        let url = format!("{BASE}/notes/shareNote/1");
        transport.reply_ok(Method::Post, url.clone(), json!({"success": true}));

        let request = ShareRequest::new("user-2", Role::Read);
        client.share_note(&NoteId::new("1"), &request).await.unwrap();

        let sent = transport.requests_to(Method::Post, &url);
        assert_eq!(sent[0].body, Some(json!({"userId": "user-2", "role": "read"})));
        assert_eq!(notifier.successes(), vec!["Note shared"]);
    }

    #[tokio::test]
    async fn test_request_access() {
        let (client, transport, notifier) = client();
        let url = format!("{BASE}/notes/requestAccess/8");
        transport
            .reply_ok(Method::Post, url.clone(), json!({"success": true}))
            .reply_status(
                Method::Post,
                url.clone(),
                409,
                Some(json!({"message": "Access already requested"})),
            );

        client.request_access(&NoteId::new("8")).await.unwrap();
        assert!(client.request_access(&NoteId::new("8")).await.is_err());

        assert_eq!(transport.requests_to(Method::Post, &url)[0].body, None);
        assert_eq!(notifier.successes(), vec!["Access requested"]);
        assert_eq!(notifier.errors(), vec!["Access already requested"]);
    }

    #[tokio::test]
    async fn test_approve_access() {
        let (client, transport, notifier) = client();
        let url = format!("{BASE}/notes/approveAccess/8");
        transport.reply_status(Method::Post, url.clone(), 403, None);

        let request = ShareRequest::new("user-3", Role::Edit);
        assert!(client.approve_access(&NoteId::new("8"), &request).await.is_err());

        let sent = transport.requests_to(Method::Post, &url);
        assert_eq!(sent[0].body, Some(json!({"userId": "user-3", "role": "edit"})));
        assert_eq!(notifier.errors(), vec!["Failed to approve access"]);
    }

    #[test]
    fn test_operation_table() {
        assert_eq!(Operation::Update.method(), Method::Put);
        assert_eq!(Operation::Delete.method(), Method::Delete);
        assert_eq!(Operation::ApproveAccess.method(), Method::Post);
        assert!(!Operation::Get.is_mutation());
        assert!(Operation::RequestAccess.is_mutation());
    }
}
