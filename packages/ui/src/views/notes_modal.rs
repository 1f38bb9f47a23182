use api::{Note, NoteId, NoteInput, OwnerRef};
use dioxus::prelude::*;

use crate::client::use_notes_client;
use crate::icons::{FaPenToSquare, FaPlus, FaShareNodes, FaTrashCan, FaXmark};
use crate::notes_panel::{
    create_note, delete_note, open_notes, save_draft, share_note, switch_tab, NotesPanel,
    NotesTab, ShareForm,
};
use crate::views::ModalOverlay;
use crate::{Icon, NewNoteDialog, NoteEditor, ShareDialog};

const NOTES_MODAL_CSS: Asset = asset!("/assets/styling/notes_modal.css");

const TABS: [(NotesTab, &str); 2] = [
    (NotesTab::Owned, NotesTab::Owned.label()),
    (NotesTab::Public, NotesTab::Public.label()),
];

/// Form shown below the list, if any.
#[derive(Clone, Debug, PartialEq)]
enum Composer {
    Closed,
    NewNote,
    Share { id: NoteId, title: String },
}

/// Modal listing the user's notes and the public notes.
///
/// Mounting it fetches the owned notes; switching tabs fetches the other
/// list. Edit, share and delete act on one row at a time. New notes are
/// attached to `course_id` when one is given.
#[component]
pub fn NotesModal(course_id: Option<String>, on_close: EventHandler<()>) -> Element {
    let client = use_notes_client();
    let mut panel = use_signal(NotesPanel::new);
    let mut composer = use_signal(|| Composer::Closed);

    use_effect(move || {
        let notes_client = client();
        spawn(async move {
            open_notes(&mut panel, &notes_client).await;
        });
    });

    let select_tab = move |tab: NotesTab| {
        let notes_client = client();
        spawn(async move {
            switch_tab(&mut panel, &notes_client, tab).await;
        });
    };

    let save = move || {
        let notes_client = client();
        spawn(async move {
            save_draft(&mut panel, &notes_client).await;
        });
    };

    let delete = move |id: NoteId| {
        let notes_client = client();
        spawn(async move {
            // Failures are reported by the client; the row stays removed.
            let _ = delete_note(&mut panel, &notes_client, &id).await;
        });
    };

    let mut share = move |id: NoteId, form: ShareForm| {
        composer.set(Composer::Closed);
        let notes_client = client();
        spawn(async move {
            share_note(&notes_client, &id, &form).await;
        });
    };

    let create = move |input: NoteInput| {
        let notes_client = client();
        spawn(async move {
            if create_note(&mut panel, &notes_client, &input).await {
                composer.set(Composer::Closed);
            }
        });
    };

    let active = panel.read().active_tab();
    let notes = panel.read().notes().to_vec();
    let draft = panel.read().draft().cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: NOTES_MODAL_CSS }

        ModalOverlay {
            on_close: move |_| on_close.call(()),

            div {
                class: "notes-modal-header",
                p { class: "notes-modal-title", "Notes" }
                div {
                    class: "notes-modal-actions",
                    button {
                        title: "New note",
                        onclick: move |_| composer.set(Composer::NewNote),
                        Icon { icon: FaPlus, width: 18, height: 18 }
                    }
                    button {
                        title: "Close",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 20, height: 20 }
                    }
                }
            }

            div {
                class: "notes-tabs",
                for (tab, label) in TABS {
                    button {
                        key: "{label}",
                        class: if tab == active { "notes-tab active" } else { "notes-tab" },
                        onclick: move |_| select_tab(tab),
                        "{label}"
                    }
                }
            }

            div {
                class: "notes-list",
                if notes.is_empty() {
                    p { class: "notes-empty", "No notes found." }
                } else {
                    for note in notes {
                        NoteRow {
                            key: "{note.id}",
                            note: note.clone(),
                            on_edit: move |note: Note| panel.write().begin_edit(&note),
                            on_share: move |note: Note| {
                                composer.set(Composer::Share {
                                    id: note.id,
                                    title: note.title,
                                })
                            },
                            on_delete: move |id: NoteId| delete(id),
                        }
                    }
                }
            }

            if let Some(draft) = draft {
                NoteEditor {
                    draft: draft,
                    on_title: move |title: String| panel.write().edit_title(title),
                    on_content: move |content: String| panel.write().edit_content(content),
                    on_visibility: move |is_public: bool| panel.write().edit_visibility(is_public),
                    on_cancel: move |_| panel.write().cancel_edit(),
                    on_save: move |_| save(),
                }
            }

            {
                match composer() {
                    Composer::Closed => rsx! {},
                    Composer::NewNote => rsx! {
                        NewNoteDialog {
                            course_id: course_id.clone(),
                            on_create: create,
                            on_cancel: move |_| composer.set(Composer::Closed),
                        }
                    },
                    Composer::Share { id, title } => rsx! {
                        ShareDialog {
                            note_title: title,
                            on_share: move |form: ShareForm| share(id.clone(), form),
                            on_cancel: move |_| composer.set(Composer::Closed),
                        }
                    },
                }
            }
        }
    }
}

/// One note with its edit, share and delete controls.
#[component]
fn NoteRow(
    note: Note,
    on_edit: EventHandler<Note>,
    on_share: EventHandler<Note>,
    on_delete: EventHandler<NoteId>,
) -> Element {
    let edit_note = note.clone();
    let shared = note.clone();
    let id = note.id.clone();
    let owner = note.owner.as_ref().and_then(OwnerRef::display_name);

    rsx! {
        div {
            class: "note-row",
            div {
                class: "note-row-title",
                p { "{note.title}" }
                if note.is_public {
                    span { class: "note-badge", "public" }
                }
                if let Some(owner) = owner {
                    span { class: "note-owner", "by {owner}" }
                }
            }
            div {
                class: "note-row-actions",
                button {
                    title: "Edit",
                    onclick: move |_| on_edit.call(edit_note.clone()),
                    Icon { icon: FaPenToSquare, width: 14, height: 14 }
                }
                button {
                    title: "Share",
                    onclick: move |_| on_share.call(shared.clone()),
                    Icon { icon: FaShareNodes, width: 14, height: 14 }
                }
                button {
                    class: "danger",
                    title: "Delete",
                    onclick: move |_| on_delete.call(id.clone()),
                    Icon { icon: FaTrashCan, width: 14, height: 14 }
                }
            }
        }
    }
}
