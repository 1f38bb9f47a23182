use api::Note;
use dioxus::prelude::*;

/// Inline form for the note being edited.
///
/// Every keystroke is reported back so the draft held by the panel stays
/// current; nothing is sent until `on_save`.
#[component]
pub fn NoteEditor(
    draft: Note,
    on_title: EventHandler<String>,
    on_content: EventHandler<String>,
    on_visibility: EventHandler<bool>,
    on_cancel: EventHandler<()>,
    on_save: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "note-form",
            input {
                r#type: "text",
                placeholder: "Title",
                value: draft.title.clone(),
                oninput: move |evt: FormEvent| on_title.call(evt.value()),
            }
            textarea {
                rows: "4",
                placeholder: "Content",
                value: draft.content.clone(),
                oninput: move |evt: FormEvent| on_content.call(evt.value()),
            }
            label {
                class: "note-form-check",
                input {
                    r#type: "checkbox",
                    checked: draft.is_public,
                    onchange: move |evt: FormEvent| on_visibility.call(evt.checked()),
                }
                "Public"
            }
            div {
                class: "note-form-actions",
                button {
                    class: "cancel",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "confirm",
                    onclick: move |_| on_save.call(()),
                    "Save"
                }
            }
        }
    }
}
