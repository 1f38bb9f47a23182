use api::NoteInput;
use dioxus::prelude::*;

use crate::notes_panel::new_note_input;

/// Inline form for creating a new note, attached to `course_id` when given.
#[component]
pub fn NewNoteDialog(
    course_id: Option<String>,
    on_create: EventHandler<NoteInput>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut is_public = use_signal(|| false);

    let handle_submit = move |_| {
        let input = new_note_input(&title(), &content(), is_public(), course_id.as_deref());
        if let Some(input) = input {
            on_create.call(input);
        }
    };

    rsx! {
        div {
            class: "note-form",
            h2 { "New Note" }

            input {
                id: "new-note-title",
                r#type: "text",
                placeholder: "Title",
                value: title(),
                oninput: move |evt: FormEvent| title.set(evt.value()),
            }

            textarea {
                id: "new-note-content",
                rows: "4",
                placeholder: "Write your note...",
                value: content(),
                oninput: move |evt: FormEvent| content.set(evt.value()),
            }

            label {
                class: "note-form-check",
                input {
                    r#type: "checkbox",
                    checked: is_public(),
                    onchange: move |evt: FormEvent| is_public.set(evt.checked()),
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
                    disabled: title().trim().is_empty(),
                    onclick: handle_submit,
                    "Create"
                }
            }
        }
    }
}
