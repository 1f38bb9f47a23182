use dioxus::prelude::*;

use crate::notes_panel::ShareForm;

/// Collects the user id and role to share a note with.
///
/// Only a complete form is passed to `on_share`; otherwise a hint is shown.
#[component]
pub fn ShareDialog(
    note_title: String,
    on_share: EventHandler<ShareForm>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut form = use_signal(ShareForm::default);
    let mut invalid = use_signal(|| false);

    let handle_submit = move |_| {
        let current = form();
        if current.to_request().is_some() {
            on_share.call(current);
        } else {
            invalid.set(true);
        }
    };

    let user_id = form.read().user_id.clone();
    let role = form.read().role.clone();

    rsx! {
        div {
            class: "note-form",
            h2 { "Share \"{note_title}\"" }

            input {
                r#type: "text",
                placeholder: "User id",
                value: user_id,
                oninput: move |evt: FormEvent| {
                    form.write().user_id = evt.value();
                    invalid.set(false);
                },
            }

            select {
                value: role,
                onchange: move |evt: FormEvent| {
                    form.write().role = evt.value();
                    invalid.set(false);
                },
                option { value: "", "Choose a role" }
                option { value: "read", "Read" }
                option { value: "edit", "Edit" }
            }

            if invalid() {
                p { class: "note-form-hint", "A user id and a role are required." }
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
                    onclick: handle_submit,
                    "Share"
                }
            }
        }
    }
}
