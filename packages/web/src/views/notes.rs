use dioxus::prelude::*;

use ui::NotesModal;

#[component]
pub fn Notes() -> Element {
    rsx! {
        NotesPage { title: "Notes" }
    }
}

/// Notes page of one course; new notes are attached to it.
#[component]
pub fn CourseNotes(course_id: String) -> Element {
    rsx! {
        NotesPage { title: "Course notes", course_id: Some(course_id) }
    }
}

/// Page with the notes modal open on arrival.
#[component]
fn NotesPage(title: String, course_id: Option<String>) -> Element {
    let mut show_notes = use_signal(|| true);

    rsx! {
        div {
            class: "notes-page",
            header {
                class: "notes-page-header",
                h1 { "{title}" }
                button {
                    class: "primary",
                    onclick: move |_| show_notes.set(true),
                    "Open notes"
                }
            }

            if show_notes() {
                NotesModal {
                    course_id: course_id.clone(),
                    on_close: move |_| show_notes.set(false),
                }
            } else {
                p {
                    class: "notes-page-hint",
                    "Your notes and the public notes of other learners live in the notes panel."
                }
            }
        }
    }
}
