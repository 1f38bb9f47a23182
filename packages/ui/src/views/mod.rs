mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod notes_modal;
pub use notes_modal::NotesModal;
