pub(crate) mod guard;
pub(crate) mod loading;
pub(crate) mod note_modal;
pub(crate) mod toaster;

// Re-export components for convenience
pub use guard::RequireAuth;
pub use note_modal::NoteModal;
