//! Wire models exchanged with the HD Notes backend.

pub mod note;
pub mod user;

pub use note::{DISPLAY_TITLE_LIMIT, Note, NotePayload};
pub use user::{
    AuthResponse, LoginRequest, ProfileResponse, RegisterRequest, SendOtpRequest, UserProfile,
    VerifyOtpRequest,
};
