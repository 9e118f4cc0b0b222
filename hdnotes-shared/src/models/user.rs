use serde::{Deserialize, Serialize};

/// The authenticated user's profile, as nested in the profile response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// The user's display name.
    pub name: String,

    /// The user's email address.
    pub email: String,
}

/// Response from `GET /users/profile`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileResponse {
    /// The profile of the user the bearer token belongs to.
    pub user: UserProfile,
}

/// Request to send a one-time code to an email address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendOtpRequest {
    /// Address the code is mailed to.
    pub email: String,
}

/// Request to check a one-time code against an email address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyOtpRequest {
    /// Address the code was mailed to.
    pub email: String,

    /// The code the user typed in.
    pub otp: String,
}

/// Request to register a new account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// The user's display name.
    pub name: String,

    /// Date of birth, canonical `YYYY-MM-DD`.
    pub dob: String,

    /// The user's email address.
    pub email: String,

    /// The one-time code mailed to the address.
    pub otp: String,
}

/// Request to sign in to an existing account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The user's email address.
    pub email: String,

    /// The one-time code mailed to the address.
    pub otp: String,
}

/// Response from `POST /users/register` and `POST /users/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Opaque bearer token proving the session to the backend.
    pub token: String,
}
