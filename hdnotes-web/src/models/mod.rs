pub mod auth_flow;
pub mod toast;
