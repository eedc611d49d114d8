use crate::bridge::types::{AuthResponse, MessageResponse, MeResponse, User};
use crate::portiko::handlers::{health::Health, session::SessionView, ActionResponse};
use crate::schema::{
    ForgotPasswordInput, LoginInput, ProfileUpdateInput, RegisterInput, ResetPasswordInput,
};
use utoipa::OpenApi;

// Add new endpoints here so they are both served and documented; the
// router in `portiko::mod` registers the same handlers.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::portiko::handlers::health::health,
        crate::portiko::handlers::login::login,
        crate::portiko::handlers::register::register,
        crate::portiko::handlers::logout::logout,
        crate::portiko::handlers::password::forgot_password,
        crate::portiko::handlers::password::reset_password,
        crate::portiko::handlers::me::me,
        crate::portiko::handlers::session::session,
        crate::portiko::handlers::profile::get_profile,
        crate::portiko::handlers::profile::update_profile,
    ),
    components(schemas(
        ActionResponse,
        Health,
        SessionView,
        User,
        AuthResponse,
        MessageResponse,
        MeResponse,
        LoginInput,
        RegisterInput,
        ForgotPasswordInput,
        ResetPasswordInput,
        ProfileUpdateInput,
    )),
    tags(
        (name = "auth", description = "Session establishment and recovery"),
        (name = "profile", description = "Authenticated self-service"),
        (name = "health", description = "Gateway liveness")
    )
)]
pub struct ApiDoc;
