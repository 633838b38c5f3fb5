use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use rollcall_core::ErrorResponse;
use rollcall_models::{CheckInCodeResponse, RosterEntry, RosterRedirectForm, RosterResponse};

use crate::modules::home::controller::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::home::controller::health,
        crate::modules::checkin::controller::check_in,
        crate::modules::codes::controller::generate_code,
        crate::modules::codes::controller::get_checkin_code,
        crate::modules::roster::controller::register_page,
        crate::modules::roster::controller::redirect_to_register_page,
        crate::modules::roster::controller::get_roster,
    ),
    components(
        schemas(
            RosterEntry,
            RosterResponse,
            RosterRedirectForm,
            CheckInCodeResponse,
            HealthResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Check-in", description = "Redeeming check-in tokens"),
        (name = "Codes", description = "Check-in QR codes and URLs"),
        (name = "Roster", description = "Class attendance rosters"),
        (name = "Health", description = "Liveness")
    ),
    info(
        title = "Rollcall API",
        version = "0.1.0",
        description = "QR code attendance tracking backed by DynamoDB.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("appSession"))),
            );
        }
    }
}
