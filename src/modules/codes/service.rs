use anyhow::Context;
use qrcode::QrCode;
use qrcode::render::svg;
use tracing::instrument;

use rollcall_auth::TokenService;
use rollcall_core::AppError;

use crate::utils::urls::checkin_url;

/// A check-in URL together with its QR rendering.
#[derive(Debug, Clone)]
pub struct CheckInCode {
    pub url: String,
    pub svg: String,
}

pub struct CodeService;

impl CodeService {
    /// Issues a fresh token for `class_id` and returns the URL embedding it.
    #[instrument(skip(tokens))]
    pub async fn checkin_url(
        tokens: &TokenService,
        base_url: &str,
        class_id: &str,
    ) -> Result<String, AppError> {
        let token = tokens.issue(class_id).await?;
        Ok(checkin_url(base_url, &token))
    }

    #[instrument(skip(tokens))]
    pub async fn generate(
        tokens: &TokenService,
        base_url: &str,
        class_id: &str,
    ) -> Result<CheckInCode, AppError> {
        let url = Self::checkin_url(tokens, base_url, class_id).await?;
        let svg = render_svg(&url)?;
        Ok(CheckInCode { url, svg })
    }
}

pub fn render_svg(content: &str) -> Result<String, AppError> {
    let code = QrCode::new(content.as_bytes())
        .context("Failed to encode QR code")
        .map_err(AppError::internal)?;

    Ok(code
        .render::<svg::Color>()
        .min_dimensions(200, 200)
        .quiet_zone(true)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use rollcall_auth::{SecretCache, StaticSecretSource};
    use rollcall_config::TokenConfig;

    fn tokens() -> TokenService {
        let secrets = Arc::new(SecretCache::new(Arc::new(StaticSecretSource::new(
            "code-service-test-secret",
        ))));
        TokenService::new(
            secrets,
            TokenConfig {
                secret_name: "jwt-secret".to_string(),
                secret_field: "jwtSecret".to_string(),
                static_secret: None,
                token_expiry: 300,
            },
        )
    }

    #[test]
    fn test_render_svg() {
        let svg = render_svg("http://localhost:3000/entrypoint/abc").unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[tokio::test]
    async fn test_generated_url_carries_verifiable_token() {
        let tokens = tokens();
        let code = CodeService::generate(&tokens, "https://attendance.example.com", "CS101")
            .await
            .unwrap();

        let token = code
            .url
            .strip_prefix("https://attendance.example.com/entrypoint/")
            .unwrap();
        assert_eq!(tokens.verify(token).await.unwrap().class_id, "CS101");
        assert!(code.svg.contains("<svg"));
    }

    #[tokio::test]
    async fn test_empty_class_id_is_rejected() {
        let err = CodeService::generate(&tokens(), "http://localhost:3000", "")
            .await
            .unwrap_err();
        assert_eq!(err.status.as_u16(), 400);
    }
}
