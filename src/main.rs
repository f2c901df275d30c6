//! FitLive service binary.
//!
//! Loads configuration, wires the adapters to the domain, and serves the
//! HTTP API.

use std::sync::Arc;

use secrecy::SecretString;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fitlive::adapters::auth::JwtSessionValidator;
use fitlive::adapters::http::{build_app, MembershipAppState, TokenAppState};
use fitlive::adapters::memory::InMemoryEntitlementStore;
use fitlive::config::AppConfig;
use fitlive::domain::payment::PaymentVerifier;
use fitlive::domain::signing::Signer;
use fitlive::domain::token::TokenIssuer;
use fitlive::ports::{EntitlementStore, SessionValidator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(&config.server.log_level)
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let token_signer = Signer::new(&config.session_provider.server_secret)?;
    let gateway_signer = Signer::new(&config.payment.gateway_secret)?;

    let entitlement_store: Arc<dyn EntitlementStore> = Arc::new(InMemoryEntitlementStore::new());
    let validator: Arc<dyn SessionValidator> = Arc::new(JwtSessionValidator::new(
        &SecretString::new(config.auth.jwt_secret.clone()),
    ));

    let membership_state = MembershipAppState {
        entitlement_store: entitlement_store.clone(),
        payment_verifier: PaymentVerifier::new(gateway_signer),
    };
    let token_state = TokenAppState {
        issuer: TokenIssuer::new(config.session_provider.app_id, token_signer),
        entitlement_store,
    };

    let app = build_app(validator, membership_state, token_state, &config.server);

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "fitlive listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
