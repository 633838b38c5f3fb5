use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use rollcall::modules::codes::CodeService;
use rollcall::modules::codes::service::render_svg;
use rollcall::modules::roster::RosterService;
use rollcall::state::{AppState, init_app_state};
use rollcall_auth::{Identity, create_session_token};
use rollcall_models::RosterResponse;
use rollcall_observability::init_basic_console_logging;

#[derive(Parser)]
#[command(name = "rollcall-cli")]
#[command(about = "Rollcall CLI - Administrative tools for Rollcall", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Issue a check-in URL for a class
    CheckinUrl {
        /// Class identifier
        class_id: String,

        /// Also write the QR code as SVG to this file
        #[arg(long)]
        svg: Option<String>,
    },
    /// Mint a session token, for local development without the identity provider
    SessionToken {
        /// Email address of the participant
        #[arg(short = 'e', long)]
        email: String,

        /// Subject identifier (defaults to the email)
        #[arg(short = 's', long)]
        sub: Option<String>,

        /// Display name
        #[arg(short = 'n', long)]
        name: Option<String>,
    },
    /// Print the roster of a class as JSON
    Roster {
        /// Class identifier
        class_id: String,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_basic_console_logging();

    let cli = Cli::parse();
    let state = match init_app_state().await {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::CheckinUrl { class_id, svg } => handle_checkin_url(&state, &class_id, svg).await,
        Commands::SessionToken { email, sub, name } => handle_session_token(&state, email, sub, name),
        Commands::Roster { class_id } => handle_roster(&state, &class_id).await,
    }
}

async fn handle_checkin_url(state: &AppState, class_id: &str, svg_path: Option<String>) {
    let url = match CodeService::checkin_url(&state.tokens, &state.server_config.base_url, class_id)
        .await
    {
        Ok(url) => url,
        Err(e) => {
            eprintln!("Error issuing check-in URL: {}", e);
            std::process::exit(1);
        }
    };

    println!("{}", url);
    println!("Expires in {} seconds", state.tokens.token_expiry());

    if let Some(path) = svg_path {
        let written = render_svg(&url)
            .map_err(|e| e.to_string())
            .and_then(|svg| std::fs::write(&path, svg).map_err(|e| e.to_string()));

        match written {
            Ok(()) => println!("QR code written to {}", path),
            Err(e) => {
                eprintln!("Error writing QR code: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn handle_session_token(
    state: &AppState,
    email: String,
    sub: Option<String>,
    name: Option<String>,
) {
    let mut identity = Identity::new(sub.unwrap_or_else(|| email.clone()), email);
    if let Some(name) = name {
        identity = identity.with_name(name);
    }

    let config = &state.session_config;
    match create_session_token(&identity, &config.secret, config.session_expiry) {
        Ok(token) => {
            println!("{}", token);
            println!(
                "Send it as the `{}` cookie or as `Authorization: Bearer <token>`",
                config.cookie_name
            );
        }
        Err(e) => {
            eprintln!("Error creating session token: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_roster(state: &AppState, class_id: &str) {
    let entries = match RosterService::class_roster(state.store.as_ref(), class_id).await {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error reading roster: {}", e);
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&RosterResponse::new(class_id, entries)) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing roster: {}", e);
            std::process::exit(1);
        }
    }
}
