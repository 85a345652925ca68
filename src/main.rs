use dotenvy::dotenv;

use fablingo::config::email::EmailConfig;
use fablingo::config::session::SessionConfig;
use fablingo::logging::init_tracing;
use fablingo::router::init_router;
use fablingo::state::init_app_state;
use fablingo::cli;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let args: Vec<String> = std::env::args().collect();

    // Check if this is a CLI command
    if args.len() > 1 && args[1] == "invite" {
        handle_invite(args).await;
        return;
    }

    // Normal server startup
    init_tracing();

    let state = init_app_state().await;
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000")
        .await
        .expect("Failed to bind to 0.0.0.0:3000");
    println!("🚀 Server running on http://localhost:3000");
    println!("📖 API docs available at http://localhost:3000/swagger-ui");
    axum::serve(listener, app).await.expect("Server error");
}

async fn handle_invite(args: Vec<String>) {
    if args.len() < 3 || args.len() > 5 {
        eprintln!("Usage: {} invite <email> [credits] [lang]", args[0]);
        std::process::exit(1);
    }

    let email = &args[2];
    let credits: i32 = args
        .get(3)
        .map(|v| v.parse().unwrap_or_else(|_| {
            eprintln!("credits must be a number, got '{v}'");
            std::process::exit(1);
        }))
        .unwrap_or(100);
    let lang = args.get(4).map(String::as_str).unwrap_or("en");

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let session_config = SessionConfig::from_env();
    let email_config = EmailConfig::from_env();

    match cli::create_invite(&pool, &session_config, &email_config, email, credits, lang).await {
        Ok(response) => {
            println!("✅ {}", response.message);
            println!("   User id: {}", response.user_id);
        }
        Err(e) => {
            eprintln!("❌ Error sending invitation: {}", e.error);
            std::process::exit(1);
        }
    }
}
