use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::criteria::handlers::get_criteria,
        features::assignments::handlers::list_assignments,
        features::assignments::handlers::get_assignment,
        features::assignments::handlers::get_progress,
        features::scores::handlers::get_score,
        features::scores::handlers::upsert_score,
        features::scores::handlers::get_aggregate,
        features::scores::handlers::compute_total,
    ),
    components(
        schemas(
            storage::dto::criteria::CriterionResponse,
            storage::dto::criteria::RubricResponse,
            storage::dto::assignment::AssignedProject,
            storage::dto::assignment::AssignmentResponse,
            storage::dto::assignment::AssignmentSummary,
            storage::dto::assignment::HackathonInfo,
            storage::dto::assignment::ProjectScoreStatus,
            storage::dto::score::UpsertScoreRequest,
            storage::dto::score::ScoreResponse,
            storage::dto::score::ComputeTotalRequest,
            storage::dto::score::ComputeTotalResponse,
            storage::services::aggregation::ProjectAggregate,
            storage::services::progress::JudgeProgress,
            storage::services::scoring::ValidationIssue,
            storage::services::scoring::ValidationReport,
            storage::models::Hackathon,
            storage::models::Project,
            storage::models::ScoringCriterion,
            storage::models::JudgeAssignment,
            storage::models::JudgeRole,
            storage::models::Score,
        )
    ),
    tags(
        (name = "criteria", description = "Scoring rubric lookup"),
        (name = "assignments", description = "Judge assignment and progress endpoints"),
        (name = "scores", description = "Score read, upsert and aggregation endpoints"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting judging API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);

    let bind_address = config.bind_address();
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(
            "/api",
            features::routes().layer(axum::middleware::from_fn_with_state(
                api_keys,
                middleware::auth::require_api_key,
            )),
        )
        .layer(cors)
        .with_state(db);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
