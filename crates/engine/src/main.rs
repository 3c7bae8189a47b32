//! gamedatas - loads a project's datas and reports what was found.
//!
//! Usage: `gamedatas [PROJECT_DIR]`

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gamedatas_engine::{DatasSettings, GameDatas, TokioFileSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gamedatas_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; a positional argument overrides the project path
    let mut settings = DatasSettings::from_env();
    if let Some(project_path) = std::env::args_os().nth(1) {
        settings.project_path = project_path.into();
    }

    tracing::info!(
        project = %settings.project_path.display(),
        policy = %settings.record_policy,
        max_id = settings.max_id,
        "Loading game datas"
    );

    let source = Arc::new(TokioFileSource::new(settings.project_path.clone()));
    let mut datas = GameDatas::new(source, settings);
    let summary = datas.load().await?;

    for kind in summary {
        tracing::info!(
            kind = %kind.kind,
            slots = kind.slots,
            entities = kind.entities,
            "Registry ready"
        );
    }

    Ok(())
}

fn load_dotenv() {
    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = std::path::Path::new(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
