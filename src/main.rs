use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use clap::Parser;

use tilegrid::cli::{CliArgs, ScriptSource};
use tilegrid::config::GridConfig;
use tilegrid::model::AppModel;
use tilegrid::runtime::App;

fn main() -> Result<()> {
    tilegrid::tracing::init();

    let startup = CliArgs::parse().into_config();

    let config = match &startup.config_path {
        Some(path) => GridConfig::load_from(path)?,
        None => GridConfig::load(),
    };

    let mut model = AppModel::new(config)?;
    model.active = startup.breakpoint;
    tracing::info!(breakpoint = %model.active, "session started");

    let mut app = App::new(model, startup.render);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut diag = io::stderr();

    match &startup.source {
        ScriptSource::Stdin => app.run(io::stdin().lock(), &mut out, &mut diag)?,
        ScriptSource::File(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            app.run(BufReader::new(file), &mut out, &mut diag)?;
        }
    }

    if startup.gallery {
        app.write_gallery(&mut out)?;
    }

    Ok(())
}
