mod platform;

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use sources_core::{Msg, Scope, SourceKind, ToolOutput};
use sources_engine::{KindFilter, SourceDraft};
use sources_logging::gallery_info;

use platform::app::GalleryApp;
use platform::cli::{AddArgs, Cli, Command, ExtractArgs, HarvestArgs, IngestArgs};
use platform::config::AppConfig;
use platform::effects::EffectRunner;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(dir) = &cli.storage_dir {
        config.storage_dir = dir.clone();
    }
    if let Some(key) = &cli.base_key {
        config.base_key = key.clone();
    }
    platform::logging::initialize(config.log_destination, config.log_level, &config.log_file);

    let scope = Scope::from_path(&cli.path);
    gallery_info!("Gallery mounted for {} ({})", scope, cli.path);

    let mut app = GalleryApp::new(EffectRunner::new(&config.engine_config()));
    app.send(Msg::Mounted {
        scope: scope.clone(),
    });

    match &cli.command {
        Command::Ingest(args) => ingest(&mut app, args)?,
        Command::Show => {}
        Command::Add(args) => {
            add(&app, &scope, args)?;
            app.send(Msg::Mounted { scope });
        }
        Command::Harvest(args) => {
            harvest(&app, &scope, args)?;
            app.send(Msg::Mounted { scope });
        }
        Command::Extract(args) => {
            extract(&app, &scope, args)?;
            app.send(Msg::Mounted { scope });
        }
    }

    if let Some(tab) = cli.tab {
        app.send(Msg::CategorySelected(tab.into()));
    }

    let view = app.view();
    gallery_info!(
        "Rendering {} of {} source(s) under {} after {} frame(s)",
        view.cards.len(),
        view.counts.total,
        view.active.label(),
        app.frames_rendered()
    );
    write_frame(&app.frame(), cli.output.as_deref())
}

fn read_input(input: Option<&Path>, what: &str) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {what} {}", path.display())),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .with_context(|| format!("failed to read {what} from stdin"))?;
            Ok(buffer)
        }
    }
}

fn ingest(app: &mut GalleryApp, args: &IngestArgs) -> Result<()> {
    let content = read_input(args.input.as_deref(), "tool output")?;
    app.send(Msg::ToolOutputChanged(ToolOutput {
        content,
        is_success: !args.failed,
        is_streaming: args.streaming,
    }));
    Ok(())
}

fn add(app: &GalleryApp, scope: &Scope, args: &AddArgs) -> Result<()> {
    let draft = SourceDraft {
        url: args.url.clone(),
        title: args.title.clone(),
        kind: args.kind.map(SourceKind::from),
        description: args.description.clone(),
    };
    let outcome = app
        .runner()
        .repository()
        .add_source(scope, draft)
        .with_context(|| format!("cannot add {}", args.url))?;
    gallery_info!(
        "Added source: {} new, {} duplicate",
        outcome.stats.added,
        outcome.stats.skipped
    );
    Ok(())
}

fn harvest(app: &GalleryApp, scope: &Scope, args: &HarvestArgs) -> Result<()> {
    let bytes = fs::read(&args.file)
        .with_context(|| format!("failed to read page {}", args.file.display()))?;
    let html = String::from_utf8_lossy(&bytes);
    let kinds: Vec<SourceKind> = args.types.iter().copied().map(SourceKind::from).collect();
    let outcome = app.runner().repository().harvest_page(
        scope,
        &html,
        args.page_url.as_deref(),
        KindFilter::only(&kinds),
    );
    gallery_info!(
        "Harvested {}: {} new, {} duplicate",
        args.file.display(),
        outcome.stats.added,
        outcome.stats.skipped
    );
    Ok(())
}

fn extract(app: &GalleryApp, scope: &Scope, args: &ExtractArgs) -> Result<()> {
    let content = read_input(args.input.as_deref(), "text")?;
    let kinds: Vec<SourceKind> = args.types.iter().copied().map(SourceKind::from).collect();
    let outcome = app
        .runner()
        .repository()
        .extract_from_text(scope, &content, KindFilter::only(&kinds));
    gallery_info!(
        "Extracted from text: {} new, {} duplicate",
        outcome.stats.added,
        outcome.stats.skipped
    );
    Ok(())
}

fn write_frame(frame: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, frame)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{frame}").context("failed to write to stdout")
        }
    }
}
