mod cli;
mod core;
mod error;
mod tui;

use crate::cli::{Cli, Commands};
use crate::core::export::{ExportOptions, upload::UploadSession};
use crate::core::{Niche, ScriptRequest, ScriptService, StorageService, pipeline};
use crate::error::Result;
use crate::tui::{App, EventHandler, init as tui_init, restore as tui_restore, ui};
use clap::Parser;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate {
            product,
            presenter,
            audience,
            pain_point,
            benefits,
            pricing,
            guarantee,
            call_to_action,
            niche,
            pdf,
            narration,
            slides,
            upload,
            voice_model,
        }) => {
            init_tracing();
            let request = ScriptRequest {
                product,
                presenter,
                audience,
                pain_point,
                benefits,
                pricing,
                guarantee,
                call_to_action,
                niche: resolve_niche(niche.as_deref())?,
            };
            let options = ExportOptions {
                pdf,
                narration,
                slides,
                upload,
                voice_model,
                ..ExportOptions::default()
            };
            run_cli_generate(request, options).await?;
        }
        Some(Commands::List) => {
            init_tracing();
            run_cli_list()?;
        }
        Some(Commands::Niches) => {
            run_cli_niches();
        }
        Some(Commands::Tui) | None => {
            if cli.cli {
                println!("Use 'guion --help' for available commands");
            } else {
                run_tui().await?;
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt().with_env_filter("info").init();
}

fn resolve_niche(label: Option<&str>) -> Result<Option<Niche>> {
    match label {
        None => Ok(None),
        Some(raw) => match Niche::from_label(raw) {
            Some(niche) => Ok(Some(niche)),
            None => Err(error::Error::custom(format!(
                "Nicho desconocido: '{raw}'. Usa 'guion niches' para ver la tabla."
            ))),
        },
    }
}

async fn run_cli_generate(request: ScriptRequest, options: ExportOptions) -> Result<()> {
    println!("Generando guion para: {}", request.product);

    let upload_session = if options.upload {
        Some(UploadSession::acquire()?)
    } else {
        None
    };

    let service = ScriptService::new();
    let outcome =
        pipeline::run_request(&service, &request, &options, upload_session.as_ref()).await?;

    println!();
    println!("{}", outcome.script);
    println!();
    println!("Guion guardado en: {}", outcome.script_path.display());
    println!(
        "{} palabras, {} segmentos para diapositivas",
        outcome.script.split_whitespace().count(),
        outcome.partitioned.segments.len()
    );

    for status in outcome.report.statuses() {
        let mark = if status.succeeded() { "ok" } else { "AVISO" };
        println!("[{mark}] {}", status.describe());
    }

    if !outcome.report.all_succeeded() {
        println!();
        println!(
            "{} exportaciones fallaron; el resto de artefactos sí se generó.",
            outcome.report.failures().count()
        );
    }

    Ok(())
}

fn run_cli_list() -> Result<()> {
    let files = StorageService::list_files()?;

    if files.is_empty() {
        println!("No files found.");
        return Ok(());
    }

    println!("Found {} files:", files.len());
    println!();

    for file in files {
        let file_type = match file.file_type {
            core::FileType::Script => "Guion",
            core::FileType::Export => "Export",
        };

        let size_kb = file.size / 1024;
        let size_str = if size_kb < 1024 {
            format!("{size_kb}KB")
        } else {
            format!("{:.1}MB", size_kb as f64 / 1024.0)
        };

        println!("{:<8} {:<40} {}", file_type, file.name, size_str);
    }

    Ok(())
}

fn run_cli_niches() {
    for niche in Niche::ALL {
        let example = niche.example();
        if example.is_empty() {
            println!("{}", niche.label());
        } else {
            println!("{:<22} {example}", niche.label());
        }
    }
}

async fn run_tui() -> Result<()> {
    let mut terminal = tui_init()?;

    let mut app = App::new()?;
    let event_handler = EventHandler::new();

    // Channel for messages coming back from the background pipeline task
    let (tx, rx) = mpsc::unbounded_channel();
    app.processing_tx = Some(tx.clone());
    app.processing_rx = Some(rx);

    loop {
        let event = event_handler.next_event()?;
        app.handle_event(event)?;

        terminal.draw(|f| {
            ui::draw(f, &mut app);
        })?;

        if app.should_quit {
            break;
        }
    }

    tui_restore()?;
    Ok(())
}
