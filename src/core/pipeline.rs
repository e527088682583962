use crate::core::export::{
    ExportKind, ExportOptions, ExportOutcome, ExportReport, ExportStatus, document, narration,
    slides, text, upload::UploadSession,
};
use crate::core::partition::{PartitionedOutput, partition};
use crate::core::request::ScriptRequest;
use crate::core::script::ScriptService;
use crate::core::storage::{StorageService, artifact_slug};
use crate::error::Result;
use std::path::PathBuf;
use tracing::{info, warn};

/// Everything one request produced: the raw script, its partition, the saved
/// script path and the per-exporter report.
pub struct PipelineOutcome {
    pub script: String,
    pub partitioned: PartitionedOutput,
    pub script_path: PathBuf,
    pub report: ExportReport,
}

/// Processes one request start to finish. A provider error aborts before any
/// artifact exists; exporter errors land in the report without stopping
/// their siblings.
pub async fn run_request(
    service: &ScriptService,
    request: &ScriptRequest,
    options: &ExportOptions,
    upload: Option<&UploadSession>,
) -> Result<PipelineOutcome> {
    let script = service.generate(request).await?;
    info!(
        words = script.split_whitespace().count(),
        "script generated"
    );

    let slug = artifact_slug(&request.product);
    if StorageService::script_exists(&slug) {
        warn!(slug = %slug, "overwriting existing script for this product");
    }
    let script_path = StorageService::save_script(&slug, &script).await?;
    let partitioned = partition(&script);
    if partitioned.is_empty() {
        warn!("generated script has no non-blank content to partition");
    } else {
        info!(segments = partitioned.segments.len(), "script partitioned");
    }

    let report = run_exporters(request, &slug, &partitioned, options, upload).await;

    Ok(PipelineOutcome {
        script,
        partitioned,
        script_path,
        report,
    })
}

/// Runs each enabled exporter in sequence, collecting one status apiece.
/// Document-style exporters consume the untouched full text; the slide deck
/// consumes the bounded segments.
pub async fn run_exporters(
    request: &ScriptRequest,
    slug: &str,
    partitioned: &PartitionedOutput,
    options: &ExportOptions,
    upload: Option<&UploadSession>,
) -> ExportReport {
    let mut report = ExportReport::default();
    let full_text = partitioned.full_text.as_str();

    if options.text {
        report.push(to_status(
            ExportKind::Text,
            export_text(slug, full_text).await,
        ));
    }
    if options.markdown {
        report.push(to_status(
            ExportKind::Markdown,
            export_markdown(slug, &request.product, full_text).await,
        ));
    }
    if options.pdf {
        report.push(to_status(
            ExportKind::Pdf,
            export_pdf(slug, &request.product, full_text),
        ));
    }
    if options.narration {
        report.push(to_status(
            ExportKind::Narration,
            export_narration(slug, full_text, &options.voice_model),
        ));
    }
    if options.slides {
        report.push(to_status(
            ExportKind::Slides,
            export_slides(slug, &request.product, partitioned).await,
        ));
    }
    if options.upload {
        let result = match upload {
            Some(session) => export_upload(session, slug, full_text).await,
            None => Err(crate::error::Error::custom(
                "No hay sesión de subida autorizada",
            )),
        };
        report.push(to_status(ExportKind::Upload, result));
    }

    report
}

fn to_status(kind: ExportKind, result: Result<ExportOutcome>) -> ExportStatus {
    match result {
        Ok(outcome) => ExportStatus { kind, outcome },
        Err(e) => {
            warn!(exporter = kind.label(), error = %e, "exporter failed");
            ExportStatus {
                kind,
                outcome: ExportOutcome::Failed {
                    reason: e.to_string(),
                },
            }
        }
    }
}

async fn export_text(slug: &str, script: &str) -> Result<ExportOutcome> {
    let path = StorageService::export_path(slug, "txt")?;
    text::write_plain_text(script, &path).await?;
    Ok(ExportOutcome::Written { path })
}

async fn export_markdown(slug: &str, product: &str, script: &str) -> Result<ExportOutcome> {
    let path = StorageService::export_path(slug, "md")?;
    text::write_markdown(product, script, &path).await?;
    Ok(ExportOutcome::Written { path })
}

fn export_pdf(slug: &str, product: &str, script: &str) -> Result<ExportOutcome> {
    let path = StorageService::export_path(slug, "pdf")?;
    document::write_pdf(product, script, &path)?;
    Ok(ExportOutcome::Written { path })
}

fn export_narration(slug: &str, script: &str, voice_model: &str) -> Result<ExportOutcome> {
    let path = StorageService::export_path(slug, "wav")?;
    let synthesizer = narration::NarrationSynthesizer::new(voice_model);
    synthesizer.synthesize(script, &path)?;
    Ok(ExportOutcome::Written { path })
}

async fn export_slides(
    slug: &str,
    product: &str,
    partitioned: &PartitionedOutput,
) -> Result<ExportOutcome> {
    let path = StorageService::export_path(slug, "html")?;
    slides::write_slide_deck(product, &partitioned.segments, &path).await?;
    Ok(ExportOutcome::Written { path })
}

async fn export_upload(
    session: &UploadSession,
    slug: &str,
    script: &str,
) -> Result<ExportOutcome> {
    let filename = format!("guion_{slug}.md");
    let url = session.upload(&filename, script.as_bytes().to_vec()).await?;
    Ok(ExportOutcome::Uploaded { url })
}
