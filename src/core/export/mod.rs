pub mod document;
pub mod narration;
pub mod slides;
pub mod text;
pub mod upload;

use std::path::PathBuf;

/// Default piper voice; the narration language is fixed to Spanish.
pub const DEFAULT_VOICE_MODEL: &str = "./es_ES-davefx-medium.onnx";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Pdf,
    Text,
    Markdown,
    Narration,
    Slides,
    Upload,
}

impl ExportKind {
    pub fn label(&self) -> &'static str {
        match self {
            ExportKind::Pdf => "PDF",
            ExportKind::Text => "Texto",
            ExportKind::Markdown => "Markdown",
            ExportKind::Narration => "Narración",
            ExportKind::Slides => "Diapositivas",
            ExportKind::Upload => "Subida",
        }
    }
}

/// What one exporter produced, or why it failed. Exporters never abort their
/// siblings; a failure travels in the report instead of propagating.
#[derive(Debug, Clone)]
pub enum ExportOutcome {
    Written { path: PathBuf },
    Uploaded { url: String },
    Failed { reason: String },
}

#[derive(Debug, Clone)]
pub struct ExportStatus {
    pub kind: ExportKind,
    pub outcome: ExportOutcome,
}

impl ExportStatus {
    pub fn succeeded(&self) -> bool {
        !matches!(self.outcome, ExportOutcome::Failed { .. })
    }

    pub fn describe(&self) -> String {
        match &self.outcome {
            ExportOutcome::Written { path } => {
                format!("{}: {}", self.kind.label(), path.display())
            }
            ExportOutcome::Uploaded { url } => format!("{}: {url}", self.kind.label()),
            ExportOutcome::Failed { reason } => {
                format!("{}: fallo ({reason})", self.kind.label())
            }
        }
    }
}

/// Per-exporter statuses for one request, in execution order.
#[derive(Debug, Clone, Default)]
pub struct ExportReport {
    statuses: Vec<ExportStatus>,
}

impl ExportReport {
    pub fn push(&mut self, status: ExportStatus) {
        self.statuses.push(status);
    }

    pub fn statuses(&self) -> &[ExportStatus] {
        &self.statuses
    }

    pub fn failures(&self) -> impl Iterator<Item = &ExportStatus> {
        self.statuses.iter().filter(|s| !s.succeeded())
    }

    pub fn all_succeeded(&self) -> bool {
        self.statuses.iter().all(ExportStatus::succeeded)
    }
}

/// Which exporters run for a request, plus the narration voice.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub pdf: bool,
    pub text: bool,
    pub markdown: bool,
    pub narration: bool,
    pub slides: bool,
    pub upload: bool,
    pub voice_model: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            pdf: true,
            text: true,
            markdown: true,
            narration: false,
            slides: false,
            upload: false,
            voice_model: DEFAULT_VOICE_MODEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ExportKind, ExportOutcome, ExportReport, ExportStatus};
    use std::path::PathBuf;

    #[test]
    fn failed_status_coexists_with_successful_siblings() {
        let mut report = ExportReport::default();
        report.push(ExportStatus {
            kind: ExportKind::Text,
            outcome: ExportOutcome::Written {
                path: PathBuf::from("exports/guion_demo.txt"),
            },
        });
        report.push(ExportStatus {
            kind: ExportKind::Narration,
            outcome: ExportOutcome::Failed {
                reason: "piper not found".into(),
            },
        });
        report.push(ExportStatus {
            kind: ExportKind::Upload,
            outcome: ExportOutcome::Uploaded {
                url: "https://drive.example/abc".into(),
            },
        });

        assert_eq!(report.statuses().len(), 3);
        assert_eq!(report.failures().count(), 1);
        assert!(!report.all_succeeded());
        assert!(report.statuses()[0].succeeded());
        assert!(report.statuses()[2].succeeded());
    }

    #[test]
    fn describe_names_the_exporter() {
        let status = ExportStatus {
            kind: ExportKind::Slides,
            outcome: ExportOutcome::Failed {
                reason: "disco lleno".into(),
            },
        };
        let line = status.describe();
        assert!(line.contains("Diapositivas"));
        assert!(line.contains("disco lleno"));
    }
}
