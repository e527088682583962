use crate::core::export::{DEFAULT_VOICE_MODEL, ExportOptions, upload::UploadSession};
use crate::core::storage::FileEntry;
use crate::core::{
    FileType, ScriptRequest, ScriptService, StorageService, artifact_slug, partition, pipeline,
};
use crate::error::Result;
use crate::tui::components::{ContentViewer, FileList, InputField, NicheSelector, ProgressPane};
use crate::tui::events::AppEvent;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Home,
    NewScript,
    Processing { product: String },
    Browser { filter: FileFilter, search: String },
    Viewer { file_path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FileFilter {
    All,
    Scripts,
    Exports,
}

// Focus order on the form: the eight text fields, then the niche selector,
// then the four export toggles.
pub const FIELD_PRODUCT: usize = 0;
pub const FIELD_PRESENTER: usize = 1;
pub const FIELD_AUDIENCE: usize = 2;
pub const FIELD_PAIN: usize = 3;
pub const FIELD_BENEFITS: usize = 4;
pub const FIELD_PRICING: usize = 5;
pub const FIELD_GUARANTEE: usize = 6;
pub const FIELD_CTA: usize = 7;
pub const FIELD_COUNT: usize = 8;
pub const FOCUS_NICHE: usize = 8;
pub const FOCUS_PDF: usize = 9;
pub const FOCUS_NARRATION: usize = 10;
pub const FOCUS_SLIDES: usize = 11;
pub const FOCUS_UPLOAD: usize = 12;
pub const FOCUS_COUNT: usize = 13;

pub struct App {
    pub state: AppState,
    pub should_quit: bool,

    // Home screen
    pub selected_option: usize,

    // Form screen
    pub inputs: Vec<InputField>,
    pub niche_selector: NicheSelector,
    pub export_pdf: bool,
    pub export_narration: bool,
    pub export_slides: bool,
    pub export_upload: bool,
    pub input_focus: usize,

    // Browser screen
    pub file_list: FileList,
    pub search_input: InputField,
    pub filter: FileFilter,

    // Viewer screen
    pub content_viewer: Option<ContentViewer>,
    pub viewer_height: u16,

    // Processing screen
    pub progress: ProgressPane,
    last_script_path: Option<PathBuf>,

    // Services
    pub script_service: ScriptService,
    upload_session: Option<Arc<UploadSession>>,

    // Async communication
    pub processing_tx: Option<mpsc::UnboundedSender<String>>,
    pub processing_rx: Option<mpsc::UnboundedReceiver<String>>,
}

fn form_inputs() -> Vec<InputField> {
    vec![
        InputField::new("Producto", "Nombre del producto o servicio"),
        InputField::new("Presentador", "Quién presenta el vídeo"),
        InputField::new("Público objetivo", "Ej: coaches, dueños de ecommerce…"),
        InputField::new("Dolor / Problema", "Problema principal que resuelve"),
        InputField::new("Beneficios clave", "Separa con comas"),
        InputField::new("Precio / Forma de pago", "Ej: 297€ en un pago"),
        InputField::new("Garantía", "Ej: 30 días o te devolvemos el dinero"),
        InputField::new("Llamada a la acción", "Ej: Reserva tu plaza ahora"),
    ]
}

impl App {
    pub fn new() -> Result<Self> {
        let files = StorageService::list_files().unwrap_or_default();

        Ok(Self {
            state: AppState::Home,
            should_quit: false,

            selected_option: 0,

            inputs: form_inputs(),
            niche_selector: NicheSelector::new(),
            export_pdf: true,
            export_narration: false,
            export_slides: false,
            export_upload: false,
            input_focus: 0,

            file_list: FileList::new(files),
            search_input: InputField::new("Buscar", "Filtrar archivos..."),
            filter: FileFilter::All,

            content_viewer: None,
            viewer_height: 0,

            progress: ProgressPane::new(),
            last_script_path: None,

            script_service: ScriptService::new(),
            upload_session: UploadSession::acquire().ok().map(Arc::new),

            processing_tx: None,
            processing_rx: None,
        })
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Quit => {
                self.should_quit = true;
            }
            AppEvent::Key(key) => {
                self.handle_key(key)?;
            }
            AppEvent::Mouse(mouse) => {
                self.handle_mouse(mouse);
            }
            AppEvent::Tick => {
                self.handle_tick()?;
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match &self.state {
            AppState::Home => self.handle_home_key(key),
            AppState::NewScript => self.handle_form_key(key),
            AppState::Browser { .. } => self.handle_browser_key(key),
            AppState::Viewer { .. } => self.handle_viewer_key(key),
            AppState::Processing { .. } => self.handle_processing_key(key),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if matches!(self.state, AppState::Browser { .. }) {
            self.file_list.handle_mouse(mouse);
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => {
                if self.selected_option > 0 {
                    self.selected_option -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_option < 2 {
                    self.selected_option += 1;
                }
            }
            KeyCode::Char('1') => self.selected_option = 0,
            KeyCode::Char('2') => self.selected_option = 1,
            KeyCode::Char('3') => self.selected_option = 2,
            KeyCode::Enter => match self.selected_option {
                0 => {
                    self.state = AppState::NewScript;
                    for input in &mut self.inputs {
                        input.focused = false;
                    }
                    self.inputs[FIELD_PRODUCT].focused = true;
                    self.input_focus = FIELD_PRODUCT;
                }
                1 => {
                    self.refresh_file_list()?;
                    self.filter = FileFilter::Scripts;
                    self.state = AppState::Browser {
                        filter: FileFilter::Scripts,
                        search: String::new(),
                    };
                    self.apply_filter();
                }
                2 => {
                    self.refresh_file_list()?;
                    self.filter = FileFilter::Exports;
                    self.state = AppState::Browser {
                        filter: FileFilter::Exports,
                        search: String::new(),
                    };
                    self.apply_filter();
                }
                _ => {}
            },
            _ => {}
        }
        Ok(())
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => {
                self.state = AppState::Home;
            }
            KeyCode::Tab => {
                self.cycle_input_focus(1);
            }
            KeyCode::BackTab => {
                self.cycle_input_focus(FOCUS_COUNT - 1);
            }
            KeyCode::Enter => {
                if self.input_focus + 1 < FOCUS_COUNT {
                    self.cycle_input_focus(1);
                } else {
                    self.start_processing()?;
                }
            }
            KeyCode::Char(' ') if self.input_focus == FOCUS_PDF => {
                self.export_pdf = !self.export_pdf;
            }
            KeyCode::Char(' ') if self.input_focus == FOCUS_NARRATION => {
                self.export_narration = !self.export_narration;
            }
            KeyCode::Char(' ') if self.input_focus == FOCUS_SLIDES => {
                self.export_slides = !self.export_slides;
            }
            KeyCode::Char(' ') if self.input_focus == FOCUS_UPLOAD => {
                self.export_upload = !self.export_upload;
            }
            _ => {
                if self.input_focus < FIELD_COUNT {
                    self.inputs[self.input_focus].handle_key(key);
                } else if self.input_focus == FOCUS_NICHE {
                    self.niche_selector.handle_key(key);
                }
            }
        }
        Ok(())
    }

    fn handle_browser_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.search_input.focused {
            match key.code {
                KeyCode::Esc => {
                    self.search_input.focused = false;
                    self.search_input.clear();
                    self.apply_filter();
                }
                KeyCode::Enter => {
                    self.search_input.focused = false;
                }
                _ => {
                    self.search_input.handle_key(key);
                    self.apply_search_filter();
                }
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => {
                self.state = AppState::Home;
            }
            KeyCode::Enter => {
                if let Some(file) = self.file_list.get_selected() {
                    self.open_file(file.clone())?;
                }
            }
            KeyCode::Delete => {
                self.delete_selected_file()?;
            }
            KeyCode::Char('/') => {
                self.search_input.focused = true;
            }
            KeyCode::Char('1') => {
                self.filter = FileFilter::All;
                self.apply_filter();
            }
            KeyCode::Char('2') => {
                self.filter = FileFilter::Scripts;
                self.apply_filter();
            }
            KeyCode::Char('3') => {
                self.filter = FileFilter::Exports;
                self.apply_filter();
            }
            _ => {
                self.file_list.handle_key(key);
            }
        }
        Ok(())
    }

    fn handle_viewer_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => {
                self.state = AppState::Browser {
                    filter: self.filter.clone(),
                    search: String::new(),
                };
                self.refresh_file_list()?;
                self.apply_filter();
            }
            _ => {
                if let Some(viewer) = &mut self.content_viewer {
                    viewer.handle_key(key, self.viewer_height as usize);
                }
            }
        }
        Ok(())
    }

    fn handle_processing_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Esc {
            self.state = AppState::NewScript;
            self.progress.reset();
        }
        Ok(())
    }

    fn handle_tick(&mut self) -> Result<()> {
        let mut messages = Vec::new();
        if let Some(rx) = &mut self.processing_rx {
            while let Ok(message) = rx.try_recv() {
                messages.push(message);
            }
        }

        for message in messages {
            if let Some(progress) = message.strip_prefix("PROGRESS:") {
                if let Ok(progress) = progress.parse::<f64>() {
                    self.progress.set_progress(progress);
                }
            } else if let Some(status) = message.strip_prefix("STATUS:") {
                self.progress.set_message(status.to_string());
            } else if let Some(log) = message.strip_prefix("LOG:") {
                self.progress.add_log(log.to_string());
            } else if let Some(path) = message.strip_prefix("SCRIPT:") {
                self.last_script_path = Some(PathBuf::from(path));
            } else if message == "COMPLETE" {
                self.refresh_file_list()?;
                self.progress.reset();
                match self.last_script_path.take() {
                    Some(path) => self.open_generated_script(path)?,
                    None => self.state = AppState::NewScript,
                }
            }
        }
        Ok(())
    }

    fn cycle_input_focus(&mut self, step: usize) {
        for input in &mut self.inputs {
            input.focused = false;
        }
        self.niche_selector.focused = false;

        self.input_focus = (self.input_focus + step) % FOCUS_COUNT;

        if self.input_focus < FIELD_COUNT {
            self.inputs[self.input_focus].focused = true;
        } else if self.input_focus == FOCUS_NICHE {
            self.niche_selector.focused = true;
        }
    }

    fn build_request(&self) -> ScriptRequest {
        ScriptRequest {
            product: self.inputs[FIELD_PRODUCT].value.clone(),
            presenter: self.inputs[FIELD_PRESENTER].value.clone(),
            audience: self.inputs[FIELD_AUDIENCE].value.clone(),
            pain_point: self.inputs[FIELD_PAIN].value.clone(),
            benefits: self.inputs[FIELD_BENEFITS].value.clone(),
            pricing: self.inputs[FIELD_PRICING].value.clone(),
            guarantee: self.inputs[FIELD_GUARANTEE].value.clone(),
            call_to_action: self.inputs[FIELD_CTA].value.clone(),
            niche: self.niche_selector.value(),
        }
    }

    fn start_processing(&mut self) -> Result<()> {
        if !self.inputs[FIELD_PRODUCT].is_valid() {
            return Ok(());
        }

        let request = self.build_request();
        let options = ExportOptions {
            pdf: self.export_pdf,
            text: true,
            markdown: true,
            narration: self.export_narration,
            slides: self.export_slides,
            upload: self.export_upload,
            voice_model: DEFAULT_VOICE_MODEL.to_string(),
        };

        self.state = AppState::Processing {
            product: request.product.clone(),
        };
        self.progress.reset();
        self.progress.set_message("Empezando...".to_string());

        if let Some(tx) = &self.processing_tx {
            self.spawn_pipeline(request, options, tx.clone());
        }

        Ok(())
    }

    fn spawn_pipeline(
        &self,
        request: ScriptRequest,
        options: ExportOptions,
        tx: mpsc::UnboundedSender<String>,
    ) {
        let service = self.script_service.clone();
        let upload_session = self.upload_session.clone();

        tokio::spawn(async move {
            let _ = tx.send("STATUS:Generando guion...".to_string());
            let _ = tx.send("PROGRESS:0.1".to_string());
            let _ = tx.send("LOG:Construyendo prompt y llamando al proveedor...".to_string());

            let script = match service.generate(&request).await {
                Ok(script) => script,
                Err(e) => {
                    let _ = tx.send(format!("LOG:Error del proveedor: {e}"));
                    let _ = tx.send("STATUS:Error al generar el guion".to_string());
                    let _ = tx.send("COMPLETE".to_string());
                    return;
                }
            };

            let _ = tx.send("PROGRESS:0.5".to_string());
            let _ = tx.send(format!(
                "LOG:Guion recibido ({} palabras)",
                script.split_whitespace().count()
            ));

            let slug = artifact_slug(&request.product);
            let script_path = match StorageService::save_script(&slug, &script).await {
                Ok(path) => path,
                Err(e) => {
                    let _ = tx.send(format!("LOG:Error guardando el guion: {e}"));
                    let _ = tx.send("STATUS:Error al guardar".to_string());
                    let _ = tx.send("COMPLETE".to_string());
                    return;
                }
            };
            let _ = tx.send(format!("SCRIPT:{}", script_path.display()));
            let _ = tx.send("PROGRESS:0.6".to_string());

            let partitioned = partition(&script);
            let _ = tx.send(format!(
                "LOG:{} segmentos para diapositivas",
                partitioned.segments.len()
            ));

            let _ = tx.send("STATUS:Exportando...".to_string());
            let report = pipeline::run_exporters(
                &request,
                &slug,
                &partitioned,
                &options,
                upload_session.as_deref(),
            )
            .await;

            for status in report.statuses() {
                let _ = tx.send(format!("LOG:{}", status.describe()));
            }

            let _ = tx.send("PROGRESS:1.0".to_string());
            let _ = tx.send("STATUS:Completado".to_string());
            let _ = tx.send("COMPLETE".to_string());
        });
    }

    fn open_generated_script(&mut self, path: PathBuf) -> Result<()> {
        let content = std::fs::read_to_string(&path)?;
        self.content_viewer = Some(ContentViewer::new(
            content,
            path.to_string_lossy().to_string(),
        ));
        self.state = AppState::Viewer { file_path: path };
        Ok(())
    }

    fn refresh_file_list(&mut self) -> Result<()> {
        let files = StorageService::list_files()?;
        self.file_list.update_items(files);
        Ok(())
    }

    fn apply_filter(&mut self) {
        let all_files = StorageService::list_files().unwrap_or_default();
        let filtered: Vec<FileEntry> = all_files
            .into_iter()
            .filter(|file| self.matches_filter(file))
            .collect();

        self.file_list.update_items(filtered);
    }

    fn apply_search_filter(&mut self) {
        let search_term = self.search_input.value.to_lowercase();
        if search_term.is_empty() {
            self.apply_filter();
            return;
        }

        let all_files = StorageService::list_files().unwrap_or_default();
        let filtered: Vec<FileEntry> = all_files
            .into_iter()
            .filter(|file| {
                self.matches_filter(file) && file.name.to_lowercase().contains(&search_term)
            })
            .collect();

        self.file_list.update_items(filtered);
    }

    fn matches_filter(&self, file: &FileEntry) -> bool {
        match self.filter {
            FileFilter::All => true,
            FileFilter::Scripts => file.file_type == FileType::Script,
            FileFilter::Exports => file.file_type == FileType::Export,
        }
    }

    fn open_file(&mut self, file: FileEntry) -> Result<()> {
        // Exports may be binary (PDF, WAV); show them lossily instead of failing
        let bytes = std::fs::read(&file.path)?;
        let content = String::from_utf8_lossy(&bytes).into_owned();
        self.content_viewer = Some(ContentViewer::new(
            content,
            file.path.to_string_lossy().to_string(),
        ));
        self.state = AppState::Viewer {
            file_path: file.path,
        };
        Ok(())
    }

    fn delete_selected_file(&mut self) -> Result<()> {
        let selected = self.file_list.get_selected().map(|file| file.path.clone());
        if let Some(path) = selected {
            StorageService::delete_file(&path)?;
        }
        self.refresh_file_list()?;
        self.apply_filter();
        Ok(())
    }
}
