use crate::tui::app::{
    App, AppState, FOCUS_NARRATION, FOCUS_PDF, FOCUS_SLIDES, FOCUS_UPLOAD, FileFilter,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub fn draw(f: &mut Frame, app: &mut App) {
    match &app.state {
        AppState::Home => draw_home(f, app),
        AppState::NewScript => draw_form(f, app),
        AppState::Processing { product } => {
            let product = product.clone();
            draw_processing(f, app, &product);
        }
        AppState::Browser { .. } => draw_browser(f, app),
        AppState::Viewer { .. } => draw_viewer(f, app),
    }
}

fn title_block(f: &mut Frame, area: Rect, text: &str) {
    let title = Paragraph::new(text)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn help_block(f: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

fn draw_home(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(1),    // Menu
            Constraint::Length(3), // Help
        ])
        .split(f.area());

    title_block(f, chunks[0], "Generador de Guiones de VSL");

    let options = ["● Nuevo guion", "○ Ver guiones", "○ Ver exportaciones"];

    let menu_items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let style = if i == app.selected_option {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let text = if i == app.selected_option {
                option.replace("○", "●")
            } else {
                option.replace("●", "○")
            };

            ListItem::new(Line::from(Span::styled(text, style)))
        })
        .collect();

    let menu = List::new(menu_items)
        .block(Block::default().borders(Borders::ALL).title("Menú"))
        .style(Style::default().fg(Color::White));
    f.render_widget(menu, chunks[1]);

    help_block(f, chunks[2], "[↑↓] Navegar  [Enter] Seleccionar  [q] Salir");
}

fn draw_form(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(12), // Field grid
            Constraint::Length(3),  // Niche selector
            Constraint::Length(3),  // Export toggles
            Constraint::Length(3),  // Help
        ])
        .split(f.area());

    title_block(f, chunks[0], "Nuevo guion de VSL");

    // Eight fields in two columns of four
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    for (column_index, column) in columns.iter().enumerate() {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(*column);

        for row_index in 0..4 {
            let field_index = column_index * 4 + row_index;
            app.inputs[field_index].render(f, rows[row_index]);
        }
    }

    app.niche_selector.render(f, chunks[2]);

    draw_export_toggles(f, chunks[3], app);

    help_block(
        f,
        chunks[4],
        "[Enter] Siguiente/Generar  [Tab] Campo  [Space] Alternar  [Esc] Volver",
    );
}

fn draw_export_toggles(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Exportar");

    let toggles = [
        (FOCUS_PDF, app.export_pdf, "PDF"),
        (FOCUS_NARRATION, app.export_narration, "Narración"),
        (FOCUS_SLIDES, app.export_slides, "Diapositivas"),
        (FOCUS_UPLOAD, app.export_upload, "Subida"),
    ];

    let mut spans = Vec::new();
    for (focus, enabled, label) in toggles {
        let mark = if enabled { "☑" } else { "☐" };
        let style = if app.input_focus == focus {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("{mark} {label}   "), style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    f.render_widget(paragraph, area);
}

fn draw_processing(f: &mut Frame, app: &App, product: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(1),    // Progress area
            Constraint::Length(3), // Help
        ])
        .split(f.area());

    title_block(f, chunks[0], "Generando...");

    app.progress.render(f, chunks[1], product);

    help_block(f, chunks[2], "[Esc] Cancelar");
}

fn draw_browser(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(1)])
        .split(f.area());

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Filters
            Constraint::Length(3), // Search
        ])
        .split(chunks[0]);

    let filter_options = ["● Todos", "○ Guiones", "○ Exportaciones"];
    let filter_items: Vec<ListItem> = filter_options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let is_selected = matches!(
                (&app.filter, i),
                (FileFilter::All, 0) | (FileFilter::Scripts, 1) | (FileFilter::Exports, 2)
            );

            let style = if is_selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let text = if is_selected {
                option.replace("○", "●")
            } else {
                option.replace("●", "○")
            };

            ListItem::new(Line::from(Span::styled(text, style)))
        })
        .collect();

    let filters =
        List::new(filter_items).block(Block::default().borders(Borders::ALL).title("Filtros"));
    f.render_widget(filters, left_chunks[0]);

    app.search_input.render(f, left_chunks[1]);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(chunks[1]);

    app.file_list.render(f, right_chunks[0], "Archivos");

    help_block(
        f,
        right_chunks[1],
        "[Enter] Abrir  [Del] Borrar  [/] Buscar  [1-3] Filtros  [Esc] Volver",
    );
}

fn draw_viewer(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(f.area());

    if let Some(viewer) = &mut app.content_viewer {
        app.viewer_height = chunks[0].height;
        viewer.render(f, chunks[0]);
    }

    help_block(
        f,
        chunks[1],
        "[↑↓] Desplazar  [PgUp/PgDn] Página  [Home/End] Inicio/Fin  [Esc] Volver",
    );
}
