use crate::error::Result;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const LINE_HEIGHT_MM: f32 = 6.0;
const FONT_SIZE_PT: f32 = 12.0;
const WRAP_COLUMNS: usize = 95;

/// Writes the full script as an A4 PDF with the built-in Helvetica font.
/// Characters outside Latin-1 are substituted with `?` so exotic input never
/// aborts the export.
pub fn write_pdf(title: &str, text: &str, path: &Path) -> Result<()> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        title,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "contenido",
    );
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

    for line in text.lines() {
        for wrapped in wrap_line(line) {
            if y < MARGIN_MM {
                let (page, layer_index) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "contenido");
                layer = doc.get_page(page).get_layer(layer_index);
                y = PAGE_HEIGHT_MM - MARGIN_MM;
            }
            if !wrapped.is_empty() {
                layer.use_text(wrapped, FONT_SIZE_PT, Mm(MARGIN_MM), Mm(y), &font);
            }
            y -= LINE_HEIGHT_MM;
        }
    }

    doc.save(&mut BufWriter::new(File::create(path)?))?;
    Ok(())
}

fn wrap_line(line: &str) -> Vec<String> {
    let replaced = to_latin1_lossy(line);
    if replaced.trim().is_empty() {
        return vec![String::new()];
    }
    textwrap::wrap(&replaced, WRAP_COLUMNS)
        .into_iter()
        .map(|cow| cow.into_owned())
        .collect()
}

fn to_latin1_lossy(line: &str) -> String {
    line.chars()
        .map(|c| if (c as u32) <= 0xFF { c } else { '?' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{to_latin1_lossy, wrap_line, write_pdf};

    #[test]
    fn latin1_text_passes_through() {
        assert_eq!(to_latin1_lossy("Garantía de 30 días"), "Garantía de 30 días");
    }

    #[test]
    fn non_latin1_substituted() {
        assert_eq!(to_latin1_lossy("precio: 99€ 🚀"), "precio: 99? ?");
    }

    #[test]
    fn blank_lines_keep_vertical_space() {
        assert_eq!(wrap_line("   "), vec![String::new()]);
    }

    #[test]
    fn long_lines_wrap() {
        let line = "palabra ".repeat(40);
        let wrapped = wrap_line(&line);
        assert!(wrapped.len() > 1);
        assert!(wrapped.iter().all(|l| l.len() <= super::WRAP_COLUMNS));
    }

    #[test]
    fn writes_a_nonempty_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("guion.pdf");
        write_pdf("Guion VSL", "Hola.\n\nSegundo párrafo con garantía.", &path)
            .expect("pdf written");
        let metadata = std::fs::metadata(&path).expect("metadata");
        assert!(metadata.len() > 0);
    }
}
