use crate::error::Result;
use std::path::Path;
use tokio::fs;

/// Writes a self-contained HTML slide deck: one slide per segment, titled by
/// its ordinal position, body already bounded by the partitioner.
pub async fn write_slide_deck(title: &str, segments: &[String], path: &Path) -> Result<()> {
    fs::write(path, render_deck(title, segments)).await?;
    Ok(())
}

fn render_deck(title: &str, segments: &[String]) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!(
        "<title>{}</title>\n",
        html_escape::encode_text(title)
    ));
    html.push_str(
        "<style>\n\
         section { width: 90vw; height: 90vh; margin: 2vh auto; padding: 2em; \
         display: flex; flex-direction: column; justify-content: center; \
         font-family: Helvetica, Arial, sans-serif; border: 1px solid #ccc; }\n\
         h1 { font-size: 1.2em; color: #888; }\n\
         p { font-size: 1.8em; line-height: 1.4; }\n\
         </style>\n</head>\n<body>\n",
    );

    for (index, segment) in segments.iter().enumerate() {
        html.push_str(&format!(
            "<section>\n<h1>{}</h1>\n<p>{}</p>\n</section>\n",
            index + 1,
            html_escape::encode_text(segment)
        ));
    }

    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::render_deck;

    #[test]
    fn one_section_per_segment_with_ordinal_titles() {
        let segments = vec!["primero".to_string(), "segundo".to_string(), "tercero".to_string()];
        let html = render_deck("Demo", &segments);
        assert_eq!(html.matches("<section>").count(), 3);
        assert!(html.contains("<h1>1</h1>"));
        assert!(html.contains("<h1>2</h1>"));
        assert!(html.contains("<h1>3</h1>"));
        let first = html.find("primero").expect("first body");
        let second = html.find("segundo").expect("second body");
        assert!(first < second);
    }

    #[test]
    fn bodies_are_escaped() {
        let segments = vec!["precio < 100 & <b>gratis</b>".to_string()];
        let html = render_deck("Demo", &segments);
        assert!(html.contains("precio &lt; 100 &amp; &lt;b&gt;gratis&lt;/b&gt;"));
        assert!(!html.contains("<b>gratis</b>"));
    }

    #[test]
    fn empty_sequence_renders_empty_deck() {
        let html = render_deck("Demo", &[]);
        assert!(!html.contains("<section>"));
        assert!(html.contains("</html>"));
    }
}
