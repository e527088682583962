use crate::error::Result;
use std::path::Path;
use tokio::fs;

/// Plain-text artifact: the generated script byte for byte.
pub async fn write_plain_text(text: &str, path: &Path) -> Result<()> {
    fs::write(path, text).await?;
    Ok(())
}

/// Markdown artifact: the script under a product-titled header.
pub async fn write_markdown(product: &str, text: &str, path: &Path) -> Result<()> {
    fs::write(path, markdown_document(product, text)).await?;
    Ok(())
}

fn markdown_document(product: &str, text: &str) -> String {
    let title = if product.trim().is_empty() {
        "Guion de VSL".to_string()
    } else {
        format!("Guion de VSL — {}", product.trim())
    };
    format!("# {title}\n\n{text}\n")
}

#[cfg(test)]
mod tests {
    use super::{markdown_document, write_plain_text};

    #[test]
    fn markdown_has_product_title_and_body() {
        let doc = markdown_document("Curso de Copy", "Hola.\n\nAdiós.");
        assert!(doc.starts_with("# Guion de VSL — Curso de Copy\n\n"));
        assert!(doc.contains("Hola.\n\nAdiós."));
    }

    #[test]
    fn markdown_title_falls_back_without_product() {
        let doc = markdown_document("   ", "cuerpo");
        assert!(doc.starts_with("# Guion de VSL\n"));
    }

    #[tokio::test]
    async fn plain_text_is_unchanged() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("guion.txt");
        write_plain_text("texto íntegro\n\ncon párrafos", &path)
            .await
            .expect("written");
        let back = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(back, "texto íntegro\n\ncon párrafos");
    }
}
