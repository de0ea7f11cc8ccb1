//! Design export. JPG export writes the fetched bytes untouched; PDF
//! export decodes the image and embeds it into a single page sized to the
//! pixel dimensions. Both return only after the file is on disk, so
//! completion is observable by the caller.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use base64::{engine::general_purpose, Engine as _};
use chrono::Utc;
use once_cell::sync::Lazy;
use printpdf::image_crate::GenericImageView;
use printpdf::{Image, ImageTransform, Mm, PdfDocument};
use regex::Regex;
use tracing::debug;
use url::Url;

use crate::utils::http::get_http_client;

const EXPORT_DPI: f32 = 96.0;

static DATA_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^data:(?P<mime>[^;,]+)?(?P<base64>;base64)?,(?P<payload>.*)$")
        .expect("valid data url regex")
});

/// Raw image bytes plus the media type declared by the reference, if any.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    pub mime_type: Option<String>,
}

fn decode_data_url(reference: &str) -> Result<ImagePayload> {
    let captures = DATA_URL_RE
        .captures(reference)
        .ok_or_else(|| anyhow!("malformed data URL"))?;
    if captures.name("base64").is_none() {
        bail!("unsupported data URL encoding; expected base64");
    }
    let payload = captures.name("payload").map(|m| m.as_str()).unwrap_or("");
    let bytes = general_purpose::STANDARD
        .decode(payload)
        .context("failed to decode base64 image payload")?;
    Ok(ImagePayload {
        bytes,
        mime_type: captures.name("mime").map(|m| m.as_str().to_string()),
    })
}

async fn download_image(reference: &str) -> Result<ImagePayload> {
    let response = get_http_client()
        .get(reference)
        .send()
        .await
        .context("failed to fetch image")?;
    let status = response.status();
    if !status.is_success() {
        bail!("image fetch failed with status {status}");
    }
    let mime_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string());
    let bytes = response
        .bytes()
        .await
        .context("failed to read image bytes")?;
    Ok(ImagePayload {
        bytes: bytes.to_vec(),
        mime_type,
    })
}

/// Resolves a generated-design reference (data URL or http(s) URL) to
/// bytes. One fetch, no retry.
pub async fn resolve_image_reference(reference: &str) -> Result<ImagePayload> {
    let parsed = Url::parse(reference).context("invalid image reference")?;
    match parsed.scheme() {
        "data" => decode_data_url(reference),
        "http" | "https" => download_image(reference).await,
        other => bail!("unsupported image reference scheme: {other}"),
    }
}

fn extension_for(payload: &ImagePayload) -> &'static str {
    if let Some(kind) = infer::get(&payload.bytes) {
        return kind.extension();
    }
    match payload.mime_type.as_deref() {
        Some("image/png") => "png",
        Some("image/webp") => "webp",
        _ => "jpg",
    }
}

fn export_file_name(extension: &str) -> String {
    format!("textile-design-{}.{extension}", Utc::now().timestamp_millis())
}

/// Saves the design bytes as-is, without re-encoding.
pub async fn export_jpg(reference: &str, output_dir: &Path) -> Result<PathBuf> {
    let payload = resolve_image_reference(reference).await?;
    let path = output_dir.join(export_file_name(extension_for(&payload)));

    tokio::fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("failed to create {}", output_dir.display()))?;
    tokio::fs::write(&path, &payload.bytes)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    debug!("Exported design image to {}", path.display());
    Ok(path)
}

fn px_to_mm(px: u32) -> Mm {
    Mm(px as f32 * 25.4 / EXPORT_DPI)
}

fn build_pdf(payload: &ImagePayload) -> Result<Vec<u8>> {
    let decoded = printpdf::image_crate::load_from_memory(&payload.bytes)
        .context("failed to decode image for PDF export")?;
    let (width, height) = decoded.dimensions();

    let (doc, page, layer) = PdfDocument::new(
        "Textile Design",
        px_to_mm(width),
        px_to_mm(height),
        "design",
    );
    let pdf_image = Image::from_dynamic_image(&decoded);
    pdf_image.add_to_layer(
        doc.get_page(page).get_layer(layer),
        ImageTransform {
            dpi: Some(EXPORT_DPI),
            ..ImageTransform::default()
        },
    );

    doc.save_to_bytes()
        .map_err(|err| anyhow!("failed to serialize PDF: {err}"))
}

/// Embeds the design into a single-page PDF sized to the image and saves
/// it. Resolves only after the document is fully written.
pub async fn export_pdf(reference: &str, output_dir: &Path) -> Result<PathBuf> {
    let payload = resolve_image_reference(reference).await?;
    let document = build_pdf(&payload)?;
    let path = output_dir.join(export_file_name("pdf"));

    tokio::fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("failed to create {}", output_dir.display()))?;
    tokio::fs::write(&path, &document)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    debug!("Exported design PDF to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_png_bytes() -> Vec<u8> {
        let mut pixels = printpdf::image_crate::RgbImage::new(4, 4);
        for (x, y, pixel) in pixels.enumerate_pixels_mut() {
            *pixel = printpdf::image_crate::Rgb([(x * 60) as u8, (y * 60) as u8, 128]);
        }
        let mut buffer = Cursor::new(Vec::new());
        printpdf::image_crate::DynamicImage::ImageRgb8(pixels)
            .write_to(&mut buffer, printpdf::image_crate::ImageOutputFormat::Png)
            .expect("encode sample png");
        buffer.into_inner()
    }

    fn sample_data_url() -> String {
        format!(
            "data:image/png;base64,{}",
            general_purpose::STANDARD.encode(sample_png_bytes())
        )
    }

    #[test]
    fn data_url_round_trips_to_the_original_bytes() {
        let payload = decode_data_url(&sample_data_url()).expect("decode data url");
        assert_eq!(payload.bytes, sample_png_bytes());
        assert_eq!(payload.mime_type.as_deref(), Some("image/png"));
    }

    #[test]
    fn non_base64_data_urls_are_rejected() {
        let err = decode_data_url("data:text/plain,hello").expect_err("must reject");
        assert!(err.to_string().contains("base64"));
    }

    #[tokio::test]
    async fn unsupported_schemes_are_rejected() {
        let err = resolve_image_reference("ftp://example.com/design.png")
            .await
            .expect_err("must reject");
        assert!(err.to_string().contains("unsupported"));
    }

    #[tokio::test]
    async fn jpg_export_writes_the_bytes_unmodified() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = export_jpg(&sample_data_url(), dir.path())
            .await
            .expect("export succeeds");

        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("png"));
        let written = tokio::fs::read(&path).await.expect("read exported file");
        assert_eq!(written, sample_png_bytes());
    }

    #[tokio::test]
    async fn pdf_export_produces_a_pdf_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = export_pdf(&sample_data_url(), dir.path())
            .await
            .expect("export succeeds");

        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("pdf"));
        let written = tokio::fs::read(&path).await.expect("read exported file");
        assert!(written.starts_with(b"%PDF"));
    }
}
