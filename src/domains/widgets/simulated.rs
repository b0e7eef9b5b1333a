//! Simulated file conversions.
//!
//! No document or image is actually processed. Each conversion checks the
//! source files the way an upload form would, optionally waits as long as a
//! real conversion might, and reports a plausible result. Every result carries
//! `simulated: true` and points its download reference back at the source.

use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use super::error::{ValidationError, WidgetResult};
use crate::domains::catalog::Latency;

const MB: u64 = 1024 * 1024;

pub const PDF_MAX_SIZE: u64 = 50 * MB;
pub const JPG_MAX_SIZE: u64 = 10 * MB;
pub const IMAGE_MAX_SIZE: u64 = 20 * MB;

const PDF_EXTENSIONS: &[&str] = &["pdf"];
const JPG_EXTENSIONS: &[&str] = &["jpg", "jpeg"];
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Pages produced by a PDF to JPG conversion.
pub const PDF_TO_JPG_PAGES: u32 = 3;

pub const MIN_QUALITY: u8 = 10;
pub const MAX_QUALITY: u8 = 100;

/// Processing time of each conversion when latency simulation is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    PdfToWord,
    PdfToJpg,
    JpgToPdf,
    CompressImage,
}

impl Conversion {
    pub fn delay(self) -> Duration {
        let ms = match self {
            Self::PdfToWord => 2000,
            Self::PdfToJpg => 3000,
            Self::JpgToPdf => 2500,
            Self::CompressImage => 2000,
        };
        Duration::from_millis(ms)
    }
}

/// A local file selected as conversion input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, size: u64) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name, size }
    }

    /// Read the size of an existing file.
    pub async fn inspect(path: &Path) -> std::io::Result<Self> {
        let metadata = tokio::fs::metadata(path).await?;
        Ok(Self::new(path, metadata.len()))
    }

    /// `file://` reference to the source.
    pub fn reference(&self) -> String {
        format!("file://{}", self.path.display())
    }

    fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
    }

    fn stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("file")
    }

    /// Enforce the accepted extensions and size limit.
    fn check(&self, accepted: &[&str], max_size: u64) -> WidgetResult<()> {
        let accepted_ext = self
            .extension()
            .is_some_and(|ext| accepted.contains(&ext.as_str()));
        if !accepted_ext {
            let list: Vec<String> = accepted.iter().map(|e| format!(".{}", e)).collect();
            return Err(ValidationError::new(format!(
                "'{}' is not a supported file type. Accepted: {}",
                self.name,
                list.join(", ")
            )));
        }

        if self.size > max_size {
            return Err(ValidationError::new(format!(
                "'{}' is too large ({}). Maximum size is {}",
                self.name,
                format_size(self.size),
                format_size(max_size)
            )));
        }

        Ok(())
    }
}

/// A single converted file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertedFile {
    pub filename: String,
    pub size: u64,
    pub download_ref: String,
    pub simulated: bool,
}

/// One rendered page of a PDF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageImage {
    pub page_number: u32,
    pub filename: String,
    pub size: u64,
    pub download_ref: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfToJpgResult {
    pub pages: Vec<PageImage>,
    pub quality: u8,
    pub simulated: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JpgToPdfResult {
    #[serde(flatten)]
    pub file: ConvertedFile,
    pub page_count: usize,
    pub page_size: PageSize,
    pub orientation: Orientation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionResult {
    #[serde(flatten)]
    pub file: ConvertedFile,
    pub original_size: u64,
    pub quality: u8,
    /// Percent saved, one decimal.
    pub reduction: f64,
}

/// Convert a PDF to an editable Word document.
pub async fn pdf_to_word(source: &SourceFile, latency: Latency) -> WidgetResult<ConvertedFile> {
    source.check(PDF_EXTENSIONS, PDF_MAX_SIZE)?;
    latency.sleep(Conversion::PdfToWord.delay()).await;

    debug!("Simulated PDF to Word for {}", source.name);
    Ok(ConvertedFile {
        filename: format!("{}.docx", source.stem()),
        size: (source.size as f64 * 0.8).round() as u64,
        download_ref: source.reference(),
        simulated: true,
    })
}

/// Render each page of a PDF as a JPG image.
pub async fn pdf_to_jpg(
    source: &SourceFile,
    quality: u8,
    latency: Latency,
) -> WidgetResult<PdfToJpgResult> {
    source.check(PDF_EXTENSIONS, PDF_MAX_SIZE)?;
    check_quality(quality)?;
    latency.sleep(Conversion::PdfToJpg.delay()).await;

    debug!("Simulated PDF to JPG for {}", source.name);
    Ok(pdf_pages_with(source, quality, &mut rand::thread_rng()))
}

fn pdf_pages_with<R: Rng + ?Sized>(
    source: &SourceFile,
    quality: u8,
    rng: &mut R,
) -> PdfToJpgResult {
    let pages = (1..=PDF_TO_JPG_PAGES)
        .map(|page_number| PageImage {
            page_number,
            filename: format!("{}_page_{}.jpg", source.stem(), page_number),
            size: (source.size as f64 * 0.3 * rng.gen_range(0.0..1.0)).round() as u64 + 100_000,
            download_ref: source.reference(),
        })
        .collect();

    PdfToJpgResult {
        pages,
        quality,
        simulated: true,
    }
}

/// Combine JPG images into one PDF, one image per page.
pub async fn jpg_to_pdf(
    sources: &[SourceFile],
    page_size: PageSize,
    orientation: Orientation,
    latency: Latency,
) -> WidgetResult<JpgToPdfResult> {
    let Some(first) = sources.first() else {
        return Err(ValidationError::new(
            "Please select at least one JPG file",
        ));
    };
    for source in sources {
        source.check(JPG_EXTENSIONS, JPG_MAX_SIZE)?;
    }
    latency.sleep(Conversion::JpgToPdf.delay()).await;

    let total: u64 = sources.iter().map(|s| s.size).sum();
    debug!("Simulated JPG to PDF for {} images", sources.len());
    Ok(JpgToPdfResult {
        file: ConvertedFile {
            filename: "converted_images.pdf".to_string(),
            size: (total as f64 * 0.7).round() as u64,
            download_ref: first.reference(),
            simulated: true,
        },
        page_count: sources.len(),
        page_size,
        orientation,
    })
}

/// Re-encode an image at a lower quality.
pub async fn compress_image(
    source: &SourceFile,
    quality: u8,
    latency: Latency,
) -> WidgetResult<CompressionResult> {
    source.check(IMAGE_EXTENSIONS, IMAGE_MAX_SIZE)?;
    check_quality(quality)?;
    latency.sleep(Conversion::CompressImage.delay()).await;

    debug!("Simulated compression of {} at {}%", source.name, quality);
    Ok(compress_with(source, quality, &mut rand::thread_rng()))
}

fn compress_with<R: Rng + ?Sized>(
    source: &SourceFile,
    quality: u8,
    rng: &mut R,
) -> CompressionResult {
    let ratio = f64::from(quality) / 100.0;
    let new_size = (source.size as f64 * ratio * rng.gen_range(0.4..0.7)).round() as u64;
    let reduction = if source.size == 0 {
        0.0
    } else {
        let saved = source.size.saturating_sub(new_size) as f64 / source.size as f64 * 100.0;
        (saved * 10.0).round() / 10.0
    };

    let filename = match source.extension() {
        Some(ext) => format!("{}_compressed.{}", source.stem(), ext),
        None => format!("{}_compressed", source.stem()),
    };

    CompressionResult {
        file: ConvertedFile {
            filename,
            size: new_size,
            download_ref: source.reference(),
            simulated: true,
        },
        original_size: source.size,
        quality,
        reduction,
    }
}

fn check_quality(quality: u8) -> WidgetResult<()> {
    if (MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
        Ok(())
    } else {
        Err(ValidationError::new(format!(
            "Quality must be between {} and {}",
            MIN_QUALITY, MAX_QUALITY
        )))
    }
}

/// Human readable size, two decimals at most.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tokio::time::Instant;

    fn file(name: &str, size: u64) -> SourceFile {
        SourceFile::new(format!("/data/{}", name), size)
    }

    #[tokio::test]
    async fn test_pdf_to_word() {
        let source = file("report.pdf", 1_000_000);
        let result = pdf_to_word(&source, Latency::disabled()).await.unwrap();

        assert_eq!(result.filename, "report.docx");
        assert_eq!(result.size, 800_000);
        assert_eq!(result.download_ref, "file:///data/report.pdf");
        assert!(result.simulated);
    }

    #[tokio::test]
    async fn test_rejects_wrong_extension() {
        let err = pdf_to_word(&file("photo.png", 10), Latency::disabled())
            .await
            .unwrap_err();
        assert!(err.message().contains(".pdf"));
    }

    #[tokio::test]
    async fn test_rejects_oversized_pdf() {
        let err = pdf_to_word(&file("big.PDF", PDF_MAX_SIZE + 1), Latency::disabled())
            .await
            .unwrap_err();
        assert!(err.message().contains("Maximum size is 50 MB"));
    }

    #[test]
    fn test_pdf_pages() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = pdf_pages_with(&file("deck.pdf", 2_000_000), 90, &mut rng);

        assert_eq!(result.pages.len(), 3);
        assert_eq!(result.pages[2].filename, "deck_page_3.jpg");
        for page in &result.pages {
            assert!(page.size >= 100_000 && page.size <= 700_000);
        }
    }

    #[tokio::test]
    async fn test_pdf_to_jpg_quality_bounds() {
        let source = file("deck.pdf", 10);
        assert!(pdf_to_jpg(&source, 5, Latency::disabled()).await.is_err());
        assert!(pdf_to_jpg(&source, 10, Latency::disabled()).await.is_ok());
    }

    #[tokio::test]
    async fn test_jpg_to_pdf() {
        let sources = vec![file("a.jpg", 1000), file("b.JPEG", 3000)];
        let result = jpg_to_pdf(
            &sources,
            PageSize::Letter,
            Orientation::Landscape,
            Latency::disabled(),
        )
        .await
        .unwrap();

        assert_eq!(result.file.filename, "converted_images.pdf");
        assert_eq!(result.file.size, 2800);
        assert_eq!(result.page_count, 2);
        assert_eq!(result.page_size, PageSize::Letter);
    }

    #[tokio::test]
    async fn test_jpg_to_pdf_requires_files() {
        let err = jpg_to_pdf(&[], PageSize::A4, Orientation::Portrait, Latency::disabled())
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Please select at least one JPG file");
    }

    #[tokio::test]
    async fn test_jpg_to_pdf_limits_each_file() {
        let sources = vec![file("a.jpg", 1000), file("b.jpg", JPG_MAX_SIZE + 1)];
        assert!(
            jpg_to_pdf(&sources, PageSize::A4, Orientation::Portrait, Latency::disabled())
                .await
                .is_err()
        );
    }

    #[test]
    fn test_compression() {
        let mut rng = StdRng::seed_from_u64(3);
        let result = compress_with(&file("photo.png", 1_000_000), 50, &mut rng);

        assert_eq!(result.file.filename, "photo_compressed.png");
        assert!(result.file.size >= 200_000 && result.file.size <= 350_000);
        assert!(result.reduction >= 65.0 && result.reduction <= 80.0);
        assert_eq!(result.original_size, 1_000_000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_processing_delay_when_enabled() {
        let start = Instant::now();
        compress_image(&file("photo.webp", 100), 75, Latency::new(true))
            .await
            .unwrap();
        assert!(start.elapsed() >= Conversion::CompressImage.delay());
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 Bytes");
        assert_eq!(format_size(512), "512 Bytes");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(20 * MB), "20 MB");
    }

    #[tokio::test]
    async fn test_inspect_reads_size() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("scan.jpg");
        std::fs::write(&path, vec![0u8; 2048]).unwrap();

        let source = SourceFile::inspect(&path).await.unwrap();
        assert_eq!(source.size, 2048);
        assert_eq!(source.name, "scan.jpg");
    }
}
