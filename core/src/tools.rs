//! Catalogue of conversion tools offered by the server.
//!
//! Each tool is identified on the wire by a short kebab-case string
//! (`"pdf-to-word"`, `"merge"`, ...). The set is fixed: anything else is
//! rejected by [`Tool::from_str`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ToolError;

/// File extensions the conversion server accepts at all.
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "png", "jpg", "jpeg", "docx", "xlsx", "pptx", "txt"];

/// Whether a filename carries one of [`ALLOWED_EXTENSIONS`].
pub fn is_allowed_file(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        ALLOWED_EXTENSIONS
            .iter()
            .any(|a| a.eq_ignore_ascii_case(ext))
    })
}

/// Grouping used by the tool grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToolCategory {
    Pdf,
    Office,
    Image,
}

impl ToolCategory {
    pub fn title(&self) -> &'static str {
        match self {
            ToolCategory::Pdf => "PDF Tools",
            ToolCategory::Office => "Office to PDF",
            ToolCategory::Image => "Image Tools",
        }
    }
}

/// A server-side conversion capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    Merge,
    SplitPdf,
    CompressPdf,
    PdfToWord,
    PdfToExcel,
    PdfToPpt,
    WordToPdf,
    ExcelToPdf,
    PptToPdf,
    ImageToPdf,
    PngToJpg,
    JpgToPng,
    ImageCompressor,
    ResizeImage,
    BackgroundRemover,
}

impl Tool {
    /// Every tool, in grid order.
    pub const ALL: [Tool; 15] = [
        Tool::Merge,
        Tool::SplitPdf,
        Tool::CompressPdf,
        Tool::PdfToWord,
        Tool::PdfToExcel,
        Tool::PdfToPpt,
        Tool::WordToPdf,
        Tool::ExcelToPdf,
        Tool::PptToPdf,
        Tool::ImageToPdf,
        Tool::PngToJpg,
        Tool::JpgToPng,
        Tool::ImageCompressor,
        Tool::ResizeImage,
        Tool::BackgroundRemover,
    ];

    /// Wire identifier, sent as the `tool` form field.
    pub fn id(&self) -> &'static str {
        match self {
            Tool::Merge => "merge",
            Tool::SplitPdf => "split-pdf",
            Tool::CompressPdf => "compress-pdf",
            Tool::PdfToWord => "pdf-to-word",
            Tool::PdfToExcel => "pdf-to-excel",
            Tool::PdfToPpt => "pdf-to-ppt",
            Tool::WordToPdf => "word-to-pdf",
            Tool::ExcelToPdf => "excel-to-pdf",
            Tool::PptToPdf => "ppt-to-pdf",
            Tool::ImageToPdf => "image-to-pdf",
            Tool::PngToJpg => "png-to-jpg",
            Tool::JpgToPng => "jpg-to-png",
            Tool::ImageCompressor => "image-compressor",
            Tool::ResizeImage => "resize-image",
            Tool::BackgroundRemover => "background-remover",
        }
    }

    /// Human-readable card title.
    pub fn label(&self) -> &'static str {
        match self {
            Tool::Merge => "Merge PDF",
            Tool::SplitPdf => "Split PDF",
            Tool::CompressPdf => "Compress PDF",
            Tool::PdfToWord => "PDF to Word",
            Tool::PdfToExcel => "PDF to Excel",
            Tool::PdfToPpt => "PDF to PowerPoint",
            Tool::WordToPdf => "Word to PDF",
            Tool::ExcelToPdf => "Excel to PDF",
            Tool::PptToPdf => "PowerPoint to PDF",
            Tool::ImageToPdf => "Image to PDF",
            Tool::PngToJpg => "PNG to JPG",
            Tool::JpgToPng => "JPG to PNG",
            Tool::ImageCompressor => "Compress Image",
            Tool::ResizeImage => "Resize Image",
            Tool::BackgroundRemover => "Remove Background",
        }
    }

    /// One-line description for the tool card.
    pub fn description(&self) -> &'static str {
        match self {
            Tool::Merge => "Combine several PDFs into one document",
            Tool::SplitPdf => "Extract the first page of a PDF",
            Tool::CompressPdf => "Rewrite a PDF without its metadata",
            Tool::PdfToWord => "Convert a PDF into an editable DOCX",
            Tool::PdfToExcel => "Pull tables out of a PDF into XLSX",
            Tool::PdfToPpt => "Turn each PDF page into a slide",
            Tool::WordToPdf => "Render a DOCX document as PDF",
            Tool::ExcelToPdf => "Print every sheet of a workbook to PDF",
            Tool::PptToPdf => "Export slide text to PDF",
            Tool::ImageToPdf => "Bundle images into a single PDF",
            Tool::PngToJpg => "Flatten PNG transparency onto JPG",
            Tool::JpgToPng => "Convert JPG images to PNG",
            Tool::ImageCompressor => "Shrink images with lossy compression",
            Tool::ResizeImage => "Scale images down by half",
            Tool::BackgroundRemover => "Make light backgrounds transparent",
        }
    }

    pub fn category(&self) -> ToolCategory {
        match self {
            Tool::Merge
            | Tool::SplitPdf
            | Tool::CompressPdf
            | Tool::PdfToWord
            | Tool::PdfToExcel
            | Tool::PdfToPpt => ToolCategory::Pdf,
            Tool::WordToPdf | Tool::ExcelToPdf | Tool::PptToPdf => ToolCategory::Office,
            Tool::ImageToPdf
            | Tool::PngToJpg
            | Tool::JpgToPng
            | Tool::ImageCompressor
            | Tool::ResizeImage
            | Tool::BackgroundRemover => ToolCategory::Image,
        }
    }

    /// Extensions this tool reads.
    pub fn accepted_extensions(&self) -> &'static [&'static str] {
        match self.category() {
            ToolCategory::Pdf => &["pdf"],
            ToolCategory::Office => match self {
                Tool::WordToPdf => &["docx"],
                Tool::ExcelToPdf => &["xlsx"],
                _ => &["pptx"],
            },
            ToolCategory::Image => match self {
                Tool::PngToJpg => &["png"],
                Tool::JpgToPng => &["jpg", "jpeg"],
                _ => &["png", "jpg", "jpeg"],
            },
        }
    }

    /// Value for an `<input type="file" accept="...">` attribute.
    pub fn accept_attr(&self) -> String {
        self.accepted_extensions()
            .iter()
            .map(|ext| format!(".{}", ext))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Whether the tool consumes more than the first file.
    pub fn takes_multiple_files(&self) -> bool {
        matches!(self, Tool::Merge | Tool::ImageToPdf)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tool {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .iter()
            .copied()
            .find(|tool| tool.id() == s)
            .ok_or_else(|| ToolError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_parse_back() {
        for tool in Tool::ALL {
            assert_eq!(tool.id().parse::<Tool>(), Ok(tool));
        }
    }

    #[test]
    fn test_unknown_tool_rejected() {
        let err = "pdf-to-mp3".parse::<Tool>().unwrap_err();
        assert_eq!(err, ToolError::Unknown("pdf-to-mp3".into()));
    }

    #[test]
    fn test_serde_uses_wire_ids() {
        let json = serde_json::to_string(&Tool::PdfToWord).unwrap();
        assert_eq!(json, "\"pdf-to-word\"");

        let tool: Tool = serde_json::from_str("\"background-remover\"").unwrap();
        assert_eq!(tool, Tool::BackgroundRemover);
    }

    #[test]
    fn test_accept_attr() {
        assert_eq!(Tool::Merge.accept_attr(), ".pdf");
        assert_eq!(Tool::JpgToPng.accept_attr(), ".jpg,.jpeg");
        assert_eq!(Tool::ExcelToPdf.accept_attr(), ".xlsx");
    }

    #[test]
    fn test_allowed_file() {
        assert!(is_allowed_file("report.PDF"));
        assert!(is_allowed_file("scan.final.jpeg"));
        assert!(!is_allowed_file("archive.zip"));
        assert!(!is_allowed_file("README"));
    }

    #[test]
    fn test_multi_file_tools() {
        let multi: Vec<_> = Tool::ALL.iter().filter(|t| t.takes_multiple_files()).collect();
        assert_eq!(multi, vec![&Tool::Merge, &Tool::ImageToPdf]);
    }
}
