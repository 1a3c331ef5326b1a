//! The step-by-step report: an append-only list of sections that is
//! serialized to a `.docx` file once, at the end of a run.

use std::fs::File;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use docx_rs::{BreakType, Docx, Pic, Run, Style, StyleType};
use image::ImageReader;
use tracing::info;

use crate::error::{Error, Result};

const EMU_PER_INCH: f64 = 914_400.0;

/// Heading styles as (level, style id, display name, half-point size).
const HEADING_STYLES: &[(u8, &str, &str, usize)] = &[
    (0, "Title", "Title", 52),
    (1, "Heading1", "Heading 1", 32),
    (2, "Heading2", "Heading 2", 26),
    (3, "Heading3", "Heading 3", 24),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
}

/// A paragraph built from runs; each run is rendered on its own line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBlock {
    runs: Vec<TextRun>,
}

impl TextBlock {
    pub fn add_run(&mut self, text: impl Into<String>) -> &mut Self {
        self.runs.push(TextRun {
            text: text.into(),
            bold: false,
        });
        self
    }

    pub fn add_bold_run(&mut self, text: impl Into<String>) -> &mut Self {
        self.runs.push(TextRun {
            text: text.into(),
            bold: true,
        });
        self
    }

    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }
}

#[derive(Debug, Clone)]
pub enum Section {
    Heading { text: String, level: u8 },
    Image {
        bytes: Vec<u8>,
        width_px: u32,
        height_px: u32,
        display_width_inches: f64,
    },
    Paragraph(TextBlock),
    PageBreak,
}

#[derive(Debug, Clone, Default)]
pub struct Report {
    sections: Vec<Section>,
}

impl Report {
    /// Start a report with a level-0 title heading.
    pub fn new(title: &str) -> Self {
        let mut report = Self::default();
        report.add_heading(title, 0);
        report
    }

    pub fn add_heading(&mut self, text: impl Into<String>, level: u8) {
        self.sections.push(Section::Heading {
            text: text.into(),
            level: level.min(3),
        });
    }

    /// Embed an encoded image at a fixed display width.
    ///
    /// Fails without touching the report if the bytes do not decode to an
    /// image with non-zero dimensions.
    pub fn add_image(&mut self, bytes: Vec<u8>, display_width_inches: f64) -> Result<()> {
        let (width_px, height_px) = ImageReader::new(Cursor::new(&bytes))
            .with_guessed_format()?
            .into_dimensions()
            .map_err(|e| Error::ImageError(e.to_string()))?;
        if width_px == 0 || height_px == 0 {
            return Err(Error::ImageError(format!(
                "image has no area ({width_px}x{height_px})"
            )));
        }

        self.sections.push(Section::Image {
            bytes,
            width_px,
            height_px,
            display_width_inches,
        });
        Ok(())
    }

    pub fn add_page_break(&mut self) {
        self.sections.push(Section::PageBreak);
    }

    /// Append an empty paragraph and return it for adding runs.
    pub fn add_paragraph(&mut self) -> &mut TextBlock {
        self.sections.push(Section::Paragraph(TextBlock::default()));
        match self.sections.last_mut() {
            Some(Section::Paragraph(block)) => block,
            _ => unreachable!("a paragraph was just pushed"),
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Texts of all headings at `level`, in order.
    pub fn headings(&self, level: u8) -> Vec<&str> {
        self.sections
            .iter()
            .filter_map(|s| match s {
                Section::Heading { text, level: l } if *l == level => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Serialize the report as Office Open XML and write it to `path`.
    /// Returns the absolute path written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = std::path::absolute(path.as_ref())?;
        let file = File::create(&path)?;
        self.to_docx()
            .build()
            .pack(file)
            .map_err(|e| Error::ReportError(e.to_string()))?;
        info!("Report saved to {}", path.display());
        Ok(path)
    }

    fn to_docx(&self) -> Docx {
        let mut docx = Docx::new();
        for (_, id, name, size) in HEADING_STYLES {
            docx = docx.add_style(
                Style::new(*id, StyleType::Paragraph)
                    .name(*name)
                    .size(*size)
                    .bold(),
            );
        }

        for section in &self.sections {
            let paragraph = match section {
                Section::Heading { text, level } => {
                    let style = HEADING_STYLES
                        .iter()
                        .find(|(l, ..)| l == level)
                        .map_or("Heading1", |(_, id, ..)| *id);
                    docx_rs::Paragraph::new()
                        .add_run(Run::new().add_text(text))
                        .style(style)
                }
                Section::Image {
                    bytes,
                    width_px,
                    height_px,
                    display_width_inches,
                } => {
                    let width_emu = (display_width_inches * EMU_PER_INCH) as u32;
                    let height_emu =
                        (f64::from(width_emu) * f64::from(*height_px) / f64::from(*width_px)) as u32;
                    let pic = Pic::new_with_dimensions(bytes.clone(), *width_px, *height_px)
                        .size(width_emu, height_emu);
                    docx_rs::Paragraph::new().add_run(Run::new().add_image(pic))
                }
                Section::Paragraph(block) => {
                    block.runs.iter().fold(docx_rs::Paragraph::new(), |p, run| {
                        let mut r = Run::new().add_text(&run.text);
                        if run.bold {
                            r = r.bold();
                        }
                        p.add_run(r.add_break(BreakType::TextWrapping))
                    })
                }
                Section::PageBreak => {
                    docx_rs::Paragraph::new().add_run(Run::new().add_break(BreakType::Page))
                }
            };
            docx = docx.add_paragraph(paragraph);
        }
        docx
    }
}
