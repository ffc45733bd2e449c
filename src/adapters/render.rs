use crate::domain::model::FlatItem;
use crate::domain::ports::Renderer;
use crate::utils::error::{CatalogError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

const HEADERS: [&str; 4] = ["Image", "Name", "Price", "Category"];
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl RenderFormat {
    pub const NAMES: [&'static str; 3] = ["table", "csv", "json"];

    pub fn as_str(self) -> &'static str {
        match self {
            RenderFormat::Table => "table",
            RenderFormat::Csv => "csv",
            RenderFormat::Json => "json",
        }
    }

    /// Builds the sink for this format. Table output goes to stdout unless
    /// `output` is set; csv and json always need a file.
    pub fn build(self, output: Option<&Path>, clear_screen: bool) -> Result<Box<dyn Renderer>> {
        let renderer: Box<dyn Renderer> = match (self, output) {
            (RenderFormat::Table, None) => {
                Box::new(TableRenderer::new(io::stdout()).with_clear_screen(clear_screen))
            }
            (RenderFormat::Table, Some(path)) => Box::new(TableFileRenderer::new(path)),
            (RenderFormat::Csv, Some(path)) => Box::new(CsvFileRenderer::new(path)),
            (RenderFormat::Json, Some(path)) => Box::new(JsonFileRenderer::new(path)),
            (format, None) => {
                return Err(CatalogError::MissingConfigError {
                    field: format!("render.output_path (required for {} output)", format),
                })
            }
        };
        Ok(renderer)
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderFormat {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "table" => Ok(RenderFormat::Table),
            "csv" => Ok(RenderFormat::Csv),
            "json" => Ok(RenderFormat::Json),
            other => Err(CatalogError::InvalidConfigValueError {
                field: "render.format".to_string(),
                value: other.to_string(),
                reason: format!("Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

fn row(item: &FlatItem) -> [String; 4] {
    [
        item.image.clone(),
        item.name.clone(),
        item.price.to_string(),
        item.category.clone(),
    ]
}

fn write_row<W: Write>(out: &mut W, widths: &[usize; 4], cells: [&str; 4]) -> io::Result<()> {
    // last column is left unpadded
    writeln!(
        out,
        "{:<w0$} | {:<w1$} | {:<w2$} | {}",
        cells[0],
        cells[1],
        cells[2],
        cells[3],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
    )
}

/// Writes a plain-text table of `items` in the given order.
pub fn write_table<W: Write>(out: &mut W, items: &[FlatItem]) -> io::Result<()> {
    let rows: Vec<[String; 4]> = items.iter().map(row).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, &widths, HEADERS)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "{}", rule.join("-+-"))?;
    for cells in &rows {
        write_row(out, &widths, [&cells[0], &cells[1], &cells[2], &cells[3]])?;
    }

    match items.len() {
        0 => writeln!(out, "(no items)"),
        1 => writeln!(out, "(1 item)"),
        n => writeln!(out, "({} items)", n),
    }
}

/// Table written to a stream, one full frame per render.
pub struct TableRenderer<W: Write> {
    out: W,
    clear_screen: bool,
}

impl<W: Write> TableRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            clear_screen: false,
        }
    }

    /// Prefix each frame with an ANSI clear so a terminal shows only the latest one.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TableRenderer<W> {
    fn render(&mut self, items: &[FlatItem]) -> Result<()> {
        if self.clear_screen {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        write_table(&mut self.out, items)?;
        self.out.flush()?;
        Ok(())
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Table rewritten into a file on every render.
#[derive(Debug, Clone)]
pub struct TableFileRenderer {
    path: PathBuf,
}

impl TableFileRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Renderer for TableFileRenderer {
    fn render(&mut self, items: &[FlatItem]) -> Result<()> {
        ensure_parent(&self.path)?;
        let mut buffer: Vec<u8> = Vec::new();
        write_table(&mut buffer, items)?;
        fs::write(&self.path, buffer)?;
        tracing::debug!("Table written to {}", self.path.display());
        Ok(())
    }
}

/// `image,name,price,category` rows; the file is truncated on every render.
#[derive(Debug, Clone)]
pub struct CsvFileRenderer {
    path: PathBuf,
}

impl CsvFileRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Renderer for CsvFileRenderer {
    fn render(&mut self, items: &[FlatItem]) -> Result<()> {
        ensure_parent(&self.path)?;
        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(["image", "name", "price", "category"])?;
        for item in items {
            writer.write_record(row(item))?;
        }
        writer.flush()?;
        tracing::debug!("CSV with {} rows written to {}", items.len(), self.path.display());
        Ok(())
    }
}

#[derive(Serialize)]
struct Snapshot<'a> {
    rendered_at: DateTime<Utc>,
    count: usize,
    items: &'a [FlatItem],
}

/// Pretty JSON snapshot of the latest frame.
#[derive(Debug, Clone)]
pub struct JsonFileRenderer {
    path: PathBuf,
}

impl JsonFileRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Renderer for JsonFileRenderer {
    fn render(&mut self, items: &[FlatItem]) -> Result<()> {
        ensure_parent(&self.path)?;
        let snapshot = Snapshot {
            rendered_at: Utc::now(),
            count: items.len(),
            items,
        };
        let json = serde_json::to_string_pretty(&snapshot)?;
        fs::write(&self.path, json)?;
        tracing::debug!("JSON snapshot written to {}", self.path.display());
        Ok(())
    }
}

/// Keeps only the most recent frame in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryRenderer {
    frame: Vec<FlatItem>,
    renders: usize,
}

impl MemoryRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> &[FlatItem] {
        &self.frame
    }

    pub fn names(&self) -> Vec<&str> {
        self.frame.iter().map(|item| item.name.as_str()).collect()
    }

    pub fn render_count(&self) -> usize {
        self.renders
    }
}

impl Renderer for MemoryRenderer {
    fn render(&mut self, items: &[FlatItem]) -> Result<()> {
        self.frame = items.to_vec();
        self.renders += 1;
        Ok(())
    }
}
