use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not decode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("Unsupported file type: {0}")]
    UnsupportedMediaType(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Invalid layout: {0}")]
    InvalidGeometry(String),
    #[error("No image loaded")]
    NoImage,
    #[error("An export is already in progress")]
    ExportInProgress,
    #[error("Image encoding failed: {0}")]
    Encoding(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, GridError>;

/// Page orientation, derived from the configured page dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Height strictly greater than width
    Portrait,
    /// Width greater than or equal to height (square pages included)
    Landscape,
}

impl Orientation {
    pub fn for_page(width_mm: f32, height_mm: f32) -> Self {
        if height_mm > width_mm {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

/// Page size presets offered by the page-size selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
    A5,
    A3,
    /// User-defined; selecting it from the list resets to A4 dimensions
    Custom,
}

impl PageSize {
    /// Presets in presentation order
    pub const ALL: [PageSize; 6] = [
        PageSize::A4,
        PageSize::Letter,
        PageSize::Legal,
        PageSize::A5,
        PageSize::A3,
        PageSize::Custom,
    ];

    /// Preset dimensions (width, height) in millimeters
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::Letter => (216.0, 279.0),
            PageSize::Legal => (216.0, 356.0),
            PageSize::A5 => (148.0, 210.0),
            PageSize::A3 => (297.0, 420.0),
            PageSize::Custom => (210.0, 297.0),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            PageSize::A4 => "a4",
            PageSize::Letter => "letter",
            PageSize::Legal => "legal",
            PageSize::A5 => "a5",
            PageSize::A3 => "a3",
            PageSize::Custom => "custom",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PageSize::A4 => "A4",
            PageSize::Letter => "Letter",
            PageSize::Legal => "Legal",
            PageSize::A5 => "A5",
            PageSize::A3 => "A3",
            PageSize::Custom => "Custom",
        }
    }

    /// Selector label, e.g. "A4 (210×297mm)"
    pub fn label(self) -> String {
        match self {
            PageSize::Custom => self.name().to_string(),
            _ => {
                let (w, h) = self.dimensions_mm();
                format!("{} ({}×{}mm)", self.name(), w, h)
            }
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        PageSize::ALL
            .into_iter()
            .find(|size| size.key().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PageSize {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        PageSize::from_key(s)
            .ok_or_else(|| GridError::Config(format!("Unknown page size '{}'", s)))
    }
}
