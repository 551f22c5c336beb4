use crate::constants::*;
use crate::types::*;
use std::str::FromStr;

/// Keys accepted by [`GridConfig::set_option`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    Columns,
    Rows,
    Margin,
    ImageScale,
    PageSize,
    PageWidth,
    PageHeight,
}

impl FromStr for ConfigKey {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "columns" => Ok(ConfigKey::Columns),
            "rows" => Ok(ConfigKey::Rows),
            "margin" => Ok(ConfigKey::Margin),
            "imageScale" | "image_scale" => Ok(ConfigKey::ImageScale),
            "pageSize" | "page_size" => Ok(ConfigKey::PageSize),
            "pageWidth" | "page_width" => Ok(ConfigKey::PageWidth),
            "pageHeight" | "page_height" => Ok(ConfigKey::PageHeight),
            other => Err(GridError::Config(format!("Unknown option '{}'", other))),
        }
    }
}

/// Grid configuration
///
/// Values are stored as entered; nothing is clamped here. Use
/// [`GridConfig::validate`] before computing a layout.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    pub columns: u32,
    pub rows: u32,
    /// Margin applied to all four sides
    pub margin_mm: f32,
    /// Percent of the limiting cell dimension the image may occupy
    pub image_scale: u32,
    pub page_size: PageSize,
    pub page_width_mm: f32,
    pub page_height_mm: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        let (page_width_mm, page_height_mm) = PageSize::A4.dimensions_mm();
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            margin_mm: DEFAULT_MARGIN_MM,
            image_scale: DEFAULT_IMAGE_SCALE,
            page_size: PageSize::A4,
            page_width_mm,
            page_height_mm,
        }
    }
}

impl GridConfig {
    /// Apply a textual edit coming from a form control.
    ///
    /// Numeric values are read as integers (leading digits only). Rejected
    /// input leaves the configuration untouched. Returns whether anything
    /// changed.
    pub fn set_option(&mut self, key: ConfigKey, value: &str) -> bool {
        if key == ConfigKey::PageSize {
            return match PageSize::from_key(value) {
                Some(size) => {
                    self.select_page_size(size);
                    true
                }
                None => {
                    log::warn!("Ignoring unknown page size '{}'", value);
                    false
                }
            };
        }

        match parse_int_prefix(value) {
            Some(number) => self.set_number(key, number),
            None => {
                log::debug!("Ignoring non-numeric value {:?} for {:?}", value, key);
                false
            }
        }
    }

    fn set_number(&mut self, key: ConfigKey, number: i64) -> bool {
        match key {
            ConfigKey::Columns => u32::try_from(number).is_ok_and(|n| self.set_columns(n)),
            ConfigKey::Rows => u32::try_from(number).is_ok_and(|n| self.set_rows(n)),
            ConfigKey::ImageScale => u32::try_from(number).is_ok_and(|n| self.set_image_scale(n)),
            ConfigKey::Margin => self.set_margin(number as f32),
            ConfigKey::PageWidth => self.set_page_width(number as f32),
            ConfigKey::PageHeight => self.set_page_height(number as f32),
            ConfigKey::PageSize => false,
        }
    }

    /// Switch to a preset, overwriting the page dimensions with its values
    pub fn select_page_size(&mut self, size: PageSize) {
        let (width, height) = size.dimensions_mm();
        self.page_size = size;
        self.page_width_mm = width;
        self.page_height_mm = height;
    }

    pub fn set_columns(&mut self, columns: u32) -> bool {
        let changed = self.columns != columns;
        self.columns = columns;
        changed
    }

    pub fn set_rows(&mut self, rows: u32) -> bool {
        let changed = self.rows != rows;
        self.rows = rows;
        changed
    }

    pub fn set_image_scale(&mut self, scale: u32) -> bool {
        let changed = self.image_scale != scale;
        self.image_scale = scale;
        changed
    }

    /// Negative and non-finite margins are ignored
    pub fn set_margin(&mut self, margin_mm: f32) -> bool {
        if !margin_mm.is_finite() || margin_mm < 0.0 {
            return false;
        }
        let changed = self.margin_mm != margin_mm;
        self.margin_mm = margin_mm;
        changed
    }

    /// Editing a dimension makes the page custom; non-positive widths are ignored
    pub fn set_page_width(&mut self, width_mm: f32) -> bool {
        if !width_mm.is_finite() || width_mm <= 0.0 {
            return false;
        }
        self.page_width_mm = width_mm;
        self.page_size = PageSize::Custom;
        true
    }

    /// Editing a dimension makes the page custom; non-positive heights are ignored
    pub fn set_page_height(&mut self, height_mm: f32) -> bool {
        if !height_mm.is_finite() || height_mm <= 0.0 {
            return false;
        }
        self.page_height_mm = height_mm;
        self.page_size = PageSize::Custom;
        true
    }

    pub fn usable_width_mm(&self) -> f32 {
        self.page_width_mm - 2.0 * self.margin_mm
    }

    pub fn usable_height_mm(&self) -> f32 {
        self.page_height_mm - 2.0 * self.margin_mm
    }

    pub fn total_cells(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    pub fn scale_factor(&self) -> f32 {
        self.image_scale as f32 / 100.0
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::for_page(self.page_width_mm, self.page_height_mm)
    }

    /// Check that the configuration describes a drawable grid
    pub fn validate(&self) -> Result<()> {
        check_grid_dim("Columns", self.columns)?;
        check_grid_dim("Rows", self.rows)?;

        if !(MIN_IMAGE_SCALE..=MAX_IMAGE_SCALE).contains(&self.image_scale) {
            return Err(GridError::InvalidGeometry(format!(
                "Image scale must be between {}% and {}%, got {}%",
                MIN_IMAGE_SCALE, MAX_IMAGE_SCALE, self.image_scale
            )));
        }

        if self.usable_width_mm() <= 0.0 {
            return Err(GridError::InvalidGeometry(format!(
                "A {} mm margin leaves no usable width on a {} mm wide page",
                self.margin_mm, self.page_width_mm
            )));
        }

        if self.usable_height_mm() <= 0.0 {
            return Err(GridError::InvalidGeometry(format!(
                "A {} mm margin leaves no usable height on a {} mm tall page",
                self.margin_mm, self.page_height_mm
            )));
        }

        Ok(())
    }
}

fn check_grid_dim(name: &str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(GridError::InvalidGeometry(format!(
            "{} must be at least 1",
            name
        )));
    }
    if value > MAX_GRID_DIM {
        return Err(GridError::InvalidGeometry(format!(
            "{} must be at most {}, got {}",
            name, MAX_GRID_DIM, value
        )));
    }
    Ok(())
}

/// Read the leading integer of a form value: optional sign, then digits.
/// Anything after the digits is ignored; no digits means no value.
fn parse_int_prefix(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
