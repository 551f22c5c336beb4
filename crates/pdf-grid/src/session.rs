//! Session state owned by a front end
//!
//! Holds the single configuration and the single image slot, and sequences
//! the two asynchronous operations (image loading and export) so that stale
//! loads are dropped and exports cannot overlap.

use crate::loader::LoadedImage;
use crate::options::{ConfigKey, GridConfig};
use crate::types::*;

/// Identifies one image load; only the most recent ticket may publish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(pub u64);

/// Everything an export needs, captured when the export starts
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub image: LoadedImage,
    pub config: GridConfig,
    pub file_name: String,
}

#[derive(Debug, Default)]
pub struct GridSession {
    config: GridConfig,
    image: Option<LoadedImage>,
    generation: u64,
    pending_load: Option<LoadTicket>,
    exporting: bool,
}

impl GridSession {
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut GridConfig {
        &mut self.config
    }

    /// Forward a form edit to the configuration
    pub fn set_option(&mut self, key: ConfigKey, value: &str) -> bool {
        self.config.set_option(key, value)
    }

    pub fn image(&self) -> Option<&LoadedImage> {
        self.image.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending_load.is_some()
    }

    pub fn is_exporting(&self) -> bool {
        self.exporting
    }

    /// Start a new load, superseding any load still in flight
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        let ticket = LoadTicket(self.generation);
        self.pending_load = Some(ticket);
        ticket
    }

    /// Publish a finished load. Returns false (and drops the image) when a
    /// newer load or a removal happened since `ticket` was issued.
    pub fn finish_load(&mut self, ticket: LoadTicket, image: LoadedImage) -> bool {
        if self.pending_load != Some(ticket) {
            log::debug!("Discarding stale image load {:?}", ticket);
            return false;
        }
        log::info!("Loaded {} ({}x{})", image.name, image.width, image.height);
        self.pending_load = None;
        self.image = Some(image);
        true
    }

    /// Record a failed load. Returns whether the failure belongs to the
    /// current load and should be reported.
    pub fn fail_load(&mut self, ticket: LoadTicket) -> bool {
        if self.pending_load != Some(ticket) {
            return false;
        }
        self.pending_load = None;
        true
    }

    /// Clear the image and abandon any pending load
    pub fn remove_image(&mut self) {
        if self.pending_load.is_some() {
            self.generation += 1;
        }
        self.pending_load = None;
        self.image = None;
    }

    pub fn can_export(&self) -> bool {
        self.image.is_some() && !self.exporting && self.config.validate().is_ok()
    }

    /// Mark an export as running and capture its inputs
    pub fn begin_export(&mut self) -> Result<ExportRequest> {
        if self.exporting {
            return Err(GridError::ExportInProgress);
        }
        let image = self.image.clone().ok_or(GridError::NoImage)?;
        self.config.validate()?;

        self.exporting = true;
        Ok(ExportRequest {
            image,
            config: self.config.clone(),
            file_name: crate::export::output_filename(&self.config),
        })
    }

    /// Clear the busy flag after an export succeeded or failed
    pub fn finish_export(&mut self) {
        self.exporting = false;
    }
}
