use std::path::PathBuf;
use thiserror::Error;
use tokio::sync::mpsc;

// Re-export types from the library crate
pub use pdf_grid::{ExportRequest, LoadTicket, LoadedImage};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum GridCommand {
    LoadImage {
        ticket: LoadTicket,
        path: PathBuf,
        /// Media type declared by the source (drop or dialog); inferred from
        /// the extension when absent
        media_type: Option<String>,
    },
    Export {
        request: ExportRequest,
        output_path: PathBuf,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum GridUpdate {
    Progress {
        operation: String,
        current: usize,
        total: usize,
    },
    ImageLoaded {
        ticket: LoadTicket,
        image: LoadedImage,
    },
    ImageLoadFailed {
        ticket: LoadTicket,
        message: String,
    },
    ExportComplete {
        path: PathBuf,
        cells: usize,
    },
    ExportFailed {
        message: String,
    },
}

#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("Worker has shut down")]
    WorkerGone,
}

/// UI-side ends of the worker channels
pub struct WorkerChannels {
    pub commands: mpsc::UnboundedSender<GridCommand>,
    pub updates: mpsc::UnboundedReceiver<GridUpdate>,
}

impl WorkerChannels {
    pub fn send(&self, command: GridCommand) -> Result<(), ChannelError> {
        self.commands
            .send(command)
            .map_err(|_| ChannelError::WorkerGone)
    }

    /// Drain every update that is ready without blocking
    pub fn try_updates(&mut self) -> Vec<GridUpdate> {
        let mut updates = Vec::new();
        while let Ok(update) = self.updates.try_recv() {
            updates.push(update);
        }
        updates
    }
}

/// Worker-side ends of the channels
pub struct WorkerEndpoints {
    pub commands: mpsc::UnboundedReceiver<GridCommand>,
    pub updates: mpsc::UnboundedSender<GridUpdate>,
}

/// Create a connected pair of UI and worker channel ends
pub fn channel() -> (WorkerChannels, WorkerEndpoints) {
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let (update_tx, update_rx) = mpsc::unbounded_channel();
    (
        WorkerChannels {
            commands: cmd_tx,
            updates: update_rx,
        },
        WorkerEndpoints {
            commands: cmd_rx,
            updates: update_tx,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_updates_are_drained_in_order() {
        let (mut ui, worker) = channel();
        worker
            .updates
            .send(GridUpdate::Progress {
                operation: "first".into(),
                current: 0,
                total: 2,
            })
            .unwrap();
        worker
            .updates
            .send(GridUpdate::ExportFailed {
                message: "second".into(),
            })
            .unwrap();

        let updates = ui.try_updates();
        assert_eq!(updates.len(), 2);
        assert!(matches!(&updates[0], GridUpdate::Progress { operation, .. } if operation == "first"));
        assert!(ui.try_updates().is_empty());
    }

    #[test]
    fn test_send_after_worker_dropped() {
        let (ui, worker) = channel();
        drop(worker);
        let result = ui.send(GridCommand::LoadImage {
            ticket: LoadTicket(1),
            path: PathBuf::from("photo.png"),
            media_type: None,
        });
        assert!(matches!(result, Err(ChannelError::WorkerGone)));
    }
}
