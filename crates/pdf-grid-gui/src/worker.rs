use pdf_async_runtime::{GridCommand, WorkerEndpoints};

use crate::handlers;

/// Async worker task that processes grid commands and sends updates
pub async fn worker_task(endpoints: WorkerEndpoints) {
    let WorkerEndpoints {
        mut commands,
        updates,
    } = endpoints;

    let mut pending = None;
    loop {
        let cmd = match pending.take() {
            Some(cmd) => cmd,
            None => match commands.recv().await {
                Some(cmd) => cmd,
                None => break,
            },
        };

        match cmd {
            GridCommand::LoadImage {
                mut ticket,
                mut path,
                mut media_type,
            } => {
                // Only the newest queued upload is decoded; older tickets are
                // already stale in the session
                while let Ok(next_cmd) = commands.try_recv() {
                    match next_cmd {
                        GridCommand::LoadImage {
                            ticket: new_ticket,
                            path: new_path,
                            media_type: new_media_type,
                        } => {
                            log::debug!("Discarding queued load of {}", path.display());
                            ticket = new_ticket;
                            path = new_path;
                            media_type = new_media_type;
                        }
                        other => {
                            // Handle it right after this load
                            pending = Some(other);
                            break;
                        }
                    }
                }

                handlers::load::handle_load(ticket, path, media_type, &updates).await;
            }
            GridCommand::Export {
                request,
                output_path,
            } => {
                handlers::export::handle_export(request, output_path, &updates).await;
            }
        }
    }

    log::debug!("Worker stopped");
}
