use std::sync::{mpsc, Arc};
use std::thread;

use gallery_logging::{gallery_debug, gallery_info};

use crate::fetch::PhotoFetcher;
use crate::EngineEvent;

enum EngineCommand {
    ListPhotos,
}

/// Handle to the engine worker thread.
///
/// Commands go in over one channel; completion events come back over
/// another and are drained with [`EngineHandle::try_recv`]. Dropping the
/// handle closes the command channel and the worker exits; any in-flight
/// completion is discarded with the event channel.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(fetcher: Arc<dyn PhotoFetcher>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    /// Requests one photo list fetch. Overlapping requests each run to
    /// completion independently; completion order is not guaranteed.
    pub fn request_photos(&self) {
        let _ = self.cmd_tx.send(EngineCommand::ListPhotos);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn PhotoFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::ListPhotos => {
            gallery_debug!("photo list fetch started");
            let result = fetcher.list_photos().await;
            match &result {
                Ok(photos) => {
                    gallery_info!("photo list fetch completed: {} records", photos.len());
                }
                Err(err) => {
                    gallery_info!("photo list fetch failed: {err}");
                }
            }
            let _ = event_tx.send(EngineEvent::FetchCompleted { result });
        }
    }
}
