mod gallery;
mod logging;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::{Duration, Instant};

use gallery_core::UiState;
use gallery_engine::{FetchSettings, Photo, ReqwestPhotoFetcher};
use gallery_logging::gallery_error;

use crate::gallery::Gallery;

/// How long the shell waits for a terminal status before giving up.
const FETCH_DEADLINE: Duration = Duration::from_secs(60);
const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> ExitCode {
    logging::initialize(logging::LogDestination::Terminal);

    let Some(base_url) = std::env::args().nth(1) else {
        eprintln!("usage: gallery_app <api-base-url>");
        return ExitCode::from(2);
    };

    let fetcher = match ReqwestPhotoFetcher::new(&base_url, FetchSettings::default()) {
        Ok(fetcher) => Arc::new(fetcher),
        Err(err) => {
            gallery_error!("invalid API base url: {err}");
            return ExitCode::from(2);
        }
    };

    let mut gallery = Gallery::new(fetcher);
    let deadline = Instant::now() + FETCH_DEADLINE;

    loop {
        gallery.pump();
        if gallery.take_dirty() {
            render(&gallery.view().status);
        }
        match gallery.status() {
            UiState::Loading => {}
            UiState::Success(_) => return ExitCode::SUCCESS,
            UiState::Error => return ExitCode::from(1),
        }
        if Instant::now() >= deadline {
            gallery_error!("no fetch completion within {FETCH_DEADLINE:?}");
            return ExitCode::from(1);
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}

/// Rendering boundary: matches the status exhaustively.
fn render(status: &UiState<Photo>) {
    match status {
        UiState::Loading => println!("Loading photos..."),
        UiState::Success(photos) => {
            println!("Fetched {} photos:", photos.len());
            for photo in photos {
                println!("  {}  {}", photo.id, photo.img_src);
            }
        }
        UiState::Error => println!("Failed to load photos."),
    }
}
