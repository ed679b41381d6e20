//! Native loader backend using a shared background thread.
//!
//! The blocking file dialog runs on the loader thread, so the UI thread
//! never stalls behind it.

use std::sync::{OnceLock, mpsc};

use futures_channel::oneshot;

use super::super::{
    IMAGE_EXTENSIONS, LoadError, LoadHandle, LoadRequest, LoadResult, decode_bytes,
};

struct LoadEnvelope {
    request: LoadRequest,
    response_tx: oneshot::Sender<LoadResult>,
}

// Shared loader thread sender reused across requests.
static LOADER_SENDER: OnceLock<mpsc::Sender<LoadEnvelope>> = OnceLock::new();

fn loader_sender() -> &'static mpsc::Sender<LoadEnvelope> {
    LOADER_SENDER.get_or_init(|| {
        let (tx, rx) = mpsc::channel::<LoadEnvelope>();
        std::thread::spawn(move || {
            while let Ok(envelope) = rx.recv() {
                let result = handle_blocking(envelope.request);
                let _ = envelope.response_tx.send(result);
            }
        });
        tx
    })
}

fn handle_blocking(request: LoadRequest) -> LoadResult {
    match request {
        LoadRequest::PickFile => {
            let Some(path) = rfd::FileDialog::new()
                .add_filter("Images", IMAGE_EXTENSIONS)
                .pick_file()
            else {
                return LoadResult::Cancelled;
            };
            read_and_decode(&path)
        }
        LoadRequest::DecodeBytes(bytes) => decode_bytes(&bytes),
        LoadRequest::ReadFile(path) => read_and_decode(&path),
    }
}

fn read_and_decode(path: &std::path::Path) -> LoadResult {
    match std::fs::read(path) {
        Ok(bytes) => decode_bytes(&bytes),
        Err(err) => LoadResult::Failed(LoadError::Read(err.to_string())),
    }
}

/// Starts the shared loader thread without sending a request.
pub(crate) fn warm_up() {
    let _ = loader_sender();
}

/// Enqueues a load request and returns a handle for polling completion.
pub(crate) fn enqueue(request: LoadRequest) -> Result<LoadHandle, LoadError> {
    let (response_tx, receiver) = oneshot::channel();
    loader_sender()
        .send(LoadEnvelope {
            request,
            response_tx,
        })
        .map_err(|_| LoadError::Disconnected)?;

    Ok(LoadHandle { receiver })
}
