//! WASM loader backend using `spawn_local` and the async file dialog.

use futures_channel::oneshot;

use super::super::{IMAGE_EXTENSIONS, LoadError, LoadHandle, LoadRequest, LoadResult, decode_bytes};

async fn handle_async(request: LoadRequest) -> LoadResult {
    match request {
        LoadRequest::PickFile => {
            let Some(file) = rfd::AsyncFileDialog::new()
                .add_filter("Images", IMAGE_EXTENSIONS)
                .pick_file()
                .await
            else {
                return LoadResult::Cancelled;
            };
            let bytes = file.read().await;
            decode_bytes(&bytes)
        }
        LoadRequest::DecodeBytes(bytes) => decode_bytes(&bytes),
    }
}

/// No shared backend to start on wasm.
pub(crate) fn warm_up() {}

/// Spawns a load task and returns a handle for polling completion.
#[expect(clippy::unnecessary_wraps)]
pub(crate) fn enqueue(request: LoadRequest) -> Result<LoadHandle, LoadError> {
    let (response_tx, receiver) = oneshot::channel();
    wasm_bindgen_futures::spawn_local(async move {
        let result = handle_async(request).await;
        let _ = response_tx.send(result);
    });

    Ok(LoadHandle { receiver })
}
