use instant::Instant;
use scrolly_core::{import_glb, AssetError, AssetResult, LoadProgress, ModelAsset};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn fetch_error(url: &str, message: impl Into<String>) -> AssetError {
    AssetError::Fetch {
        url: url.to_string(),
        message: message.into(),
    }
}

/// Download `url` into memory.
pub async fn fetch_bytes(url: &str) -> AssetResult<Vec<u8>> {
    let window = web::window().ok_or_else(|| fetch_error(url, "no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| fetch_error(url, format!("{:?}", e)))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| fetch_error(url, format!("not a Response: {:?}", e)))?;
    if !resp.ok() {
        return Err(fetch_error(
            url,
            format!("HTTP {} {}", resp.status(), resp.status_text()),
        ));
    }
    let total = resp
        .headers()
        .get("content-length")
        .ok()
        .flatten()
        .and_then(|s| s.parse::<u64>().ok());
    let bytes = match resp.body() {
        Some(body) => read_stream(url, &body, total).await?,
        None => read_whole(url, &resp).await?,
    };
    log::info!("Model downloaded ({} bytes)", bytes.len());
    Ok(bytes)
}

/// Drain `body` chunk by chunk, logging progress as it arrives.
async fn read_stream(
    url: &str,
    body: &web::ReadableStream,
    total: Option<u64>,
) -> AssetResult<Vec<u8>> {
    let reader: web::ReadableStreamDefaultReader = body
        .get_reader()
        .dyn_into()
        .map_err(|e| fetch_error(url, format!("no stream reader: {:?}", e)))?;
    let mut progress = LoadProgress::new(total);
    let mut bytes = Vec::with_capacity(total.unwrap_or(0) as usize);
    loop {
        let chunk = JsFuture::from(reader.read())
            .await
            .map_err(|e| fetch_error(url, format!("{:?}", e)))?;
        let done = js_sys::Reflect::get(&chunk, &JsValue::from_str("done"))
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(true);
        if done {
            break;
        }
        let value = js_sys::Reflect::get(&chunk, &JsValue::from_str("value"))
            .map_err(|e| fetch_error(url, format!("{:?}", e)))?;
        let data = js_sys::Uint8Array::new(&value);
        let start = bytes.len();
        bytes.resize(start + data.length() as usize, 0);
        data.copy_to(&mut bytes[start..]);
        if let Some(pct) = progress.advance(u64::from(data.length())) {
            log::info!("Model {:.2}% loaded", pct);
        }
    }
    Ok(bytes)
}

/// Fallback for responses without a readable body stream.
async fn read_whole(url: &str, resp: &web::Response) -> AssetResult<Vec<u8>> {
    let buf_promise = resp
        .array_buffer()
        .map_err(|e| fetch_error(url, format!("{:?}", e)))?;
    let buf = JsFuture::from(buf_promise)
        .await
        .map_err(|e| fetch_error(url, format!("{:?}", e)))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Fetch and import the model, resolving to the placeholder on any failure.
pub async fn load_model(url: &str) -> ModelAsset {
    let started = Instant::now();
    let result = match fetch_bytes(url).await {
        Ok(bytes) => import_glb(&bytes),
        Err(e) => Err(e),
    };
    let asset = ModelAsset::from_load_result(url, result);
    if asset.is_placeholder() {
        log::info!("Make sure the .glb file is served at '{}'", url);
    }
    log::info!(
        "[asset] model ready in {:.0} ms",
        started.elapsed().as_secs_f64() * 1000.0
    );
    asset
}
