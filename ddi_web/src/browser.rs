// Browser glue: host page config and file downloads
use ddi_core::{ClientConfig, DownloadError, FileSink};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, Url};

const CONFIG_ELEMENT_ID: &str = "ddi-config";
const PDF_MIME: &str = "application/pdf";

/// Read the optional `<script id="ddi-config" type="application/json">`
/// block, then pin an empty base URL to the page origin.
///
/// Runs before logging is up, so problems go straight to the console.
pub fn load_config() -> ClientConfig {
    let Some(window) = web_sys::window() else {
        return ClientConfig::default();
    };

    let raw = window
        .document()
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let config = match raw.as_deref().map(str::trim) {
        None | Some("") => ClientConfig::default(),
        Some(json) => ClientConfig::from_json(json).unwrap_or_else(|err| {
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "[ddi][warn] Ignoring invalid #{CONFIG_ELEMENT_ID}: {err}"
            )));
            ClientConfig::default()
        }),
    };

    match window.location().origin() {
        Ok(origin) => config.resolve_origin(&origin),
        Err(_) => config,
    }
}

/// Saves reports through a temporary object URL and a synthetic click.
pub struct BrowserDownload;

impl FileSink for BrowserDownload {
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<(), DownloadError> {
        save_blob(file_name, bytes).map_err(|err| DownloadError::Save {
            file_name: file_name.to_string(),
            reason: describe(&err),
        })
    }
}

fn save_blob(file_name: &str, bytes: &[u8]) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(PDF_MIME);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let clicked = click_download_link(&document, &url, file_name);
    // released on every path once created
    let revoked = Url::revoke_object_url(&url);
    clicked.and(revoked)
}

fn click_download_link(document: &Document, url: &str, file_name: &str) -> Result<(), JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;
    let link: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(url);
    link.set_download(file_name);

    body.append_child(&link)?;
    link.click();
    link.remove();
    Ok(())
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
