use vinyl_core::{parse_top_items, DomainItem, TopItemsQuery};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// GET `url` bypassing the HTTP cache. Non-2xx responses become errors
/// carrying the response body (or status text when the body is empty).
pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let opts = web::RequestInit::new();
    opts.set_method("GET");
    opts.set_cache(web::RequestCache::NoStore);
    let request = web::Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
    let response: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    let body = JsFuture::from(response.text().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .as_string()
        .unwrap_or_default();
    if !response.ok() {
        let reason = if body.trim().is_empty() {
            response.status_text()
        } else {
            body
        };
        anyhow::bail!("{} {}: {}", response.status(), url, reason);
    }
    Ok(body)
}

pub async fn fetch_top_items(query: &TopItemsQuery) -> anyhow::Result<Vec<DomainItem>> {
    let url = query.url();
    log::info!("[fetch] {url}");
    let body = fetch_text(&url).await?;
    let items = parse_top_items(&body)?;
    log::debug!("[fetch] {} items from {url}", items.len());
    Ok(items)
}
