//! HTTP 客户端封装
//!
//! 拼接为 BASE + '/' + path（避免绝对路径覆盖掉 BASE 自带的路径），
//! 查询串只携带调用方给出的参数；基地址指向 Supabase Edge Function
//! 且配置了匿名密钥时，自动注入 Authorization/apikey 头。
//! 非 2xx 响应与网络失败都折叠为共享错误类型。

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response, UrlSearchParams};

use shici_common::{Error, Result};

/// 接口基地址（编译期注入，默认同源 /api）
const API_BASE: &str = match option_env!("SHICI_API_BASE") {
    Some(base) => base,
    None => "/api",
};

/// Supabase 匿名密钥（仅在基地址为 Edge Function 时注入请求头）
const ANON_KEY: Option<&str> = option_env!("SHICI_ANON_KEY");

/// 拼接完整 URL 并编码查询串
fn build_url(path: &str, params: &[(&str, String)]) -> String {
    let base = API_BASE.trim_end_matches('/');
    let mut url = format!("{}/{}", base, path.trim_start_matches('/'));
    if !params.is_empty() {
        let search = UrlSearchParams::new().unwrap_throw();
        for (key, value) in params {
            search.append(key, value);
        }
        url.push('?');
        url.push_str(&String::from(search.to_string()));
    }
    url
}

fn apply_auth_headers(request: &Request) -> std::result::Result<(), JsValue> {
    if let Some(key) = ANON_KEY {
        if API_BASE.contains("supabase.co/functions/v1") {
            request
                .headers()
                .set("Authorization", &format!("Bearer {}", key))?;
            request.headers().set("apikey", key)?;
        }
    }
    Ok(())
}

/// GET 请求，响应按 JSON 反序列化
pub async fn api_get<T: DeserializeOwned>(path: &str, params: &[(&str, String)]) -> Result<T> {
    let url = build_url(path, params);

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| network_error(&e))?;
    apply_auth_headers(&request).map_err(|e| network_error(&e))?;

    execute(&url, request).await
}

/// POST JSON 请求，响应按 JSON 反序列化
pub async fn api_post<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T> {
    let url = build_url(path, &[]);
    let payload = serde_json::to_string(body)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&payload));

    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| network_error(&e))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| network_error(&e))?;
    apply_auth_headers(&request).map_err(|e| network_error(&e))?;

    execute(&url, request).await
}

/// 发出请求并解析 JSON 响应
async fn execute<T: DeserializeOwned>(url: &str, request: Request) -> Result<T> {
    let window = web_sys::window().ok_or_else(|| Error::Network("window 不可用".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| network_error(&e))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| network_error(&e))?;

    if !resp.ok() {
        return Err(Error::Http {
            status: resp.status(),
            url: url.to_string(),
        });
    }

    let json = JsFuture::from(resp.json().map_err(|e| network_error(&e))?)
        .await
        .map_err(|e| network_error(&e))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| Error::Decode(e.to_string()))
}

/// JsValue 错误转为可读的网络错误
fn network_error(value: &JsValue) -> Error {
    Error::Network(format!("{:?}", value))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_build_url_joins_base_and_path() {
        assert_eq!(build_url("/poems/1", &[]), "/api/poems/1");
        // 路径开头的斜杠不会叠加
        assert_eq!(build_url("poems/1", &[]), "/api/poems/1");
    }

    #[wasm_bindgen_test]
    fn test_build_url_without_params_has_no_query() {
        assert!(!build_url("/comments", &[]).contains('?'));
    }

    #[wasm_bindgen_test]
    fn test_build_url_encodes_query_params() {
        let url = build_url(
            "/poems_search",
            &[("dynasty", "唐".to_string()), ("page", "1".to_string())],
        );
        assert!(url.starts_with("/api/poems_search?"));
        assert!(url.contains("page=1"));
        // 中文参数由 UrlSearchParams 编码后上行
        assert!(url.contains("dynasty=%E5%94%90"));
    }
}
