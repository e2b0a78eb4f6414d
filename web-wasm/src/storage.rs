//! localStorage 持久化实现

use shici_common::KvStore;

/// 浏览器 localStorage 键值存储
///
/// 存储不可用时（隐私模式、配额耗尽、被禁用）读取返回 None、
/// 写入静默丢弃，符合持久化端口"尽力而为"的契约
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalKv;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl KvStore for LocalKv {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = local_storage() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            // 写失败不上抛，只留痕
            gloo::console::warn!("localStorage 写入失败:", key);
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_kv_roundtrip() {
        let kv = LocalKv;
        // 每次运行用新键，避免与历史数据串扰
        let key = format!("shici.test.{}", js_sys::Date::now());
        assert_eq!(kv.get(&key), None);

        kv.set(&key, "[1,2,3]");
        assert_eq!(kv.get(&key).as_deref(), Some("[1,2,3]"));

        // 覆盖写
        kv.set(&key, "[]");
        assert_eq!(kv.get(&key).as_deref(), Some("[]"));

        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(&key);
        }
    }
}
