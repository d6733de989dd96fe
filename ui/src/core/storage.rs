//! Local persistence helpers for cached dashboard state.
//!
//! Web builds keep values in `localStorage`; native builds keep one JSON
//! file per key under the platform data directory. Values are serialized
//! with `serde_json`, and every failure surfaces as a plain message string
//! so callers can show it inline instead of panicking.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Load a previously stored value. `Ok(None)` means nothing was cached.
pub fn load_value<T: DeserializeOwned>(key: &str) -> Result<Option<T>, String> {
    match read_raw(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|err| err.to_string()),
        None => Ok(None),
    }
}

/// Store a value, replacing any previous entry for `key`.
pub fn store_value<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|err| err.to_string())?;
    write_raw(key, &raw)
}

#[cfg(target_arch = "wasm32")]
fn read_raw(key: &str) -> Result<Option<String>, String> {
    let storage = web_storage()?;
    storage
        .get_item(key)
        .map_err(|_| "localStorage read failed".to_string())
}

#[cfg(target_arch = "wasm32")]
fn write_raw(key: &str, raw: &str) -> Result<(), String> {
    let storage = web_storage()?;
    storage
        .set_item(key, raw)
        .map_err(|_| "localStorage write failed".to_string())
}

#[cfg(target_arch = "wasm32")]
fn web_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .ok_or("window unavailable")?
        .local_storage()
        .map_err(|_| "localStorage unavailable".to_string())?
        .ok_or_else(|| "localStorage disabled".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_raw(key: &str) -> Result<Option<String>, String> {
    read_from(&storage_dir()?, key)
}

#[cfg(not(target_arch = "wasm32"))]
fn write_raw(key: &str, raw: &str) -> Result<(), String> {
    write_to(&storage_dir()?, key, raw)
}

#[cfg(not(target_arch = "wasm32"))]
fn storage_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("dev", "Pulsegrid", "Pulsegrid")
        .ok_or("Unable to determine storage directory")?;
    Ok(dirs.data_dir().join("cache"))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_from(dir: &std::path::Path, key: &str) -> Result<Option<String>, String> {
    let path = dir.join(file_name(key));
    if !path.exists() {
        return Ok(None);
    }
    std::fs::read_to_string(&path)
        .map(Some)
        .map_err(|err| err.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn write_to(dir: &std::path::Path, key: &str, raw: &str) -> Result<(), String> {
    std::fs::create_dir_all(dir).map_err(|err| err.to_string())?;
    std::fs::write(dir.join(file_name(key)), raw).map_err(|err| err.to_string())
}

/// Storage keys are dotted namespaces; keep the file name filesystem-safe.
#[cfg(not(target_arch = "wasm32"))]
fn file_name(key: &str) -> String {
    let safe: String = key
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{safe}.json")
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_the_file_backend() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_to(dir.path(), "pulsegrid.test.rows", "[1,2,3]").unwrap();
        let raw = read_from(dir.path(), "pulsegrid.test.rows").unwrap();
        assert_eq!(raw.as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(read_from(dir.path(), "absent").unwrap(), None);
    }

    #[test]
    fn keys_map_to_safe_file_names() {
        assert_eq!(
            file_name("pulsegrid.activity.rows"),
            "pulsegrid_activity_rows.json"
        );
    }
}
