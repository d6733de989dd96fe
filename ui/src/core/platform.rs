//! Platform detection and task-spawning glue.

/// Short platform tag carried in exports and debug traces.
pub fn platform_string() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        "web".to_string()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        std::env::consts::OS.to_string()
    }
}

/// Spawn a fire-and-forget future on the platform's executor.
#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(future: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_future<F>(future: F)
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    if let Ok(handle) = tokio::runtime::Handle::try_current() {
        handle.spawn(future);
    } else {
        futures::executor::block_on(future);
    }
}
