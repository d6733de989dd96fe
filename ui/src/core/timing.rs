//! Timer utilities shared by the views.

/// Sleep for `ms` milliseconds on the platform's timer source.
pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::TimeoutFuture::new(ms as u32).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}

/// How long transient feedback banners stay up before auto-dismissing.
pub const FEEDBACK_VISIBLE_MS: u64 = 3_000;
