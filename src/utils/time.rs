//! Timer helpers.

/// Wait for `ms` milliseconds on the browser event loop.
///
/// Zero returns immediately. Native builds (tests) never sleep.
pub async fn sleep_ms(ms: u32) {
    if ms == 0 {
        return;
    }
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
}
