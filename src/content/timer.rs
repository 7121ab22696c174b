use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub(crate) async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn sleep(duration: Duration) -> super::source::SendWrapper<gloo_timers::future::TimeoutFuture> {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    super::source::SendWrapper::new(gloo_timers::future::TimeoutFuture::new(millis))
}
