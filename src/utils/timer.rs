use futures::future::{FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;

/// Esperas asíncronas sobre el event loop
pub trait Timer {
    fn sleep(&self, millis: u32) -> LocalBoxFuture<'static, ()>;
}

#[derive(Clone, Copy, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, millis: u32) -> LocalBoxFuture<'static, ()> {
        TimeoutFuture::new(millis).boxed_local()
    }
}
