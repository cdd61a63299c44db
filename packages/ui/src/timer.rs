use std::time::Duration;

use dioxus::prelude::*;

pub(crate) async fn sleep_ms(ms: u32) {
    let duration = Duration::from_millis(u64::from(ms));
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Follow `source`, but only once it has stopped changing for `delay_ms`.
///
/// Every change bumps a generation counter; a pending update is dropped when a
/// newer one has been scheduled since.
pub fn use_debounced(source: Signal<String>, delay_ms: u32) -> Signal<String> {
    let mut debounced = use_signal(|| source.peek().clone());
    let mut generation = use_signal(|| 0u64);

    use_effect(move || {
        let value = source();
        let ticket = {
            let mut current = generation.write();
            *current += 1;
            *current
        };
        spawn(async move {
            sleep_ms(delay_ms).await;
            if *generation.peek() == ticket && *debounced.peek() != value {
                debounced.set(value);
            }
        });
    });

    debounced
}
