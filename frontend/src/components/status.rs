//! Backend liveness badge.
//!
//! Pings `GET {base}/` once on mount. The result is informational only;
//! uploads are attempted whatever it says.

use leptos::*;

use crate::config::api_base_url;
use crate::services::check_health;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Liveness {
    Checking,
    Online,
    Offline,
}

#[component]
pub fn BackendStatus() -> impl IntoView {
    let (liveness, set_liveness) = create_signal(Liveness::Checking);

    spawn_local(async move {
        match check_health(api_base_url()).await {
            Ok(status) if status.is_healthy() => {
                log::info!("Backend online: {}", status.message);
                set_liveness.set(Liveness::Online);
            }
            Ok(status) => {
                log::warn!("Backend reports status {:?}", status.status);
                set_liveness.set(Liveness::Offline);
            }
            Err(e) => {
                log::warn!("Backend unreachable at {}: {}", api_base_url(), e);
                set_liveness.set(Liveness::Offline);
            }
        }
    });

    view! {
        <span
            class="backend-status"
            class:online=move || liveness.get() == Liveness::Online
            class:offline=move || liveness.get() == Liveness::Offline
        >
            {move || match liveness.get() {
                Liveness::Checking => "Checking backend...",
                Liveness::Online => "Backend online",
                Liveness::Offline => "Backend offline",
            }}
        </span>
    }
}
