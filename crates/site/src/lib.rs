mod web_app;

pub use web_app::{LandingStat, SiteApp, LANDING_STATS};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::logging::log!(
        "mounting landing page (host strategy: {})",
        platform_host_web::host_strategy_name()
    );
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
