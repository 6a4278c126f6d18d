/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Enable automatic exchange-rate polling
    pub const ENABLE_AUTO_REFRESH: bool = true;

    /// Polling interval in milliseconds (5 minutes = 300,000ms)
    pub const POLLING_INTERVAL_MS: u32 = 300_000;

    /// Path of the exchange-rate endpoint, relative to the page origin
    pub const EXCHANGE_ENDPOINT: &'static str = "/api/exchange";

    /// Widest viewport (in CSS pixels) on which the sidebar is forced into its collapsed form
    pub const SMALL_SCREEN_MAX_WIDTH: f64 = 768.0;

    /// Quiet period before a burst of resize events is acted on
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;

    /// How long a notification stays on screen
    pub const TOAST_DURATION_MS: u32 = 4_000;

    /// localStorage key for the sidebar collapsed flag
    pub const SIDEBAR_COLLAPSED_KEY: &'static str = "sidebar-collapsed";

    /// localStorage key for the selected display currency
    pub const CURRENCY_KEY: &'static str = "currency";
}
