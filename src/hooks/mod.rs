pub mod use_exchange_rates;
pub mod use_preferences;
pub mod use_reservation;
pub mod use_route;
pub mod use_toasts;
