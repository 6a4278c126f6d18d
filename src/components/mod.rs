pub mod booking_panel;
pub mod currency_selector;
pub mod layout;
pub mod rates_panel;
pub mod sidebar;
pub mod sparkline;
pub mod toast_host;
pub mod yacht_detail;
pub mod yacht_list;

pub use layout::Layout;
pub use toast_host::ToastHost;
pub use yacht_detail::YachtDetail;
pub use yacht_list::YachtList;
