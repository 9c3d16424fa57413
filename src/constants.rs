pub const TEXT_HTML: &str = "text/html; charset=utf-8";

pub const DEALS_STATUS_HEADER: &str = "X-Deals-Status";

pub const NO_TITLE: &str = "No Title";
pub const UNKNOWN_STORE: &str = "Unknown Store";
pub const NO_DEAL_URL: &str = "#";
