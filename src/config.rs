use confik::Configuration;

#[derive(Debug, Default, Configuration, Clone)]
pub struct DealsConfig {
    pub sheet_url: String,
    #[confik(default = "127.0.0.1:5000")]
    pub server_addr: String,
    #[confik(default = "info")]
    pub log_level: String,
    #[confik(default = 5_u64)]
    pub fetch_timeout_secs: u64,
}
