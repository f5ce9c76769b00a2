use clap::Parser;

#[derive(Parser, Clone, Debug)]
pub struct Config {
    #[clap(env, long)]
    pub environment: String,

    #[clap(env, long, default_value = "http://localhost:8000")]
    pub api_url: String,

    /// Bearer token issued by the auth provider.
    #[clap(env, long)]
    pub api_token: Option<String>,

    #[clap(env, long)]
    pub storage_url: String,

    #[clap(env, long, default_value = "journal-photos")]
    pub storage_bucket: String,

    #[clap(env, long)]
    pub user_id: String,

    /// Metres, 100..=50000.
    #[clap(env, long, default_value_t = 1000)]
    pub search_radius: u32,

    #[clap(env, long, default_value = "restaurant")]
    pub search_query: String,

    #[clap(env, long, allow_hyphen_values = true)]
    pub latitude: Option<f64>,

    #[clap(env, long, allow_hyphen_values = true)]
    pub longitude: Option<f64>,

    #[clap(env, long, action = clap::ArgAction::Set, default_value_t = true)]
    pub location_permission_granted: bool,

    #[clap(env, long, default_value = "http://localhost:8081")]
    pub origin_urls: String,

    #[clap(env, long, default_value_t = 3000)]
    pub port: u16,

    #[clap(env, long, default_value_t = 500)]
    pub focus_animation_ms: u64,

    /// Upper bound on every outbound backend and storage request.
    #[clap(env, long, default_value_t = 10)]
    pub request_timeout_secs: u64,
}
