pub struct Config {
    pub database_url: String,
    pub qnas_base_url: String,
    pub qnas_api_token: Option<String>,
    pub qnas_api_domain: Option<String>,
    pub qnas_enabled: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")?,
            qnas_base_url: std::env::var("QNAS_BASE_URL")
                .unwrap_or_else(|_| qnas::DEFAULT_BASE_URL.to_string()),
            qnas_api_token: std::env::var("QNAS_API_TOKEN").ok(),
            qnas_api_domain: std::env::var("QNAS_API_DOMAIN").ok(),
            qnas_enabled: std::env::var("QNAS_ENABLED")
                .map(|value| value != "0" && !value.eq_ignore_ascii_case("false"))
                .unwrap_or(true),
        })
    }
}
