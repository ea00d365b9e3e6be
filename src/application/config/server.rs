/// Fixed parameters for the gunicorn process the add-on hands off to.
///
/// These are deliberately not user-configurable: the port is what the
/// ingress panel expects, and the worker count is sized for the small boards
/// Home Assistant typically runs on.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: u16,
    pub timeout_secs: u32,
    /// 0 disables gunicorn's request-line cap; Superset chart URLs exceed
    /// the default.
    pub limit_request_line: u32,
    pub limit_request_field_size: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8099,
            workers: 2,
            timeout_secs: 120,
            limit_request_line: 0,
            limit_request_field_size: 0,
        }
    }
}

impl ServerConfig {
    /// The gunicorn `--bind` argument.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
