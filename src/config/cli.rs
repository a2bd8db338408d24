use crate::config::toml_config::GateConfig;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "domain-gate")]
#[command(about = "Serves a static page only to principals from the expected domain")]
pub struct CliArgs {
    /// Path to TOML configuration file; must exist when given
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override server.host
    #[arg(long)]
    pub host: Option<String>,

    /// Override server.port
    #[arg(long)]
    pub port: Option<u16>,

    /// Override gate.expected_domain
    #[arg(long)]
    pub expected_domain: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Validate configuration and exit
    #[arg(long)]
    pub check: bool,
}

pub const DEFAULT_CONFIG_PATH: &str = "gate.toml";

impl CliArgs {
    /// The file to load and whether it has to exist. Only the implicit
    /// default may be absent.
    pub fn config_source(&self) -> (&str, bool) {
        match &self.config {
            Some(path) => (path.as_str(), true),
            None => (DEFAULT_CONFIG_PATH, false),
        }
    }

    /// Command-line values win over the file and the environment.
    pub fn apply_to(&self, config: &mut GateConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(domain) = &self.expected_domain {
            config.gate.expected_domain = Some(domain.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let args = CliArgs::parse_from([
            "domain-gate",
            "--port",
            "9090",
            "--expected-domain",
            "contoso.com",
        ]);
        let mut config = GateConfig::default();
        args.apply_to(&mut config);

        assert_eq!(args.config_source(), ("gate.toml", false));
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.gate.expected_domain.as_deref(), Some("contoso.com"));
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_named_config_is_required_even_if_default_name() {
        let args = CliArgs::parse_from(["domain-gate", "--config", "gate.toml"]);
        assert_eq!(args.config_source(), ("gate.toml", true));

        let args = CliArgs::parse_from(["domain-gate", "-c", "/etc/gate/prod.toml"]);
        assert_eq!(args.config_source(), ("/etc/gate/prod.toml", true));
    }
}
