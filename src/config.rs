use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use dirs_next as dirs;
use globset::{Glob, GlobSet};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const DEFAULT_OUTPUT: &str = "/app/server/data/metasploit-modules.json";

const TECHNOLOGY_KEYWORDS: &[&str] = &[
    "windows", "linux", "unix", "macos", "osx", "apache", "iis", "php", "java", "python", "ssh",
    "smb", "rdp", "http", "https",
];

const SERVICE_KEYWORDS: &[&str] = &[
    "http",
    "https",
    "smb",
    "ssh",
    "ftp",
    "telnet",
    "smtp",
    "pop3",
    "imap",
    "dns",
    "snmp",
    "ldap",
    "mysql",
    "mssql",
    "postgres",
    "oracle",
    "mongodb",
    "redis",
    "memcached",
    "vnc",
    "rdp",
    "nfs",
    "rsync",
    "rpc",
    "tftp",
    "sip",
    "rtsp",
    "socks",
    "proxy",
    "ssl",
    "tls",
    "ipsec",
    "vpn",
    "docker",
    "kubernetes",
    "jenkins",
    "gitlab",
    "jboss",
    "tomcat",
    "weblogic",
    "elasticsearch",
    "kibana",
    "splunk",
    "grafana",
    "prometheus",
    "netbios",
    "kerberos",
    "winrm",
    "wmi",
    "powershell",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub console_program: String,
    pub console_args: Vec<String>,
    pub timeout_secs: u64,
    pub output: PathBuf,
    pub technology_keywords: Vec<String>,
    pub service_keywords: Vec<String>,
    pub service_limit: usize,
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            console_program: "msfconsole".to_string(),
            console_args: vec!["-q".to_string(), "-x".to_string()],
            timeout_secs: 300,
            output: PathBuf::from(DEFAULT_OUTPUT),
            technology_keywords: to_owned_list(TECHNOLOGY_KEYWORDS),
            service_keywords: to_owned_list(SERVICE_KEYWORDS),
            service_limit: 50,
            exclude: Vec::new(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        let path = config_file_path()?;
        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        let path = config_file_path()?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let mut file = fs::File::create(path)?;
        let contents = toml::to_string_pretty(self)?;
        file.write_all(contents.as_bytes())?;
        Ok(())
    }

    pub fn append_exclude(&mut self, value: String) {
        if !self.exclude.iter().any(|existing| existing == &value) {
            self.exclude.push(value);
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Exclude patterns match identifiers (`windows/smb/*`), not filesystem paths.
    pub fn compile_excludes(&self) -> Result<Option<GlobSet>, AppError> {
        if self.exclude.is_empty() {
            return Ok(None);
        }

        let mut builder = globset::GlobSetBuilder::new();
        for pattern in &self.exclude {
            builder.add(Glob::new(pattern)?);
        }

        Ok(Some(builder.build()?))
    }
}

pub fn config_file_path() -> Result<PathBuf, AppError> {
    let config_root = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .ok_or_else(|| {
            AppError::config("Unable to determine configuration directory for this platform")
        })?;
    Ok(config_root.join("msf-inventory").join("config.toml"))
}

pub fn ensure_config_file() -> Result<PathBuf, AppError> {
    let path = config_file_path()?;
    if !path.exists() {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let default = Config::default();
        let contents = toml::to_string_pretty(&default)?;
        fs::write(&path, contents)?;
    }
    Ok(path)
}

fn to_owned_list(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
