use std::fmt;

pub const DEFAULT_ADDR: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DOC_ROOT: &str = "./";

/// Server configuration, built once at startup from defaults overridden by
/// command line flags. Read-only for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address (`-a`, default "0.0.0.0")
    pub addr: String,
    /// Bind port (`-p`, default 8080)
    pub port: u16,
    /// Directory served as the origin of all request paths (`-d`, default "./")
    pub doc_root: String,
    /// Fork into the background after startup (`-D`)
    pub daemonize: bool,
    /// Emit per-request diagnostics (`-v`)
    pub verbose: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `-h` was given; print usage and exit.
    HelpRequested,
    /// `-p` value did not parse as a port number.
    InvalidPort(String),
    /// A flag that takes a value appeared without one.
    MissingValue(String),
    /// A flag not in the option set.
    UnknownFlag(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::HelpRequested => write!(f, "help requested"),
            ConfigError::InvalidPort(v) => write!(f, "invalid -p option: {}", v),
            ConfigError::MissingValue(flag) => write!(f, "missing value for {}", flag),
            ConfigError::UnknownFlag(flag) => write!(f, "unknown option: {}", flag),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            port: DEFAULT_PORT,
            doc_root: DEFAULT_DOC_ROOT.to_string(),
            daemonize: false,
            verbose: false,
        }
    }
}

impl Config {
    /// Builds a configuration from process arguments (without argv[0]).
    ///
    /// Pure over its input so it can be tested without touching the process
    /// environment; `main` turns any error into usage output and exit(1).
    pub fn parse<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut cfg = Config::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-a" => {
                    cfg.addr = args.next().ok_or(ConfigError::MissingValue(arg))?;
                }
                "-p" => {
                    let value = args.next().ok_or(ConfigError::MissingValue(arg))?;
                    cfg.port = value
                        .parse()
                        .map_err(|_| ConfigError::InvalidPort(value))?;
                }
                "-d" => {
                    cfg.doc_root = args.next().ok_or(ConfigError::MissingValue(arg))?;
                }
                "-D" => cfg.daemonize = true,
                "-v" => cfg.verbose = true,
                "-h" => return Err(ConfigError::HelpRequested),
                _ => return Err(ConfigError::UnknownFlag(arg)),
            }
        }

        Ok(cfg)
    }

    /// The `addr:port` string handed to the TCP listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.addr, self.port)
    }
}

pub fn usage() -> String {
    "Usage: vhttpd [-a address] [-p port] [-d documentroot] [-D] [-v] [-h]\n\
     Options:\n\
     \x20 -a address      : bind address (default: \"0.0.0.0\")\n\
     \x20 -p port         : bind port (default: 8080)\n\
     \x20 -d documentroot : document root (default: \"./\")\n\
     \x20 -D              : daemonize (default: off)\n\
     \x20 -v              : verbose diagnostics (default: off)\n\
     \x20 -h              : show this help and exit\n"
        .to_string()
}
