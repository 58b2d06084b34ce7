mod config;
mod files;
mod http;
mod server;

use config::{Config, ConfigError, usage};

fn main() -> anyhow::Result<()> {
    let cfg = match Config::parse(std::env::args().skip(1)) {
        Ok(cfg) => cfg,
        Err(e) => {
            if !matches!(e, ConfigError::HelpRequested) {
                eprintln!("{}", e);
            }
            eprintln!("{}", usage());
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(if cfg.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    if cfg.verbose {
        tracing::debug!(
            addr = %cfg.addr,
            port = cfg.port,
            doc_root = %cfg.doc_root,
            daemonize = cfg.daemonize,
            "configuration"
        );
    }

    // Fork before the runtime exists; tokio worker threads do not survive
    // a fork.
    if cfg.daemonize {
        daemonize()?;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(serve(cfg))
}

async fn serve(cfg: Config) -> anyhow::Result<()> {
    tokio::select! {
        res = server::listener::run(&cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}

#[cfg(unix)]
fn daemonize() -> anyhow::Result<()> {
    // SAFETY: single-threaded at this point; no runtime has been built yet.
    unsafe {
        let pid = libc::fork();
        if pid < 0 {
            anyhow::bail!("daemonize failed: fork error");
        }
        if pid > 0 {
            // Parent: the child carries on as the server.
            std::process::exit(0);
        }
        if libc::setsid() < 0 {
            anyhow::bail!("daemonize failed: setsid error");
        }
    }
    Ok(())
}

#[cfg(not(unix))]
fn daemonize() -> anyhow::Result<()> {
    anyhow::bail!("daemonize is only supported on unix")
}
