use anyhow::Result;
use banco::{config::BankConfig, shell::Shell};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // stdout belongs to the dialogue, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let shell = Shell {
        input: std::io::stdin().lock(),
        output: &mut std::io::stdout(),
        config: BankConfig::default(),
        clock: Box::new(|| chrono::Local::now().naive_local()),
    };
    shell.run()
}
