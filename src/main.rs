use anyhow::Context;
use halving_probe::utils::logger;
use halving_probe::{ProbeEngine, ProbeSettings};

fn main() -> anyhow::Result<()> {
    // 命令列參數一律忽略，起始值與門檻固定
    logger::init_cli_logger(false);

    let engine = ProbeEngine::new(ProbeSettings::default());
    let stdout = std::io::stdout();
    let verdict = engine
        .run(&mut stdout.lock())
        .context("failed to write verdict to stdout")?;

    tracing::debug!("printed {}", verdict.token());
    Ok(())
}
