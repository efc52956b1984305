use crate::core::countdown;
use crate::core::report::write_verdict;
use crate::core::ConfigProvider;
use crate::domain::model::Verdict;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::io::Write;

pub struct ProbeEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> ProbeEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<Verdict> {
        let settings = self.config.settings();
        settings.validate()?;

        tracing::info!(
            "Running halving loop: start={}, threshold={}, budget={}",
            settings.start,
            settings.threshold,
            settings.max_iterations
        );

        let verdict = countdown::probe(&settings)?;
        tracing::info!(
            "Settled at {} after {} iterations (below threshold: {})",
            verdict.final_value,
            verdict.iterations,
            verdict.below_threshold
        );

        write_verdict(out, &verdict, settings.format)?;
        Ok(verdict)
    }
}
