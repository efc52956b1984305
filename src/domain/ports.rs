use crate::domain::model::{OutputFormat, ProbeSettings};

pub trait ConfigProvider {
    fn start(&self) -> i64;
    fn threshold(&self) -> i64;
    fn max_iterations(&self) -> u64;
    fn output_format(&self) -> OutputFormat;

    fn settings(&self) -> ProbeSettings {
        ProbeSettings {
            start: self.start(),
            threshold: self.threshold(),
            max_iterations: self.max_iterations(),
            format: self.output_format(),
        }
    }
}

impl ConfigProvider for ProbeSettings {
    fn start(&self) -> i64 {
        self.start
    }

    fn threshold(&self) -> i64 {
        self.threshold
    }

    fn max_iterations(&self) -> u64 {
        self.max_iterations
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}
