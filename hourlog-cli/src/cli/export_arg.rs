use clap::ValueEnum;
use hourlog_core::ExportFormat;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ExportArg {
    Text,
    Json,
}

impl From<ExportArg> for ExportFormat {
    fn from(arg: ExportArg) -> Self {
        match arg {
            ExportArg::Text => ExportFormat::Text,
            ExportArg::Json => ExportFormat::Json,
        }
    }
}
