use clap::ValueEnum;
use ferrous_dig_domain::QueryResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

pub fn render(result: &QueryResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Text => Ok(render_text(result)),
    }
}

fn render_text(result: &QueryResult) -> String {
    let mut out = String::new();
    for record in &result.records {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            record.name, record.ttl, record.record_type, record.data
        ));
    }
    out.push_str(&format!(
        ";; {} record(s) in {} ms",
        result.records.len(),
        result.execution_time_ms
    ));
    out
}
