use ferrous_dig_application::use_cases::RunQueryUseCase;
use ferrous_dig_domain::Config;
use ferrous_dig_infrastructure::dig::DigProcessExecutor;
use std::sync::Arc;
use tracing::info;

pub struct UseCases {
    pub run_query: Arc<RunQueryUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let executor = Arc::new(DigProcessExecutor::from_config(&config.lookup)?);

        info!(
            dig_path = %config.lookup.dig_path,
            enforcement = executor.enforcement().name(),
            "dig executor ready"
        );

        Ok(Self {
            run_query: Arc::new(RunQueryUseCase::with_defaults(executor, &config.lookup)),
        })
    }
}
