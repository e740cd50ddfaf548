use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use url_probe::utils::{logger, validation::Validate};
use url_probe::{HttpProber, ProbeConfig, ProbeHandler, SnsNotifier, SqsEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = ProbeConfig::from_env();
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    // Clients are built once and shared by every invocation.
    let prober = HttpProber::new(&config)
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    let notifier = SnsNotifier::new(&config).await;
    let handler = ProbeHandler::new(prober, notifier);
    let handler = &handler;

    run(service_fn(move |event: LambdaEvent<SqsEvent>| async move {
        tracing::info!(records = event.payload.records.len(), "received SQS batch");
        handler
            .handle(event.payload)
            .await
            .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
    }))
    .await
}
