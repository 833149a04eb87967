use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use edge_status_lambda::endpoints::event;
use edge_status_shared::utilities::config;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    std::panic::set_hook(Box::new(|info| {
        log::error!("Application panicked: {}", info);
    }));

    config::init();
    lambda_runtime::run(service_fn(|event: LambdaEvent<Value>| event::handler(event))).await?;
    Ok(())
}
