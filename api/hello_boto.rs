use hello_boto::handler::function_handler;
use hello_boto::version;
use lambda_runtime::{run, service_fn, tracing, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // required to enable CloudWatch error logging by the runtime
    tracing::init_default_subscriber();
    tracing::info!(version = version(), "starting hello_boto");

    run(service_fn(function_handler)).await
}
