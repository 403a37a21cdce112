//! Runs a single invocation locally and prints the response.
//!
//! Uses the event `{}` with a default context, the same input the function
//! receives from a bare test invocation. Pass `--no-delay` to skip the pause.

use hello_boto::delay::{DelayStrategy, NoDelay, RandomDelay};
use hello_boto::handler::handle;
use hello_boto::sdk::BundledSdkVersion;
use lambda_runtime::{Context, Error, LambdaEvent};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::tracing::init_default_subscriber();

    let no_delay = std::env::args().skip(1).any(|arg| arg == "--no-delay");
    let delay: Box<dyn DelayStrategy> = if no_delay {
        Box::new(NoDelay)
    } else {
        Box::new(RandomDelay::default())
    };

    let event = LambdaEvent::new(json!({}), Context::default());
    let started = std::time::Instant::now();
    let response = handle(delay.as_ref(), &BundledSdkVersion, event).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    eprintln!("Responded after {:.2}s", started.elapsed().as_secs_f64());
    Ok(())
}
