//! Invocation handler.
//!
//! Every invocation pauses for whatever the delay strategy returns, then
//! answers with the fixed SDK version report. The event payload and the
//! invocation context are accepted and ignored.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;

use crate::delay::{DelayStrategy, RandomDelay};
use crate::error::HandlerError;
use crate::response::ProxyResponse;
use crate::sdk::{BundledSdkVersion, VersionProvider};

/// Lambda entry point: random 1–3 second pause, bundled SDK version.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<ProxyResponse, Error> {
    let response = handle(&RandomDelay::default(), &BundledSdkVersion, event).await?;
    Ok(response)
}

/// Runs one invocation with the given delay strategy and version provider.
///
/// A failed version lookup is returned as-is; nothing is retried.
pub async fn handle<D, V>(
    delay: &D,
    sdk: &V,
    event: LambdaEvent<Value>,
) -> Result<ProxyResponse, HandlerError>
where
    D: DelayStrategy + ?Sized,
    V: VersionProvider + ?Sized,
{
    let _ = event;

    let pause = delay.next_delay();
    tracing::debug!(delay_ms = pause.as_millis() as u64, "simulating downstream latency");
    tokio::time::sleep(pause).await;

    let sdk_version = sdk.sdk_version()?;
    Ok(ProxyResponse::sdk_version_report(&sdk_version))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delay::NoDelay;
    use crate::sdk::StaticVersion;
    use lambda_runtime::Context;
    use serde_json::json;
    use std::time::Duration;
    use tokio::time::Instant;

    struct MissingSdk;

    impl VersionProvider for MissingSdk {
        fn sdk_version(&self) -> Result<String, HandlerError> {
            Err(HandlerError::SdkVersionUnavailable("not installed".to_string()))
        }
    }

    fn empty_event() -> LambdaEvent<Value> {
        LambdaEvent::new(json!({}), Context::default())
    }

    #[tokio::test]
    async fn test_empty_event_yields_fixed_response() {
        let response = handle(&NoDelay, &StaticVersion::new("1.26.0"), empty_event())
            .await
            .unwrap();

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "statusCode": 200,
                "headers": {
                    "Content-Type": "text/plain",
                    "x-custom-header": "My Header Value"
                },
                "body": "This lambda is using boto version 1.26.0\n"
            })
        );
    }

    #[tokio::test]
    async fn test_payload_is_ignored() {
        let sdk = StaticVersion::new("1.26.0");
        let baseline = handle(&NoDelay, &sdk, empty_event()).await.unwrap();

        let event = LambdaEvent::new(
            json!({"httpMethod": "GET", "path": "/hello-boto", "body": "ignored"}),
            Context::default(),
        );
        let response = handle(&NoDelay, &sdk, event).await.unwrap();

        assert_eq!(response, baseline);
    }

    #[tokio::test]
    async fn test_repeated_invocations_are_identical() {
        let sdk = StaticVersion::new("1.26.0");
        let first = handle(&NoDelay, &sdk, empty_event()).await.unwrap();
        for _ in 0..5 {
            let next = handle(&NoDelay, &sdk, empty_event()).await.unwrap();
            assert_eq!(next, first);
        }
    }

    #[tokio::test]
    async fn test_version_lookup_failure_propagates() {
        let err = handle(&NoDelay, &MissingSdk, empty_event())
            .await
            .unwrap_err();
        assert!(matches!(err, HandlerError::SdkVersionUnavailable(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_handler_waits_for_the_strategy_delay() {
        let fixed = || Duration::from_secs(2);
        let start = Instant::now();

        handle(&fixed, &StaticVersion::new("1.26.0"), empty_event())
            .await
            .unwrap();

        assert_eq!(start.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_random_delay_is_between_one_and_three_seconds() {
        let sdk = StaticVersion::new("1.26.0");
        for _ in 0..20 {
            let start = Instant::now();
            handle(&RandomDelay::default(), &sdk, empty_event())
                .await
                .unwrap();
            let elapsed = start.elapsed();
            assert!(
                elapsed >= Duration::from_secs(1) && elapsed <= Duration::from_secs(3),
                "waited {elapsed:?}"
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_function_handler_reports_bundled_sdk() {
        let result = function_handler(empty_event()).await;

        match option_env!("AWS_SDK_VERSION") {
            Some(version) => {
                let response = result.unwrap();
                assert_eq!(response.status_code, 200);
                assert_eq!(
                    response.body,
                    format!("This lambda is using boto version {version}\n")
                );
            }
            None => assert!(result.is_err()),
        }
    }
}
