use failsafe::backoff::{self, Exponential};
use failsafe::failure_policy::{self, ConsecutiveFailures};
use failsafe::{Config, StateMachine};
use std::time::Duration;

/// Breaker shared by every clone of a client.
pub type ApiCircuitBreaker = StateMachine<ConsecutiveFailures<Exponential>, ()>;

/// Creates the breaker that guards outbound API calls.
///
/// Five consecutive failures open it. While open, calls are rejected without
/// touching the network; it half-opens after an exponential backoff from 10s
/// up to 60s. Only transport errors and 5xx responses count as failures.
pub fn create_api_circuit_breaker() -> ApiCircuitBreaker {
    let backoff_strategy = backoff::exponential(Duration::from_secs(10), Duration::from_secs(60));
    let failure_policy = failure_policy::consecutive_failures(5, backoff_strategy);

    Config::new().failure_policy(failure_policy).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use failsafe::{CircuitBreaker, Error};

    #[test]
    fn test_opens_after_five_failures() {
        let cb = create_api_circuit_breaker();

        for _ in 0..5 {
            let result: Result<(), Error<&str>> = cb.call(|| Err::<(), &str>("503"));
            assert!(result.is_err());
        }

        let result: Result<(), Error<&str>> = cb.call(|| Ok::<(), &str>(()));
        assert!(matches!(result, Err(Error::Rejected)));
    }

    #[test]
    fn test_success_resets_the_count() {
        let cb = create_api_circuit_breaker();

        for _ in 0..4 {
            let _ = cb.call(|| Err::<(), &str>("timeout"));
        }
        assert!(cb.call(|| Ok::<(), &str>(())).is_ok());
        for _ in 0..4 {
            let _ = cb.call(|| Err::<(), &str>("timeout"));
        }

        assert_eq!(cb.call(|| Ok::<i32, &str>(7)).unwrap(), 7);
    }

    #[test]
    fn test_clones_share_state() {
        let cb = create_api_circuit_breaker();
        let other = cb.clone();

        for _ in 0..5 {
            let _ = cb.call(|| Err::<(), &str>("down"));
        }

        assert!(!other.is_call_permitted());
    }
}
