use log::{info, warn};

use crate::codec;
use crate::coefficients::CoefficientVector;

/// Where the shareable code lives: read once at startup, rewritten on every
/// reset.
pub trait FragmentStore {
    fn read(&self) -> Option<String>;
    fn publish(&mut self, code: &str);
}

/// Fragment handed over on the command line. Publishing keeps the latest
/// code and logs the share link for it.
#[derive(Clone, Debug, Default)]
pub struct LaunchFragment {
    initial: Option<String>,
    current: Option<String>,
}

impl LaunchFragment {
    pub fn new(initial: Option<String>) -> Self {
        Self {
            initial,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

impl FragmentStore for LaunchFragment {
    fn read(&self) -> Option<String> {
        self.initial.clone()
    }

    fn publish(&mut self, code: &str) {
        info!("Share code: #{}", code);
        self.current = Some(code.to_string());
    }
}

/// Startup coefficients: the stored fragment when it holds a code, otherwise
/// whatever `fallback` produces.
pub fn initial_coefficients(
    store: &dyn FragmentStore,
    fallback: impl FnOnce() -> CoefficientVector,
) -> CoefficientVector {
    match store.read() {
        Some(raw) => match codec::parse_fragment(&raw) {
            Some(coefficients) => {
                info!("Starting from shared code {}", codec::encode(&coefficients));
                coefficients
            }
            None => {
                warn!("Ignoring malformed code {:?}, picking a random attractor", raw);
                fallback()
            }
        },
        None => {
            info!("No code given, picking a random attractor");
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coefficients::COEFFICIENT_COUNT;

    fn fallback() -> CoefficientVector {
        CoefficientVector::new([1; COEFFICIENT_COUNT])
    }

    #[test]
    fn valid_fragment_wins() {
        let store = LaunchFragment::new(Some("#abcdef".to_string()));
        assert_eq!(initial_coefficients(&store, fallback), codec::decode("ABCDEF"));
    }

    #[test]
    fn malformed_or_missing_fragment_falls_back() {
        let store = LaunchFragment::new(Some("#ABC12F".to_string()));
        assert_eq!(initial_coefficients(&store, fallback), fallback());
        let store = LaunchFragment::new(None);
        assert_eq!(initial_coefficients(&store, fallback), fallback());
    }

    #[test]
    fn publish_replaces_current_code() {
        let mut store = LaunchFragment::new(None);
        store.publish("AAAAAA");
        store.publish("BBBBBB");
        assert_eq!(store.current(), Some("BBBBBB"));
        assert_eq!(store.read(), None);
    }
}
