pub const DEFAULT_GREETING: &str = "Hello World!";

/// Produces the greeting served on `GET /`
#[derive(Debug, Clone)]
pub struct ApiService {
    greeting: String,
}

impl ApiService {
    pub fn new() -> Self {
        Self::with_greeting(DEFAULT_GREETING)
    }

    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            greeting: greeting.into(),
        }
    }

    pub fn hello(&self) -> &str {
        &self.greeting
    }
}

impl Default for ApiService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_greeting() {
        assert_eq!(ApiService::default().hello(), "Hello World!");
    }

    #[test]
    fn custom_greeting() {
        assert_eq!(ApiService::with_greeting("hi").hello(), "hi");
    }
}
