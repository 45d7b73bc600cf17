//! BoxModelGateway -- object-safe dynamic dispatch wrapper for ModelGateway.
//!
//! 1. Define an object-safe `ModelGatewayDyn` trait with boxed futures
//! 2. Blanket-impl `ModelGatewayDyn` for all `T: ModelGateway`
//! 3. `BoxModelGateway` wraps `Box<dyn ModelGatewayDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use careerchat_types::error::GatewayError;

use super::gateway::{GenerateRequest, ModelGateway};

/// Object-safe version of [`ModelGateway`] with boxed futures.
pub trait ModelGatewayDyn: Send + Sync {
    fn name(&self) -> &str;

    fn generate_boxed<'a>(
        &'a self,
        request: &'a GenerateRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, GatewayError>> + Send + 'a>>;
}

impl<T: ModelGateway> ModelGatewayDyn for T {
    fn name(&self) -> &str {
        ModelGateway::name(self)
    }

    fn generate_boxed<'a>(
        &'a self,
        request: &'a GenerateRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, GatewayError>> + Send + 'a>> {
        Box::pin(self.generate(request))
    }
}

/// Type-erased model gateway.
///
/// Lets the application state hold the real Gemini client in production and a
/// scripted gateway in tests without making the state generic.
pub struct BoxModelGateway {
    inner: Box<dyn ModelGatewayDyn>,
}

impl BoxModelGateway {
    /// Wrap a concrete `ModelGateway` in a type-erased box.
    pub fn new<T: ModelGateway + 'static>(gateway: T) -> Self {
        Self {
            inner: Box::new(gateway),
        }
    }
}

impl ModelGateway for BoxModelGateway {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<String, GatewayError> {
        self.inner.generate_boxed(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careerchat_types::chat::ChatTurn;

    struct EchoGateway;

    impl ModelGateway for EchoGateway {
        fn name(&self) -> &str {
            "echo"
        }

        async fn generate(&self, request: &GenerateRequest) -> Result<String, GatewayError> {
            Ok(format!("{} ({} turns)", request.message, request.history.len()))
        }
    }

    #[tokio::test]
    async fn test_box_gateway_delegates() {
        let gateway = BoxModelGateway::new(EchoGateway);
        assert_eq!(ModelGateway::name(&gateway), "echo");

        let request = GenerateRequest {
            model: "m".to_string(),
            history: vec![ChatTurn::user("ping")],
            message: "ping".to_string(),
        };
        let reply = gateway.generate(&request).await.unwrap();
        assert_eq!(reply, "ping (1 turns)");
    }
}
