use async_trait::async_trait;
use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::{
    error::{AppError, OperationResult},
    services::validation::Validate,
};

/// A typed request routed through the [`Mediator`].
pub trait Request: Validate + Send + Sync + 'static {
    /// Stable name used in logs and dispatch errors.
    const NAME: &'static str;

    type Response: Send + 'static;
}

#[async_trait]
pub trait RequestHandler<R>: Send + Sync
where
    R: Request,
{
    async fn handle(&self, request: R) -> Result<OperationResult<R::Response>, AppError>;
}

type BoxAnySend = Box<dyn Any + Send>;

type HandlerFuture = Pin<Box<dyn Future<Output = Result<BoxAnySend, AppError>> + Send>>;

type HandlerFn = Arc<dyn Fn(BoxAnySend) -> HandlerFuture + Send + Sync>;

/// In-process dispatcher keyed by the request's `TypeId`.
///
/// `send` validates the request first, so handlers only ever see input that
/// passed its [`Validate`] rules.
pub struct Mediator {
    handlers: DashMap<TypeId, (&'static str, HandlerFn)>,
}

impl Default for Mediator {
    fn default() -> Self {
        Self {
            handlers: DashMap::new(),
        }
    }
}

impl Mediator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<R, H>(&self, handler: Arc<H>) -> Result<(), AppError>
    where
        R: Request,
        H: RequestHandler<R> + 'static,
    {
        let key = TypeId::of::<R>();
        if self.handlers.contains_key(&key) {
            return Err(AppError::AlreadyRegistered { request: R::NAME });
        }

        let f: HandlerFn = Arc::new(move |boxed: BoxAnySend| -> HandlerFuture {
            let handler = handler.clone();

            Box::pin(async move {
                match boxed.downcast::<R>() {
                    Ok(request) => {
                        let outcome = handler.handle(*request).await?;
                        Ok(Box::new(outcome) as BoxAnySend)
                    }
                    Err(_) => Err(AppError::TypeMismatch { expected: R::NAME }),
                }
            })
        });

        self.handlers.insert(key, (R::NAME, f));
        Ok(())
    }

    pub async fn send<R>(&self, request: R) -> Result<OperationResult<R::Response>, AppError>
    where
        R: Request,
    {
        if let Err(err) = request.validate() {
            tracing::warn!(request = R::NAME, error = %err, "Request rejected by validation");
            return Err(err);
        }

        let Some(f) = self.handlers.get(&TypeId::of::<R>()).map(|h| h.1.clone()) else {
            return Err(AppError::HandlerNotFound(R::NAME));
        };

        let out = (f)(Box::new(request)).await?;

        match out.downcast::<OperationResult<R::Response>>() {
            Ok(outcome) => Ok(*outcome),
            Err(_) => Err(AppError::TypeMismatch { expected: R::NAME }),
        }
    }

    pub fn registered_requests(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|e| e.value().0).collect()
    }
}
