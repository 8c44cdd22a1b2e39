//! Guard chain middleware
//!
//! 按声明顺序执行 guard，第一个失败即返回错误响应；全部通过后把
//! `RequestContext` 写入 request extensions。

use std::rc::Rc;

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{debug, trace};

use crate::api::guards::{Guard, RequestContext};

/// Ordered list of guards wrapped around a resource
#[derive(Clone, Default)]
pub struct GuardChain {
    guards: Vec<Rc<dyn Guard>>,
}

impl GuardChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<G: Guard + 'static>(mut self, guard: G) -> Self {
        self.guards.push(Rc::new(guard));
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.guards.iter().map(|g| g.name()).collect()
    }
}

impl<S, B> Transform<S, ServiceRequest> for GuardChain
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = GuardChainMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        trace!(guards = ?self.names(), "Guard chain built");
        ready(Ok(GuardChainMiddleware {
            service: Rc::new(service),
            guards: Rc::new(self.guards.clone()),
        }))
    }
}

pub struct GuardChainMiddleware<S> {
    service: Rc<S>,
    guards: Rc<Vec<Rc<dyn Guard>>>,
}

impl<S, B> Service<ServiceRequest> for GuardChainMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let guards = self.guards.clone();

        Box::pin(async move {
            let mut ctx = RequestContext::default();

            for guard in guards.iter() {
                if let Err(err) = guard.check(req.request(), &mut ctx).await {
                    debug!(
                        guard = guard.name(),
                        "Request to {} rejected: {}",
                        req.path(),
                        err
                    );
                    return Ok(req.error_response(err).map_into_right_body());
                }
                trace!(guard = guard.name(), "Guard passed");
            }

            req.extensions_mut().insert(ctx);

            let res = srv.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
