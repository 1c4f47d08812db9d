//! Observability - request IDs propagated through logs and responses.

mod request_id;

pub use request_id::RequestIdMiddleware;
