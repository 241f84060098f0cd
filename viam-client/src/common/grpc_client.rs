use async_executor::Task;
use async_io::Timer;
use bytes::{BufMut, Bytes, BytesMut};
use futures_lite::{ready, Future, FutureExt};
use http_body_util::{BodyExt, Full};
use hyper::client::conn::http2::SendRequest;
use hyper::rt::{self, Sleep};
use hyper::{http::status, Method, Request};
use std::cell::RefCell;
use std::pin::Pin;
use std::rc::Rc;
use std::task::Poll;
use std::time::Instant;
use thiserror::Error;

use super::exec::Executor;

#[derive(Error, Debug)]
pub enum GrpcClientError {
    #[error(transparent)]
    ConversionError(#[from] std::num::TryFromIntError),
    #[error(transparent)]
    MessageEncodingError(#[from] prost::EncodeError),
    #[error(transparent)]
    MessageDecodingError(#[from] prost::DecodeError),
    #[error("http request error {0}")]
    HttpStatusError(status::StatusCode),
    #[error(transparent)]
    HyperError(#[from] hyper::Error),
    #[error(transparent)]
    HyperHttpError(#[from] hyper::http::Error),
    #[error("grpc error code {code:?}, message {message:?}")]
    GrpcError { code: i8, message: String },
    #[error("frame error {0}")]
    FrameError(String),
}

/// Prefixes `req` with the 5 byte gRPC frame header (compression flag plus
/// big-endian message length).
pub fn encode_request<T>(req: T) -> Result<Bytes, GrpcClientError>
where
    T: prost::Message,
{
    let mut buf = BytesMut::with_capacity(req.encoded_len() + 5);
    buf.put_u8(0);
    buf.put_u32(req.encoded_len().try_into()?);

    let mut msg = buf.split_off(5);
    req.encode(&mut msg)
        .map_err(GrpcClientError::MessageEncodingError)?;
    buf.unsplit(msg);

    Ok(buf.into())
}

/// Strips the gRPC frame header from a unary response body and decodes the
/// remainder.
pub fn decode_response<T>(mut body: Bytes) -> Result<T, GrpcClientError>
where
    T: prost::Message + std::default::Default,
{
    if body.len() < 5 {
        return Err(GrpcClientError::FrameError(format!(
            "truncated gRPC frame of {} bytes",
            body.len()
        )));
    }
    let msg = body.split_off(5);
    T::decode(msg).map_err(GrpcClientError::MessageDecodingError)
}

/// The transport seam between typed clients and the underlying HTTP/2
/// connection. [`GrpcClient`] is the live implementation; tests substitute
/// their own.
pub trait GrpcChannel {
    /// Issue a unary request with an already framed body, returning the
    /// framed response body.
    fn unary_rpc<'a>(
        &'a self,
        method: &'a str,
        body: Bytes,
    ) -> Pin<Box<dyn Future<Output = Result<Bytes, GrpcClientError>> + 'a>>;

    /// Tear down the underlying connection. Further calls on the channel
    /// will fail.
    fn close<'a>(&'a self) -> Pin<Box<dyn Future<Output = ()> + 'a>>;
}

/// Shared handle to a channel, cloned into every client proxy bound to it.
pub type Channel = Rc<dyn GrpcChannel>;

/// Encode `req`, issue it over `channel` and decode the typed response.
pub(crate) async fn call_unary<Req, Resp>(
    channel: &dyn GrpcChannel,
    method: &str,
    req: Req,
) -> Result<Resp, GrpcClientError>
where
    Req: prost::Message,
    Resp: prost::Message + std::default::Default,
{
    let body = encode_request(req)?;
    let resp = channel.unary_rpc(method, body).await?;
    decode_response(resp)
}

struct AsyncioSleep(Timer);

impl Sleep for AsyncioSleep {}

impl AsyncioSleep {
    fn reset(mut self: Pin<&mut Self>, deadline: Instant) {
        self.0.set_at(deadline)
    }
}

impl Future for AsyncioSleep {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut std::task::Context<'_>) -> Poll<Self::Output> {
        let _ = ready!(self.0.poll(cx));
        Poll::Ready(())
    }
}

#[derive(Default, Clone, Debug)]
struct H2Timer;

impl rt::Timer for H2Timer {
    fn sleep(&self, duration: std::time::Duration) -> std::pin::Pin<Box<dyn rt::Sleep>> {
        Box::pin(AsyncioSleep(Timer::after(duration)))
    }
    fn sleep_until(&self, deadline: std::time::Instant) -> std::pin::Pin<Box<dyn rt::Sleep>> {
        Box::pin(AsyncioSleep(Timer::at(deadline)))
    }
    fn reset(
        &self,
        sleep: &mut std::pin::Pin<Box<dyn rt::Sleep>>,
        new_deadline: std::time::Instant,
    ) {
        if let Some(timer) = sleep.as_mut().downcast_mut_pin::<AsyncioSleep>() {
            timer.reset(new_deadline)
        }
    }
}

/// A unary gRPC client over a single HTTP/2 connection.
pub struct GrpcClient {
    http2_connection: SendRequest<Full<Bytes>>,
    http2_task: RefCell<Option<Task<()>>>,
    uri: String,
}

impl GrpcClient {
    pub async fn new<T>(io: T, executor: Executor, uri: &str) -> Result<GrpcClient, GrpcClientError>
    where
        T: rt::Read + rt::Write + Unpin + 'static,
    {
        let (http2_connection, conn) = hyper::client::conn::http2::Builder::new(executor.clone())
            .keep_alive_interval(Some(std::time::Duration::from_secs(120))) // will send ping frames every 120 seconds
            .keep_alive_timeout(std::time::Duration::from_secs(300)) // if ping frame is not answered after 300 seconds the connection will be dropped
            .timer(H2Timer)
            .handshake(io)
            .await?;

        let http2_task = executor.spawn(async {
            if let Err(e) = conn.await {
                log::error!("GrpcClient failed with {:?}", e);
            }
        });
        Ok(Self {
            http2_connection,
            http2_task: RefCell::new(Some(http2_task)),
            uri: uri.to_string(),
        })
    }

    fn build_request(&self, path: &str, body: Full<Bytes>) -> Result<Request<Full<Bytes>>, GrpcClientError> {
        let mut uri = self.uri.to_owned();
        uri.push_str(path);

        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/grpc")
            .header("te", "trailers")
            .header(
                "user-agent",
                concat!("viam-client/", env!("CARGO_PKG_VERSION")),
            )
            .body(body)
            .map_err(GrpcClientError::HyperHttpError)
    }

    async fn send_request(&self, r: Request<Full<Bytes>>) -> Result<Bytes, GrpcClientError> {
        let mut http2_connection = self.http2_connection.clone();
        // verify if the server can accept a new HTTP2 stream
        http2_connection.ready().await?;

        let response = http2_connection.send_request(r).await?;

        let (part, body) = response.into_parts();

        if part.status != status::StatusCode::OK {
            log::error!("received status code {}", part.status.to_string());
            return Err(GrpcClientError::HttpStatusError(part.status));
        }

        let body = body.collect().await?;

        if let Some(trailers) = body.trailers() {
            match trailers.get("grpc-status") {
                Some(status) => {
                    // if we get an unparsable grpc status message we default to -1 (not a valid grpc error code)
                    let grpc_code: i8 =
                        str::parse::<i8>(status.to_str().unwrap_or("")).unwrap_or(-1);
                    if grpc_code != 0 {
                        return Err(GrpcClientError::GrpcError {
                            code: grpc_code,
                            message: trailers
                                .get("grpc-message")
                                .map(|m| m.to_str().unwrap_or("").to_owned())
                                .unwrap_or_default(),
                        });
                    }
                }
                None => {
                    return Err(GrpcClientError::GrpcError {
                        code: 0,
                        message: "received grpc trailers without a grpc-status".to_owned(),
                    });
                }
            }
        }
        Ok(body.to_bytes())
    }
}

impl GrpcChannel for GrpcClient {
    fn unary_rpc<'a>(
        &'a self,
        method: &'a str,
        body: Bytes,
    ) -> Pin<Box<dyn Future<Output = Result<Bytes, GrpcClientError>> + 'a>> {
        Box::pin(async move {
            let r = self.build_request(method, Full::new(body))?;
            self.send_request(r).await
        })
    }

    fn close<'a>(&'a self) -> Pin<Box<dyn Future<Output = ()> + 'a>> {
        Box::pin(async move {
            if let Some(task) = self.http2_task.borrow_mut().take() {
                let _ = task.cancel().await;
            }
        })
    }
}

impl Drop for GrpcClient {
    fn drop(&mut self) {
        log::debug!("dropping GrpcClient")
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::robot::v1::ResourceNamesRequest;

    #[test_log::test]
    fn test_frame_encoding() {
        let body = encode_request(ResourceNamesRequest {}).unwrap();
        // empty message still carries the 5 byte frame header
        assert_eq!(body.as_ref(), &[0u8, 0, 0, 0, 0]);

        let decoded: Result<ResourceNamesRequest, _> = decode_response(body);
        assert!(decoded.is_ok());
    }

    #[test_log::test]
    fn test_truncated_frame() {
        let decoded: Result<ResourceNamesRequest, _> = decode_response(Bytes::from_static(&[0, 0]));
        assert!(matches!(decoded, Err(GrpcClientError::FrameError(_))));
    }
}
