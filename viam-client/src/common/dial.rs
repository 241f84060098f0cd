//! Dialing a robot: TCP connect, optional TLS, HTTP/2 handshake.
use async_io::Async;
use futures_lite::{ready, AsyncRead, AsyncWrite};
use futures_rustls::TlsConnector;
use hyper::{rt, Uri};
use rustls::{ClientConfig, OwnedTrustAnchor, RootCertStore, ServerName};
use std::mem::MaybeUninit;
use std::net::TcpStream;
use std::pin::Pin;
use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll};
use thiserror::Error;

use super::exec::Executor;
use super::grpc_client::{GrpcClient, GrpcClientError};

#[derive(Error, Debug)]
pub enum DialError {
    #[error("invalid robot address '{0}'")]
    InvalidAddress(String),
    #[error(transparent)]
    InvalidDnsName(#[from] rustls::client::InvalidDnsNameError),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    GrpcClientError(#[from] GrpcClientError),
}

/// Options used to establish the connection to a robot. Opaque to the
/// robot client itself.
#[derive(Clone, Debug, Default)]
pub struct DialOptions {
    /// Connect over plain TCP even when the address does not carry an
    /// `http` scheme.
    pub insecure: bool,
}

/// Dial the robot at `address` (e.g. `https://my-robot.example.com` or
/// `http://localhost:8080`) and perform the HTTP/2 handshake, returning a
/// connected channel.
pub async fn dial(
    address: &str,
    options: &DialOptions,
    executor: Executor,
) -> Result<Rc<GrpcClient>, DialError> {
    let uri: Uri = address
        .parse()
        .map_err(|_| DialError::InvalidAddress(address.to_owned()))?;
    let host = uri
        .host()
        .ok_or_else(|| DialError::InvalidAddress(address.to_owned()))?
        .to_owned();
    let insecure = options.insecure || uri.scheme_str() == Some("http");
    let port = uri.port_u16().unwrap_or(if insecure { 80 } else { 443 });

    if insecure {
        log::info!("insecurely connecting to {:?}", uri);
    }
    let stream = Async::new(TcpStream::connect((host.as_str(), port))?)?;

    let client = if insecure {
        GrpcClient::new(IoStream(stream), executor, address).await?
    } else {
        let mut root_certs = RootCertStore::empty();
        root_certs.add_trust_anchors(webpki_roots::TLS_SERVER_ROOTS.0.iter().map(|ta| {
            OwnedTrustAnchor::from_subject_spki_name_constraints(
                ta.subject,
                ta.spki,
                ta.name_constraints,
            )
        }));
        let mut cfg = ClientConfig::builder()
            .with_safe_defaults()
            .with_root_certificates(root_certs)
            .with_no_client_auth();
        cfg.alpn_protocols = vec!["h2".as_bytes().to_vec()];
        let connector = TlsConnector::from(Arc::new(cfg));
        let server_name = ServerName::try_from(host.as_str())?;
        let stream = connector.connect(server_name, stream).await?;
        GrpcClient::new(IoStream(stream), executor, address).await?
    };
    Ok(Rc::new(client))
}

/// Adapter from a `futures`-style stream to hyper's IO traits.
pub struct IoStream<T>(pub T);

impl<T: AsyncRead + Unpin> rt::Read for IoStream<T> {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        mut buf: rt::ReadBufCursor<'_>,
    ) -> Poll<Result<(), std::io::Error>> {
        let uninit_buf = unsafe { &mut *(buf.as_mut() as *mut [MaybeUninit<u8>] as *mut [u8]) };
        match ready!(Pin::new(&mut self.0).poll_read(cx, uninit_buf)) {
            Ok(n) => {
                unsafe { buf.advance(n) };
                Poll::Ready(Ok(()))
            }
            Err(e) => Poll::Ready(Err(e)),
        }
    }
}

impl<T: AsyncWrite + Unpin> rt::Write for IoStream<T> {
    fn poll_write(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<Result<usize, std::io::Error>> {
        Pin::new(&mut self.0).poll_write(cx, buf)
    }
    fn poll_flush(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Result<(), std::io::Error>> {
        Pin::new(&mut self.0).poll_flush(cx)
    }
    fn poll_shutdown(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Result<(), std::io::Error>> {
        Pin::new(&mut self.0).poll_close(cx)
    }
}
