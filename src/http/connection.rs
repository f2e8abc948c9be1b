use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::http::files;
use crate::http::parser::{is_blank, next_line, parse_header_line, parse_request_line};
use crate::http::request::{Header, Request, RequestLine};
use crate::http::writer::ResponseWriter;
use crate::log::Logger;

/// One client connection, owned by a single task from accept to close.
pub struct Connection<S> {
    stream: BufReader<S>,
    peer: SocketAddr,
    base_dir: Arc<str>,
    state: ConnectionState,
    log: Logger,
}

#[derive(Debug)]
pub enum ConnectionState {
    AwaitRequestLine,
    ReadingHeaders {
        line: RequestLine,
        headers: Vec<Header>,
    },
    Dispatch(Request),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, peer: SocketAddr, base_dir: Arc<str>, log: &Logger) -> Self {
        Self {
            stream: BufReader::new(stream),
            peer,
            base_dir,
            state: ConnectionState::AwaitRequestLine,
            log: log.scoped(peer.to_string()),
        }
    }

    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    /// Serves requests until the peer closes, sends a malformed request
    /// line, or asks for `Connection: close`. The stream is shut down and
    /// dropped on return, including when an I/O error ends the loop.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let result = self.drive().await;

        if let Err(e) = self.stream.get_mut().shutdown().await {
            self.log.debug(format_args!("shutdown failed: {e}"));
        }
        self.log.debug("connection closed");

        result
    }

    async fn drive(&mut self) -> anyhow::Result<()> {
        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);

            self.state = match state {
                ConnectionState::AwaitRequestLine => self.await_request_line().await?,
                ConnectionState::ReadingHeaders { line, headers } => {
                    self.read_header(line, headers).await?
                }
                ConnectionState::Dispatch(request) => self.dispatch(request).await?,
                ConnectionState::Closed => break,
            };
        }

        Ok(())
    }

    async fn await_request_line(&mut self) -> anyhow::Result<ConnectionState> {
        let Some(line) = next_line(&mut self.stream).await? else {
            self.log.debug("peer closed the connection");
            return Ok(ConnectionState::Closed);
        };

        match parse_request_line(&line) {
            Ok(line) => {
                self.log.debug(format_args!(
                    "request: {} {} {}",
                    line.method.as_str(),
                    line.path,
                    line.version
                ));
                Ok(ConnectionState::ReadingHeaders {
                    line,
                    headers: Vec::new(),
                })
            }
            Err(e) => {
                self.log.warn(e);
                Ok(ConnectionState::Closed)
            }
        }
    }

    async fn read_header(
        &mut self,
        line: RequestLine,
        mut headers: Vec<Header>,
    ) -> anyhow::Result<ConnectionState> {
        let Some(raw) = next_line(&mut self.stream).await? else {
            self.log.debug("peer disconnected while sending headers");
            return Ok(ConnectionState::Closed);
        };

        if is_blank(&raw) {
            self.log.debug(format_args!("headers: {headers:?}"));
            return Ok(ConnectionState::Dispatch(Request::new(line, headers)));
        }

        match parse_header_line(&raw) {
            Ok(header) => headers.push(header),
            Err(e) => self.log.debug(e),
        }

        Ok(ConnectionState::ReadingHeaders { line, headers })
    }

    async fn dispatch(&mut self, request: Request) -> anyhow::Result<ConnectionState> {
        let response = files::resolve(&request, &self.base_dir, &self.log).await?;

        let mut writer = ResponseWriter::new(&response);
        writer.write_to_stream(self.stream.get_mut()).await?;

        self.log.info(format_args!(
            "{} {} -> {}",
            request.method.as_str(),
            request.path,
            response.status.as_u16()
        ));

        if request.keep_alive() {
            self.log.debug("done, waiting for next request");
            Ok(ConnectionState::AwaitRequestLine)
        } else {
            self.log.debug("done, closing as requested");
            Ok(ConnectionState::Closed)
        }
    }
}
