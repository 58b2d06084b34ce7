use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::files::StaticServer;
use crate::http::parser::{ParseError, parse_http_request};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;

pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    server: Arc<StaticServer>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter, bool), // bool = keep_alive?
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, server: Arc<StaticServer>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            server,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await? {
                        Some(req) => {
                            self.state = ConnectionState::Processing(req);
                        }
                        None => {
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(req) => {
                    // A serving failure becomes a terminal error response
                    // for this request, never a connection error.
                    let response = match self.server.serve(&req.method, &req.uri).await {
                        Ok(response) => response,
                        Err(e) => {
                            tracing::debug!(
                                uri = %req.uri,
                                status = e.status().as_u16(),
                                "request failed"
                            );
                            e.to_response()
                        }
                    };

                    let keep_alive = req.keep_alive();
                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer, keep_alive);
                }

                ConnectionState::Writing(writer, keep_alive) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    if *keep_alive {
                        self.state = ConnectionState::Reading; // go back for next request
                    } else {
                        self.state = ConnectionState::Closed;
                    }
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            // Try parsing whatever we already have
            match parse_http_request(&self.buffer) {
                Ok((request, consumed)) => {
                    // Remove consumed bytes
                    let _ = self.buffer.split_to(consumed);
                    return Ok(Some(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    // Malformed request → protocol error
                    return Err(anyhow::anyhow!("HTTP parse error: {:?}", e));
                }
            }

            // Read more data
            let mut temp = [0u8; 1024];
            let n = self.stream.read(&mut temp).await?;

            if n == 0 {
                // Client closed connection
                return Ok(None);
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }
}
