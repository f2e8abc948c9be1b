use bytes::{BufMut, BytesMut};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

/// Protocol token on every status line, whatever version the client sent.
pub const STATUS_LINE_VERSION: &str = "HTTP/2.0";

pub fn serialize_response(resp: &Response) -> BytesMut {
    let body_len = resp.body.as_ref().map_or(0, Vec::len);
    let mut buf = BytesMut::with_capacity(128 + body_len);

    // Status line
    buf.put_slice(
        format!(
            "{} {} {}\r\n",
            STATUS_LINE_VERSION,
            resp.status.as_u16(),
            resp.status.reason_phrase()
        )
        .as_bytes(),
    );

    // Headers
    for (k, v) in &resp.headers {
        buf.put_slice(k.as_bytes());
        buf.put_slice(b": ");
        buf.put_slice(v.as_bytes());
        buf.put_slice(b"\r\n");
    }

    // Header/body separator
    buf.put_slice(b"\r\n");

    if let Some(body) = &resp.body {
        buf.put_slice(body);
    }

    buf
}

pub struct ResponseWriter {
    buffer: BytesMut,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}
