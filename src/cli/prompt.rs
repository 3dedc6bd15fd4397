use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Asynchronous request/response exchange with the user.
///
/// `ask` resolves to `None` when the user dismisses the request (end of
/// input), mirroring a cancelled dialog.
#[allow(async_fn_in_trait)]
pub trait Prompt {
    async fn ask(&mut self, message: &str) -> io::Result<Option<String>>;

    async fn show(&mut self, message: &str) -> io::Result<()>;
}

/// Line-based prompt over any async reader/writer pair.
pub struct Terminal<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> Terminal<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R, W> Prompt for Terminal<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    async fn ask(&mut self, message: &str) -> io::Result<Option<String>> {
        self.writer.write_all(message.as_bytes()).await?;
        self.writer.write_all(b" ").await?;
        self.writer.flush().await?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    async fn show(&mut self, message: &str) -> io::Result<()> {
        self.writer.write_all(message.as_bytes()).await?;
        if !message.ends_with('\n') {
            self.writer.write_all(b"\n").await?;
        }
        self.writer.flush().await
    }
}
