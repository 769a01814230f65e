use std::collections::VecDeque;
use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// One token of operator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Number(i32),
    Invalid(String),
    /// Input stream closed
    Eof,
}

/// Whitespace-separated token reader over any buffered async source.
///
/// Several numbers typed on one line are handed out one by one, so
/// `2 3` answers both the row and the seat prompt.
pub struct InputReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: AsyncBufRead + Unpin> InputReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    pub async fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line).await? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    pub async fn next_input(&mut self) -> io::Result<Input> {
        let input = match self.next_token().await? {
            None => Input::Eof,
            Some(token) => match token.parse::<i32>() {
                Ok(number) => Input::Number(number),
                Err(_) => Input::Invalid(token),
            },
        };
        Ok(input)
    }
}
