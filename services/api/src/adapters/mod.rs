pub mod gemini_llm;
pub mod openai_llm;
pub mod stub_llm;

pub use gemini_llm::GeminiGenerationAdapter;
pub use openai_llm::OpenAiGenerationAdapter;
pub use stub_llm::StubGenerationAdapter;

use crate::config::{Config, ProviderConfig};
use flashcard_core::ports::TextGenerationService;
use std::sync::Arc;

/// Builds the generation adapter selected by the deployment configuration.
pub fn build_generation_service(config: &Config) -> Arc<dyn TextGenerationService> {
    match &config.provider {
        ProviderConfig::OpenAi { api_key } => Arc::new(OpenAiGenerationAdapter::with_api_key(
            api_key,
            config.generation_model.clone(),
        )),
        ProviderConfig::Gemini { api_key } => Arc::new(GeminiGenerationAdapter::new(
            reqwest::Client::new(),
            api_key.clone(),
            config.generation_model.clone(),
        )),
        ProviderConfig::Stub => Arc::new(StubGenerationAdapter::default()),
    }
}

/// A throwaway HTTP/1.1 server for adapter tests: answers every request with
/// one canned response and counts the connections it accepted.
#[cfg(test)]
pub(crate) mod test_server {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    pub(crate) async fn spawn(status: &'static str, body: &'static str) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                tokio::spawn(async move {
                    read_request(&mut socket).await;
                    let response = format!(
                        "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });
        (format!("http://{addr}"), hits)
    }

    /// An address nothing listens on.
    pub(crate) async fn closed_address() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }

    async fn read_request(socket: &mut TcpStream) {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = match socket.read(&mut chunk).await {
                Ok(0) | Err(_) => return,
                Ok(n) => n,
            };
            buf.extend_from_slice(&chunk[..n]);
            let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
                continue;
            };
            let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + content_length {
                return;
            }
        }
    }
}
