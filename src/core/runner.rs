use crate::config::CliConfig;
use crate::core::lister::FilmCharacterLister;
use crate::domain::ports::FilmTransport;
use crate::utils::error::Result;
use std::io::Write;

/// Name the tool was invoked as, for the usage line. A non-UTF-8 `argv[0]` is converted lossily.
pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

/// Full run for one invocation. The usage check happens before configuration is
/// loaded or the transport is touched.
pub async fn run<T, W>(config: &CliConfig, program: &str, transport: T, out: &mut W) -> Result<usize>
where
    T: FilmTransport,
    W: Write,
{
    let film_id = config.film_id(program)?;
    let settings = config.resolve()?;

    let lister = FilmCharacterLister::new(transport, settings);
    let count = lister.list_characters(&film_id, out).await?;

    tracing::info!("Listed {} characters for film {}", count, film_id);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RawResponse;
    use crate::utils::error::SwapiError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct CountingTransport {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl FilmTransport for CountingTransport {
        async fn get(&self, _url: &str) -> Result<RawResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(RawResponse {
                status: 200,
                body: r#"{"characters": ["http://example.com/people/5"]}"#.to_string(),
            })
        }
    }

    fn config(episode: Option<&str>, base_url: Option<&str>) -> CliConfig {
        CliConfig {
            episode: episode.map(str::to_string),
            base_url: base_url.map(str::to_string),
            config: None,
            verbose: false,
        }
    }

    #[tokio::test]
    async fn missing_episode_makes_no_request() {
        let transport = CountingTransport::default();
        let mut out = Vec::new();

        let err = run(&config(None, None), "./swapi-characters", transport.clone(), &mut out)
            .await
            .unwrap_err();

        assert!(matches!(err, SwapiError::UsageError { .. }));
        assert_eq!(err.to_string(), "Use: ./swapi-characters <episode Number>");
        assert_eq!(err.exit_code(), 1);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn invalid_base_url_makes_no_request() {
        let transport = CountingTransport::default();
        let mut out = Vec::new();

        let err = run(
            &config(Some("1"), Some("not a url")),
            "swapi-characters",
            transport.clone(),
            &mut out,
        )
        .await
        .unwrap_err();

        assert_eq!(err.exit_code(), 5);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn lists_characters_once() {
        let transport = CountingTransport::default();
        let mut out = Vec::new();

        let count = run(
            &config(Some("5"), Some("http://swapi.test/api/films/")),
            "swapi-characters",
            transport.clone(),
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(count, 1);
        assert_eq!(out, b"http://example.com/people/5\n");
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }
}
