use crate::error::{Error, Result};
use tokio::net::TcpStream;
use tracing::{debug, info};

/// Resolve `host:port` and connect to the first candidate address that
/// accepts, in resolver order. A single pass, no retries.
pub async fn dial(host: &str, port: u16) -> Result<TcpStream> {
    let candidates: Vec<_> = tokio::net::lookup_host((host, port))
        .await
        .map_err(|e| Error::Resolution {
            host: host.to_string(),
            reason: e.to_string(),
        })?
        .collect();

    if candidates.is_empty() {
        return Err(Error::Resolution {
            host: host.to_string(),
            reason: "no addresses found".to_string(),
        });
    }

    for addr in candidates {
        match TcpStream::connect(addr).await {
            Ok(stream) => {
                info!(%addr, "connected");
                return Ok(stream);
            }
            Err(e) => debug!(%addr, error = %e, "connect failed"),
        }
    }

    Err(Error::Connection {
        host: host.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_dial_connects_to_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let (stream, accepted) = tokio::join!(dial("127.0.0.1", port), listener.accept());
        let stream = stream.unwrap();
        let (_, peer_addr) = accepted.unwrap();
        assert_eq!(stream.local_addr().unwrap(), peer_addr);
    }

    #[tokio::test]
    async fn test_dial_fails_when_nothing_listens() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let err = dial("127.0.0.1", port).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Connection { ref host } if host == "127.0.0.1"
        ));
        assert_eq!(err.to_string(), "cannot connect to host '127.0.0.1'");
    }
}
