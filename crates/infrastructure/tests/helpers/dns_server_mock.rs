#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

pub type Responder = Arc<dyn Fn(&[u8]) -> Vec<u8> + Send + Sync>;

/// Loopback UDP server answering each datagram through a responder.
pub struct MockUdpServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockUdpServer {
    pub async fn start<F>(responder: F) -> std::io::Result<Self>
    where
        F: Fn(&[u8]) -> Vec<u8> + Send + Sync + 'static,
    {
        Self::spawn(Some(Arc::new(responder)), false).await
    }

    /// Receives queries and never replies.
    pub async fn silent() -> std::io::Result<Self> {
        Self::spawn(None, false).await
    }

    /// Before each real reply, a second socket fires a bogus datagram at the
    /// client from a different port.
    pub async fn with_decoy<F>(responder: F) -> std::io::Result<Self>
    where
        F: Fn(&[u8]) -> Vec<u8> + Send + Sync + 'static,
    {
        Self::spawn(Some(Arc::new(responder)), true).await
    }

    async fn spawn(responder: Option<Responder>, decoy: bool) -> std::io::Result<Self> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let decoy_socket = if decoy {
            Some(UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?)
        } else {
            None
        };

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        let Some(responder) = responder.as_ref() else { continue };
                        let response = responder(&buf[..len]);
                        if let Some(decoy) = decoy_socket.as_ref() {
                            let _ = decoy.send_to(&response, peer).await;
                        }
                        let _ = socket.send_to(&response, peer).await;
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl Drop for MockUdpServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Loopback TCP server speaking length-prefixed DNS, one exchange per
/// connection.
pub struct MockTcpServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockTcpServer {
    pub async fn start<F>(responder: F) -> std::io::Result<Self>
    where
        F: Fn(&[u8]) -> Vec<u8> + Send + Sync + 'static,
    {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;
        let responder: Responder = Arc::new(responder);
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    accepted = listener.accept() => {
                        let Ok((mut stream, _)) = accepted else { continue };
                        let responder = Arc::clone(&responder);
                        tokio::spawn(async move {
                            let mut len_buf = [0u8; 2];
                            if stream.read_exact(&mut len_buf).await.is_err() {
                                return;
                            }
                            let mut query = vec![0u8; usize::from(u16::from_be_bytes(len_buf))];
                            if stream.read_exact(&mut query).await.is_err() {
                                return;
                            }
                            let response = responder(&query);
                            let mut framed = (response.len() as u16).to_be_bytes().to_vec();
                            framed.extend_from_slice(&response);
                            let _ = stream.write_all(&framed).await;
                        });
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl Drop for MockTcpServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Echoes the query as a response carrying one A record pointing back at the
/// question name.
pub fn answer_a(query: &[u8], octets: [u8; 4]) -> Vec<u8> {
    let mut response = query.to_vec();
    response[2] |= 0x80;
    response[3] = 0x80;
    response[6..8].copy_from_slice(&[0x00, 0x01]);
    response.extend_from_slice(&[
        0xc0, 0x0c, // pointer to question name
        0x00, 0x01, // A
        0x00, 0x01, // IN
        0x00, 0x00, 0x00, 0x3c, // ttl 60
        0x00, 0x04,
    ]);
    response.extend_from_slice(&octets);
    response
}

/// Echoes the query with QR and TC set.
pub fn truncated(query: &[u8]) -> Vec<u8> {
    let mut response = query.to_vec();
    response[2] |= 0x82;
    response
}
