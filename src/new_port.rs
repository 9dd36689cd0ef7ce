use ::std::net::IpAddr;
use ::std::net::Ipv4Addr;
use ::std::net::SocketAddr;
use ::tokio::net::TcpListener;

use crate::BindError;

pub(crate) const DEFAULT_IP_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Asks the OS for an ephemeral TCP port that is not currently in use.
///
/// This binds a listener to `127.0.0.1:0`, which has the OS pick any free
/// port, reads the chosen port back, and closes the listener again. The
/// port is released before this returns, so the caller (or a child process
/// they spawn) is free to bind it themselves.
///
/// Note this is a probe, not a reservation. Another process can claim the
/// port between this returning and the caller's own bind. Bind promptly to
/// keep that window small.
///
/// ```rust
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn ::std::error::Error>> {
/// #
/// use ::free_port::new_port;
///
/// let port = new_port().await?;
/// let address = format!("127.0.0.1:{port}");
/// #
/// # Ok(())
/// # }
/// ```
pub async fn new_port() -> Result<u16, BindError> {
    let probe_addr = SocketAddr::new(DEFAULT_IP_ADDRESS, 0);
    let listener = TcpListener::bind(probe_addr).await?;
    let port = listener.local_addr()?.port();

    // The probe must be gone before the caller can see the port number.
    drop(listener);

    Ok(port)
}
