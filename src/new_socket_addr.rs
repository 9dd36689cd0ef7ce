use ::std::net::SocketAddr;

use crate::new_port;
use crate::new_port::DEFAULT_IP_ADDRESS;
use crate::BindError;

/// Finds a free port, and returns it as a `SocketAddr` on the IP 127.0.0.1.
///
/// ```rust
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn ::std::error::Error>> {
/// #
/// use ::free_port::new_socket_addr;
///
/// let addr = new_socket_addr().await?;
/// #
/// # Ok(())
/// # }
/// ```
pub async fn new_socket_addr() -> Result<SocketAddr, BindError> {
    let port = new_port().await?;
    let socket_addr = SocketAddr::new(DEFAULT_IP_ADDRESS, port);

    Ok(socket_addr)
}

#[cfg(test)]
mod test_new_socket_addr {
    use super::*;
    use ::regex::Regex;

    #[tokio::test]
    async fn it_should_return_loopback_with_a_port() {
        let socket_addr = new_socket_addr().await.unwrap();
        let addr = format!("{}", socket_addr);

        let regex = Regex::new("^127\\.0\\.0\\.1:[0-9]+$").unwrap();
        let is_match = regex.is_match(&addr);
        assert!(is_match);
    }

    #[tokio::test]
    async fn it_should_not_return_port_zero() {
        let socket_addr = new_socket_addr().await.unwrap();

        assert_ne!(socket_addr.port(), 0);
    }
}
