//!
//! Free Port is a small library for finding a TCP port that is not in use,
//! for handing to something else that needs to bind a server without port
//! collisions. For example a child process, or a test harness:
//!
//!  * call [`new_port()`] to get a free port number,
//!  * pass it to whatever needs to listen,
//!  * have that bind the port itself.
//!
//! ## Getting Started
//!
//! ```rust
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn ::std::error::Error>> {
//! #
//! use ::free_port::new_port;
//!
//! let port = new_port().await?;
//! let address = format!("127.0.0.1:{port}");
//!
//! // spawn the child process or server here, listening on `address`
//! #
//! # Ok(())
//! # }
//! ```
//!
//! If you want the address ready-made, [`new_socket_addr()`] returns a
//! `SocketAddr` on 127.0.0.1 with a free port filled in.
//!
//! ## How it works
//!
//! The port is found by binding a listener to `127.0.0.1:0`, which asks the
//! OS to pick any free ephemeral port, and then closing the listener again.
//! The port is always released before you receive it.
//!
//! This means the port is _probed_, not _reserved_. In theory another
//! process can claim the port in between, in practice this is rare as long
//! as you bind promptly. If the probe itself fails you receive a
//! [`BindError`] carrying the OS message, and can decide what to do.
//!

mod bind_error;
pub use self::bind_error::*;

mod new_port;
pub use self::new_port::*;

mod new_socket_addr;
pub use self::new_socket_addr::*;
