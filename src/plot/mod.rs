//! The per-film plot controller and the cooperative loop that animates it.

/// Plot controller: collections, frame handler, drawing order.
pub mod controller;
/// Settle loops over a controller.
pub mod driver;
/// Frame handles, hosts, and the pending-frame slot.
pub mod scheduler;
