//! The character grid
//!
//! Lays the jumbled stream out in rows, finds letter clusters (candidate words) and
//! bracketed symbol clusters (bonuses), and tracks highlight state for front-ends.

mod builder;
mod cell;
mod cluster;
mod prefix;

pub use builder::{CellManager, Selection, SelectionKind};
pub use cell::{Bracket, CLOSE_BRACKETS, Cell, CellGrid, CellKind, OPEN_BRACKETS, PLACEHOLDER, Position};
pub use cluster::{Cluster, ClusterError, ClusterId, ClusterKind};
pub use prefix::{ADDRESS_RANGE, AddressColumn};
