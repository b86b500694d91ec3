//! Clusters: groups of cells selectable as a unit
//!
//! A letter cluster is a maximal run of letter cells (a candidate word). A symbol
//! cluster is a bracketed run on a single row that grants a bonus when selected.
//! Clusters are built open, validated by [`Cluster::close`], and frozen afterwards.

use super::cell::{Bracket, Cell, CellGrid, Position};
use std::fmt;
use thiserror::Error;

/// Stable handle of a recorded cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClusterId(pub(crate) usize);

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClusterKind {
    Letter,
    Symbol,
}

impl fmt::Display for ClusterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter => write!(f, "letter"),
            Self::Symbol => write!(f, "symbol"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClusterError {
    #[error("cluster {0} is closed")]
    Closed(ClusterId),

    #[error("cell {position} cannot join a {kind} cluster")]
    KindMismatch { position: Position, kind: ClusterKind },

    #[error("cell {0} already belongs to a letter cluster")]
    AlreadyClustered(Position),

    #[error("cluster is empty")]
    Empty,

    #[error("letter cluster needs at least 2 letters, got {0}")]
    TooShort(usize),

    #[error("symbol cluster must start with an open bracket and end with a close bracket")]
    NotBracketed,

    #[error("closing bracket does not match the opening one")]
    MismatchedBrackets,

    #[error("brackets inside the cluster are not properly nested")]
    Unbalanced,
}

/// An ordered group of cells
#[derive(Debug, Clone)]
pub struct Cluster {
    id: ClusterId,
    kind: ClusterKind,
    cells: Vec<Position>,
    active: bool,
    closed: bool,
    text: Option<String>,
}

impl Cluster {
    pub(crate) const fn new(id: ClusterId, kind: ClusterKind) -> Self {
        Self {
            id,
            kind,
            cells: Vec::new(),
            active: false,
            closed: false,
            text: None,
        }
    }

    #[must_use]
    pub const fn id(&self) -> ClusterId {
        self.id
    }

    #[must_use]
    pub const fn kind(&self) -> ClusterKind {
        self.kind
    }

    /// Member positions in column order
    #[must_use]
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<Position> {
        self.cells.first().copied()
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Concatenated content, cached when the cluster is closed
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Append a cell
    ///
    /// # Errors
    /// Fails if the cluster is closed, the cell's variant does not match, or a letter
    /// cell is already claimed by another cluster.
    pub fn add(&mut self, cell: &Cell) -> Result<(), ClusterError> {
        self.ensure_open()?;

        let position = cell.position();
        let fits = match self.kind {
            ClusterKind::Letter => cell.is_letter(),
            ClusterKind::Symbol => !cell.is_letter(),
        };
        if !fits {
            return Err(ClusterError::KindMismatch {
                position,
                kind: self.kind,
            });
        }
        if self.kind == ClusterKind::Letter && cell.cluster().is_some() {
            return Err(ClusterError::AlreadyClustered(position));
        }

        if !self.cells.contains(&position) {
            self.cells.push(position);
        }
        Ok(())
    }

    /// Drop a cell, returning whether it was a member
    ///
    /// # Errors
    /// Fails if the cluster is closed.
    pub fn remove(&mut self, position: Position) -> Result<bool, ClusterError> {
        self.ensure_open()?;
        let before = self.cells.len();
        self.cells.retain(|&p| p != position);
        Ok(self.cells.len() != before)
    }

    /// Validate the members and freeze the cluster, caching its text
    ///
    /// # Errors
    /// Returns the first rule the members violate; the cluster stays open in that case.
    pub fn close(&mut self, grid: &CellGrid) -> Result<(), ClusterError> {
        self.ensure_open()?;

        let members: Vec<&Cell> = self.cells.iter().filter_map(|&p| grid.get(p)).collect();
        match self.kind {
            ClusterKind::Letter => validate_letters(&members)?,
            ClusterKind::Symbol => validate_symbols(&members)?,
        }

        self.text = Some(members.iter().map(|c| c.content()).collect());
        self.closed = true;
        Ok(())
    }

    /// Empty the cluster, returning the positions it held
    ///
    /// With `bypass` a closed cluster can be cleared too; the cluster stays closed.
    pub(crate) fn clear(&mut self, bypass: bool) -> Result<Vec<Position>, ClusterError> {
        if self.closed && !bypass {
            return Err(ClusterError::Closed(self.id));
        }
        self.active = false;
        self.text = None;
        self.closed = true;
        Ok(std::mem::take(&mut self.cells))
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn ensure_open(&self) -> Result<(), ClusterError> {
        if self.closed {
            Err(ClusterError::Closed(self.id))
        } else {
            Ok(())
        }
    }
}

fn validate_letters(members: &[&Cell]) -> Result<(), ClusterError> {
    if members.len() < 2 {
        return Err(ClusterError::TooShort(members.len()));
    }
    Ok(())
}

fn validate_symbols(members: &[&Cell]) -> Result<(), ClusterError> {
    let (Some(first), Some(last)) = (members.first(), members.last()) else {
        return Err(ClusterError::Empty);
    };
    if members.len() < 2 {
        return Err(ClusterError::NotBracketed);
    }

    let (Some(Bracket::Open(open)), Some(Bracket::Close(close))) = (first.bracket(), last.bracket())
    else {
        return Err(ClusterError::NotBracketed);
    };
    if open != close {
        return Err(ClusterError::MismatchedBrackets);
    }

    // Interior brackets must nest, so "([)]" never forms a cluster
    let mut stack = Vec::new();
    for cell in &members[1..members.len() - 1] {
        match cell.bracket() {
            Some(Bracket::Open(kind)) => stack.push(kind),
            Some(Bracket::Close(kind)) => {
                if stack.pop() != Some(kind) {
                    return Err(ClusterError::Unbalanced);
                }
            }
            _ => {}
        }
    }
    if !stack.is_empty() {
        return Err(ClusterError::Unbalanced);
    }

    Ok(())
}
