//! The cell manager: lays out the character stream and owns every cluster
//!
//! Construction runs letter clustering followed by symbol clustering. Clusters live in
//! a registry indexed by [`ClusterId`]; cells only carry the handle.

use super::cell::{Bracket, Cell, CellGrid, PLACEHOLDER, Position};
use super::cluster::{Cluster, ClusterId, ClusterKind};
use crate::core::Word;
use crate::error::GameError;
use std::fmt;

/// What a selection at a position resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    Letter,
    Symbol,
    Cell,
}

/// Text picked by the player, and the cluster it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub kind: SelectionKind,
    pub text: String,
    pub cluster: Option<ClusterId>,
}

/// Grid of cells plus the letter and symbol clusters found in it
#[derive(Debug, Clone)]
pub struct CellManager {
    grid: CellGrid,
    panels: usize,
    registry: Vec<Option<Cluster>>,
    letter_clusters: Vec<ClusterId>,
    symbol_clusters: Vec<ClusterId>,
    hovered: Option<Position>,
}

impl CellManager {
    /// Lay out `characters` on a `rows` x `cols` grid split into `panels` and cluster it
    ///
    /// # Errors
    /// - `GameError::InvalidDimensions` if any dimension is zero or `rows * cols` overflows
    /// - `GameError::Divisibility` if `rows` does not split evenly into `panels`
    /// - `GameError::GridSize` if the stream is not exactly `rows * cols` long
    /// - `GameError::InvalidCharacter` for characters outside printable ASCII
    ///
    /// # Examples
    /// ```
    /// use wordhack::grid::CellManager;
    ///
    /// let manager = CellManager::new(1, 6, 1, "A#BC#D").unwrap();
    /// let words: Vec<&str> = manager.letter_clusters().filter_map(|c| c.text()).collect();
    /// assert_eq!(words, ["BC"]);
    /// ```
    pub fn new(rows: usize, cols: usize, panels: usize, characters: &str) -> Result<Self, GameError> {
        if rows == 0 || cols == 0 || panels == 0 || rows.checked_mul(cols).is_none() {
            return Err(GameError::InvalidDimensions { rows, cols, panels });
        }
        if rows % panels != 0 {
            return Err(GameError::Divisibility { rows, panels });
        }

        let characters: Vec<char> = characters.chars().collect();
        let grid = CellGrid::new(rows, cols, &characters)?;

        let mut manager = Self {
            grid,
            panels,
            registry: Vec::new(),
            letter_clusters: Vec::new(),
            symbol_clusters: Vec::new(),
            hovered: None,
        };
        manager.cluster_letters();
        manager.cluster_symbols();

        log::debug!(
            "Built {rows}x{cols} grid: {} letter clusters, {} symbol clusters",
            manager.letter_clusters.len(),
            manager.symbol_clusters.len()
        );
        Ok(manager)
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.grid.rows()
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.grid.cols()
    }

    #[must_use]
    pub const fn panels(&self) -> usize {
        self.panels
    }

    #[must_use]
    pub const fn rows_per_panel(&self) -> usize {
        self.grid.rows() / self.panels
    }

    #[must_use]
    pub const fn grid(&self) -> &CellGrid {
        &self.grid
    }

    #[must_use]
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.grid.get(position)
    }

    /// Cell before `position` in row-major order
    #[must_use]
    pub fn previous(&self, position: Position) -> Option<Position> {
        self.cell(position)?;
        match (position.row, position.col) {
            (0, 0) => None,
            (row, 0) => Some(Position::new(row - 1, self.cols() - 1)),
            (row, col) => Some(Position::new(row, col - 1)),
        }
    }

    /// Cell after `position` in row-major order
    #[must_use]
    pub fn next(&self, position: Position) -> Option<Position> {
        self.cell(position)?;
        let next = if position.col + 1 < self.cols() {
            Position::new(position.row, position.col + 1)
        } else {
            Position::new(position.row + 1, 0)
        };
        self.cell(next).map(Cell::position)
    }

    #[must_use]
    pub fn cluster(&self, id: ClusterId) -> Option<&Cluster> {
        self.registry.get(id.0).and_then(Option::as_ref)
    }

    /// Recorded letter clusters in scan order
    pub fn letter_clusters(&self) -> impl Iterator<Item = &Cluster> {
        self.letter_clusters.iter().filter_map(|&id| self.cluster(id))
    }

    /// Recorded symbol clusters in scan order
    pub fn symbol_clusters(&self) -> impl Iterator<Item = &Cluster> {
        self.symbol_clusters.iter().filter_map(|&id| self.cluster(id))
    }

    /// The cluster a click on `position` acts on
    ///
    /// A letter cell resolves to its cluster. A symbol cell only resolves to the
    /// symbol cluster that starts at it.
    #[must_use]
    pub fn main_cluster(&self, position: Position) -> Option<ClusterId> {
        let cell = self.cell(position)?;
        let id = cell.cluster()?;
        if cell.is_letter() {
            return Some(id);
        }
        (self.cluster(id)?.first() == Some(position)).then_some(id)
    }

    /// Resolve what clicking `position` would select
    #[must_use]
    pub fn selection_at(&self, position: Position) -> Option<Selection> {
        let cell = self.cell(position)?;
        if let Some(id) = self.main_cluster(position)
            && let Some(selection) = self.selection_of(id)
        {
            return Some(selection);
        }
        Some(Selection {
            kind: SelectionKind::Cell,
            text: cell.content().to_string(),
            cluster: None,
        })
    }

    /// Selection for a recorded cluster
    #[must_use]
    pub fn selection_of(&self, id: ClusterId) -> Option<Selection> {
        let cluster = self.cluster(id)?;
        let kind = match cluster.kind() {
            ClusterKind::Letter => SelectionKind::Letter,
            ClusterKind::Symbol => SelectionKind::Symbol,
        };
        Some(Selection {
            kind,
            text: cluster.text()?.to_string(),
            cluster: Some(id),
        })
    }

    /// Currently hovered position
    #[must_use]
    pub const fn hovered(&self) -> Option<Position> {
        self.hovered
    }

    /// Move the highlight to `position`
    ///
    /// # Errors
    /// Returns `GameError::OutOfBounds` if `position` is outside the grid.
    pub fn hover(&mut self, position: Position) -> Result<(), GameError> {
        if self.cell(position).is_none() {
            return Err(out_of_bounds(position));
        }
        if self.hovered == Some(position) {
            return Ok(());
        }

        if let Some(previous) = self.hovered {
            let same_word = self.cell(position).is_some_and(Cell::is_letter)
                && self.main_cluster(position).is_some()
                && self.main_cluster(previous) == self.main_cluster(position);
            if same_word {
                self.hovered = Some(position);
                return Ok(());
            }
            self.highlight(previous, false);
        }

        self.highlight(position, true);
        self.hovered = Some(position);
        Ok(())
    }

    /// Drop the highlight entirely
    pub fn clear_hover(&mut self) {
        if let Some(previous) = self.hovered.take() {
            self.highlight(previous, false);
        }
    }

    fn highlight(&mut self, position: Position, active: bool) {
        if let Some(id) = self.main_cluster(position)
            && let Some(Some(cluster)) = self.registry.get_mut(id.0)
        {
            cluster.set_active(active);
            let members = cluster.cells().to_vec();
            for member in members {
                if let Some(cell) = self.grid.get_mut(member) {
                    cell.set_active(active);
                }
            }
        }
        if let Some(cell) = self.grid.get_mut(position) {
            cell.set_active(active);
        }
    }

    /// Force-clear a recorded cluster and remove it from the registry
    ///
    /// Letter cells are overwritten with the placeholder; symbol cells keep their
    /// characters. Returns the cluster's text.
    ///
    /// # Errors
    /// Returns `GameError::UnknownCluster` if `id` is not recorded.
    pub fn dissolve(&mut self, id: ClusterId) -> Result<String, GameError> {
        let mut cluster = self
            .registry
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or(GameError::UnknownCluster(id))?;

        let text = cluster.text().unwrap_or_default().to_string();
        let kind = cluster.kind();
        for position in cluster.clear(true)? {
            if let Some(cell) = self.grid.get_mut(position) {
                cell.set_active(false);
                cell.set_cluster(None);
                if kind == ClusterKind::Letter {
                    cell.set_content(PLACEHOLDER)?;
                }
            }
        }

        match kind {
            ClusterKind::Letter => self.letter_clusters.retain(|&c| c != id),
            ClusterKind::Symbol => self.symbol_clusters.retain(|&c| c != id),
        }
        if let Some(hovered) = self.hovered {
            self.highlight(hovered, true);
        }

        log::debug!("Dissolved {kind} cluster {id} ({text})");
        Ok(text)
    }

    /// Remove the first letter cluster that is not the password
    ///
    /// Returns the removed word, or `None` when fewer than two letter clusters remain
    /// or every one of them is the password.
    pub fn remove_dud(&mut self, password: &Word) -> Option<String> {
        if self.letter_clusters.len() < 2 {
            return None;
        }

        let id = self.letter_clusters.iter().copied().find(|&id| {
            self.cluster(id)
                .and_then(Cluster::text)
                .is_some_and(|text| !password.matches(text))
        })?;

        match self.dissolve(id) {
            Ok(text) => Some(text),
            Err(err) => {
                log::warn!("Failed to remove dud {id}: {err}");
                None
            }
        }
    }

    fn next_id(&self) -> ClusterId {
        ClusterId(self.registry.len())
    }

    fn cluster_letters(&mut self) {
        let mut current = Cluster::new(self.next_id(), ClusterKind::Letter);

        for index in 0..self.grid.len() {
            let position = Position::new(index / self.cols(), index % self.cols());
            let Some(cell) = self.grid.get(position) else {
                continue;
            };

            if cell.is_letter() {
                if let Err(err) = current.add(cell) {
                    log::trace!("Skipped letter cell {position}: {err}");
                }
            } else if !current.is_empty() {
                self.record(current);
                current = Cluster::new(self.next_id(), ClusterKind::Letter);
            }
        }

        if !current.is_empty() {
            self.record(current);
        }
    }

    fn cluster_symbols(&mut self) {
        for row in 0..self.rows() {
            let mut col = 0;
            while col < self.cols() {
                let opener = Position::new(row, col);
                if let Some(Bracket::Open(kind)) = self.cell(opener).and_then(Cell::bracket)
                    && let Some(close_col) = self.matching_close(opener, kind)
                {
                    let mut candidate = Cluster::new(self.next_id(), ClusterKind::Symbol);
                    let added = (col..=close_col).all(|c| {
                        self.grid
                            .get(Position::new(row, c))
                            .is_some_and(|cell| candidate.add(cell).is_ok())
                    });
                    if added && self.record(candidate) {
                        col = close_col + 1;
                        continue;
                    }
                }
                col += 1;
            }
        }
    }

    /// Column of the nearest closer of the same type, searching until a letter
    fn matching_close(&self, opener: Position, kind: usize) -> Option<usize> {
        for col in opener.col + 1..self.cols() {
            let cell = self.cell(Position::new(opener.row, col))?;
            match cell.bracket() {
                None => return None,
                Some(Bracket::Close(close)) if close == kind => return Some(col),
                Some(_) => {}
            }
        }
        None
    }

    /// Close a candidate and register it, returning whether it survived
    fn record(&mut self, mut cluster: Cluster) -> bool {
        if let Err(err) = cluster.close(&self.grid) {
            log::trace!("Discarded {} cluster candidate: {err}", cluster.kind());
            return false;
        }

        let id = cluster.id();
        for &position in cluster.cells() {
            if let Some(cell) = self.grid.get_mut(position) {
                cell.set_cluster(Some(id));
            }
        }

        match cluster.kind() {
            ClusterKind::Letter => self.letter_clusters.push(id),
            ClusterKind::Symbol => self.symbol_clusters.push(id),
        }
        self.registry.push(Some(cluster));
        true
    }
}

fn out_of_bounds(position: Position) -> GameError {
    GameError::OutOfBounds {
        row: position.row,
        col: position.col,
    }
}

impl fmt::Display for CellManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_row(text: &str) -> CellManager {
        CellManager::new(1, text.chars().count(), 1, text).unwrap()
    }

    fn letter_texts(manager: &CellManager) -> Vec<&str> {
        manager.letter_clusters().filter_map(Cluster::text).collect()
    }

    fn symbol_texts(manager: &CellManager) -> Vec<&str> {
        manager.symbol_clusters().filter_map(Cluster::text).collect()
    }

    #[test]
    fn dimension_guards() {
        assert_eq!(
            CellManager::new(0, 4, 1, "").unwrap_err(),
            GameError::InvalidDimensions {
                rows: 0,
                cols: 4,
                panels: 1
            }
        );
        assert_eq!(
            CellManager::new(3, 2, 2, "######").unwrap_err(),
            GameError::Divisibility { rows: 3, panels: 2 }
        );
        assert!(matches!(
            CellManager::new(usize::MAX, 2, 1, "##").unwrap_err(),
            GameError::InvalidDimensions { .. }
        ));
        assert!(matches!(
            CellManager::new(2, 2, 1, "###").unwrap_err(),
            GameError::GridSize { .. }
        ));
        assert!(matches!(
            CellManager::new(1, 3, 1, "A B").unwrap_err(),
            GameError::InvalidCharacter { ch: ' ', row: 0, col: 1, .. }
        ));
    }

    #[test]
    fn single_letters_are_not_clusters() {
        let manager = one_row("A#BC#D");
        assert_eq!(letter_texts(&manager), ["BC"]);
        assert_eq!(manager.cell(Position::new(0, 0)).unwrap().cluster(), None);
    }

    #[test]
    fn letter_runs_wrap_rows() {
        let manager = CellManager::new(2, 4, 1, "##BAKE##").unwrap();
        assert_eq!(letter_texts(&manager), ["BAKE"]);
    }

    #[test]
    fn trailing_letter_run_is_recorded() {
        let manager = one_row("#CAKE#WAKE");
        assert_eq!(letter_texts(&manager), ["CAKE", "WAKE"]);
    }

    #[test]
    fn letters_are_uppercased() {
        let manager = one_row("#bake#");
        assert_eq!(letter_texts(&manager), ["BAKE"]);
    }

    #[test]
    fn adjacent_pairs_both_cluster() {
        assert_eq!(symbol_texts(&one_row("()[]")), ["()", "[]"]);
    }

    #[test]
    fn crossed_pairs_do_not_cluster() {
        assert!(symbol_texts(&one_row("([)]")).is_empty());
    }

    #[test]
    fn letters_stop_bracket_search() {
        assert!(symbol_texts(&one_row("(AB)")).is_empty());
    }

    #[test]
    fn nested_pairs_take_outermost() {
        assert_eq!(symbol_texts(&one_row("{#()#}")), ["{#()#}"]);
    }

    #[test]
    fn unmatched_opener_retried_from_next_column() {
        assert_eq!(symbol_texts(&one_row("(()")), ["()"]);
        assert_eq!(symbol_texts(&one_row("<#<#>")), ["<#>"]);
    }

    #[test]
    fn unmatched_interior_bracket_rejects_pair() {
        // The nearest closer alone is not enough: brackets inside must nest too
        assert!(symbol_texts(&one_row("(<)")).is_empty());
        assert!(symbol_texts(&one_row("(#[#)")).is_empty());
        assert!(symbol_texts(&one_row("([)]")).is_empty());

        assert_eq!(symbol_texts(&one_row("(<>)")), ["(<>)"]);
        assert_eq!(symbol_texts(&one_row("(#[#])")), ["(#[#])"]);
    }

    #[test]
    fn symbol_clusters_stay_on_one_row() {
        let manager = CellManager::new(2, 3, 1, "##(##)").unwrap();
        assert!(symbol_texts(&manager).is_empty());
    }

    #[test]
    fn main_cluster_of_symbols_is_its_opener_only() {
        let manager = one_row("#(#)#");
        let opener = manager.main_cluster(Position::new(0, 1));
        assert!(opener.is_some());
        assert_eq!(manager.main_cluster(Position::new(0, 2)), None);
        assert_eq!(manager.main_cluster(Position::new(0, 3)), None);

        let selection = manager.selection_at(Position::new(0, 3)).unwrap();
        assert_eq!(selection.kind, SelectionKind::Cell);
        assert_eq!(selection.text, ")");
    }

    #[test]
    fn selection_of_letter_resolves_word() {
        let manager = one_row("#BAKE#");
        let selection = manager.selection_at(Position::new(0, 3)).unwrap();
        assert_eq!(selection.kind, SelectionKind::Letter);
        assert_eq!(selection.text, "BAKE");
        assert!(manager.selection_at(Position::new(0, 9)).is_none());
    }

    #[test]
    fn navigation_walks_row_major() {
        let manager = CellManager::new(2, 2, 1, "AB#C").unwrap();
        let origin = Position::new(0, 0);
        assert_eq!(manager.previous(origin), None);
        assert_eq!(manager.next(Position::new(0, 1)), Some(Position::new(1, 0)));
        assert_eq!(manager.previous(Position::new(1, 0)), Some(Position::new(0, 1)));
        assert_eq!(manager.next(Position::new(1, 1)), None);
    }

    #[test]
    fn hover_highlights_whole_word() {
        let mut manager = one_row("#BAKE#()");
        manager.hover(Position::new(0, 2)).unwrap();
        assert!((1..5).all(|c| manager.cell(Position::new(0, c)).unwrap().is_active()));

        // Moving inside the same word keeps the highlight
        manager.hover(Position::new(0, 4)).unwrap();
        assert!(manager.cell(Position::new(0, 1)).unwrap().is_active());

        manager.hover(Position::new(0, 6)).unwrap();
        assert!(!manager.cell(Position::new(0, 1)).unwrap().is_active());
        assert!(manager.cell(Position::new(0, 7)).unwrap().is_active());

        manager.clear_hover();
        assert!(manager.grid().iter().all(|c| !c.is_active()));
        assert!(manager.hover(Position::new(3, 0)).is_err());
    }

    #[test]
    fn dissolve_letter_floods_placeholder() {
        let mut manager = one_row("#BAKE#CAKE#");
        let id = manager.main_cluster(Position::new(0, 1)).unwrap();

        assert_eq!(manager.dissolve(id).unwrap(), "BAKE");
        assert_eq!(manager.to_string(), "#....#CAKE#\n");
        assert_eq!(letter_texts(&manager), ["CAKE"]);
        assert_eq!(manager.main_cluster(Position::new(0, 2)), None);
        assert_eq!(
            manager.dissolve(id).unwrap_err(),
            GameError::UnknownCluster(id)
        );
    }

    #[test]
    fn dissolve_symbol_keeps_characters() {
        let mut manager = one_row("#[$]#");
        let id = manager.main_cluster(Position::new(0, 1)).unwrap();
        assert_eq!(manager.dissolve(id).unwrap(), "[$]");
        assert_eq!(manager.to_string(), "#[$]#\n");
        assert!(symbol_texts(&manager).is_empty());
    }

    #[test]
    fn dud_removal_skips_password_and_exhausts() {
        let mut manager = one_row("#BAKE#CAKE#WAKE#");
        let password = Word::new("bake").unwrap();

        assert_eq!(manager.remove_dud(&password).as_deref(), Some("CAKE"));
        assert_eq!(manager.remove_dud(&password).as_deref(), Some("WAKE"));
        assert_eq!(manager.remove_dud(&password), None);
        assert_eq!(letter_texts(&manager), ["BAKE"]);
    }

    #[test]
    fn dud_removal_needs_two_words() {
        let mut manager = one_row("#CAKE#");
        let password = Word::new("BAKE").unwrap();
        assert_eq!(manager.remove_dud(&password), None);
    }

    #[test]
    fn panel_rows() {
        let manager = CellManager::new(4, 2, 2, "########").unwrap();
        assert_eq!(manager.rows_per_panel(), 2);
        assert_eq!(manager.panels(), 2);
    }
}
