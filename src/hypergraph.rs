//! The cell/net adjacency model. Immutable once built by the netlist parser; every
//! other component only ever reads through the accessors below.

/// Stable index of a cell in `[0, Hypergraph::cell_count())`.
pub type CellId = usize;
/// Stable index of a net in `[0, Hypergraph::net_count())`.
pub type NetId = usize;

/// Which of the two partitions a cell currently occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// The other side. Used pervasively by the gain-update engine to name the
    /// "from" and "to" side of a move.
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Index into a `[T; 2]` keyed by side, with the convention A = 0, B = 1.
    pub fn idx(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// Read-only netlist hypergraph: cells (vertices) and nets (hyperedges).
pub struct Hypergraph {
    cell_names: Vec<String>,
    net_names: Vec<String>,
    /// For each cell, the ordered list of nets it participates in.
    cell_nets: Vec<Vec<NetId>>,
    /// For each net, the de-duplicated list of cells it contains.
    net_cells: Vec<Vec<CellId>>,
}

/// Incrementally builds a [`Hypergraph`] as the parser discovers cells and nets.
#[derive(Default)]
pub struct HypergraphBuilder {
    cell_names: Vec<String>,
    net_names: Vec<String>,
    cell_nets: Vec<Vec<NetId>>,
    net_cells: Vec<Vec<CellId>>,
    cell_ids: std::collections::HashMap<String, CellId>,
}

impl HypergraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of `name`, allocating a new cell the first time it is seen.
    pub fn cell_id(&mut self, name: &str) -> CellId {
        if let Some(&id) = self.cell_ids.get(name) {
            return id;
        }
        let id = self.cell_names.len();
        self.cell_names.push(name.to_owned());
        self.cell_nets.push(Vec::new());
        self.cell_ids.insert(name.to_owned(), id);
        id
    }

    /// Starts a new net with the given name, returning its id.
    pub fn add_net(&mut self, name: &str) -> NetId {
        let id = self.net_names.len();
        self.net_names.push(name.to_owned());
        self.net_cells.push(Vec::new());
        id
    }

    /// Adds `cell` as a pin of `net`, unless it is already the last cell added to
    /// that net (the parser's contract: only *consecutive* duplicates are
    /// collapsed, matching the reference grammar).
    pub fn add_pin(&mut self, net: NetId, cell: CellId) {
        let cells = &mut self.net_cells[net];
        if cells.last() == Some(&cell) {
            return;
        }
        cells.push(cell);
        self.cell_nets[cell].push(net);
    }

    /// The distinct cells added to `net` so far, after duplicate-collapsing.
    pub fn net_cells(&self, net: NetId) -> &[CellId] {
        &self.net_cells[net]
    }

    pub fn build(self) -> Hypergraph {
        Hypergraph {
            cell_names: self.cell_names,
            net_names: self.net_names,
            cell_nets: self.cell_nets,
            net_cells: self.net_cells,
        }
    }
}

impl Hypergraph {
    pub fn cell_count(&self) -> usize {
        self.cell_names.len()
    }

    pub fn net_count(&self) -> usize {
        self.net_names.len()
    }

    pub fn cell_name(&self, cell: CellId) -> &str {
        &self.cell_names[cell]
    }

    pub fn net_name(&self, net: NetId) -> &str {
        &self.net_names[net]
    }

    pub fn cell_nets(&self, cell: CellId) -> &[NetId] {
        &self.cell_nets[cell]
    }

    pub fn net_cells(&self, net: NetId) -> &[CellId] {
        &self.net_cells[net]
    }

    pub fn pin_count(&self, cell: CellId) -> usize {
        self.cell_nets[cell].len()
    }

    /// Max `pin_count` over all cells; gains are bounded by this value.
    pub fn max_pin_count(&self) -> u32 {
        self.cell_nets
            .iter()
            .map(|nets| nets.len() as u32)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn duplicate_cells_in_a_net_collapse() {
        let mut b = HypergraphBuilder::new();
        let c1 = b.cell_id("c1");
        let c2 = b.cell_id("c2");
        let n1 = b.add_net("n1");
        b.add_pin(n1, c1);
        b.add_pin(n1, c1);
        b.add_pin(n1, c2);
        let hg = b.build();

        assert_eq!(hg.net_cells(n1), &[c1, c2]);
        assert_eq!(hg.pin_count(c1), 1);
        assert_eq!(hg.pin_count(c2), 1);
    }

    #[test]
    fn non_consecutive_duplicates_are_not_collapsed() {
        // The parser's contract only collapses *consecutive* repeats; the
        // hypergraph itself just records whatever pins it is given.
        let mut b = HypergraphBuilder::new();
        let c1 = b.cell_id("c1");
        let c2 = b.cell_id("c2");
        let n1 = b.add_net("n1");
        b.add_pin(n1, c1);
        b.add_pin(n1, c2);
        b.add_pin(n1, c1);
        let hg = b.build();

        assert_eq!(hg.net_cells(n1), &[c1, c2, c1]);
        assert_eq!(hg.pin_count(c1), 2);
    }

    #[test]
    fn max_pin_count_tracks_the_busiest_cell() {
        let mut b = HypergraphBuilder::new();
        let c1 = b.cell_id("c1");
        let c2 = b.cell_id("c2");
        for i in 0..3 {
            let n = b.add_net(&format!("n{}", i));
            b.add_pin(n, c1);
        }
        let n_last = b.add_net("n_last");
        b.add_pin(n_last, c2);
        let hg = b.build();

        assert_eq!(hg.max_pin_count(), 3);
    }
}
