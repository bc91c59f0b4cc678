//! Dungeon map data model
//!
//! A map is a `height x width` grid. Row 0 is the entrance, row
//! `height - 1` is the last row before the boss. Edges only go from row
//! `y` to row `y + 1`, except the top row's edges which all lead to the
//! boss node at `(boss_x, height)`.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Room kinds a node can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Monster,
    Event,
    Elite,
    Rest,
    Shop,
    Treasure,
}

impl RoomType {
    pub fn symbol(self) -> char {
        match self {
            RoomType::Monster => 'M',
            RoomType::Event => '?',
            RoomType::Elite => 'E',
            RoomType::Rest => 'R',
            RoomType::Shop => '$',
            RoomType::Treasure => 'T',
        }
    }

    fn code(self) -> u8 {
        match self {
            RoomType::Monster => 1,
            RoomType::Event => 2,
            RoomType::Elite => 3,
            RoomType::Rest => 4,
            RoomType::Shop => 5,
            RoomType::Treasure => 6,
        }
    }
}

/// Directed edge, ordered by destination column then row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MapEdge {
    pub dst_x: usize,
    pub dst_y: usize,
}

/// One grid cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapNode {
    pub x: usize,
    pub y: usize,
    /// Outgoing edges, sorted and unique
    pub edges: Vec<MapEdge>,
    /// Columns in row `y - 1` that walked into this node, one entry per
    /// walk (repeats kept)
    pub parents: Vec<usize>,
    pub room: Option<RoomType>,
    /// Elite holding the emerald key
    pub emerald_key: bool,
}

impl MapNode {
    pub fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            edges: Vec::new(),
            parents: Vec::new(),
            room: None,
            emerald_key: false,
        }
    }

    pub fn has_edges(&self) -> bool {
        !self.edges.is_empty()
    }

    /// Add an edge unless one to the same destination exists
    pub fn add_edge(&mut self, edge: MapEdge) {
        if let Err(position) = self.edges.binary_search(&edge) {
            self.edges.insert(position, edge);
        }
    }

    /// Edge with the smallest destination column
    pub fn min_edge(&self) -> Option<&MapEdge> {
        self.edges.first()
    }

    /// Edge with the largest destination column
    pub fn max_edge(&self) -> Option<&MapEdge> {
        self.edges.last()
    }
}

/// Generated act map
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DungeonMap {
    height: usize,
    width: usize,
    boss_x: usize,
    rows: Vec<Vec<MapNode>>,
}

impl DungeonMap {
    /// Empty grid
    pub fn new(height: usize, width: usize, boss_x: usize) -> Self {
        let rows = (0..height)
            .map(|y| (0..width).map(|x| MapNode::new(x, y)).collect())
            .collect();
        Self {
            height,
            width,
            boss_x,
            rows,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Boss node position (one row above the top row)
    pub fn boss(&self) -> MapEdge {
        MapEdge {
            dst_x: self.boss_x,
            dst_y: self.height,
        }
    }

    pub fn rows(&self) -> &[Vec<MapNode>] {
        &self.rows
    }

    pub fn row(&self, y: usize) -> &[MapNode] {
        &self.rows[y]
    }

    pub fn node(&self, x: usize, y: usize) -> &MapNode {
        &self.rows[y][x]
    }

    pub fn node_mut(&mut self, x: usize, y: usize) -> &mut MapNode {
        &mut self.rows[y][x]
    }

    pub fn nodes(&self) -> impl Iterator<Item = &MapNode> {
        self.rows.iter().flatten()
    }

    /// Nodes with at least one outgoing edge
    pub fn connected_node_count(&self) -> usize {
        self.nodes().filter(|n| n.has_edges()).count()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes().map(|n| n.edges.len()).sum()
    }

    /// Nodes reachable from an entrance, row by row
    pub fn reachable(&self) -> Vec<Vec<bool>> {
        let mut reached = vec![vec![false; self.width]; self.height];
        for node in self.rows.first().into_iter().flatten() {
            reached[0][node.x] = node.has_edges();
        }
        for y in 0..self.height.saturating_sub(1) {
            for x in 0..self.width {
                if !reached[y][x] {
                    continue;
                }
                for edge in &self.rows[y][x].edges {
                    if edge.dst_y < self.height {
                        reached[edge.dst_y][edge.dst_x] = true;
                    }
                }
            }
        }
        reached
    }

    /// Room types in row-major order for connected nodes (`None` if unset)
    pub fn room_layout(&self) -> Vec<Vec<Option<RoomType>>> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .filter(|n| n.has_edges())
                    .map(|n| n.room)
                    .collect()
            })
            .collect()
    }

    /// Deterministic byte encoding of the whole map
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        push_usize(&mut bytes, self.height);
        push_usize(&mut bytes, self.width);
        push_usize(&mut bytes, self.boss_x);
        for node in self.nodes() {
            push_usize(&mut bytes, node.x);
            push_usize(&mut bytes, node.y);
            bytes.push(node.room.map_or(0, RoomType::code));
            bytes.push(u8::from(node.emerald_key));
            push_usize(&mut bytes, node.edges.len());
            for edge in &node.edges {
                push_usize(&mut bytes, edge.dst_x);
                push_usize(&mut bytes, edge.dst_y);
            }
            push_usize(&mut bytes, node.parents.len());
            for &parent in &node.parents {
                push_usize(&mut bytes, parent);
            }
        }
        bytes
    }

    /// SHA-256 of `canonical_bytes()`, lowercase hex
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.canonical_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// ASCII drawing, top row first
    ///
    /// Each column is three characters wide. Edges are drawn on the line
    /// above their source node: `\` up-left, `|` straight, `/` up-right.
    /// The emerald elite is drawn as `!`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for y in (0..self.height).rev() {
            if y + 1 < self.height {
                let mut line = vec![' '; self.width * 3];
                for node in &self.rows[y] {
                    for edge in &node.edges {
                        let column = if edge.dst_x < node.x {
                            node.x * 3
                        } else if edge.dst_x == node.x {
                            node.x * 3 + 1
                        } else {
                            node.x * 3 + 2
                        };
                        line[column] = match edge.dst_x.cmp(&node.x) {
                            std::cmp::Ordering::Less => '\\',
                            std::cmp::Ordering::Equal => '|',
                            std::cmp::Ordering::Greater => '/',
                        };
                    }
                }
                out.push_str(&format!("    {}\n", line.iter().collect::<String>().trim_end()));
            }

            let mut line = String::with_capacity(self.width * 3);
            for node in &self.rows[y] {
                let symbol = match node.room {
                    _ if !node.has_edges() => ' ',
                    Some(RoomType::Elite) if node.emerald_key => '!',
                    Some(room) => room.symbol(),
                    None => '*',
                };
                line.push(' ');
                line.push(symbol);
                line.push(' ');
            }
            out.push_str(&format!("{:>2}  {}\n", y, line.trim_end()));
        }
        out
    }
}

fn push_usize(bytes: &mut Vec<u8>, value: usize) {
    bytes.extend_from_slice(&(value as u64).to_le_bytes());
}
