//! Path carving
//!
//! Paths start in row 0 and climb one row at a time, moving at most one
//! column sideways per step. Two rules shape each step:
//!
//! - **No premature merge**: if the chosen node already has a parent
//!   whose lineage meets this path's lineage fewer than `min_ancestor_gap`
//!   rows back (looking at most `max_ancestor_gap` rows), the step is
//!   redrawn away from that side.
//! - **No crossing**: a step may not cross the rightmost edge of the left
//!   neighbour or the leftmost edge of the right neighbour.

use super::types::{DungeonMap, MapEdge};
use super::{MapConfig, MapError};
use crate::rng::StreamRng;

/// Carve `config.path_density` paths into an empty grid
pub(crate) fn create_paths(
    map: &mut DungeonMap,
    config: &MapConfig,
    rng: &mut StreamRng,
) -> Result<(), MapError> {
    let last_column = config.width as i32 - 1;
    let mut first_start = None;

    for path in 0..config.path_density {
        let mut start = rng.draw_int_inclusive(0, last_column);
        if path == 0 {
            first_start = Some(start);
        }
        if path == 1 {
            let mut attempts = 0;
            while Some(start) == first_start {
                attempts += 1;
                if attempts > config.retry_budget {
                    return Err(MapError::RetryBudgetExhausted {
                        stage: "distinct starting columns",
                        attempts,
                    });
                }
                start = rng.draw_int_inclusive(0, last_column);
            }
        }
        walk_path(map, config, start as usize, rng);
    }
    Ok(())
}

fn walk_path(map: &mut DungeonMap, config: &MapConfig, start: usize, rng: &mut StreamRng) {
    let height = map.height();
    let row_end = map.width() - 1;
    let (mut x, mut y) = (start, 0);

    loop {
        if y + 1 >= height {
            let boss = map.boss();
            map.node_mut(x, y).add_edge(boss);
            return;
        }

        let (min, max) = if x == 0 {
            (0, 1)
        } else if x == row_end {
            (-1, 0)
        } else {
            (-1, 1)
        };
        let next_y = y + 1;
        let mut next_x = offset(x, rng.draw_int_inclusive(min, max));

        // The parent list is read once; the candidate may move while it is walked.
        let mut candidate = next_x;
        let parents = map.node(candidate, next_y).parents.clone();
        for parent in parents {
            if parent == x {
                continue;
            }
            let Some(ancestor_y) = common_ancestor(map, parent, x, y, config.max_ancestor_gap)
            else {
                continue;
            };
            if next_y - ancestor_y >= config.min_ancestor_gap {
                continue;
            }

            let shifted = x as i32;
            next_x = if candidate > x {
                let moved = shifted + rng.draw_int_inclusive(-1, 0);
                if moved < 0 {
                    x
                } else {
                    moved as usize
                }
            } else if candidate == x {
                let moved = shifted + rng.draw_int_inclusive(-1, 1);
                if moved > row_end as i32 {
                    x - 1
                } else if moved < 0 {
                    x + 1
                } else {
                    moved as usize
                }
            } else {
                let moved = shifted + rng.draw_int_inclusive(0, 1);
                if moved > row_end as i32 {
                    x
                } else {
                    moved as usize
                }
            };
            candidate = next_x;
        }

        if x != 0 {
            if let Some(right_edge) = map.node(x - 1, y).max_edge() {
                if right_edge.dst_x > next_x {
                    next_x = right_edge.dst_x;
                }
            }
        }
        if x < row_end {
            if let Some(left_edge) = map.node(x + 1, y).min_edge() {
                if left_edge.dst_x < next_x {
                    next_x = left_edge.dst_x;
                }
            }
        }

        map.node_mut(x, y).add_edge(MapEdge {
            dst_x: next_x,
            dst_y: next_y,
        });
        map.node_mut(next_x, next_y).parents.push(x);

        x = next_x;
        y = next_y;
    }
}

/// Row of the nearest shared ancestor of two nodes in row `y`
///
/// Walks down at most `max_depth` rows, following the rightmost parent on
/// the left side and the leftmost parent on the right side. Which node
/// counts as "left" is decided by comparing the first node's column with
/// the row index; generated maps depend on that exact comparison.
fn common_ancestor(
    map: &DungeonMap,
    first_x: usize,
    second_x: usize,
    y: usize,
    max_depth: usize,
) -> Option<usize> {
    let (mut left, mut right) = if first_x < y {
        (first_x, second_x)
    } else {
        (second_x, first_x)
    };

    let lowest = y as i64 - max_depth as i64;
    let mut current_y = y as i64;
    while current_y >= 0 && current_y >= lowest {
        let row = current_y as usize;
        let left_parents = &map.node(left, row).parents;
        let right_parents = &map.node(right, row).parents;
        let (Some(&left_max), Some(&right_min)) = (
            max_first(left_parents),
            min_first(right_parents),
        ) else {
            return None;
        };
        left = left_max;
        right = right_min;
        if left == right {
            return Some(row - 1);
        }
        current_y -= 1;
    }
    None
}

fn max_first(columns: &[usize]) -> Option<&usize> {
    let mut best = columns.first()?;
    for column in columns {
        if column > best {
            best = column;
        }
    }
    Some(best)
}

fn min_first(columns: &[usize]) -> Option<&usize> {
    let mut best = columns.first()?;
    for column in columns {
        if column < best {
            best = column;
        }
    }
    Some(best)
}

fn offset(x: usize, delta: i32) -> usize {
    (x as i32 + delta) as usize
}

/// Drop row-0 edges into a node another row-0 node already enters
///
/// Parent links on the destination are left as they are.
pub(crate) fn filter_redundant_entrance_edges(map: &mut DungeonMap) {
    if map.height() == 0 {
        return;
    }
    let mut seen: Vec<MapEdge> = Vec::new();
    for x in 0..map.width() {
        let node = map.node_mut(x, 0);
        let mut redundant: Vec<MapEdge> = Vec::new();
        for edge in &node.edges {
            if seen.contains(edge) {
                redundant.push(*edge);
            }
            seen.push(*edge);
        }
        node.edges.retain(|edge| !redundant.contains(edge));
    }
}
