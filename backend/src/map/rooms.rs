//! Room assignment
//!
//! Fixed rows are filled first (entrance monsters, mid-act treasure,
//! pre-boss rest). The remaining connected nodes receive rooms from a
//! shuffled pool, visiting nodes row by row and taking the first pool
//! entry that the row and adjacency rules allow.

use super::types::{DungeonMap, RoomType};
use super::{MapConfig, RoomChances};
use crate::rng::StreamRng;
use crate::shuffle::shuffle_seeded;

/// Highest row where rest sites and elites are still forbidden
const EARLY_ROW_LIMIT: usize = 4;

/// Outcome counters of one assignment pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct AssignmentStats {
    pub pool_size: usize,
    pub surplus_rooms: usize,
    pub fallback_rooms: usize,
}

/// Pool of non-monster rooms for `available` nodes
///
/// Order: shops, rest sites, treasure, elites, events.
pub(crate) fn room_pool(available: usize, chances: &RoomChances, ascension: u8) -> Vec<RoomType> {
    let scaled = |chance: f32| available as f32 * chance;
    // Multiplied left to right in f32; regrouping changes the rounding.
    let elites = if ascension >= 1 {
        scaled(chances.elite) * chances.elite_ascension_multiplier
    } else {
        scaled(chances.elite)
    };

    let mut pool = Vec::new();
    pool.extend(std::iter::repeat(RoomType::Shop).take(rounded(scaled(chances.shop))));
    pool.extend(std::iter::repeat(RoomType::Rest).take(rounded(scaled(chances.rest))));
    pool.extend(std::iter::repeat(RoomType::Treasure).take(rounded(scaled(chances.treasure))));
    pool.extend(std::iter::repeat(RoomType::Elite).take(rounded(elites)));
    pool.extend(std::iter::repeat(RoomType::Event).take(rounded(scaled(chances.event))));
    pool
}

/// Round half up
fn rounded(value: f32) -> usize {
    (value + 0.5).floor().max(0.0) as usize
}

/// Assign a room to every connected node
pub(crate) fn assign_rooms(
    map: &mut DungeonMap,
    config: &MapConfig,
    rng: &mut StreamRng,
) -> AssignmentStats {
    let height = map.height();
    let available = map
        .nodes()
        .filter(|n| n.has_edges() && n.y + 2 != height)
        .count();
    let mut pool = room_pool(available, &config.room_chances, config.ascension);

    assign_row(map, height - 1, RoomType::Rest);
    assign_row(map, 0, RoomType::Monster);
    if config.treasure_row < height {
        assign_row(map, config.treasure_row, RoomType::Treasure);
    }

    let open = unassigned_count(map);
    while pool.len() < open {
        pool.push(RoomType::Monster);
    }
    let stats = AssignmentStats {
        pool_size: pool.len(),
        surplus_rooms: pool.len() - open,
        fallback_rooms: 0,
    };

    shuffle_seeded(&mut pool, rng);

    for y in 0..height {
        for x in 0..map.width() {
            let node = map.node(x, y);
            if !node.has_edges() || node.room.is_some() {
                continue;
            }
            if let Some(index) = next_room_index(map, x, y, &pool) {
                let room = pool.remove(index);
                map.node_mut(x, y).room = Some(room);
            }
        }
    }

    let mut fallback_rooms = 0;
    for y in 0..height {
        for x in 0..map.width() {
            let node = map.node_mut(x, y);
            if node.has_edges() && node.room.is_none() {
                node.room = Some(RoomType::Monster);
                fallback_rooms += 1;
            }
        }
    }

    AssignmentStats {
        fallback_rooms,
        ..stats
    }
}

/// Mark one elite node as holding the emerald key
///
/// Draws once when at least one elite exists; otherwise draws nothing.
pub(crate) fn place_emerald_key(map: &mut DungeonMap, rng: &mut StreamRng) {
    let elites: Vec<(usize, usize)> = map
        .nodes()
        .filter(|n| n.room == Some(RoomType::Elite))
        .map(|n| (n.x, n.y))
        .collect();
    if elites.is_empty() {
        return;
    }
    let chosen = rng.draw_int_inclusive(0, elites.len() as i32 - 1) as usize;
    let (x, y) = elites[chosen];
    map.node_mut(x, y).emerald_key = true;
}

fn assign_row(map: &mut DungeonMap, y: usize, room: RoomType) {
    for x in 0..map.width() {
        let node = map.node_mut(x, y);
        if node.has_edges() && node.room.is_none() {
            node.room = Some(room);
        }
    }
}

fn unassigned_count(map: &DungeonMap) -> usize {
    map.nodes()
        .filter(|n| n.has_edges() && n.room.is_none())
        .count()
}

fn next_room_index(map: &DungeonMap, x: usize, y: usize, pool: &[RoomType]) -> Option<usize> {
    let node = map.node(x, y);
    let parent_rooms: Vec<Option<RoomType>> = if y == 0 {
        Vec::new()
    } else {
        node.parents
            .iter()
            .map(|&parent| map.node(parent, y - 1).room)
            .collect()
    };
    let sibling_rooms: Vec<Option<RoomType>> = if y == 0 {
        Vec::new()
    } else {
        node.parents
            .iter()
            .flat_map(|&parent| map.node(parent, y - 1).edges.iter())
            .filter(|edge| edge.dst_y < map.height() && (edge.dst_x, edge.dst_y) != (x, y))
            .map(|edge| map.node(edge.dst_x, edge.dst_y).room)
            .collect()
    };

    for (index, &room) in pool.iter().enumerate() {
        if !assignable_to_row(y, map.height(), room) {
            continue;
        }
        if !parent_matches(&parent_rooms, room) && !sibling_matches(&sibling_rooms, room) {
            return Some(index);
        }
        if y == 0 {
            return Some(index);
        }
    }
    None
}

fn assignable_to_row(y: usize, height: usize, room: RoomType) -> bool {
    if y <= EARLY_ROW_LIMIT && matches!(room, RoomType::Rest | RoomType::Elite) {
        return false;
    }
    if y + 2 >= height && room == RoomType::Rest {
        return false;
    }
    true
}

/// A parent already holds the same special room
fn parent_matches(parent_rooms: &[Option<RoomType>], room: RoomType) -> bool {
    matches!(
        room,
        RoomType::Rest | RoomType::Treasure | RoomType::Shop | RoomType::Elite
    ) && parent_rooms.contains(&Some(room))
}

/// A sibling (another child of a parent) already holds the same room
fn sibling_matches(sibling_rooms: &[Option<RoomType>], room: RoomType) -> bool {
    matches!(
        room,
        RoomType::Rest | RoomType::Monster | RoomType::Event | RoomType::Elite | RoomType::Shop
    ) && sibling_rooms.contains(&Some(room))
}
