//! Built-in battlefield models.
//!
//! Vertex and edge data for every shape the game draws. Each builder
//! returns a freshly validated [`WireframeModel`]; callers are expected to
//! build once and share the result across instances.

use glam::DVec3;

use crate::palette;
use crate::{WireframeModel, edges_from_pairs};

fn v(x: f64, y: f64, z: f64) -> DVec3 {
    DVec3::new(x, y, z)
}

/// Main battle tank. Scaled so the gun barrel sits at eye level (y = 50).
pub fn enemy_tank() -> WireframeModel {
    let vertices = vec![
        // Hull bottom (0-3)
        v(-45.0, 0.0, -55.0),
        v(45.0, 0.0, -55.0),
        v(45.0, 0.0, 60.0),
        v(-45.0, 0.0, 60.0),
        // Hull top rear (4-5)
        v(-42.0, 28.0, -50.0),
        v(42.0, 28.0, -50.0),
        // Hull top sides (6-7)
        v(-42.0, 28.0, 20.0),
        v(42.0, 28.0, 20.0),
        // Glacis plate, sloped front armor (8-11)
        v(-40.0, 28.0, 35.0),
        v(40.0, 28.0, 35.0),
        v(-42.0, 15.0, 58.0),
        v(42.0, 15.0, 58.0),
        // Turret base (12-15)
        v(-30.0, 28.0, -28.0),
        v(30.0, 28.0, -28.0),
        v(30.0, 28.0, 25.0),
        v(-30.0, 28.0, 25.0),
        // Turret bustle, rear extension (16-19)
        v(-26.0, 28.0, -40.0),
        v(26.0, 28.0, -40.0),
        v(-26.0, 40.0, -40.0),
        v(26.0, 40.0, -40.0),
        // Turret top wedge (20-23)
        v(-24.0, 52.0, -22.0),
        v(24.0, 52.0, -22.0),
        v(24.0, 52.0, 18.0),
        v(-24.0, 52.0, 18.0),
        // Mantlet (24-25)
        v(-20.0, 46.0, 30.0),
        v(20.0, 46.0, 30.0),
        // Gun barrel (26-33)
        v(-5.0, 46.0, 30.0),
        v(5.0, 46.0, 30.0),
        v(5.0, 52.0, 30.0),
        v(-5.0, 52.0, 30.0),
        v(-4.0, 47.0, 100.0),
        v(4.0, 47.0, 100.0),
        v(4.0, 51.0, 100.0),
        v(-4.0, 51.0, 100.0),
        // Commander cupola (34-37)
        v(-10.0, 52.0, -5.0),
        v(0.0, 52.0, -10.0),
        v(0.0, 52.0, 0.0),
        v(0.0, 60.0, -5.0),
    ];
    let edges = edges_from_pairs(&[
        // Hull bottom
        [0, 1],
        [1, 2],
        [2, 3],
        [3, 0],
        // Hull verticals
        [0, 4],
        [1, 5],
        [2, 11],
        [3, 10],
        // Hull rear
        [4, 5],
        // Hull sides
        [4, 6],
        [5, 7],
        [6, 8],
        [7, 9],
        // Glacis plate
        [8, 9],
        [10, 11],
        [8, 10],
        [9, 11],
        // Hull top outline
        [6, 7],
        // Turret base
        [12, 13],
        [13, 14],
        [14, 15],
        [15, 12],
        // Turret bustle
        [16, 17],
        [18, 19],
        [16, 18],
        [17, 19],
        [12, 16],
        [13, 17],
        [18, 20],
        [19, 21],
        // Turret sides
        [12, 20],
        [13, 21],
        [14, 22],
        [15, 23],
        // Turret top
        [20, 21],
        [21, 22],
        [22, 23],
        [23, 20],
        // Turret front slope to mantlet
        [23, 24],
        [22, 25],
        [24, 25],
        // Gun barrel
        [26, 27],
        [27, 28],
        [28, 29],
        [29, 26],
        [30, 31],
        [31, 32],
        [32, 33],
        [33, 30],
        [26, 30],
        [27, 31],
        [28, 32],
        [29, 33],
        // Commander cupola
        [34, 35],
        [35, 36],
        [36, 34],
        [34, 37],
        [35, 37],
        [36, 37],
    ]);
    WireframeModel::new(vertices, edges, palette::ENEMY).expect("tank edge indices are static")
}

/// Stationary gun emplacement. Barrel at y = 50, matching the tank.
pub fn turret() -> WireframeModel {
    let vertices = vec![
        // Ground-level base (0-3)
        v(-22.0, 0.0, -22.0),
        v(22.0, 0.0, -22.0),
        v(22.0, 0.0, 22.0),
        v(-22.0, 0.0, 22.0),
        // Base platform top (4-7)
        v(-20.0, 12.0, -20.0),
        v(20.0, 12.0, -20.0),
        v(20.0, 12.0, 20.0),
        v(-20.0, 12.0, 20.0),
        // Pedestal bottom (8-11)
        v(-14.0, 12.0, -14.0),
        v(14.0, 12.0, -14.0),
        v(14.0, 12.0, 14.0),
        v(-14.0, 12.0, 14.0),
        // Pedestal top (12-15)
        v(-12.0, 35.0, -12.0),
        v(12.0, 35.0, -12.0),
        v(12.0, 35.0, 12.0),
        v(-12.0, 35.0, 12.0),
        // Head base (16-19)
        v(-16.0, 35.0, -16.0),
        v(16.0, 35.0, -16.0),
        v(16.0, 35.0, 16.0),
        v(-16.0, 35.0, 16.0),
        // Head top, sloped (20-23)
        v(-14.0, 55.0, -14.0),
        v(14.0, 55.0, -14.0),
        v(14.0, 55.0, 10.0),
        v(-14.0, 55.0, 10.0),
        // Gun mantlet (24-25)
        v(-10.0, 48.0, 18.0),
        v(10.0, 48.0, 18.0),
        // Barrel base (26-29)
        v(-4.0, 46.0, 18.0),
        v(4.0, 46.0, 18.0),
        v(4.0, 52.0, 18.0),
        v(-4.0, 52.0, 18.0),
        // Barrel end (30-33)
        v(-3.0, 47.0, 70.0),
        v(3.0, 47.0, 70.0),
        v(3.0, 51.0, 70.0),
        v(-3.0, 51.0, 70.0),
        // Sensor dome (34-37)
        v(-6.0, 55.0, -6.0),
        v(6.0, 55.0, -6.0),
        v(0.0, 55.0, 0.0),
        v(0.0, 62.0, -3.0),
    ];
    let edges = edges_from_pairs(&[
        // Base platform bottom
        [0, 1],
        [1, 2],
        [2, 3],
        [3, 0],
        // Base platform top
        [4, 5],
        [5, 6],
        [6, 7],
        [7, 4],
        // Base platform verticals
        [0, 4],
        [1, 5],
        [2, 6],
        [3, 7],
        // Pedestal bottom
        [8, 9],
        [9, 10],
        [10, 11],
        [11, 8],
        // Pedestal top
        [12, 13],
        [13, 14],
        [14, 15],
        [15, 12],
        // Pedestal verticals
        [8, 12],
        [9, 13],
        [10, 14],
        [11, 15],
        // Head base
        [16, 17],
        [17, 18],
        [18, 19],
        [19, 16],
        // Head top
        [20, 21],
        [21, 22],
        [22, 23],
        [23, 20],
        // Head verticals
        [16, 20],
        [17, 21],
        [18, 22],
        [19, 23],
        // Mantlet
        [23, 24],
        [22, 25],
        [24, 25],
        // Barrel base
        [26, 27],
        [27, 28],
        [28, 29],
        [29, 26],
        // Barrel end
        [30, 31],
        [31, 32],
        [32, 33],
        [33, 30],
        // Barrel sides
        [26, 30],
        [27, 31],
        [28, 32],
        [29, 33],
        // Sensor dome
        [34, 35],
        [35, 36],
        [36, 34],
        [34, 37],
        [35, 37],
        [36, 37],
    ]);
    WireframeModel::new(vertices, edges, palette::ENEMY).expect("turret edge indices are static")
}

/// Pyramid obstacle.
pub fn pyramid() -> WireframeModel {
    let vertices = vec![
        v(-30.0, 0.0, -30.0),
        v(30.0, 0.0, -30.0),
        v(30.0, 0.0, 30.0),
        v(-30.0, 0.0, 30.0),
        v(0.0, 60.0, 0.0),
    ];
    let edges = edges_from_pairs(&[
        [0, 1],
        [1, 2],
        [2, 3],
        [3, 0],
        [0, 4],
        [1, 4],
        [2, 4],
        [3, 4],
    ]);
    WireframeModel::new(vertices, edges, palette::OBSTACLE)
        .expect("pyramid edge indices are static")
}

/// Cube obstacle.
pub fn cube_obstacle() -> WireframeModel {
    let vertices = vec![
        v(-25.0, 0.0, -25.0),
        v(25.0, 0.0, -25.0),
        v(25.0, 0.0, 25.0),
        v(-25.0, 0.0, 25.0),
        v(-25.0, 50.0, -25.0),
        v(25.0, 50.0, -25.0),
        v(25.0, 50.0, 25.0),
        v(-25.0, 50.0, 25.0),
    ];
    let edges = edges_from_pairs(&[
        [0, 1],
        [1, 2],
        [2, 3],
        [3, 0],
        [4, 5],
        [5, 6],
        [6, 7],
        [7, 4],
        [0, 4],
        [1, 5],
        [2, 6],
        [3, 7],
    ]);
    WireframeModel::new(vertices, edges, palette::OBSTACLE).expect("cube edge indices are static")
}

/// Finned dart fired by the player.
pub fn projectile() -> WireframeModel {
    WireframeModel::new(dart_vertices(), edges_from_pairs(&DART_EDGES), palette::PROJECTILE)
        .expect("projectile edge indices are static")
}

/// Same dart silhouette in the enemy color.
pub fn enemy_projectile() -> WireframeModel {
    WireframeModel::new(dart_vertices(), edges_from_pairs(&DART_EDGES), palette::ENEMY)
        .expect("projectile edge indices are static")
}

fn dart_vertices() -> Vec<DVec3> {
    vec![
        v(0.0, 0.0, -8.0),
        v(-2.0, 0.0, 0.0),
        v(2.0, 0.0, 0.0),
        v(0.0, 2.0, 0.0),
        v(0.0, -2.0, 0.0),
        v(0.0, 0.0, 12.0),
    ]
}

const DART_EDGES: [[usize; 2]; 12] = [
    [0, 1],
    [0, 2],
    [0, 3],
    [0, 4],
    [1, 3],
    [3, 2],
    [2, 4],
    [4, 1],
    [1, 5],
    [2, 5],
    [3, 5],
    [4, 5],
];

/// Armor pickup: hexagonal shield outline with an inner cross.
pub fn shield_pickup() -> WireframeModel {
    let vertices = vec![
        // Shield outline (0-7)
        v(0.0, 45.0, 0.0),
        v(-18.0, 35.0, 0.0),
        v(-22.0, 20.0, 0.0),
        v(-18.0, 5.0, 0.0),
        v(0.0, 0.0, 0.0),
        v(18.0, 5.0, 0.0),
        v(22.0, 20.0, 0.0),
        v(18.0, 35.0, 0.0),
        // Inner cross (8-11)
        v(0.0, 35.0, 0.0),
        v(0.0, 10.0, 0.0),
        v(-12.0, 22.0, 0.0),
        v(12.0, 22.0, 0.0),
    ];
    let edges = edges_from_pairs(&[
        [0, 1],
        [1, 2],
        [2, 3],
        [3, 4],
        [4, 5],
        [5, 6],
        [6, 7],
        [7, 0],
        [8, 9],
        [10, 11],
    ]);
    WireframeModel::new(vertices, edges, palette::PICKUP_ARMOR)
        .expect("shield edge indices are static")
}

/// Weapon pickup: stylized ray gun.
pub fn laser_pickup() -> WireframeModel {
    let vertices = vec![
        // Grip (0-3)
        v(-6.0, 0.0, -8.0),
        v(6.0, 0.0, -8.0),
        v(6.0, 12.0, -8.0),
        v(-6.0, 12.0, -8.0),
        // Body housing (4-7)
        v(-10.0, 12.0, -12.0),
        v(10.0, 12.0, -12.0),
        v(10.0, 24.0, -8.0),
        v(-10.0, 24.0, -8.0),
        // Barrel base (8-11)
        v(-5.0, 16.0, -8.0),
        v(5.0, 16.0, -8.0),
        v(5.0, 22.0, 25.0),
        v(-5.0, 22.0, 25.0),
        // Flared emitter tip (12-15)
        v(-8.0, 14.0, 25.0),
        v(8.0, 14.0, 25.0),
        v(8.0, 24.0, 32.0),
        v(-8.0, 24.0, 32.0),
    ];
    let edges = edges_from_pairs(&[
        // Grip
        [0, 1],
        [1, 2],
        [2, 3],
        [3, 0],
        // Body
        [4, 5],
        [5, 6],
        [6, 7],
        [7, 4],
        // Grip to body
        [2, 4],
        [3, 7],
        [2, 5],
        [3, 4],
        // Barrel
        [8, 9],
        [9, 10],
        [10, 11],
        [11, 8],
        // Emitter
        [12, 13],
        [13, 14],
        [14, 15],
        [15, 12],
        // Barrel to emitter
        [10, 14],
        [11, 15],
        [10, 13],
        [11, 12],
    ]);
    WireframeModel::new(vertices, edges, palette::PICKUP_WEAPON)
        .expect("ray gun edge indices are static")
}
