//! Battlefield color palette, one hue per entity family.

use vectorscape_common::Color;

pub const PLAYER: Color = Color(0x00ff00);
pub const ENEMY: Color = Color(0xff0000);
pub const OBSTACLE: Color = Color(0x00ff00);
pub const TERRAIN: Color = Color(0x00aa00);
pub const PROJECTILE: Color = Color(0xffff00);
pub const MOUNTAINS: Color = Color(0x006600);
pub const GRID: Color = Color(0x004400);
pub const PICKUP_ARMOR: Color = Color(0x00ffff);
pub const PICKUP_WEAPON: Color = Color(0xffd700);
pub const LASER: Color = Color(0xff4400);
