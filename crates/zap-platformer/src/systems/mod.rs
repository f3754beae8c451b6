pub mod animation;
pub mod behavior;
pub mod bullet;
pub mod collision;
pub mod combat;
pub mod debug;
pub mod enemy;
pub mod frame;
pub mod player;
pub mod render;
