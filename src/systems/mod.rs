//! The Entity-Component-System (ECS) module.
//!
//! This module contains all the ECS-related logic, including components, systems,
//! and resources.

pub mod audio;
pub mod clock;
pub mod collectible;
pub mod components;
pub mod hiding;
pub mod input;
pub mod scenery;
pub mod score;
pub mod state;
pub mod steering;
pub mod timer;
pub mod view;

pub use self::audio::*;
pub use self::clock::*;
pub use self::collectible::*;
pub use self::components::*;
pub use self::hiding::*;
pub use self::input::*;
pub use self::scenery::*;
pub use self::score::*;
pub use self::state::*;
pub use self::steering::*;
pub use self::timer::*;
pub use self::view::*;
