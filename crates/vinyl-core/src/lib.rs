pub mod background;
pub mod color;
pub mod constants;
pub mod curve;
pub mod error;
pub mod item;
pub mod layout;
pub mod scene;
pub mod spawner;
pub mod sprite;
pub mod vinyl;
pub mod waveform;

pub use background::*;
pub use color::*;
pub use curve::*;
pub use error::{CoreError, Result};
pub use item::*;
pub use layout::*;
pub use scene::*;
pub use spawner::*;
pub use sprite::*;
pub use vinyl::*;
pub use waveform::*;
