pub mod console;
pub mod transcript;

pub use console::{ConsoleRenderer, RenderError, Renderer};
pub use transcript::{Section, Transcript};
