mod component;
mod relay;
mod state;

pub use component::MessageForm;
