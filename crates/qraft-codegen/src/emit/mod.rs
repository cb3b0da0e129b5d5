mod rust_emitter;

pub use rust_emitter::RustEmitter;
