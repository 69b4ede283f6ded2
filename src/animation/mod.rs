pub(crate) mod blink;
pub(crate) mod clock;
pub(crate) mod engine;
pub(crate) mod gate;
pub(crate) mod light;
pub(crate) mod particle;
pub(crate) mod scheduler;
pub(crate) mod trajectory;
