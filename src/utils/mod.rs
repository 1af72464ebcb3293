mod pacer;

pub use pacer::Pacer;
