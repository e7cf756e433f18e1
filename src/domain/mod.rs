// Domain layer: ISBN value types. No I/O here.

pub mod model;
