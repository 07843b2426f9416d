// src/domain/specification.rs
pub trait Specification {
    fn is_satisfied(&self) -> bool;
}
