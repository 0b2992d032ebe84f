/// Domain layer - license report concepts with no infrastructure concerns
pub mod domain;
pub mod policies;
pub mod services;
